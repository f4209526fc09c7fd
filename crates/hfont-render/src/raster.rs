use epaint::Color32;

/// A plain RGBA image, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width:  usize,
    height: usize,
    pixels: Vec<Color32>,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![Color32::TRANSPARENT; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color32> {
        (x < self.width && y < self.height).then(|| self.pixels[x + y * self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color32]> {
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Paints one pixel, silently dropping it if it falls outside.
    pub fn put(&mut self, x: i64, y: i64, color: Color32) {
        if (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y) {
            self.pixels[x as usize + y as usize * self.width] = color;
        }
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, w: usize, h: usize, color: Color32) {
        for dy in 0..h as i64 {
            for dx in 0..w as i64 {
                self.put(x + dx, y + dy, color);
            }
        }
    }
}
