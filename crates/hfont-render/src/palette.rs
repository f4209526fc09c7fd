use epaint::Color32;
use hfont_rom::{definitions::tile, PixelColor};
use serde::{Deserialize, Serialize};

/// Display colors for the four color indices of a tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name:   String,
    pub colors: [Color32; tile::N_COLORS],
}

impl Palette {
    /// Builds a palette from `0xRRGGBB` values.
    pub fn from_rgb(name: impl Into<String>, colors: [u32; tile::N_COLORS]) -> Self {
        let colors = colors.map(|c| Color32::from_rgb((c >> 16) as u8, (c >> 8) as u8, c as u8));
        Self { name: name.into(), colors }
    }

    pub fn default_font() -> Self {
        Self::from_rgb("Default", [0x008888, 0x000073, 0xFFFFFF, 0xC60000])
    }

    pub fn grayscale() -> Self {
        Self::from_rgb("Grayscale", [0x000000, 0x555555, 0xAAAAAA, 0xFFFFFF])
    }

    pub fn builtin() -> Vec<Self> {
        vec![Self::default_font(), Self::grayscale()]
    }

    pub fn color(&self, pixel: PixelColor) -> Color32 {
        self.colors[pixel.as_index()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::default_font()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_channels() {
        let palette = Palette::default_font();
        assert_eq!(palette.color(PixelColor::Color0), Color32::from_rgb(0x00, 0x88, 0x88));
        assert_eq!(palette.color(PixelColor::Color1), Color32::from_rgb(0x00, 0x00, 0x73));
        assert_eq!(palette.color(PixelColor::Color2), Color32::WHITE);
        assert_eq!(palette.color(PixelColor::Color3), Color32::from_rgb(0xC6, 0x00, 0x00));
    }

    #[test]
    fn json_round_trip() {
        let palette = Palette::grayscale();
        let json = serde_json::to_string(&palette).unwrap();
        let parsed: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, palette);
    }
}
