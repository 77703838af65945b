use serde::{Deserialize, Serialize};

/// Visual style applied server-side during processing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Default,
    Anime,
    Watercolor,
    Sketch,
    OilPainting,
    #[serde(rename = "pixelart")]
    PixelArt,
    Modern,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Default,
        Theme::Anime,
        Theme::Watercolor,
        Theme::Sketch,
        Theme::OilPainting,
        Theme::PixelArt,
        Theme::Modern,
    ];

    /// Stable key used in the upload form.
    pub fn key(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Anime => "anime",
            Theme::Watercolor => "watercolor",
            Theme::Sketch => "sketch",
            Theme::OilPainting => "oil_painting",
            Theme::PixelArt => "pixelart",
            Theme::Modern => "modern",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Default => "Default Style",
            Theme::Anime => "Anime Style",
            Theme::Watercolor => "Watercolor",
            Theme::Sketch => "Pencil Sketch",
            Theme::OilPainting => "Oil Painting",
            Theme::PixelArt => "Pixel Art",
            Theme::Modern => "Modern Art",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_default_style() {
        assert_eq!(Theme::default(), Theme::Default);
        assert_eq!(Theme::default().label(), "Default Style");
    }

    #[test]
    fn keys_match_wire_format() {
        assert_eq!(Theme::OilPainting.key(), "oil_painting");
        assert_eq!(Theme::PixelArt.key(), "pixelart");
        for theme in Theme::ALL {
            let serialized = serde_json::to_string(&theme).expect("serialize");
            assert_eq!(serialized, format!("\"{}\"", theme.key()));
        }
    }

    #[test]
    fn every_theme_is_listed_once() {
        for theme in Theme::ALL {
            assert_eq!(
                Theme::ALL.iter().filter(|entry| **entry == theme).count(),
                1
            );
        }
    }
}
