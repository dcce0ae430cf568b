use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgCloudThemes,
    /// Draws the bounding extent of the cloud
    #[serde(default)]
    pub draw_extent: bool,
    /// Marks the origin of the cloud
    #[serde(default)]
    pub draw_origin: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgCloudThemes::default(),
            draw_extent: false,
            draw_origin: false,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum SvgCloudThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgCloudThemes {
    pub fn get_theme(&self) -> SvgCloudTheme {
        match self {
            SvgCloudThemes::EarthTones => EARTH_TONES_THEME,
            SvgCloudThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgCloudTheme {
    pub stroke_width: f64,
    pub background_fill: &'static str,
    /// Tag boxes cycle through these fills in placement order
    pub tag_fills: [&'static str; 5],
    pub text_fill: &'static str,
    pub extent_stroke: &'static str,
}

pub static EARTH_TONES_THEME: SvgCloudTheme = SvgCloudTheme {
    stroke_width: 2.0,
    background_fill: "#2D2D2D",
    tag_fills: ["#FFC879", "#CC824A", "#E0A860", "#B5651D", "#8F5B2D"],
    text_fill: "#2D2D2D",
    extent_stroke: "#FFFFFF",
};

pub static GRAY_THEME: SvgCloudTheme = SvgCloudTheme {
    stroke_width: 2.5,
    background_fill: "#FFFFFF",
    tag_fills: ["#C3C3C3", "#8F8F8F", "#ABABAB", "#777777", "#9B9B9B"],
    text_fill: "#1A1A1A",
    extent_stroke: "#636363",
};
