use std::str::FromStr;

use bon::Builder;

use crate::error::{GaugeError, Result};

/// RGBA color for gauge strokes and text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0x00, 0x00, 0x00, 0x00);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const DARK_GRAY: Color = Color::rgb(0xa9, 0xa9, 0xa9);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Alpha as a 0.0..=1.0 coverage factor.
    pub fn opacity(self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(GaugeError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| GaugeError::InvalidColor(hex.to_string()))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 0xff };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = GaugeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// What the centered label shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelFormat {
    /// `"{percent}%"`
    #[default]
    Percent,
    /// `"{angle}°"`
    Degrees,
}

/// Configuration for a gauge widget
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct GaugeConfig {
    #[builder(default = 50.0)]
    pub radius: f64,
    #[builder(default = 2.0)]
    pub thickness: f64,
    #[builder(default = Color::TRANSPARENT)]
    pub fill: Color,
    #[builder(default = Color::DARK_GRAY)]
    pub track_color: Color,
    #[builder(default)]
    pub label_format: LabelFormat,
    pub label_decimals: Option<usize>,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GaugeConfig {
    /// Checks `radius > 0` and `thickness >= 0`, both finite.
    pub fn validate(&self) -> Result<()> {
        validate_radius(self.radius)?;
        validate_thickness(self.thickness)
    }
}

pub(crate) fn validate_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(GaugeError::InvalidRadius(radius))
    }
}

pub(crate) fn validate_thickness(thickness: f64) -> Result<()> {
    if thickness.is_finite() && thickness >= 0.0 {
        Ok(())
    } else {
        Err(GaugeError::InvalidThickness(thickness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_stock_gauge() {
        let config = GaugeConfig::builder().build();
        assert_eq!(config.radius, 50.0);
        assert_eq!(config.thickness, 2.0);
        assert_eq!(config.fill, Color::TRANSPARENT);
        assert_eq!(config.track_color, Color::DARK_GRAY);
        assert_eq!(config.label_format, LabelFormat::Percent);
        assert_eq!(config.label_decimals, None);
    }

    #[test]
    fn hex_colors_parse_with_and_without_alpha() {
        assert_eq!(Color::from_hex("#1e90ff").unwrap(), Color::rgb(0x1e, 0x90, 0xff));
        assert_eq!(
            Color::from_hex("1e90ff80").unwrap(),
            Color::rgba(0x1e, 0x90, 0xff, 0x80)
        );
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(GaugeError::InvalidColor(_))
        ));
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn validate_rejects_bad_geometry() {
        let config = GaugeConfig::builder().radius(0.0).build();
        assert!(matches!(config.validate(), Err(GaugeError::InvalidRadius(_))));

        let config = GaugeConfig::builder().thickness(-1.0).build();
        assert!(matches!(
            config.validate(),
            Err(GaugeError::InvalidThickness(_))
        ));

        assert!(GaugeConfig::default().validate().is_ok());
    }
}
