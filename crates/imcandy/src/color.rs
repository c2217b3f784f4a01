use std::fmt;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CandyError, Result},
    gradient::Lerp,
};

/// Real valued color with channels on a `0..=255` scale.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Alpha is dropped.
    pub fn from_color32(color: Color32) -> Self {
        let [r, g, b, _] = color.to_srgba_unmultiplied();
        Self::new(r as f64, g as f64, b as f64)
    }

    /// Always fully opaque.
    pub fn to_color32(self) -> Color32 {
        fn channel(v: f64) -> u8 {
            v.clamp(0.0, 255.0).round() as u8
        }

        Color32::from_rgb(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || CandyError::InvalidHex(hex.to_owned());
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(f64::from)
                .map_err(|_| invalid())
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<Color32> for Rgb {
    fn from(color: Color32) -> Self {
        Self::from_color32(color)
    }
}

impl From<Rgb> for Color32 {
    fn from(color: Rgb) -> Self {
        color.to_color32()
    }
}

impl Lerp for Rgb {
    fn lerp(&self, upper: &Self, t: f64) -> Self {
        Self::new(
            self.r.lerp(&upper.r, t),
            self.g.lerp(&upper.g, t),
            self.b.lerp(&upper.b, t),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex() {
        assert_eq!(Rgb::from_hex("#D31027"), Ok(Rgb::new(211.0, 16.0, 39.0)));
        assert_eq!(Rgb::from_hex("38ef7d"), Ok(Rgb::new(56.0, 239.0, 125.0)));
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        for hex in ["", "#fff", "#12345g", "#1234567", "#ééé", "#+fffff"] {
            assert_eq!(
                Rgb::from_hex(hex),
                Err(CandyError::InvalidHex(hex.to_owned())),
                "{hex}"
            );
        }
    }

    #[test]
    fn to_color32_clamps_and_is_opaque() {
        let color = Rgb::new(-20.0, 127.6, 300.0).to_color32();
        assert_eq!(color, Color32::from_rgb(0, 128, 255));
        assert_eq!(color.a(), 255);
    }

    #[test]
    fn from_color32_drops_alpha() {
        let rgb = Rgb::from(Color32::from_rgb(1, 2, 3));
        assert_eq!(rgb, Rgb::new(1.0, 2.0, 3.0));
        assert_eq!(Color32::from(rgb), Color32::from_rgb(1, 2, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Rgb::new(255.0, 0.5, 0.0).to_string(), "(255, 0.5, 0)");
    }
}
