//! Color type conversions and utilities
//!
//! Colors in the descriptor are hex strings on disk (#RRGGBB or #AARRGGBB)
//! and `HexColor` values in memory. The host consumes them as X11 render
//! colors (16-bit per channel).

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use x11rb::protocol::render::Color;

/// Hex color in ARGB32 format (#AARRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(u32);

impl HexColor {
    /// Parse hex color string supporting multiple formats:
    /// - 6 digits: RRGGBB (full opacity assumed, becomes FFRRGGBB)
    /// - 8 digits: AARRGGBB (explicit alpha)
    /// - Optional '#' prefix supported but not required
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !(hex.len() == 6 || hex.len() == 8) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;

        // 6-digit values fit in 24 bits; prepend full opacity
        let argb = if hex.len() == 6 { 0xFF_00_00_00 | value } else { value };

        Some(Self(argb))
    }

    /// Create from ARGB32 value
    pub const fn from_argb32(argb: u32) -> Self {
        Self(argb)
    }

    /// Get raw ARGB32 value
    pub fn argb32(self) -> u32 {
        self.0
    }

    /// Convert to X11 Color (16-bit per channel, 0-65535 range)
    pub fn to_x11_color(self) -> Color {
        let a = (self.0 >> 24) & 0xFF;
        let r = (self.0 >> 16) & 0xFF;
        let g = (self.0 >> 8) & 0xFF;
        let b = self.0 & 0xFF;

        // Scale from 8-bit (0-255) to 16-bit (0-65535)
        let scale = |v: u32| (v << 8 | v) as u16;

        Color {
            red: scale(r),
            green: scale(g),
            blue: scale(b),
            alpha: scale(a),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alpha = (self.0 >> 24) & 0xFF;
        if alpha == 0xFF {
            write!(f, "#{:06X}", self.0 & 0xFF_FF_FF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).ok_or_else(|| de::Error::custom(format!("invalid hex color: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parsing() {
        // 8-digit format (AARRGGBB)
        assert_eq!(HexColor::parse("#7FFF0000"), Some(HexColor(0x7FFF0000)));

        // 6-digit format gains a full-opacity alpha channel
        assert_eq!(HexColor::parse("#212121"), Some(HexColor(0xFF212121)));
        assert_eq!(HexColor::parse("5C5C5C"), Some(HexColor(0xFF5C5C5C)));

        // Garbage is rejected
        assert_eq!(HexColor::parse("not-a-color"), None);
        assert_eq!(HexColor::parse("#1234"), None);
        assert_eq!(HexColor::parse(""), None);
    }

    #[test]
    fn test_to_x11_color() {
        let color = HexColor::parse("#FF00FF00").unwrap().to_x11_color();
        assert_eq!(color.red, 0);
        assert_eq!(color.green, 65535);
        assert_eq!(color.blue, 0);
        assert_eq!(color.alpha, 65535);

        let half = HexColor::from_argb32(0x7F000000).to_x11_color();
        assert_eq!(half.alpha, 0x7F7F);
    }

    #[test]
    fn test_display_roundtrip() {
        let opaque = HexColor::parse("#424242").unwrap();
        assert_eq!(opaque.to_string(), "#424242");
        assert_eq!(HexColor::parse(&opaque.to_string()), Some(opaque));

        let translucent = HexColor::from_argb32(0x80ABABAB);
        assert_eq!(translucent.to_string(), "#80ABABAB");
        assert_eq!(HexColor::parse(&translucent.to_string()), Some(translucent));
    }

    #[test]
    fn test_serde_string_form() {
        let color = HexColor::parse("#757575").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#757575\"");

        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);

        assert!(serde_json::from_str::<HexColor>("\"#zzz\"").is_err());
    }
}
