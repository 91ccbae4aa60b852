//! Color value type — an RGB triple parsed from and displayed as hex.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

/// An opaque RGB color.
///
/// Parses from `#rrggbb` or `#rgb` shorthand (case-insensitive) and always
/// displays as lowercase `#rrggbb`, so parse/display round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Build a color from raw channel values.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidHex`] unless the input is `#rgb` or
    /// `#rrggbb` with valid hex digits.
    pub fn from_hex(input: &str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidHex(input.to_string());
        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        // Length checks below count bytes; reject non-ASCII before slicing.
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |pair: &str| u8::from_str_radix(pair, 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                let mut chars = digits.chars();
                let expand = |c: char| channel(&String::from_iter([c, c]));
                let (a, b, c) = (
                    chars.next().ok_or_else(invalid)?,
                    chars.next().ok_or_else(invalid)?,
                    chars.next().ok_or_else(invalid)?,
                );
                Ok(Self::rgb(expand(a)?, expand(b)?, expand(c)?))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        self.r
    }

    /// Green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.b
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_six_digit_hex() {
        let color = Color::from_hex("#3b82f6").unwrap();
        assert_eq!(color, Color::rgb(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn should_parse_shorthand_hex() {
        let color = Color::from_hex("#f60").unwrap();
        assert_eq!(color, Color::rgb(0xff, 0x66, 0x00));
    }

    #[test]
    fn should_parse_uppercase_hex() {
        let color = Color::from_hex("#3B82F6").unwrap();
        assert_eq!(color, Color::rgb(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn should_reject_missing_hash_prefix() {
        assert_eq!(
            Color::from_hex("3b82f6"),
            Err(ThemeError::InvalidHex("3b82f6".to_string()))
        );
    }

    #[test]
    fn should_reject_wrong_length() {
        assert!(Color::from_hex("#3b82f").is_err());
        assert!(Color::from_hex("#3b82f6aa").is_err());
        assert!(Color::from_hex("#").is_err());
    }

    #[test]
    fn should_reject_non_hex_digits() {
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn should_reject_non_ascii_input() {
        // Multi-byte input must produce an error, never a slice panic,
        // even when the byte length matches a valid form.
        assert_eq!(
            Color::from_hex("#\u{20ac}\u{20ac}"),
            Err(ThemeError::InvalidHex("#\u{20ac}\u{20ac}".to_string()))
        );
        assert!(Color::from_hex("#\u{e9}\u{e9}\u{e9}").is_err());
        assert!("#\u{20ac}\u{20ac}".parse::<Color>().is_err());
    }

    #[test]
    fn should_display_as_lowercase_hex() {
        assert_eq!(Color::rgb(0x3b, 0x82, 0xf6).to_string(), "#3b82f6");
        assert_eq!(Color::rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn should_roundtrip_through_display_and_parse() {
        let color = Color::rgb(0xdc, 0xfc, 0xe7);
        let parsed: Color = color.to_string().parse().unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let color = Color::rgb(0xef, 0x44, 0x44);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#ef4444\"");
        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn should_reject_invalid_hex_during_deserialization() {
        let result: Result<Color, _> = serde_json::from_str("\"oops\"");
        assert!(result.is_err());
    }
}
