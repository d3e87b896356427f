//! Color values for diagram styling.
//!
//! [`Color`] wraps the `DynamicColor` type from the `color` crate so any CSS
//! color string ("#dcfce7", "rgb(22, 163, 74)", "white") can be used in the
//! model, and converts it to the `#rrggbb` form Graphviz understands.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parse a CSS color string such as "#ff0000", "rgb(255, 0, 0)" or "red".
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected input when it is not a valid
    /// CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use topogram_core::color::Color;
    ///
    /// let green = Color::new("#16a34a").unwrap();
    /// assert_eq!(green.to_hex(), "#16a34a");
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// Returns the alpha channel in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Formats the color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
    pub fn to_hex(&self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if rgba.a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self {
            color: DynamicColor::from_alpha_color(color::palette::css::BLACK),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trips_lowercase() {
        let color = Color::new("#DCFCE7").unwrap();
        assert_eq!(color.to_hex(), "#dcfce7");
    }

    #[test]
    fn test_named_color() {
        assert_eq!(Color::new("white").unwrap().to_hex(), "#ffffff");
        assert_eq!(Color::default().to_hex(), "#000000");
    }

    #[test]
    fn test_translucent_color_keeps_alpha() {
        let color = Color::new("rgba(255, 0, 0, 0.5)").unwrap();
        assert!(color.alpha() < 1.0);
        assert_eq!(color.to_hex().len(), 9);
    }

    #[test]
    fn test_invalid_color() {
        let err = Color::new("chartreuse-ish").unwrap_err();
        assert!(err.contains("chartreuse-ish"));
    }
}
