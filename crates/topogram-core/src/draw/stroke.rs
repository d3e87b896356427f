//! Stroke and line-style definitions.
//!
//! A [`StrokeDefinition`] describes how a line is drawn: edges use it for
//! their line, clusters for their border.
//!
//! # Graphviz Attribute Mapping
//!
//! | Rust Property | DOT Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `color` / `pencolor` | `"#6b7280"` |
//! | `width` | `penwidth` | `2` |
//! | `style` | `style` | `"dashed"`, `"dotted"`, `"bold"` |
//!
//! # Examples
//!
//! ```
//! use topogram_core::draw::{StrokeDefinition, StrokeStyle};
//! use topogram_core::color::Color;
//!
//! let border = StrokeDefinition::solid(Color::new("#16a34a").unwrap(), 3.0);
//! assert_eq!(*border.style(), StrokeStyle::Solid);
//!
//! let attach = StrokeDefinition::dashed(Color::new("#6b7280").unwrap(), 1.0);
//! assert_eq!(attach.style().to_dot_value(), "dashed");
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Solid line drawn with a heavier pen
    Bold,
}

impl StrokeStyle {
    /// Returns the Graphviz `style` value for this pattern.
    pub fn to_dot_value(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Bold => "bold",
        }
    }
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "bold" => Ok(Self::Bold),
            _ => Err(format!(
                "invalid stroke style `{s}`, valid values: solid, dashed, dotted, bold"
            )),
        }
    }
}

/// A stroke definition for rendering lines and borders.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Creates a dotted stroke (convenience constructor).
    pub fn dotted(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dotted);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_hex(), "#000000");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.5);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed);

        let dotted = StrokeDefinition::dotted(color, 1.0);
        assert_eq!(*dotted.style(), StrokeStyle::Dotted);
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::default();

        stroke.set_color(Color::new("green").unwrap());
        stroke.set_width(2.5);
        stroke.set_style(StrokeStyle::Bold);

        assert_eq!(stroke.color().to_hex(), "#008000");
        assert_eq!(stroke.width(), 2.5);
        assert_eq!(*stroke.style(), StrokeStyle::Bold);
    }

    #[test]
    fn test_stroke_style_dot_values() {
        assert_eq!(StrokeStyle::Solid.to_dot_value(), "solid");
        assert_eq!(StrokeStyle::Dashed.to_dot_value(), "dashed");
        assert_eq!(StrokeStyle::Dotted.to_dot_value(), "dotted");
        assert_eq!(StrokeStyle::Bold.to_dot_value(), "bold");
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!(StrokeStyle::from_str("solid").unwrap(), StrokeStyle::Solid);
        assert_eq!(
            StrokeStyle::from_str("dashed").unwrap(),
            StrokeStyle::Dashed
        );
        assert_eq!(
            StrokeStyle::from_str("dotted").unwrap(),
            StrokeStyle::Dotted
        );
        assert_eq!(StrokeStyle::from_str("bold").unwrap(), StrokeStyle::Bold);

        let result = StrokeStyle::from_str("wavy");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid stroke style"));
    }
}
