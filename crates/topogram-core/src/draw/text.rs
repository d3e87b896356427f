//! Text styling for labels.

use crate::color::Color;

/// Font settings applied to a label.
///
/// Every property is optional. Unset properties fall back to whatever the
/// enclosing scope (graph, cluster or renderer default) provides.
///
/// # Examples
///
/// ```
/// # use topogram_core::draw::TextDefinition;
/// # use topogram_core::color::Color;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut style = TextDefinition::new();
/// style.set_font_family("Helvetica");
/// style.set_font_size(12.0);
/// style.set_color(Some(Color::new("#14532d")?));
///
/// assert_eq!(style.font_family(), Some("Helvetica"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextDefinition {
    font_family: Option<String>,
    font_size: Option<f32>,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a text definition with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = Some(size);
    }

    /// Sets the font family (e.g. "Helvetica", "Sans-Serif").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = Some(family.to_string());
    }

    /// Sets the text color. `None` restores the inherited color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns `true` when no property is set.
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none() && self.font_size.is_none() && self.color.is_none()
    }
}
