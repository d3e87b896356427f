//! Visual definitions shared by diagram elements.
//!
//! - [`StrokeDefinition`] / [`StrokeStyle`]: edge lines and cluster borders.
//! - [`TextDefinition`]: font family, size and color for labels.

mod stroke;
mod text;

pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::TextDefinition;
