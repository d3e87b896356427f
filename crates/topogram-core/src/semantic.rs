//! Semantic diagram model types.
//!
//! These types describe what a diagram contains, independent of how it is
//! laid out or rendered.
//!
//! # Pipeline Position
//!
//! ```text
//! DiagramBuilder (declarative construction)
//!     ↓ build + validate
//! Semantic Model (these types)
//!     ↓ structure
//! TopologyGraph (membership index + edge overlay)
//!     ↓ export
//! DOT → Graphviz → PNG / SVG / PDF
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - Diagram-wide settings: [`Diagram`], [`DiagramSettings`], [`GraphStyle`], [`Direction`], [`OutputFormat`]
//! - [`element`] - Diagram elements: [`Node`], [`Cluster`], [`Edge`], [`Icon`]

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
