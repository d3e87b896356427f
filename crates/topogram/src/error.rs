//! Error types for Topogram operations.
//!
//! This module provides the main error type [`TopogramError`] which wraps
//! the error conditions that can occur while building and rendering a
//! diagram.

use std::io;

use thiserror::Error;

/// The main error type for Topogram operations.
#[derive(Debug, Error)]
pub enum TopogramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The diagram structure is inconsistent, e.g. an edge points at a node
    /// that was never declared.
    #[error("Graph error: {0}")]
    Graph(String),

    /// A style value could not be interpreted, e.g. an unparseable color.
    #[error("Style error: {0}")]
    Style(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Graphviz is missing or failed to produce the output file.
    #[error("Render error: {0}")]
    Render(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for TopogramError {
    fn from(error: crate::export::Error) -> Self {
        Self::Render(Box::new(error))
    }
}
