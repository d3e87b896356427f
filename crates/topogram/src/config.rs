//! Configuration types for Topogram rendering.
//!
//! This module provides configuration structures that adjust how a diagram
//! is rendered without changing what it contains. All types implement
//! [`serde::Deserialize`] so they can be loaded from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and icon settings.
//! - [`StyleConfig`] - Graph-wide overrides such as background color and dpi.
//! - [`IconConfig`] - Where to find icon images.
//!
//! # Example
//!
//! ```
//! # use topogram::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().unwrap().is_none());
//! assert!(config.icons().directory().is_none());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use topogram_core::{
    color::Color,
    semantic::{Icon, Splines},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Icon configuration section.
    #[serde(default)]
    icons: IconConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(style: StyleConfig, icons: IconConfig) -> Self {
        Self { style, icons }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the icon configuration.
    pub fn icons(&self) -> &IconConfig {
        &self.icons
    }
}

/// Graph-wide style overrides.
///
/// These win over whatever the diagram itself declares. Fields that are not
/// set leave the diagram's own values in place.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color of the whole drawing, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family for the title, cluster and node labels.
    #[serde(default)]
    font_family: Option<String>,

    /// Raster resolution for bitmap formats.
    #[serde(default)]
    dpi: Option<u32>,

    /// Edge routing.
    #[serde(default)]
    splines: Option<Splines>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn dpi(&self) -> Option<u32> {
        self.dpi
    }

    pub fn splines(&self) -> Option<Splines> {
        self.splines
    }
}

/// Location of icon images.
///
/// When a directory is configured, each node whose icon file exists below
/// it (see [`Icon::resource_path`]) is drawn with that image. Otherwise nodes
/// are drawn with plain Graphviz shapes.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct IconConfig {
    #[serde(default)]
    directory: Option<PathBuf>,
}

impl IconConfig {
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Returns the image path for `icon` when it exists on disk.
    pub fn resolve(&self, icon: Icon) -> Option<PathBuf> {
        let path = self.directory.as_ref()?.join(icon.resource_path());
        path.is_file().then_some(path)
    }
}
