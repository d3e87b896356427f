//! Diagram-wide settings and the [`Diagram`] root.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use super::element::{Edge, Item};
use crate::{color::Color, draw::TextDefinition};

/// Rank direction of the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Graphviz `rankdir` value.
    pub fn to_dot_value(&self) -> &'static str {
        match self {
            Self::TopToBottom => "TB",
            Self::BottomToTop => "BT",
            Self::LeftToRight => "LR",
            Self::RightToLeft => "RL",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TB" => Ok(Self::TopToBottom),
            "BT" => Ok(Self::BottomToTop),
            "LR" => Ok(Self::LeftToRight),
            "RL" => Ok(Self::RightToLeft),
            _ => Err(format!(
                "invalid direction `{s}`, valid values: TB, BT, LR, RL"
            )),
        }
    }
}

/// How edges are routed between nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Splines {
    Ortho,
    Spline,
    Polyline,
    Curved,
    Line,
}

impl Splines {
    /// Graphviz `splines` value.
    pub fn to_dot_value(&self) -> &'static str {
        match self {
            Self::Ortho => "ortho",
            Self::Spline => "spline",
            Self::Polyline => "polyline",
            Self::Curved => "curved",
            Self::Line => "line",
        }
    }
}

/// File format of the rendered diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Pdf,
    /// The DOT source itself, written without invoking Graphviz.
    Dot,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Dot => "dot",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            "dot" | "gv" => Ok(Self::Dot),
            _ => Err(format!(
                "invalid output format `{s}`, valid values: png, svg, pdf, dot"
            )),
        }
    }
}

/// Graph-level styling.
///
/// Unset values fall back to the renderer defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStyle {
    text: TextDefinition,
    background: Option<Color>,
    pad: Option<f32>,
    node_separation: Option<f32>,
    rank_separation: Option<f32>,
    dpi: Option<u32>,
    splines: Option<Splines>,
}

impl GraphStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.text.set_font_family(family);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.text.set_font_size(size);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Margin around the drawing, in inches.
    pub fn with_pad(mut self, pad: f32) -> Self {
        self.pad = Some(pad);
        self
    }

    /// Minimum space between adjacent nodes in the same rank, in inches.
    pub fn with_node_separation(mut self, separation: f32) -> Self {
        self.node_separation = Some(separation);
        self
    }

    /// Minimum vertical space between ranks, in inches.
    pub fn with_rank_separation(mut self, separation: f32) -> Self {
        self.rank_separation = Some(separation);
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    pub fn with_splines(mut self, splines: Splines) -> Self {
        self.splines = Some(splines);
        self
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn pad(&self) -> Option<f32> {
        self.pad
    }

    pub fn node_separation(&self) -> Option<f32> {
        self.node_separation
    }

    pub fn rank_separation(&self) -> Option<f32> {
        self.rank_separation
    }

    pub fn dpi(&self) -> Option<u32> {
        self.dpi
    }

    pub fn splines(&self) -> Option<Splines> {
        self.splines
    }
}

/// Everything about a diagram except its content.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramSettings {
    /// Title drawn above the diagram.
    pub title: String,
    /// Output path without extension; the extension comes from `format`.
    pub filename: PathBuf,
    pub format: OutputFormat,
    pub direction: Direction,
    pub graph_style: GraphStyle,
    /// Font applied to every node label.
    pub node_text: TextDefinition,
}

impl DiagramSettings {
    /// Settings for a diagram titled `title`.
    ///
    /// The filename defaults to the title in snake case, like most
    /// diagram-as-code tools do.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let filename = PathBuf::from(default_filename(&title));
        Self {
            title,
            filename,
            format: OutputFormat::default(),
            direction: Direction::default(),
            graph_style: GraphStyle::default(),
            node_text: TextDefinition::default(),
        }
    }
}

fn default_filename(title: &str) -> String {
    let name: String = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if name.is_empty() {
        "diagram".to_string()
    } else {
        name
    }
}

/// A complete, validated architecture diagram.
///
/// Clusters form a tree whose leaves are nodes. Edges form a separate
/// overlay between leaf nodes and may cross cluster boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    settings: DiagramSettings,
    items: Vec<Item>,
    edges: Vec<Edge>,
}

impl Diagram {
    pub fn new(settings: DiagramSettings, items: Vec<Item>, edges: Vec<Edge>) -> Self {
        Self {
            settings,
            items,
            edges,
        }
    }

    pub fn settings(&self) -> &DiagramSettings {
        &self.settings
    }

    pub fn title(&self) -> &str {
        &self.settings.title
    }

    pub fn format(&self) -> OutputFormat {
        self.settings.format
    }

    pub fn direction(&self) -> Direction {
        self.settings.direction
    }

    pub fn graph_style(&self) -> &GraphStyle {
        &self.settings.graph_style
    }

    pub fn node_text(&self) -> &TextDefinition {
        &self.settings.node_text
    }

    /// Root-level nodes and clusters in declaration order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Edge declarations in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The file the diagram renders to in `format`: the configured filename
    /// with the format's extension.
    pub fn output_path_for(&self, format: OutputFormat) -> PathBuf {
        with_extension(&self.settings.filename, format)
    }

    /// The file the diagram renders to in its own format.
    pub fn output_path(&self) -> PathBuf {
        self.output_path_for(self.settings.format)
    }
}

fn with_extension(filename: &Path, format: OutputFormat) -> PathBuf {
    let mut path = filename.as_os_str().to_owned();
    path.push(".");
    path.push(format.extension());
    PathBuf::from(path)
}
