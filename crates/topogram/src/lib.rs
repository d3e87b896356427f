//! Topogram - architecture diagrams as typed Rust values.
//!
//! Declare clusters, icon nodes and labeled edges with a [`DiagramBuilder`],
//! then hand the resulting [`semantic::Diagram`] to a [`Renderer`], which
//! lowers it to Graphviz DOT and lets Graphviz lay it out and draw it.

pub mod builder;
pub mod config;
pub mod export;
pub mod structure;

mod error;

pub use topogram_core::{color, draw, identifier, semantic};

pub use builder::{ClusterScope, DiagramBuilder};
pub use error::TopogramError;

use std::path::{Path, PathBuf};

use log::{debug, info};

use config::AppConfig;
use export::dot::DotExporter;
use semantic::{Diagram, OutputFormat};
use structure::TopologyGraph;

/// Renders diagrams to files.
///
/// # Examples
///
/// ```rust,no_run
/// use topogram::{DiagramBuilder, Renderer, config::AppConfig, semantic::Icon};
///
/// let mut builder = DiagramBuilder::new("Hello").filename("docs/hello");
/// builder.node(Icon::Compute, "server");
/// let diagram = builder.build().expect("valid diagram");
///
/// let renderer = Renderer::new(AppConfig::default());
/// let path = renderer.render(&diagram).expect("Graphviz is installed");
/// assert_eq!(path.to_str(), Some("docs/hello.png"));
/// ```
#[derive(Debug, Default)]
pub struct Renderer {
    config: AppConfig,
}

impl Renderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Produce the DOT source for `diagram`.
    ///
    /// # Errors
    ///
    /// Returns [`TopogramError::Graph`] for structurally invalid diagrams and
    /// [`TopogramError::Style`] for invalid configured colors.
    pub fn to_dot(&self, diagram: &Diagram) -> Result<String, TopogramError> {
        TopologyGraph::from_diagram(diagram)?;
        DotExporter::new(&self.config).to_dot_string(diagram)
    }

    /// Render `diagram` to its own filename and format.
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns [`TopogramError::Render`] when Graphviz is missing or fails,
    /// and the errors of [`Renderer::to_dot`].
    pub fn render(&self, diagram: &Diagram) -> Result<PathBuf, TopogramError> {
        let path = diagram.output_path();
        self.render_to(diagram, &path, diagram.format())?;
        Ok(path)
    }

    /// Render `diagram` to an explicit path and format.
    ///
    /// # Errors
    ///
    /// See [`Renderer::render`].
    pub fn render_to(
        &self,
        diagram: &Diagram,
        path: &Path,
        format: OutputFormat,
    ) -> Result<(), TopogramError> {
        info!(
            title = diagram.title(),
            path = path.display().to_string(),
            format:% = format;
            "Rendering diagram"
        );

        let summary = TopologyGraph::from_diagram(diagram)?.summary();
        debug!(summary:? = summary; "Diagram structure");

        let graph = DotExporter::new(&self.config).to_graph(diagram)?;
        export::write_output(graph, path, format)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::semantic::{EdgeStyle, Icon};

    fn two_nodes() -> Diagram {
        let mut builder = DiagramBuilder::new("Two").format(OutputFormat::Dot);
        let a = builder.node(Icon::Compute, "a");
        let b = builder.node(Icon::BlockStorage, "b");
        builder.connect([a], b, EdgeStyle::labeled("attach"));
        builder.build().unwrap()
    }

    #[test]
    fn test_render_to_dot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs/two.dot");

        Renderer::default()
            .render_to(&two_nodes(), &path, OutputFormat::Dot)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, Renderer::default().to_dot(&two_nodes()).unwrap());
        assert!(written.contains("attach"));
    }

    #[test]
    fn test_to_dot_rejects_invalid_diagram() {
        use crate::semantic::{Diagram, DiagramSettings, Edge, Item, Node};
        use topogram_core::identifier::Id;

        let node = Node::new(Id::new("lonely"), Icon::Pod, "pod");
        let diagram = Diagram::new(
            DiagramSettings::new("Broken"),
            vec![Item::Node(node)],
            vec![Edge::new(
                vec![Id::new("lonely")],
                Id::new("ghost"),
                EdgeStyle::new(),
            )],
        );

        let err = Renderer::default().to_dot(&diagram).unwrap_err();
        assert!(matches!(err, TopogramError::Graph(_)));
    }
}
