//! Lowering diagrams to Graphviz DOT.
//!
//! The exporter layers attributes from least to most specific:
//!
//! 1. House defaults (the look diagram-as-code tools are known for: rounded
//!    clusters tinted by depth, icon-sized nodes, gray edges).
//! 2. What the diagram declares ([`GraphStyle`], node font, [`ClusterStyle`],
//!    [`EdgeStyle`]).
//! 3. Application overrides from [`StyleConfig`](crate::config::StyleConfig).
//!
//! Attribute maps are ordered so the generated text is identical from run
//! to run.

use std::path::Path;

use graphviz_rust::printer::{DotPrinter, PrinterContext};
use indexmap::IndexMap;
use log::{debug, trace};

use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id as DotId, Node as DotNode,
    NodeId, Stmt, Subgraph, Vertex,
};
use topogram_core::{
    draw::TextDefinition,
    identifier::Id,
    semantic::{Cluster, ClusterStyle, Diagram, Edge, EdgeStyle, GraphStyle, Item, Node},
};

use crate::{TopogramError, config::AppConfig};

const DEFAULT_FONT: &str = "Sans-Serif";
const DEFAULT_FONT_COLOR: &str = "#2D3436";
const DEFAULT_EDGE_COLOR: &str = "#7B8894";
const DEFAULT_CLUSTER_BORDER: &str = "#AEB6BE";
/// Cluster backgrounds, cycled by nesting depth.
const CLUSTER_BACKGROUNDS: [&str; 4] = ["#E5F5FD", "#EBF3E7", "#ECE8F6", "#FDF7E3"];

/// Height of an icon node with a one-line label, in inches.
const ICON_NODE_HEIGHT: f64 = 1.9;
/// Extra height per additional label line, in inches.
const LABEL_LINE_HEIGHT: f64 = 0.4;

/// Ordered attribute list; setting a key again replaces its value in place.
#[derive(Debug, Default)]
struct Attributes(IndexMap<&'static str, String>);

impl Attributes {
    fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    fn set_text(&mut self, text: &TextDefinition) {
        if let Some(family) = text.font_family() {
            self.set("fontname", family);
        }
        if let Some(size) = text.font_size() {
            self.set("fontsize", number(f64::from(size)));
        }
        if let Some(color) = text.color() {
            self.set("fontcolor", color.to_hex());
        }
    }

    fn into_dot(self) -> Vec<Attribute> {
        self.0
            .into_iter()
            .map(|(key, value)| Attribute(DotId::Plain(key.to_string()), quoted(&value)))
            .collect()
    }
}

/// Builds DOT graphs from diagrams.
#[derive(Debug)]
pub struct DotExporter<'a> {
    config: &'a AppConfig,
}

impl<'a> DotExporter<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Lower `diagram` to a directed DOT graph.
    ///
    /// # Errors
    ///
    /// Returns [`TopogramError::Style`] when the configured background color
    /// cannot be parsed.
    pub fn to_graph(&self, diagram: &Diagram) -> Result<Graph, TopogramError> {
        let mut stmts = vec![
            Stmt::GAttribute(GraphAttributes::Graph(
                self.graph_attributes(diagram)?.into_dot(),
            )),
            Stmt::GAttribute(GraphAttributes::Node(
                self.node_defaults(diagram.node_text()).into_dot(),
            )),
            Stmt::GAttribute(GraphAttributes::Edge(edge_defaults().into_dot())),
        ];

        for item in diagram.items() {
            stmts.push(self.item_stmt(item, diagram.graph_style(), 1));
        }

        for edge in diagram.edges() {
            stmts.extend(edge_stmts(edge));
        }

        debug!(statements = stmts.len(); "DOT graph assembled");

        Ok(Graph::DiGraph {
            id: quoted(diagram.title()),
            strict: false,
            stmts,
        })
    }

    /// Lower `diagram` and print it as DOT text.
    pub fn to_dot_string(&self, diagram: &Diagram) -> Result<String, TopogramError> {
        let graph = self.to_graph(diagram)?;
        let source = graph.print(&mut PrinterContext::default());
        trace!(source = source.as_str(); "DOT source");
        Ok(source)
    }

    fn graph_attributes(&self, diagram: &Diagram) -> Result<Attributes, TopogramError> {
        let style = diagram.graph_style();
        let mut attrs = Attributes::default();

        attrs.set("pad", "2.0");
        attrs.set("splines", "ortho");
        attrs.set("nodesep", "0.60");
        attrs.set("ranksep", "0.75");
        attrs.set("fontname", DEFAULT_FONT);
        attrs.set("fontsize", "15");
        attrs.set("fontcolor", DEFAULT_FONT_COLOR);

        apply_graph_style(&mut attrs, style);

        attrs.set("label", diagram.title());
        attrs.set("labelloc", "t");
        attrs.set("rankdir", diagram.direction().to_dot_value());

        let overrides = self.config.style();
        if let Some(color) = overrides
            .background_color()
            .map_err(TopogramError::Style)?
        {
            attrs.set("bgcolor", color.to_hex());
        }
        if let Some(family) = overrides.font_family() {
            attrs.set("fontname", family);
        }
        if let Some(dpi) = overrides.dpi() {
            attrs.set("dpi", dpi.to_string());
        }
        if let Some(splines) = overrides.splines() {
            attrs.set("splines", splines.to_dot_value());
        }

        Ok(attrs)
    }

    fn node_defaults(&self, text: &TextDefinition) -> Attributes {
        let mut attrs = Attributes::default();
        attrs.set("shape", "box");
        attrs.set("style", "rounded");
        attrs.set("fixedsize", "true");
        attrs.set("width", "1.4");
        attrs.set("height", "1.4");
        attrs.set("labelloc", "b");
        attrs.set("imagescale", "true");
        attrs.set("fontname", DEFAULT_FONT);
        attrs.set("fontsize", "13");
        attrs.set("fontcolor", DEFAULT_FONT_COLOR);
        attrs.set_text(text);
        if let Some(family) = self.config.style().font_family() {
            attrs.set("fontname", family);
        }
        attrs
    }

    fn item_stmt(&self, item: &Item, graph_style: &GraphStyle, depth: usize) -> Stmt {
        match item {
            Item::Node(node) => Stmt::Node(self.node_stmt(node)),
            Item::Cluster(cluster) => {
                Stmt::Subgraph(self.cluster_subgraph(cluster, graph_style, depth))
            }
        }
    }

    fn node_stmt(&self, node: &Node) -> DotNode {
        let mut attrs = Attributes::default();
        attrs.set("label", node.label());

        let extra_lines = (node.label_lines() - 1) as f64;
        match self.config.icons().resolve(node.icon()) {
            Some(image) => {
                attrs.set("shape", "none");
                attrs.set("image", image_path(&image));
                attrs.set(
                    "height",
                    number(ICON_NODE_HEIGHT + LABEL_LINE_HEIGHT * extra_lines),
                );
            }
            None => {
                let icon = node.icon();
                attrs.set("shape", icon.fallback_shape());
                attrs.set("style", "filled");
                attrs.set("fillcolor", icon.fallback_fill());
                attrs.set("fixedsize", "false");
                attrs.set("labelloc", "c");
                attrs.set("height", number(0.6 + 0.2 * extra_lines));
            }
        }

        DotNode {
            id: node_id(node.id()),
            attributes: attrs.into_dot(),
        }
    }

    fn cluster_subgraph(&self, cluster: &Cluster, graph_style: &GraphStyle, depth: usize) -> Subgraph {
        let mut attrs = Attributes::default();
        attrs.set("label", cluster.label());
        attrs.set("labeljust", "l");
        attrs.set("pencolor", DEFAULT_CLUSTER_BORDER);
        attrs.set(
            "fontname",
            self.config
                .style()
                .font_family()
                .or(graph_style.text().font_family())
                .unwrap_or(DEFAULT_FONT),
        );
        attrs.set("fontsize", "12");
        attrs.set("style", "rounded");
        attrs.set(
            "bgcolor",
            CLUSTER_BACKGROUNDS[(depth - 1) % CLUSTER_BACKGROUNDS.len()],
        );
        apply_cluster_style(&mut attrs, cluster.style());

        let mut stmts: Vec<Stmt> = attrs
            .into_dot()
            .into_iter()
            .map(Stmt::Attribute)
            .collect();
        for item in cluster.items() {
            stmts.push(self.item_stmt(item, graph_style, depth + 1));
        }

        Subgraph {
            id: DotId::Plain(cluster_name(cluster.id())),
            stmts,
        }
    }
}

fn apply_graph_style(attrs: &mut Attributes, style: &GraphStyle) {
    attrs.set_text(style.text());
    if let Some(color) = style.background() {
        attrs.set("bgcolor", color.to_hex());
    }
    if let Some(pad) = style.pad() {
        attrs.set("pad", number(f64::from(pad)));
    }
    if let Some(separation) = style.node_separation() {
        attrs.set("nodesep", number(f64::from(separation)));
    }
    if let Some(separation) = style.rank_separation() {
        attrs.set("ranksep", number(f64::from(separation)));
    }
    if let Some(dpi) = style.dpi() {
        attrs.set("dpi", dpi.to_string());
    }
    if let Some(splines) = style.splines() {
        attrs.set("splines", splines.to_dot_value());
    }
}

fn apply_cluster_style(attrs: &mut Attributes, style: &ClusterStyle) {
    if let Some(fill) = style.fill() {
        attrs.set("bgcolor", fill.to_hex());
    }
    if let Some(border) = style.border() {
        attrs.set("pencolor", border.color().to_hex());
        attrs.set("penwidth", number(f64::from(border.width())));
        let pattern = border.style().to_dot_value();
        if pattern != "solid" {
            attrs.set("style", format!("rounded,{pattern}"));
        }
    }
    attrs.set_text(style.text());
}

fn edge_defaults() -> Attributes {
    let mut attrs = Attributes::default();
    attrs.set("color", DEFAULT_EDGE_COLOR);
    attrs.set("fontcolor", DEFAULT_FONT_COLOR);
    attrs.set("fontname", DEFAULT_FONT);
    attrs.set("fontsize", "13");
    attrs
}

fn edge_attributes(style: &EdgeStyle) -> Attributes {
    let mut attrs = Attributes::default();
    attrs.set("dir", "forward");
    if let Some(label) = style.label() {
        attrs.set("label", label);
    }
    if let Some(stroke) = style.stroke() {
        attrs.set("style", stroke.style().to_dot_value());
        attrs.set("color", stroke.color().to_hex());
        attrs.set("penwidth", number(f64::from(stroke.width())));
    }
    attrs
}

/// One DOT edge per source of `edge`.
fn edge_stmts(edge: &Edge) -> impl Iterator<Item = Stmt> + '_ {
    edge.pairs().map(|(source, target)| {
        Stmt::Edge(DotEdge {
            ty: EdgeTy::Pair(Vertex::N(node_id(source)), Vertex::N(node_id(target))),
            attributes: edge_attributes(edge.style()).into_dot(),
        })
    })
}

fn node_id(id: Id) -> NodeId {
    NodeId(DotId::Plain(id.to_string()), None)
}

/// Graphviz only draws a subgraph as a cluster when its name starts with
/// `cluster`.
fn cluster_name(id: Id) -> String {
    let name = id.to_string();
    if name.starts_with("cluster") {
        name
    } else {
        format!("cluster_{name}")
    }
}

fn image_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// A double-quoted DOT string. Line breaks become `\n` escapes.
fn quoted(value: &str) -> DotId {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped.push('"');
    DotId::Escaped(escaped)
}

/// Formats a measurement with at most three decimals and no trailing zeros.
fn number(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
