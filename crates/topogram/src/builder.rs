//! Declarative construction of diagrams.
//!
//! [`DiagramBuilder`] mirrors how an architecture diagram is described by
//! hand: declare clusters and the nodes inside them top to bottom, keep the
//! identifiers of the nodes you want to connect, then declare the edges.
//!
//! ```
//! use topogram::{
//!     DiagramBuilder,
//!     semantic::{ClusterStyle, EdgeStyle, Icon},
//! };
//!
//! let mut builder = DiagramBuilder::new("Web Service").filename("docs/web");
//!
//! let user = builder.node(Icon::User, "Visitor");
//! let (lb, pod) = builder.cluster("Cluster", ClusterStyle::new(), |cluster| {
//!     let lb = cluster.node(Icon::LoadBalancer, "Ingress");
//!     let pod = cluster.cluster("default namespace", ClusterStyle::new(), |ns| {
//!         ns.node(Icon::Pod, "web")
//!     });
//!     (lb, pod)
//! });
//!
//! builder.connect([user], lb, EdgeStyle::labeled("HTTPS"));
//! builder.connect([lb], pod, EdgeStyle::new());
//!
//! let diagram = builder.build().unwrap();
//! assert_eq!(diagram.edges().len(), 2);
//! ```

use std::path::PathBuf;

use log::{debug, info};

use topogram_core::{
    draw::TextDefinition,
    identifier::Id,
    semantic::{
        Cluster, ClusterStyle, Diagram, DiagramSettings, Direction, Edge, EdgeStyle, GraphStyle,
        Icon, Item, Node, OutputFormat,
    },
};

use crate::{TopogramError, structure::TopologyGraph};

/// Hands out node and cluster identifiers in declaration order.
#[derive(Debug, Default)]
struct IdAllocator {
    nodes: usize,
    clusters: usize,
}

impl IdAllocator {
    fn next_node(&mut self) -> Id {
        let id = Id::from_anonymous("node", self.nodes);
        self.nodes += 1;
        id
    }

    fn next_cluster(&mut self) -> Id {
        let id = Id::from_anonymous("cluster", self.clusters);
        self.clusters += 1;
        id
    }
}

/// Builds a [`Diagram`] in a single top-to-bottom pass.
#[derive(Debug)]
pub struct DiagramBuilder {
    settings: DiagramSettings,
    ids: IdAllocator,
    items: Vec<Item>,
    edges: Vec<Edge>,
}

impl DiagramBuilder {
    /// Start a diagram titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            settings: DiagramSettings::new(title),
            ids: IdAllocator::default(),
            items: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Output path without extension.
    pub fn filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.settings.filename = filename.into();
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.settings.format = format;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.settings.direction = direction;
        self
    }

    pub fn graph_style(mut self, style: GraphStyle) -> Self {
        self.settings.graph_style = style;
        self
    }

    /// Font applied to every node label.
    pub fn node_text(mut self, text: TextDefinition) -> Self {
        self.settings.node_text = text;
        self
    }

    /// Declare a node at the root of the diagram.
    pub fn node(&mut self, icon: Icon, label: impl Into<String>) -> Id {
        let id = self.ids.next_node();
        self.items.push(Item::Node(Node::new(id, icon, label)));
        id
    }

    /// Declare a cluster at the root of the diagram.
    ///
    /// `contents` declares the cluster's children; whatever it returns is
    /// handed back, typically the identifiers of the nodes declared inside.
    pub fn cluster<R>(
        &mut self,
        label: impl Into<String>,
        style: ClusterStyle,
        contents: impl FnOnce(&mut ClusterScope<'_>) -> R,
    ) -> R {
        let (cluster, result) = declare_cluster(&mut self.ids, label.into(), style, contents);
        self.items.push(Item::Cluster(cluster));
        result
    }

    /// Declare an edge from every node in `sources` to `target`.
    ///
    /// A single declaration with several sources renders as one connection
    /// per source, all sharing `style`.
    pub fn connect(&mut self, sources: impl IntoIterator<Item = Id>, target: Id, style: EdgeStyle) {
        let sources: Vec<Id> = sources.into_iter().collect();
        debug!(sources:? = sources, target = target.to_string(); "Declaring edge");
        self.edges.push(Edge::new(sources, target, style));
    }

    /// Freeze the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`TopogramError::Graph`] when an edge has no source or points
    /// at a node that was not declared in this builder.
    pub fn build(self) -> Result<Diagram, TopogramError> {
        let diagram = Diagram::new(self.settings, self.items, self.edges);

        let summary = TopologyGraph::from_diagram(&diagram)?.summary();
        info!(
            title = diagram.title(),
            clusters = summary.clusters,
            nodes = summary.nodes,
            edges = summary.edges;
            "Diagram built"
        );

        Ok(diagram)
    }
}

/// The inside of a cluster while it is being declared.
#[derive(Debug)]
pub struct ClusterScope<'a> {
    ids: &'a mut IdAllocator,
    id: Id,
    items: Vec<Item>,
}

impl ClusterScope<'_> {
    /// Identifier of the cluster being declared.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Declare a node inside this cluster.
    pub fn node(&mut self, icon: Icon, label: impl Into<String>) -> Id {
        let id = self.ids.next_node();
        self.items.push(Item::Node(Node::new(id, icon, label)));
        id
    }

    /// Declare a cluster nested inside this one.
    pub fn cluster<R>(
        &mut self,
        label: impl Into<String>,
        style: ClusterStyle,
        contents: impl FnOnce(&mut ClusterScope<'_>) -> R,
    ) -> R {
        let (cluster, result) = declare_cluster(self.ids, label.into(), style, contents);
        self.items.push(Item::Cluster(cluster));
        result
    }
}

fn declare_cluster<R>(
    ids: &mut IdAllocator,
    label: String,
    style: ClusterStyle,
    contents: impl FnOnce(&mut ClusterScope<'_>) -> R,
) -> (Cluster, R) {
    let id = ids.next_cluster();
    let mut scope = ClusterScope {
        ids,
        id,
        items: Vec::new(),
    };
    let result = contents(&mut scope);
    let items = scope.items;
    (Cluster::new(id, label, style, items), result)
}
