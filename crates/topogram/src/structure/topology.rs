//! Cluster membership and edge overlay of a diagram.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use log::{debug, trace};

use topogram_core::{
    draw::StrokeStyle,
    identifier::Id,
    semantic::{Cluster, Diagram, Edge, Icon, Item, Node},
};

use super::graph_base::GraphInternal;
use crate::TopogramError;

/// Indexed, validated view of a [`Diagram`].
///
/// Building a `TopologyGraph` checks that:
/// - node and cluster identifiers are unique,
/// - every edge has at least one source,
/// - every edge endpoint is a declared node.
#[derive(Debug)]
pub struct TopologyGraph<'a> {
    diagram: &'a Diagram,
    graph: GraphInternal<'a, &'a Node, &'a Edge>,
    /// Enclosing clusters of each node, outermost first.
    membership: IndexMap<Id, Vec<&'a Cluster>>,
    /// Every cluster with its depth; top-level clusters have depth 1.
    clusters: IndexMap<Id, (&'a Cluster, usize)>,
}

impl<'a> TopologyGraph<'a> {
    /// Index and validate `diagram`.
    ///
    /// # Errors
    ///
    /// Returns [`TopogramError::Graph`] when an identifier is declared twice,
    /// an edge has no source, or an edge references an unknown node.
    pub fn from_diagram(diagram: &'a Diagram) -> Result<Self, TopogramError> {
        let mut topology = Self {
            diagram,
            graph: GraphInternal::new(),
            membership: IndexMap::new(),
            clusters: IndexMap::new(),
        };

        let mut path = Vec::new();
        topology.index_items(diagram.items(), &mut path)?;

        for (edge_idx, edge) in diagram.edges().iter().enumerate() {
            if edge.sources().is_empty() {
                return Err(TopogramError::Graph(format!(
                    "edge #{edge_idx} to `{}` has no source node",
                    edge.target()
                )));
            }
            for (source, target) in edge.pairs() {
                for endpoint in [source, target] {
                    if !topology.graph.contains_node(endpoint) {
                        return Err(TopogramError::Graph(format!(
                            "edge #{edge_idx} references undeclared node `{endpoint}`"
                        )));
                    }
                }
                topology.graph.add_connection(source, target, edge);
            }
        }

        debug!(
            nodes = topology.graph.nodes_count(),
            clusters = topology.clusters.len(),
            connections = topology.graph.connections_count();
            "Topology indexed"
        );

        Ok(topology)
    }

    fn index_items(
        &mut self,
        items: &'a [Item],
        path: &mut Vec<&'a Cluster>,
    ) -> Result<(), TopogramError> {
        for item in items {
            match item {
                Item::Node(node) => {
                    if self.graph.contains_node(node.id()) || self.clusters.contains_key(&node.id())
                    {
                        return Err(TopogramError::Graph(format!(
                            "identifier `{}` is declared more than once",
                            node.id()
                        )));
                    }
                    trace!(node = node.id().to_string(), depth = path.len(); "Indexing node");
                    self.graph.add_node(node.id(), node);
                    self.membership.insert(node.id(), path.clone());
                }
                Item::Cluster(cluster) => {
                    if self.clusters.contains_key(&cluster.id())
                        || self.graph.contains_node(cluster.id())
                    {
                        return Err(TopogramError::Graph(format!(
                            "identifier `{}` is declared more than once",
                            cluster.id()
                        )));
                    }
                    path.push(cluster);
                    self.clusters.insert(cluster.id(), (cluster, path.len()));
                    self.index_items(cluster.items(), path)?;
                    path.pop();
                }
            }
        }
        Ok(())
    }

    /// The diagram this graph indexes.
    pub fn diagram(&self) -> &'a Diagram {
        self.diagram
    }

    pub fn node(&self, id: Id) -> Option<&'a Node> {
        self.graph.node(id)
    }

    /// Every leaf node, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.graph.nodes()
    }

    pub fn cluster(&self, id: Id) -> Option<&'a Cluster> {
        self.clusters.get(&id).map(|(cluster, _)| *cluster)
    }

    /// Every cluster, parents before children.
    pub fn clusters(&self) -> impl Iterator<Item = &'a Cluster> + '_ {
        self.clusters.values().map(|(cluster, _)| *cluster)
    }

    /// Nesting depth of a cluster; top-level clusters have depth 1.
    pub fn cluster_depth(&self, id: Id) -> Option<usize> {
        self.clusters.get(&id).map(|(_, depth)| *depth)
    }

    /// How many cluster levels are nested below the cluster `id`.
    ///
    /// A cluster holding only nodes has nesting 0.
    pub fn nesting_below(&self, id: Id) -> Option<usize> {
        let (cluster, depth) = self.clusters.get(&id)?;
        let deepest = self
            .clusters
            .values()
            .filter(|(other, _)| self.is_within(other.id(), cluster.id()))
            .map(|(_, other_depth)| *other_depth)
            .max()
            .unwrap_or(*depth);
        Some(deepest - depth)
    }

    fn is_within(&self, inner: Id, outer: Id) -> bool {
        let Some((cluster, _)) = self.clusters.get(&outer) else {
            return false;
        };
        cluster.items().iter().any(|item| match item {
            Item::Cluster(child) => child.id() == inner || self.is_within(inner, child.id()),
            Item::Node(_) => false,
        })
    }

    /// Enclosing clusters of the node `id`, outermost first.
    ///
    /// Returns `None` for unknown nodes and an empty slice for root-level
    /// nodes.
    pub fn cluster_path(&self, id: Id) -> Option<&[&'a Cluster]> {
        self.membership.get(&id).map(Vec::as_slice)
    }

    /// The innermost cluster containing the node `id`.
    pub fn enclosing_cluster(&self, id: Id) -> Option<&'a Cluster> {
        self.cluster_path(id)?.last().copied()
    }

    /// Nodes the node `id` has connections to.
    pub fn successors(&self, id: Id) -> impl Iterator<Item = &'a Node> + '_ {
        self.graph.outgoing_nodes(id)
    }

    /// Nodes with connections into the node `id`.
    pub fn predecessors(&self, id: Id) -> impl Iterator<Item = &'a Node> + '_ {
        self.graph.incoming_nodes(id)
    }

    /// Nodes no connection points at.
    pub fn roots(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.graph.roots()
    }

    /// Counts describing the shape of the diagram.
    pub fn summary(&self) -> DiagramSummary {
        let mut icons = BTreeMap::new();
        for node in self.graph.nodes() {
            *icons.entry(node.icon()).or_insert(0) += 1;
        }

        let top_level_clusters = self
            .diagram
            .items()
            .iter()
            .filter(|item| matches!(item, Item::Cluster(_)))
            .count();

        let dashed_connections = self
            .graph
            .connections()
            .filter(|edge| edge.stroke_style() == StrokeStyle::Dashed)
            .count();

        let crossing_connections = self
            .diagram
            .edges()
            .iter()
            .flat_map(Edge::pairs)
            .filter(|(source, target)| {
                self.enclosing_cluster(*source).map(Cluster::id)
                    != self.enclosing_cluster(*target).map(Cluster::id)
            })
            .count();

        DiagramSummary {
            top_level_items: self.diagram.items().len(),
            top_level_clusters,
            clusters: self.clusters.len(),
            max_depth: self
                .clusters
                .values()
                .map(|(_, depth)| *depth)
                .max()
                .unwrap_or(0),
            nodes: self.graph.nodes_count(),
            icons,
            edges: self.diagram.edges().len(),
            connections: self.graph.connections_count(),
            dashed_connections,
            crossing_connections,
        }
    }

    /// Labels of every node and edge, in declaration order.
    pub fn labels(&self) -> Vec<&'a str> {
        self.graph
            .nodes()
            .map(Node::label)
            .chain(self.diagram.edges().iter().filter_map(Edge::label))
            .collect()
    }

    /// Identifiers of every node, cluster and connection endpoint.
    ///
    /// Two diagrams with equal shapes have equal shapes here, whatever
    /// their labels say.
    pub fn shape(&self) -> TopologyShape {
        let clusters = self
            .clusters
            .values()
            .map(|(cluster, depth)| {
                let children = cluster
                    .items()
                    .iter()
                    .map(|item| match item {
                        Item::Node(node) => node.id(),
                        Item::Cluster(child) => child.id(),
                    })
                    .collect();
                (cluster.id(), *depth, children)
            })
            .collect();

        let connections = self
            .diagram
            .edges()
            .iter()
            .flat_map(|edge| edge.pairs().map(move |pair| (pair, edge.stroke_style())))
            .collect();

        TopologyShape {
            nodes: self
                .graph
                .nodes()
                .map(|node| (node.id(), node.icon()))
                .collect(),
            clusters,
            connections,
        }
    }
}

/// Label-free structural fingerprint of a diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyShape {
    nodes: Vec<(Id, Icon)>,
    clusters: Vec<(Id, usize, Vec<Id>)>,
    connections: Vec<((Id, Id), StrokeStyle)>,
}

/// Counts describing the shape of a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSummary {
    /// Root-level nodes and clusters.
    pub top_level_items: usize,
    pub top_level_clusters: usize,
    /// Clusters at any depth.
    pub clusters: usize,
    /// Depth of the most deeply nested cluster (top level = 1).
    pub max_depth: usize,
    /// Leaf nodes at any depth.
    pub nodes: usize,
    /// Leaf nodes per icon.
    pub icons: BTreeMap<Icon, usize>,
    /// Edge declarations.
    pub edges: usize,
    /// Rendered connections; an edge with N sources counts N times.
    pub connections: usize,
    pub dashed_connections: usize,
    /// Connections whose endpoints sit in different innermost clusters.
    pub crossing_connections: usize,
}

impl DiagramSummary {
    /// Number of leaf nodes drawn with `icon`.
    pub fn icon_count(&self, icon: Icon) -> usize {
        self.icons.get(&icon).copied().unwrap_or(0)
    }
}
