//! Low-level directed graph used for the edge overlay.
//!
//! Nodes are stored in insertion order so that every traversal, and
//! therefore every export, is deterministic.
//!
//! - [`ConnectionIndex`]: Type-safe connection indices with lifetime tracking
//! - [`GraphInternal`]: Node and connection storage with incoming/outgoing indices

use std::marker::PhantomData;

use indexmap::IndexMap;

use topogram_core::identifier::Id;

/// Type-safe index of a connection in the graph.
///
/// The lifetime parameter ties the index to the graph it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct ConnectionIndex<'idx>(usize, PhantomData<&'idx ()>);

impl ConnectionIndex<'_> {
    fn new(index: usize) -> Self {
        ConnectionIndex(index, PhantomData)
    }
}

/// A directed connection carrying a value of type `E`.
#[derive(Debug)]
struct Connection<E> {
    source: Id,
    target: Id,
    value: E,
}

/// Directed multigraph keyed by [`Id`].
///
/// Self-loops and parallel connections are allowed.
#[derive(Debug)]
pub(super) struct GraphInternal<'idx, N, E>
where
    N: Copy + std::fmt::Debug,
    E: Copy + std::fmt::Debug,
{
    nodes: IndexMap<Id, N>,
    connections: Vec<Connection<E>>,
    incoming: IndexMap<Id, Vec<ConnectionIndex<'idx>>>,
    outgoing: IndexMap<Id, Vec<ConnectionIndex<'idx>>>,
}

impl<'idx, N, E> GraphInternal<'idx, N, E>
where
    N: Copy + std::fmt::Debug,
    E: Copy + std::fmt::Debug,
{
    pub(super) fn new() -> Self {
        GraphInternal {
            nodes: IndexMap::new(),
            connections: Vec::new(),
            incoming: IndexMap::new(),
            outgoing: IndexMap::new(),
        }
    }

    pub(super) fn node(&self, id: Id) -> Option<N> {
        self.nodes.get(&id).copied()
    }

    /// Nodes in insertion order.
    pub(super) fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.values().copied()
    }

    pub(super) fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub(super) fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Connection values in insertion order.
    pub(super) fn connections(&self) -> impl Iterator<Item = E> + '_ {
        self.connections.iter().map(|connection| connection.value)
    }

    pub(super) fn connections_count(&self) -> usize {
        self.connections.len()
    }

    /// Nodes with no incoming connection, in insertion order.
    pub(super) fn roots(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes
            .iter()
            .filter(|(node_id, _)| !self.incoming.contains_key(*node_id))
            .map(|(_, node)| *node)
    }

    /// Targets of every connection leaving `source_id`.
    pub(super) fn outgoing_nodes(&self, source_id: Id) -> impl Iterator<Item = N> + '_ {
        self.outgoing
            .get(&source_id)
            .into_iter()
            .flatten()
            .filter_map(|idx| self.node(self.connections[idx.0].target))
    }

    /// Sources of every connection entering `target_id`.
    pub(super) fn incoming_nodes(&self, target_id: Id) -> impl Iterator<Item = N> + '_ {
        self.incoming
            .get(&target_id)
            .into_iter()
            .flatten()
            .filter_map(|idx| self.node(self.connections[idx.0].source))
    }

    /// Adds a node. A node with the same ID is replaced in place.
    pub(super) fn add_node(&mut self, id: Id, node: N) {
        self.nodes.insert(id, node);
    }

    /// Adds a directed connection between two existing nodes.
    ///
    /// # Panics
    /// Panics in debug builds if either endpoint is missing. Callers check
    /// endpoints first and report a proper error.
    pub(super) fn add_connection(
        &mut self,
        source_id: Id,
        target_id: Id,
        value: E,
    ) -> ConnectionIndex<'idx> {
        debug_assert!(
            self.nodes.contains_key(&source_id),
            "Adding connection: source node {source_id} does not exist for {value:?}",
        );
        debug_assert!(
            self.nodes.contains_key(&target_id),
            "Adding connection: target node {target_id} does not exist for {value:?}",
        );

        self.connections.push(Connection {
            source: source_id,
            target: target_id,
            value,
        });

        let idx = ConnectionIndex::new(self.connections.len() - 1);
        self.outgoing.entry(source_id).or_default().push(idx);
        self.incoming.entry(target_id).or_default().push(idx);
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct TestNode {
        value: u32,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct TestConnection {
        weight: i32,
    }

    type TestGraph<'a> = GraphInternal<'a, TestNode, TestConnection>;

    #[test]
    fn test_graph_new() {
        let graph = TestGraph::new();

        assert_eq!(graph.nodes_count(), 0);
        assert_eq!(graph.connections_count(), 0);
        assert_eq!(graph.roots().count(), 0);
    }

    #[test]
    fn test_nodes_keep_insertion_order() {
        let mut graph = TestGraph::new();
        for (idx, name) in ["zeta", "alpha", "mid"].into_iter().enumerate() {
            graph.add_node(Id::new(name), TestNode { value: idx as u32 });
        }

        let values: Vec<u32> = graph.nodes().map(|node| node.value).collect();
        assert_eq!(values, vec![0, 1, 2]);
    }

    #[test]
    fn test_node_replacement_keeps_position() {
        let mut graph = TestGraph::new();
        let first = Id::new("first");
        let second = Id::new("second");

        graph.add_node(first, TestNode { value: 1 });
        graph.add_node(second, TestNode { value: 2 });
        graph.add_node(first, TestNode { value: 10 });

        assert_eq!(graph.nodes_count(), 2);
        assert_eq!(graph.node(first), Some(TestNode { value: 10 }));
        assert_eq!(graph.nodes().next(), Some(TestNode { value: 10 }));
    }

    #[test]
    fn test_missing_node() {
        let graph = TestGraph::new();
        let id = Id::new("missing");

        assert_eq!(graph.node(id), None);
        assert!(!graph.contains_node(id));
        assert_eq!(graph.outgoing_nodes(id).count(), 0);
        assert_eq!(graph.incoming_nodes(id).count(), 0);
    }

    #[test]
    fn test_fan_in_connections() {
        let mut graph = TestGraph::new();
        let a = Id::new("a");
        let b = Id::new("b");
        let target = Id::new("target");
        graph.add_node(a, TestNode { value: 1 });
        graph.add_node(b, TestNode { value: 2 });
        graph.add_node(target, TestNode { value: 3 });

        graph.add_connection(a, target, TestConnection { weight: 1 });
        graph.add_connection(b, target, TestConnection { weight: 1 });

        let sources: Vec<TestNode> = graph.incoming_nodes(target).collect();
        assert_eq!(sources, vec![TestNode { value: 1 }, TestNode { value: 2 }]);

        let roots: Vec<TestNode> = graph.roots().collect();
        assert_eq!(roots, vec![TestNode { value: 1 }, TestNode { value: 2 }]);
        assert_eq!(graph.connections_count(), 2);
    }

    #[test]
    fn test_chain_and_parallel_connections() {
        let mut graph = TestGraph::new();
        let top = Id::new("top");
        let mid = Id::new("mid");
        let bottom = Id::new("bottom");
        graph.add_node(top, TestNode { value: 1 });
        graph.add_node(mid, TestNode { value: 2 });
        graph.add_node(bottom, TestNode { value: 3 });

        let first = graph.add_connection(top, mid, TestConnection { weight: 1 });
        let second = graph.add_connection(top, mid, TestConnection { weight: 2 });
        graph.add_connection(mid, bottom, TestConnection { weight: 3 });

        assert_ne!(first, second);
        assert_eq!(graph.outgoing_nodes(top).count(), 2);
        assert_eq!(graph.outgoing_nodes(bottom).count(), 0);

        let weights: Vec<i32> = graph.connections().map(|c| c.weight).collect();
        assert_eq!(weights, vec![1, 2, 3]);

        let roots: Vec<TestNode> = graph.roots().collect();
        assert_eq!(roots, vec![TestNode { value: 1 }]);
    }

    #[test]
    fn test_self_loop_is_not_root() {
        let mut graph = TestGraph::new();
        let id = Id::new("self_loop");
        graph.add_node(id, TestNode { value: 10 });
        graph.add_connection(id, id, TestConnection { weight: 1 });

        assert_eq!(graph.roots().count(), 0);
        assert_eq!(graph.outgoing_nodes(id).count(), 1);
    }
}
