use std::collections::{BTreeMap, BTreeSet};

use canon_core::{CanonError, ErrorInfo, NodeId};

/// Undirected simple graph with deterministic iteration order.
///
/// No self loops, no parallel edges. Nodes carry caller-chosen identifiers;
/// adjacency is kept in ordered containers so that every iteration order is a
/// function of the identifiers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleGraph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    edge_count: usize,
}

impl SimpleGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with the given identifier.
    pub fn add_node(&mut self, node: NodeId) -> Result<(), CanonError> {
        if self.adjacency.contains_key(&node) {
            let info = ErrorInfo::new("node-exists", "node identifier already present")
                .with_context("node", node.as_raw().to_string());
            return Err(CanonError::Graph(info));
        }
        self.adjacency.insert(node, BTreeSet::new());
        Ok(())
    }

    /// Adds an undirected edge between two existing nodes.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), CanonError> {
        if a == b {
            let info = ErrorInfo::new("self-loop", "self loops are not supported")
                .with_context("node", a.as_raw().to_string());
            return Err(CanonError::Graph(info));
        }
        for endpoint in [a, b] {
            if !self.adjacency.contains_key(&endpoint) {
                let info = ErrorInfo::new("unknown-endpoint", "edge endpoint is not a node")
                    .with_context("node", endpoint.as_raw().to_string());
                return Err(CanonError::Graph(info));
            }
        }
        if self.has_edge(a, b) {
            let info = ErrorInfo::new("duplicate-edge", "edge already present")
                .with_context("a", a.as_raw().to_string())
                .with_context("b", b.as_raw().to_string());
            return Err(CanonError::Graph(info));
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        self.edge_count += 1;
        Ok(())
    }

    /// Returns whether the node exists.
    pub fn has_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns whether the undirected edge exists.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency
            .get(&a)
            .map(|set| set.contains(&b))
            .unwrap_or(false)
    }

    /// Iterates over node identifiers in ascending order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns the node set.
    pub fn node_set(&self) -> BTreeSet<NodeId> {
        self.adjacency.keys().copied().collect()
    }

    /// Returns the neighbor set of a node.
    pub fn neighbors(&self, node: NodeId) -> Result<&BTreeSet<NodeId>, CanonError> {
        self.adjacency.get(&node).ok_or_else(|| {
            let info = ErrorInfo::new("unknown-node", "node is not part of the graph")
                .with_context("node", node.as_raw().to_string());
            CanonError::Graph(info)
        })
    }

    /// Iterates over edges as `(a, b)` pairs with `a < b`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().flat_map(|(&a, nbrs)| {
            nbrs.iter()
                .copied()
                .filter(move |&b| a < b)
                .map(move |b| (a, b))
        })
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the largest node identifier, if any.
    pub fn max_node_id(&self) -> Option<NodeId> {
        self.adjacency.keys().next_back().copied()
    }
}
