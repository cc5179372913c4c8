use canon_core::{validate_labeling, CanonError, Labeling, NodeId};
use serde::{Deserialize, Serialize};

use crate::graph::SimpleGraph;

/// Diagnostic classification emitted by [`expand_triangle_edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriangleProfile {
    /// Every edge participates in a triangle (also reported for edgeless input).
    AllTriangle,
    /// No edge participates in a triangle.
    AllPlain,
    /// Both kinds of edges are present.
    Mixed,
}

/// Rewrites an edge-labeled problem into a purely node-labeled one.
///
/// Every node is preserved with its label. Every edge `(u, v)` is replaced by
/// a fresh node adjacent to both `u` and `v`, labeled one more than the
/// maximum existing label; the direct edge is removed. Fresh identifiers are
/// allocated strictly above the current maximum, so they never collide.
pub fn expand_edges(
    graph: &SimpleGraph,
    labeling: &Labeling,
) -> Result<(SimpleGraph, Labeling), CanonError> {
    validate_labeling(&graph.node_set(), labeling)?;
    let mut expanded = SimpleGraph::new();
    let mut labels = Labeling::new();
    let Some(max_id) = graph.max_node_id() else {
        return Ok((expanded, labels));
    };
    let edge_label = max_label(labeling) + 1;

    for node in graph.nodes() {
        expanded.add_node(node)?;
        labels.insert(node, labeling[&node]);
    }
    let mut next_id = max_id.as_raw();
    for (a, b) in graph.edges() {
        next_id += 1;
        let fresh = NodeId::from_raw(next_id);
        expanded.add_node(fresh)?;
        expanded.add_edge(a, fresh)?;
        expanded.add_edge(b, fresh)?;
        labels.insert(fresh, edge_label);
    }
    Ok((expanded, labels))
}

/// Variant of [`expand_edges`] that subdivides only triangle edges.
///
/// An edge is subdivided when its endpoints share a common neighbor;
/// non-triangle edges stay direct. The returned [`TriangleProfile`] is purely
/// diagnostic and has no effect on canonicalization, which never takes this
/// path by default.
pub fn expand_triangle_edges(
    graph: &SimpleGraph,
    labeling: &Labeling,
) -> Result<(SimpleGraph, Labeling, TriangleProfile), CanonError> {
    validate_labeling(&graph.node_set(), labeling)?;
    let mut expanded = SimpleGraph::new();
    let mut labels = Labeling::new();
    let Some(max_id) = graph.max_node_id() else {
        return Ok((expanded, labels, TriangleProfile::AllTriangle));
    };
    let edge_label = max_label(labeling) + 1;

    for node in graph.nodes() {
        expanded.add_node(node)?;
        labels.insert(node, labeling[&node]);
    }
    let mut next_id = max_id.as_raw();
    let mut saw_triangle = false;
    let mut saw_plain = false;
    for (a, b) in graph.edges() {
        let in_triangle = !graph.neighbors(a)?.is_disjoint(graph.neighbors(b)?);
        if in_triangle {
            saw_triangle = true;
            next_id += 1;
            let fresh = NodeId::from_raw(next_id);
            expanded.add_node(fresh)?;
            expanded.add_edge(a, fresh)?;
            expanded.add_edge(b, fresh)?;
            labels.insert(fresh, edge_label);
        } else {
            saw_plain = true;
            expanded.add_edge(a, b)?;
        }
    }
    let profile = match (saw_triangle, saw_plain) {
        (true, true) => TriangleProfile::Mixed,
        (false, true) => TriangleProfile::AllPlain,
        _ => TriangleProfile::AllTriangle,
    };
    Ok((expanded, labels, profile))
}

fn max_label(labeling: &Labeling) -> u64 {
    labeling.values().copied().max().unwrap_or(0)
}
