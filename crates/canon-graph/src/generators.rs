use canon_core::errors::{CanonError, ErrorInfo};
use canon_core::rng::RngHandle;
use canon_core::NodeId;
use rand::Rng;

use crate::graph::SimpleGraph;

/// Builds the path graph on `n` nodes `0..n` (edges `i - i+1`).
pub fn path(n: usize) -> Result<SimpleGraph, CanonError> {
    let mut graph = dense_nodes(n)?;
    for i in 1..n {
        graph.add_edge(raw(i - 1), raw(i))?;
    }
    Ok(graph)
}

/// Builds the cycle graph on `n >= 3` nodes.
pub fn cycle(n: usize) -> Result<SimpleGraph, CanonError> {
    if n < 3 {
        return Err(CanonError::Graph(
            ErrorInfo::new("cycle-too-small", "cycle requires at least three nodes")
                .with_context("nodes", n.to_string()),
        ));
    }
    let mut graph = path(n)?;
    graph.add_edge(raw(n - 1), raw(0))?;
    Ok(graph)
}

/// Builds the star graph with center `0` and `leaves` leaf nodes.
pub fn star(leaves: usize) -> Result<SimpleGraph, CanonError> {
    let mut graph = dense_nodes(leaves + 1)?;
    for leaf in 1..=leaves {
        graph.add_edge(raw(0), raw(leaf))?;
    }
    Ok(graph)
}

/// Builds the complete graph on `n` nodes.
pub fn complete(n: usize) -> Result<SimpleGraph, CanonError> {
    let mut graph = dense_nodes(n)?;
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(raw(i), raw(j))?;
        }
    }
    Ok(graph)
}

/// Samples a G(n, p) random graph with deterministic randomness.
pub fn gen_gnp(n: usize, edge_prob: f64, rng: &mut RngHandle) -> Result<SimpleGraph, CanonError> {
    if !(0.0..=1.0).contains(&edge_prob) {
        return Err(CanonError::Graph(
            ErrorInfo::new("edge-prob-range", "edge probability must be within [0, 1]")
                .with_context("edge_prob", edge_prob.to_string()),
        ));
    }
    let mut graph = dense_nodes(n)?;
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(edge_prob) {
                graph.add_edge(raw(i), raw(j))?;
            }
        }
    }
    Ok(graph)
}

fn dense_nodes(n: usize) -> Result<SimpleGraph, CanonError> {
    let mut graph = SimpleGraph::new();
    for i in 0..n {
        graph.add_node(raw(i))?;
    }
    Ok(graph)
}

fn raw(i: usize) -> NodeId {
    NodeId::from_raw(i as u64)
}
