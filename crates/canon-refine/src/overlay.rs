//! Per-node overlay seeding: shortest-path head start plus individualization.

use std::collections::VecDeque;

use canon_core::CanonError;

use crate::refine::{refine_plain, DenseGraph};

/// Builds the initial overlay for every node of the (expanded) graph.
///
/// For a node `p`, a head-start map combines BFS distances from `p`
/// (unreachable nodes get the maximum finite distance plus one) with a basic
/// stabilized coloring of the whole graph. Only the maximum of that map
/// survives: the overlay actually used maps every node to its external label,
/// except `p` itself, which is individualized to the head-start maximum plus
/// one, a value strictly greater than anything any other node can carry.
pub(crate) fn seed_overlays(
    graph: &DenseGraph,
    external: &[u64],
) -> Result<Vec<Vec<u64>>, CanonError> {
    let n = graph.len();
    let basic = refine_plain(graph, external)?;
    let scale = n as u64;
    let mut overlays = Vec::with_capacity(n);
    for p in 0..n {
        let distances = bfs_distances(graph, p);
        let max_finite = distances.iter().flatten().copied().max().unwrap_or(0);
        let head_start_max = (0..n)
            .map(|m| distances[m].unwrap_or(max_finite + 1) + basic.labels[m] * scale)
            .max()
            .unwrap_or(0);
        let mut overlay = external.to_vec();
        overlay[p] = head_start_max + 1;
        overlays.push(overlay);
    }
    Ok(overlays)
}

/// Single-source BFS distances; `None` marks unreachable nodes.
fn bfs_distances(graph: &DenseGraph, start: usize) -> Vec<Option<u64>> {
    let mut distances = vec![None; graph.len()];
    let mut queue = VecDeque::new();
    distances[start] = Some(0);
    queue.push_back(start);
    while let Some(node) = queue.pop_front() {
        let next = match distances[node] {
            Some(d) => d + 1,
            None => continue,
        };
        for &neighbor in &graph.neighbors[node] {
            if distances[neighbor].is_none() {
                distances[neighbor] = Some(next);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}
