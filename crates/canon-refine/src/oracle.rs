//! Brute-force automorphism and isomorphism oracle for small graphs.
//!
//! Enumeration is exhaustive over node permutations, so inputs are capped at
//! a handful of nodes. The oracle is consumed only by tests that cross-check
//! the canonical-form verdict; the engine never calls it.

use std::collections::{BTreeMap, BTreeSet};

use canon_core::{validate_labeling, CanonError, ErrorInfo, Labeling, NodeId};
use canon_graph::SimpleGraph;
use itertools::Itertools;

/// Orbit structure found by exhaustive automorphism enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitReport {
    /// Number of distinct orbits.
    pub orbit_count: usize,
    /// Number of label-preserving automorphisms, identity included.
    pub automorphism_count: u64,
    /// Orbits as sorted identifier lists, sorted by smallest member.
    pub orbits: Vec<Vec<NodeId>>,
}

const EXHAUSTIVE_LIMIT: usize = 8;

/// Enumerates every label-preserving automorphism and groups the orbits.
pub fn automorphism_orbits(
    graph: &SimpleGraph,
    labeling: &Labeling,
) -> Result<OrbitReport, CanonError> {
    validate_labeling(&graph.node_set(), labeling)?;
    let n = graph.node_count();
    check_size(n)?;
    if n == 0 {
        return Ok(OrbitReport {
            orbit_count: 0,
            automorphism_count: 1,
            orbits: Vec::new(),
        });
    }
    let ids: Vec<NodeId> = graph.nodes().collect();
    let labels: Vec<u64> = ids.iter().map(|id| labeling[id]).collect();
    let edges = dense_edges(graph, &ids);

    let mut parent: Vec<usize> = (0..n).collect();
    let mut automorphism_count = 0u64;
    for perm in (0..n).permutations(n) {
        if !preserves_labels(&labels, &labels, &perm) || !preserves_edges(&edges, &edges, &perm) {
            continue;
        }
        automorphism_count += 1;
        for (idx, &mapped) in perm.iter().enumerate() {
            union(&mut parent, idx, mapped);
        }
    }

    let mut grouped: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();
    for idx in 0..n {
        let root = find(&mut parent, idx);
        grouped.entry(root).or_default().push(ids[idx]);
    }
    let orbits: Vec<Vec<NodeId>> = grouped.into_values().collect();
    Ok(OrbitReport {
        orbit_count: orbits.len(),
        automorphism_count,
        orbits,
    })
}

/// Decides label-preserving isomorphism by exhaustive bijection enumeration.
pub fn isomorphic_by_enumeration(
    graph_a: &SimpleGraph,
    labeling_a: &Labeling,
    graph_b: &SimpleGraph,
    labeling_b: &Labeling,
) -> Result<bool, CanonError> {
    validate_labeling(&graph_a.node_set(), labeling_a)?;
    validate_labeling(&graph_b.node_set(), labeling_b)?;
    if graph_a.node_count() != graph_b.node_count()
        || graph_a.edge_count() != graph_b.edge_count()
    {
        return Ok(false);
    }
    let n = graph_a.node_count();
    check_size(n)?;
    if n == 0 {
        return Ok(true);
    }
    let ids_a: Vec<NodeId> = graph_a.nodes().collect();
    let ids_b: Vec<NodeId> = graph_b.nodes().collect();
    let labels_a: Vec<u64> = ids_a.iter().map(|id| labeling_a[id]).collect();
    let labels_b: Vec<u64> = ids_b.iter().map(|id| labeling_b[id]).collect();
    {
        let mut multiset_a = labels_a.clone();
        let mut multiset_b = labels_b.clone();
        multiset_a.sort_unstable();
        multiset_b.sort_unstable();
        if multiset_a != multiset_b {
            return Ok(false);
        }
    }
    let edges_a = dense_edges(graph_a, &ids_a);
    let edges_b = dense_edges(graph_b, &ids_b);
    for perm in (0..n).permutations(n) {
        if preserves_labels(&labels_a, &labels_b, &perm) && preserves_edges(&edges_a, &edges_b, &perm)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

fn check_size(n: usize) -> Result<(), CanonError> {
    if n > EXHAUSTIVE_LIMIT {
        let info = ErrorInfo::new("oracle-too-large", "exhaustive enumeration is capped")
            .with_context("nodes", n.to_string())
            .with_context("limit", EXHAUSTIVE_LIMIT.to_string());
        return Err(CanonError::Graph(info));
    }
    Ok(())
}

fn dense_edges(graph: &SimpleGraph, ids: &[NodeId]) -> BTreeSet<(usize, usize)> {
    let index: BTreeMap<NodeId, usize> = ids
        .iter()
        .enumerate()
        .map(|(idx, &id)| (id, idx))
        .collect();
    graph
        .edges()
        .map(|(a, b)| ordered(index[&a], index[&b]))
        .collect()
}

fn preserves_labels(from: &[u64], to: &[u64], perm: &[usize]) -> bool {
    perm.iter()
        .enumerate()
        .all(|(idx, &mapped)| from[idx] == to[mapped])
}

fn preserves_edges(
    from: &BTreeSet<(usize, usize)>,
    to: &BTreeSet<(usize, usize)>,
    perm: &[usize],
) -> bool {
    from.iter()
        .all(|&(a, b)| to.contains(&ordered(perm[a], perm[b])))
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

fn find(parent: &mut [usize], idx: usize) -> usize {
    if parent[idx] != idx {
        let root = find(parent, parent[idx]);
        parent[idx] = root;
    }
    parent[idx]
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        parent[rb] = ra;
    }
}
