//! Partition refinement to a fixpoint, in plain and overlay-driven modes.
//!
//! Both modes are pure: they consume explicit label vectors and return new
//! ones, so no refinement state is ever shared between callers. The
//! overlay-driven mode threads the per-node overlays through its return value
//! instead of mutating them behind the caller's back.

use std::collections::BTreeMap;

use canon_core::{CanonError, ErrorInfo, NodeId};
use canon_graph::SimpleGraph;

/// Graph flattened onto dense indices `0..n`, in ascending identifier order.
#[derive(Debug, Clone)]
pub(crate) struct DenseGraph {
    /// Original identifier of each dense index.
    pub ids: Vec<NodeId>,
    /// Sorted neighbor indices per node.
    pub neighbors: Vec<Vec<usize>>,
}

impl DenseGraph {
    pub(crate) fn from_graph(graph: &SimpleGraph) -> Result<Self, CanonError> {
        let ids: Vec<NodeId> = graph.nodes().collect();
        let index: BTreeMap<NodeId, usize> = ids
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();
        let mut neighbors = Vec::with_capacity(ids.len());
        for &id in &ids {
            let row: Vec<usize> = graph
                .neighbors(id)?
                .iter()
                .map(|nbr| index[nbr])
                .collect();
            neighbors.push(row);
        }
        Ok(Self { ids, neighbors })
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Signature of one refinement class: current label plus sorted neighbor labels.
pub(crate) type SignatureDef = (u64, Vec<u64>);

/// Stabilized result of a plain (non-overlay) refinement run.
#[derive(Debug, Clone)]
pub(crate) struct PlainRefinement {
    /// Stabilized internal label per dense node index.
    pub labels: Vec<u64>,
    /// Sorted `(internal label, seed label)` pairs, the first comparison key.
    pub pairings: Vec<(u64, u64)>,
    /// Ordered distinct signatures of the final round; index = label value.
    pub definitions: Vec<SignatureDef>,
    /// Number of rounds that changed the partition.
    pub rounds: usize,
}

impl PlainRefinement {
    /// Comparison per refinement "shape": pairings first, then definitions.
    ///
    /// Numeric label values never enter the comparison, only the grouping
    /// they induce together with the seed labels.
    pub(crate) fn cmp_shape(&self, other: &Self) -> std::cmp::Ordering {
        self.pairings
            .cmp(&other.pairings)
            .then_with(|| self.definitions.cmp(&other.definitions))
    }
}

/// Refines the seed labeling to a fixpoint using neighbor-label signatures.
pub(crate) fn refine_plain(graph: &DenseGraph, seed: &[u64]) -> Result<PlainRefinement, CanonError> {
    let n = graph.len();
    let mut labels = seed.to_vec();
    let mut definitions = Vec::new();
    let mut rounds = 0usize;
    loop {
        if n == 0 {
            break;
        }
        let mut keyed: Vec<(usize, SignatureDef)> = (0..n)
            .map(|node| {
                let mut nbr: Vec<u64> = graph.neighbors[node]
                    .iter()
                    .map(|&other| labels[other])
                    .collect();
                nbr.sort_unstable();
                (node, (labels[node], nbr))
            })
            .collect();
        keyed.sort_by(|a, b| a.1.cmp(&b.1));

        let mut new_labels = vec![0u64; n];
        definitions = Vec::new();
        let mut next_label = 0u64;
        for (position, (node, signature)) in keyed.iter().enumerate() {
            if position == 0 || *signature != keyed[position - 1].1 {
                if position > 0 {
                    next_label += 1;
                }
                definitions.push(signature.clone());
            }
            new_labels[*node] = next_label;
        }

        if partitions_match(&labels, &new_labels) {
            break;
        }
        ensure_splits_only(&labels, &new_labels)?;
        labels = new_labels;
        rounds += 1;
        if rounds > n {
            let info = ErrorInfo::new("refine-overrun", "refinement exceeded the node-count bound")
                .with_context("nodes", n.to_string())
                .with_context("rounds", rounds.to_string());
            return Err(CanonError::Invariant(info));
        }
    }
    let mut pairings: Vec<(u64, u64)> = labels
        .iter()
        .zip(seed.iter())
        .map(|(&internal, &external)| (internal, external))
        .collect();
    pairings.sort_unstable();
    Ok(PlainRefinement {
        labels,
        pairings,
        definitions,
        rounds,
    })
}

/// Stabilized result of the overlay-driven (top-level) refinement loop.
#[derive(Debug, Clone)]
pub(crate) struct MasterFixpoint {
    /// Stabilized internal label per dense node index.
    pub labels: Vec<u64>,
    /// Final per-node overlays after the last feedback round.
    pub overlays: Vec<Vec<u64>>,
    /// Number of rounds that changed the partition.
    pub rounds: usize,
}

/// Runs the overlay-driven refinement loop to a fixpoint.
///
/// Each round gives every node `p` a private sub-refinement seeded with
/// `overlay[p][m] * bound + label[m]`; `p`'s sort key combines its current
/// label with the shape of that sub-refinement, and the sub-refinement's
/// stabilized labels become `p`'s overlay for the next round. `bound` must
/// be strictly greater than both the node count and every current label so
/// the combination cannot collide.
pub(crate) fn refine_master(
    graph: &DenseGraph,
    external: &[u64],
    mut overlays: Vec<Vec<u64>>,
    bound: u64,
) -> Result<MasterFixpoint, CanonError> {
    let n = graph.len();
    let mut labels = external.to_vec();
    let mut rounds = 0usize;
    loop {
        if n == 0 {
            break;
        }
        let mut keyed: Vec<(usize, u64, PlainRefinement)> = Vec::with_capacity(n);
        for p in 0..n {
            let synthetic: Vec<u64> = (0..n)
                .map(|m| overlays[p][m] * bound + labels[m])
                .collect();
            let sub = refine_plain(graph, &synthetic)?;
            keyed.push((p, labels[p], sub));
        }
        // Feedback: the sub-refinement replaces the overlay that seeded it.
        for (p, _, sub) in &keyed {
            overlays[*p] = sub.labels.clone();
        }
        keyed.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.2.cmp_shape(&b.2)));

        let mut new_labels = vec![0u64; n];
        let mut next_label = 0u64;
        for position in 0..n {
            if position > 0 {
                let prev = &keyed[position - 1];
                let cur = &keyed[position];
                if cur.1 != prev.1 || cur.2.cmp_shape(&prev.2) != std::cmp::Ordering::Equal {
                    next_label += 1;
                }
            }
            new_labels[keyed[position].0] = next_label;
        }

        if partitions_match(&labels, &new_labels) {
            break;
        }
        ensure_splits_only(&labels, &new_labels)?;
        labels = new_labels;
        rounds += 1;
        if rounds > n {
            let info = ErrorInfo::new("master-overrun", "overlay refinement exceeded the node-count bound")
                .with_context("nodes", n.to_string())
                .with_context("rounds", rounds.to_string());
            return Err(CanonError::Invariant(info));
        }
    }
    Ok(MasterFixpoint {
        labels,
        overlays,
        rounds,
    })
}

/// Fixpoint test: the induced partitions coincide, regardless of numbering.
///
/// Each class is represented by its lowest-index member; two labelings are
/// effectively the same when every node's old and new representatives agree.
fn partitions_match(old: &[u64], new: &[u64]) -> bool {
    let mut old_reps: BTreeMap<u64, usize> = BTreeMap::new();
    let mut new_reps: BTreeMap<u64, usize> = BTreeMap::new();
    for node in 0..old.len() {
        let old_rep = *old_reps.entry(old[node]).or_insert(node);
        let new_rep = *new_reps.entry(new[node]).or_insert(node);
        if old_rep != new_rep {
            return false;
        }
    }
    true
}

/// A refinement round may split classes but must never merge them.
fn ensure_splits_only(old: &[u64], new: &[u64]) -> Result<(), CanonError> {
    let old_classes: std::collections::BTreeSet<u64> = old.iter().copied().collect();
    let new_classes: std::collections::BTreeSet<u64> = new.iter().copied().collect();
    if new_classes.len() < old_classes.len() {
        let info = ErrorInfo::new("refine-merge", "refinement merged previously distinct classes")
            .with_context("old_classes", old_classes.len().to_string())
            .with_context("new_classes", new_classes.len().to_string());
        return Err(CanonError::Invariant(info));
    }
    Ok(())
}
