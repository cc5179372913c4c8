//! One full engine pass: optional expansion, overlay seeding, and the
//! overlay-driven refinement loop. Used for the top-level run and for every
//! tie-break sub-run; each pass owns its state exclusively.

use std::collections::BTreeMap;

use canon_core::{validate_labeling, CanonError, Labeling};
use canon_graph::{expand_edges, SimpleGraph};

use crate::overlay::seed_overlays;
use crate::refine::{refine_master, DenseGraph, MasterFixpoint};

#[derive(Debug)]
pub(crate) struct EnginePass {
    /// Dense view of the graph the refinement actually ran on (expanded,
    /// unless expansion was disabled). Original nodes occupy the leading
    /// indices because fresh identifiers are allocated above the maximum.
    pub dense: DenseGraph,
    pub fix: MasterFixpoint,
}

pub(crate) fn run_engine(
    graph: &SimpleGraph,
    labeling: &Labeling,
    expand: bool,
) -> Result<EnginePass, CanonError> {
    let (work_graph, work_labels) = if expand {
        expand_edges(graph, labeling)?
    } else {
        validate_labeling(&graph.node_set(), labeling)?;
        (graph.clone(), labeling.clone())
    };
    let dense = DenseGraph::from_graph(&work_graph)?;
    let external = compress_labels(&dense, &work_labels);
    let max_label = external.iter().copied().max().unwrap_or(0);
    let bound = (dense.len() as u64).max(max_label + 1);
    let overlays = seed_overlays(&dense, &external)?;
    let fix = refine_master(&dense, &external, overlays, bound)?;
    Ok(EnginePass { dense, fix })
}

/// Maps external labels onto dense ranks in value order.
///
/// Only the ordering of labels matters internally; ranking keeps the
/// combined overlay keys far away from `u64` overflow whatever values the
/// caller chose.
fn compress_labels(dense: &DenseGraph, labeling: &Labeling) -> Vec<u64> {
    let raw: Vec<u64> = dense.ids.iter().map(|id| labeling[id]).collect();
    let rank: BTreeMap<u64, u64> = raw
        .iter()
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(position, &label)| (label, position as u64))
        .collect();
    raw.iter().map(|label| rank[label]).collect()
}
