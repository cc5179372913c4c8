#![deny(missing_docs)]
//! Individualization-refinement canonicalization for labeled undirected
//! graphs.
//!
//! [`canonicalize`] computes a deterministic canonical form — an ordered node
//! sequence plus the adjacency matrix in that order — that is identical for
//! any two graphs related by a label-preserving isomorphism. Like every
//! canonicalizer in this family the procedure is a practically effective
//! heuristic, not a certified isomorphism test: specially constructed graphs
//! can in principle defeat the tie-breaking. Residual ties are reported
//! rather than hidden.

mod engine;
mod form;
mod order;
/// Brute-force verification oracle; test consumer only.
pub mod oracle;
mod overlay;
mod refine;
/// JSON and binary serialization helpers for forms and results.
pub mod serde_io;

use canon_core::{uniform_labeling, validate_labeling, CanonError, Labeling, NodeId};
use canon_graph::SimpleGraph;
use serde::{Deserialize, Serialize};

pub use form::{compare_forms, form_hash, forms_equal, CanonicalForm};
pub use oracle::{automorphism_orbits, isomorphic_by_enumeration, OrbitReport};

/// Options controlling a canonicalization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalizeOpts {
    /// Whether to rewrite edges into labeled edge nodes before refining.
    /// Enabled by default; tie-break sub-runs inherit the setting.
    pub expand: bool,
}

impl Default for CanonicalizeOpts {
    fn default() -> Self {
        Self { expand: true }
    }
}

/// Diagnostics accompanying a canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalReport {
    /// Rounds of the top-level overlay-driven refinement loop that changed
    /// the partition.
    pub refinement_rounds: usize,
    /// Canonical-order positions where a tie forced a recursive
    /// individualization run.
    pub tie_break_positions: Vec<usize>,
    /// Positions where the choice remained tied after tie-breaking. Safe
    /// only among automorphic nodes; always worth surfacing.
    pub residual_tie_positions: Vec<usize>,
}

/// Canonical form together with its run diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalResult {
    /// The canonical form.
    pub form: CanonicalForm,
    /// Diagnostics for the run that produced it.
    pub report: CanonicalReport,
}

/// Computes the canonical form of a labeled undirected graph.
///
/// `labeling` defaults to the all-zero coloring and must otherwise cover
/// exactly the graph's node set. The empty graph yields the empty form.
pub fn canonicalize(
    graph: &SimpleGraph,
    labeling: Option<&Labeling>,
    opts: &CanonicalizeOpts,
) -> Result<CanonicalResult, CanonError> {
    let default_labels;
    let labeling = match labeling {
        Some(labels) => {
            validate_labeling(&graph.node_set(), labels)?;
            labels
        }
        None => {
            default_labels = uniform_labeling(graph.nodes());
            &default_labels
        }
    };
    if graph.node_count() == 0 {
        return Ok(CanonicalResult {
            form: CanonicalForm::empty(),
            report: CanonicalReport::default(),
        });
    }

    let pass = engine::run_engine(graph, labeling, opts.expand)?;
    let outcome = order::canonical_order(graph, &pass, opts.expand)?;

    let ids = &pass.dense.ids[..graph.node_count()];
    let node_order: Vec<NodeId> = outcome.order.iter().map(|&node| ids[node]).collect();
    let ordered_labels: Vec<u64> = node_order.iter().map(|id| labeling[id]).collect();
    let mut matrix = Vec::with_capacity(node_order.len());
    for i in 0..node_order.len() {
        let mut row = Vec::with_capacity(node_order.len() - i - 1);
        for j in (i + 1)..node_order.len() {
            row.push(u8::from(graph.has_edge(node_order[i], node_order[j])));
        }
        matrix.push(row);
    }

    Ok(CanonicalResult {
        form: CanonicalForm {
            node_order,
            ordered_labels,
            matrix,
        },
        report: CanonicalReport {
            refinement_rounds: pass.fix.rounds,
            tie_break_positions: outcome.tie_break_positions,
            residual_tie_positions: outcome.residual_tie_positions,
        },
    })
}

/// Stabilized coloring produced by plain neighbor-signature refinement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineOutcome {
    /// Stabilized label per node; equal labels mean the refinement could not
    /// distinguish the nodes.
    pub labels: Labeling,
    /// Rounds that changed the partition before the fixpoint.
    pub rounds: usize,
    /// Number of distinct classes in the stabilized partition.
    pub class_count: usize,
}

/// Refines a labeling to its fixpoint without overlays or individualization.
///
/// This is the basic color-refinement pass: each round regroups nodes by
/// their label and sorted neighbor labels until no class splits.
pub fn stable_coloring(
    graph: &SimpleGraph,
    labeling: Option<&Labeling>,
) -> Result<RefineOutcome, CanonError> {
    let default_labels;
    let labeling = match labeling {
        Some(labels) => {
            validate_labeling(&graph.node_set(), labels)?;
            labels
        }
        None => {
            default_labels = uniform_labeling(graph.nodes());
            &default_labels
        }
    };
    let dense = refine::DenseGraph::from_graph(graph)?;
    let seed: Vec<u64> = dense.ids.iter().map(|id| labeling[id]).collect();
    let refined = refine::refine_plain(&dense, &seed)?;
    let class_count = refined
        .labels
        .iter()
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    let labels: Labeling = dense
        .ids
        .iter()
        .zip(refined.labels.iter())
        .map(|(&id, &label)| (id, label))
        .collect();
    Ok(RefineOutcome {
        labels,
        rounds: refined.rounds,
        class_count,
    })
}
