//! Canonical ordering: turns the stabilized partition and overlays into one
//! total order over the original nodes, breaking refinement ties by
//! recursive individualization.

use canon_core::{CanonError, Labeling, NodeId};
use canon_graph::SimpleGraph;

use crate::engine::{run_engine, EnginePass};

#[derive(Debug, Default)]
pub(crate) struct OrderOutcome {
    /// Final total order as dense original-node indices.
    pub order: Vec<usize>,
    /// Positions (0-based in the final order) where a tie forced a
    /// recursive individualization run.
    pub tie_break_positions: Vec<usize>,
    /// Positions where the chosen node was still tied after tie-breaking;
    /// such choices are only safe among truly automorphic nodes.
    pub residual_tie_positions: Vec<usize>,
}

pub(crate) fn canonical_order(
    original: &SimpleGraph,
    pass: &EnginePass,
    expand: bool,
) -> Result<OrderOutcome, CanonError> {
    let n0 = original.node_count();
    let mut outcome = OrderOutcome::default();
    if n0 == 0 {
        return Ok(outcome);
    }
    let ids = &pass.dense.ids[..n0];
    let fix = &pass.fix;

    let mut ordering: Vec<(usize, u64)> = (0..n0).map(|node| (node, 0)).collect();
    further_sort(&mut ordering, |node| fix.labels[node]);

    outcome.order.push(ordering[0].0);
    ordering.remove(0);

    for position in 1..n0 {
        let last = outcome.order[outcome.order.len() - 1];
        further_sort(&mut ordering, |node| fix.overlays[last][node]);

        let mut selected = untied_head(&ordering);
        if selected >= ordering.len() {
            // Every candidate is tied with a neighbor: individualize by
            // pinning the placed prefix and re-running the whole engine.
            let pinned = pinned_labeling(ids, &ordering, &outcome.order);
            let servant = run_engine(original, &pinned, expand)?;
            further_sort(&mut ordering, |node| servant.fix.labels[node]);
            selected = 0;
            outcome.tie_break_positions.push(position);
        }
        if selected + 1 < ordering.len() && ordering[selected].1 == ordering[selected + 1].1 {
            outcome.residual_tie_positions.push(position);
        }
        outcome.order.push(ordering[selected].0);
        ordering.remove(selected);
    }
    Ok(outcome)
}

/// Scans the key-sorted candidates for the first node not tied with its
/// successor, skipping whole tied runs; returns `len` when none exists.
fn untied_head(ordering: &[(usize, u64)]) -> usize {
    let mut selected = 0;
    while selected < ordering.len() {
        if selected + 1 < ordering.len() && ordering[selected].1 == ordering[selected + 1].1 {
            let mut next = selected + 1;
            while next < ordering.len() && ordering[selected].1 == ordering[next].1 {
                next += 1;
            }
            selected = next;
        } else {
            break;
        }
    }
    selected
}

/// Labeling that pins each placed node to its position and lifts every
/// remaining node's key above the placed range.
fn pinned_labeling(ids: &[NodeId], ordering: &[(usize, u64)], placed: &[usize]) -> Labeling {
    let offset = placed.len() as u64;
    let mut labeling = Labeling::new();
    for &(node, key) in ordering {
        labeling.insert(ids[node], key + offset);
    }
    for (slot, &node) in placed.iter().enumerate() {
        labeling.insert(ids[node], slot as u64);
    }
    labeling
}

/// Refines the running sort keys: each key becomes the dense rank of the
/// pair `(old key, refined label)` under a stable sort, so successive calls
/// only ever split tied groups.
fn further_sort<F>(ordering: &mut [(usize, u64)], refined: F)
where
    F: Fn(usize) -> u64,
{
    if ordering.is_empty() {
        return;
    }
    let mut keyed: Vec<(usize, (u64, u64))> = ordering
        .iter()
        .map(|&(node, key)| (node, (key, refined(node))))
        .collect();
    keyed.sort_by(|a, b| a.1.cmp(&b.1));
    let mut next = 0u64;
    let mut prev = keyed[0].1;
    ordering[0] = (keyed[0].0, 0);
    for i in 1..keyed.len() {
        if keyed[i].1 != prev {
            next += 1;
            prev = keyed[i].1;
        }
        ordering[i] = (keyed[i].0, next);
    }
}
