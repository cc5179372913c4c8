use std::collections::BTreeMap;

use canon_core::{CanonError, ErrorInfo, Labeling, NodeId};

use crate::graph::SimpleGraph;

/// Relabels nodes onto the dense range `0..n` in ascending identifier order.
///
/// Returns the normalized graph together with the old-to-new identifier
/// bijection. The engine densifies internally; this helper exists for
/// callers that need the explicit mapping, e.g. to carry external data
/// across the renaming.
pub fn normalize(graph: &SimpleGraph) -> Result<(SimpleGraph, BTreeMap<NodeId, NodeId>), CanonError> {
    let mapping: BTreeMap<NodeId, NodeId> = graph
        .nodes()
        .enumerate()
        .map(|(index, node)| (node, NodeId::from_raw(index as u64)))
        .collect();
    let normalized = relabel_nodes(graph, &mapping)?;
    Ok((normalized, mapping))
}

/// Rebuilds a graph under an explicit node-identifier bijection.
///
/// Every node must have exactly one image and no two nodes may share one.
pub fn relabel_nodes(
    graph: &SimpleGraph,
    mapping: &BTreeMap<NodeId, NodeId>,
) -> Result<SimpleGraph, CanonError> {
    let mut relabeled = SimpleGraph::new();
    let mut seen = BTreeMap::new();
    for node in graph.nodes() {
        let image = lookup(mapping, node)?;
        if let Some(prior) = seen.insert(image, node) {
            let info = ErrorInfo::new("mapping-not-injective", "two nodes share an image")
                .with_context("image", image.as_raw().to_string())
                .with_context("first", prior.as_raw().to_string())
                .with_context("second", node.as_raw().to_string());
            return Err(CanonError::Graph(info));
        }
        relabeled.add_node(image)?;
    }
    for (a, b) in graph.edges() {
        relabeled.add_edge(lookup(mapping, a)?, lookup(mapping, b)?)?;
    }
    Ok(relabeled)
}

/// Carries a labeling across a node-identifier bijection.
pub fn relabel_labeling(
    labeling: &Labeling,
    mapping: &BTreeMap<NodeId, NodeId>,
) -> Result<Labeling, CanonError> {
    let mut relabeled = Labeling::new();
    for (&node, &label) in labeling {
        relabeled.insert(lookup(mapping, node)?, label);
    }
    Ok(relabeled)
}

fn lookup(mapping: &BTreeMap<NodeId, NodeId>, node: NodeId) -> Result<NodeId, CanonError> {
    mapping.get(&node).copied().ok_or_else(|| {
        let info = ErrorInfo::new("mapping-missing-node", "bijection has no image for node")
            .with_context("node", node.as_raw().to_string());
        CanonError::Graph(info)
    })
}
