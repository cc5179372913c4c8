#![deny(missing_docs)]
//! Shared identifiers, labelings, and error types for the graph
//! canonicalization workspace.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{CanonError, ErrorInfo};
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier for a node within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// External node coloring: one integer label per node.
///
/// Labels are equivalence class markers (element kinds, edge types); their
/// numeric values carry no meaning beyond equality and ordering.
pub type Labeling = BTreeMap<NodeId, u64>;

/// Builds the default all-zero labeling over the given node set.
pub fn uniform_labeling<I>(nodes: I) -> Labeling
where
    I: IntoIterator<Item = NodeId>,
{
    nodes.into_iter().map(|node| (node, 0)).collect()
}

/// Checks that a labeling covers exactly the provided node set.
///
/// Every node must have exactly one entry and no entry may refer to a node
/// outside the set. Fails fast with a [`CanonError::Label`] otherwise.
pub fn validate_labeling(nodes: &BTreeSet<NodeId>, labeling: &Labeling) -> Result<(), CanonError> {
    for node in nodes {
        if !labeling.contains_key(node) {
            let info = ErrorInfo::new("label-missing", "labeling has no entry for a graph node")
                .with_context("node", node.as_raw().to_string())
                .with_context("nodes", nodes.len().to_string())
                .with_context("entries", labeling.len().to_string());
            return Err(CanonError::Label(info));
        }
    }
    for node in labeling.keys() {
        if !nodes.contains(node) {
            let info = ErrorInfo::new("label-unknown-node", "labeling entry for a non-existent node")
                .with_context("node", node.as_raw().to_string())
                .with_hint("normalize the graph and labeling together");
            return Err(CanonError::Label(info));
        }
    }
    Ok(())
}
