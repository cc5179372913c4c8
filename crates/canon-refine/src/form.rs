//! Canonical form of a labeled graph and its total order.

use std::cmp::Ordering;

use canon_core::NodeId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Canonical representation of a labeled undirected graph.
///
/// Two graphs related by a label-preserving isomorphism produce equal forms;
/// distinct graphs produce distinct forms with high (not absolute)
/// probability, as with every individualization-refinement canonicalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalForm {
    /// Original node identifiers in canonical order. Witness data only: the
    /// comparator ignores it, since isomorphic graphs may reach the same
    /// form through different witnesses.
    pub node_order: Vec<NodeId>,
    /// External label of each node, in canonical order.
    pub ordered_labels: Vec<u64>,
    /// Strict upper-triangular adjacency of the original, unexpanded graph:
    /// `matrix[i][j - i - 1]` is 1 iff nodes at canonical positions `i < j`
    /// are adjacent.
    pub matrix: Vec<Vec<u8>>,
}

impl CanonicalForm {
    /// The canonical form of the empty graph.
    pub fn empty() -> Self {
        Self {
            node_order: Vec::new(),
            ordered_labels: Vec::new(),
            matrix: Vec::new(),
        }
    }

    /// Returns the number of nodes represented by the form.
    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    /// Returns whether the form represents the empty graph.
    pub fn is_empty(&self) -> bool {
        self.node_order.is_empty()
    }
}

/// Total order over canonical forms: ordered labels first, then the
/// upper-triangular matrix rows top to bottom.
pub fn compare_forms(a: &CanonicalForm, b: &CanonicalForm) -> Ordering {
    a.ordered_labels
        .cmp(&b.ordered_labels)
        .then_with(|| a.matrix.cmp(&b.matrix))
}

/// Equality under [`compare_forms`]; this is the isomorphism verdict.
pub fn forms_equal(a: &CanonicalForm, b: &CanonicalForm) -> bool {
    compare_forms(a, b) == Ordering::Equal
}

impl PartialEq for CanonicalForm {
    fn eq(&self, other: &Self) -> bool {
        forms_equal(self, other)
    }
}

impl Eq for CanonicalForm {}

impl PartialOrd for CanonicalForm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare_forms(self, other))
    }
}

impl Ord for CanonicalForm {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_forms(self, other)
    }
}

/// Computes the content hash of a canonical form.
///
/// The hash covers exactly what the comparator compares, so two forms hash
/// equal iff they are equal under [`compare_forms`].
pub fn form_hash(form: &CanonicalForm) -> String {
    let mut hasher = Sha256::new();
    hasher.update((form.ordered_labels.len() as u64).to_le_bytes());
    for &label in &form.ordered_labels {
        hasher.update(label.to_le_bytes());
    }
    hasher.update((form.matrix.len() as u64).to_le_bytes());
    for row in &form.matrix {
        hasher.update((row.len() as u64).to_le_bytes());
        hasher.update(row.as_slice());
    }
    format!("{:x}", hasher.finalize())
}
