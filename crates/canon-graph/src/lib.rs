#![deny(missing_docs)]
//! Undirected labeled simple graphs and the preprocessing steps feeding the
//! canonicalization engine: edge expansion, dense-id normalization,
//! deterministic generators, and serialization helpers.

mod expand;
mod generators;
mod graph;
mod normalize;
mod serialization;

pub use expand::{expand_edges, expand_triangle_edges, TriangleProfile};
pub use generators::{complete, cycle, gen_gnp, path, star};
pub use graph::SimpleGraph;
pub use normalize::{normalize, relabel_labeling, relabel_nodes};
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
