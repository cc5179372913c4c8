use canon_core::errors::{CanonError, ErrorInfo};
use canon_core::NodeId;
use serde::{Deserialize, Serialize};

use crate::graph::SimpleGraph;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &SimpleGraph) -> Result<Vec<u8>, CanonError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| CanonError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<SimpleGraph, CanonError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| CanonError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &SimpleGraph) -> Result<String, CanonError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| CanonError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<SimpleGraph, CanonError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| CanonError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    nodes: Vec<u64>,
    edges: Vec<(u64, u64)>,
}

impl SerializableGraph {
    fn from_graph(graph: &SimpleGraph) -> Self {
        Self {
            nodes: graph.nodes().map(|node| node.as_raw()).collect(),
            edges: graph
                .edges()
                .map(|(a, b)| (a.as_raw(), b.as_raw()))
                .collect(),
        }
    }

    fn into_graph(self) -> Result<SimpleGraph, CanonError> {
        let mut graph = SimpleGraph::new();
        for raw in self.nodes {
            graph.add_node(NodeId::from_raw(raw))?;
        }
        for (a, b) in self.edges {
            graph.add_edge(NodeId::from_raw(a), NodeId::from_raw(b))?;
        }
        Ok(graph)
    }
}
