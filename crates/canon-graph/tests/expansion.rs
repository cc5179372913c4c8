use canon_core::{uniform_labeling, NodeId};
use canon_graph::{complete, expand_edges, expand_triangle_edges, path, SimpleGraph, TriangleProfile};

fn raw(i: u64) -> NodeId {
    NodeId::from_raw(i)
}

#[test]
fn path_expansion_replaces_each_edge_with_a_fresh_node() {
    let graph = path(3).unwrap();
    let labeling = uniform_labeling(graph.nodes());
    let (expanded, labels) = expand_edges(&graph, &labeling).unwrap();

    assert_eq!(expanded.node_count(), 5);
    assert_eq!(expanded.edge_count(), 4);
    // Direct edges are gone.
    assert!(!expanded.has_edge(raw(0), raw(1)));
    assert!(!expanded.has_edge(raw(1), raw(2)));
    // Fresh nodes sit strictly above the old maximum and carry max label + 1.
    for fresh in [3, 4] {
        assert!(expanded.has_node(raw(fresh)));
        assert_eq!(labels[&raw(fresh)], 1);
        assert_eq!(expanded.neighbors(raw(fresh)).unwrap().len(), 2);
    }
    for original in [0, 1, 2] {
        assert_eq!(labels[&raw(original)], 0);
    }
}

#[test]
fn expansion_respects_existing_labels() {
    let mut graph = SimpleGraph::new();
    graph.add_node(raw(0)).unwrap();
    graph.add_node(raw(1)).unwrap();
    graph.add_edge(raw(0), raw(1)).unwrap();
    let mut labeling = uniform_labeling(graph.nodes());
    labeling.insert(raw(1), 7);

    let (_, labels) = expand_edges(&graph, &labeling).unwrap();
    assert_eq!(labels[&raw(2)], 8);
}

#[test]
fn empty_and_edgeless_graphs_pass_through() {
    let empty = SimpleGraph::new();
    let (expanded, labels) = expand_edges(&empty, &uniform_labeling(empty.nodes())).unwrap();
    assert_eq!(expanded.node_count(), 0);
    assert!(labels.is_empty());

    let mut edgeless = SimpleGraph::new();
    edgeless.add_node(raw(0)).unwrap();
    edgeless.add_node(raw(1)).unwrap();
    let labeling = uniform_labeling(edgeless.nodes());
    let (expanded, labels) = expand_edges(&edgeless, &labeling).unwrap();
    assert_eq!(expanded.node_count(), 2);
    assert_eq!(expanded.edge_count(), 0);
    assert_eq!(labels.len(), 2);
}

#[test]
fn triangle_variant_classifies_edges() {
    let triangle = complete(3).unwrap();
    let labeling = uniform_labeling(triangle.nodes());
    let (expanded, _, profile) = expand_triangle_edges(&triangle, &labeling).unwrap();
    assert_eq!(profile, TriangleProfile::AllTriangle);
    assert_eq!(expanded.node_count(), 6);
    assert_eq!(expanded.edge_count(), 6);

    let line = path(4).unwrap();
    let labeling = uniform_labeling(line.nodes());
    let (expanded, _, profile) = expand_triangle_edges(&line, &labeling).unwrap();
    assert_eq!(profile, TriangleProfile::AllPlain);
    // Nothing subdivided: the graph comes back unchanged.
    assert_eq!(expanded.node_count(), 4);
    assert_eq!(expanded.edge_count(), 3);

    // Triangle with a pendant edge mixes both kinds.
    let mut mixed = complete(3).unwrap();
    mixed.add_node(raw(3)).unwrap();
    mixed.add_edge(raw(2), raw(3)).unwrap();
    let labeling = uniform_labeling(mixed.nodes());
    let (_, _, profile) = expand_triangle_edges(&mixed, &labeling).unwrap();
    assert_eq!(profile, TriangleProfile::Mixed);
}

#[test]
fn labeling_mismatch_fails_fast() {
    let graph = path(2).unwrap();
    let labeling = uniform_labeling(path(3).unwrap().nodes());
    let err = expand_edges(&graph, &labeling).unwrap_err();
    assert_eq!(err.info().code, "label-unknown-node");
}
