use canon_core::rng::RngHandle;
use canon_core::uniform_labeling;
use canon_graph::{expand_edges, gen_gnp, graph_from_bytes, graph_to_bytes, SimpleGraph};
use proptest::prelude::*;

fn check_symmetry(graph: &SimpleGraph) {
    for node in graph.nodes() {
        for &neighbor in graph.neighbors(node).unwrap() {
            assert!(graph.neighbors(neighbor).unwrap().contains(&node));
            assert_ne!(neighbor, node);
        }
    }
    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges.len(), graph.edge_count());
}

proptest! {
    #[test]
    fn random_graphs_respect_invariants(seed in any::<u64>(), nodes in 0usize..12) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_gnp(nodes, 0.4, &mut rng).unwrap();
        check_symmetry(&graph);

        let bytes = graph_to_bytes(&graph).unwrap();
        let restored = graph_from_bytes(&bytes).unwrap();
        prop_assert_eq!(&graph, &restored);

        let labeling = uniform_labeling(graph.nodes());
        let (expanded, labels) = expand_edges(&graph, &labeling).unwrap();
        check_symmetry(&expanded);
        prop_assert_eq!(expanded.node_count(), graph.node_count() + graph.edge_count());
        prop_assert_eq!(expanded.edge_count(), 2 * graph.edge_count());
        prop_assert_eq!(labels.len(), expanded.node_count());
        // Every fresh node has degree two; originals keep their degree.
        for node in graph.nodes() {
            prop_assert_eq!(
                expanded.neighbors(node).unwrap().len(),
                graph.neighbors(node).unwrap().len()
            );
        }
    }
}
