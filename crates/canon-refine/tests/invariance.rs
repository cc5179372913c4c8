use std::collections::BTreeMap;

use canon_core::rng::RngHandle;
use canon_core::{Labeling, NodeId};
use canon_graph::{gen_gnp, relabel_labeling, relabel_nodes, SimpleGraph};
use canon_refine::{canonicalize, forms_equal, CanonicalizeOpts};
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

fn random_permutation(n: usize, rng: &mut RngHandle) -> BTreeMap<NodeId, NodeId> {
    let mut images: Vec<u64> = (0..n as u64).collect();
    images.shuffle(rng);
    (0..n as u64)
        .map(|from| (NodeId::from_raw(from), NodeId::from_raw(images[from as usize])))
        .collect()
}

fn random_labeling(graph: &SimpleGraph, classes: u64, rng: &mut RngHandle) -> Labeling {
    graph
        .nodes()
        .map(|node| (node, rng.gen_range(0..classes.max(1))))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn canonical_form_is_isomorphism_invariant(seed in any::<u64>(), nodes in 0usize..9) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_gnp(nodes, 0.4, &mut rng).unwrap();
        let labeling = random_labeling(&graph, 3, &mut rng);
        let mapping = random_permutation(nodes, &mut rng);
        let permuted = relabel_nodes(&graph, &mapping).unwrap();
        let permuted_labels = relabel_labeling(&labeling, &mapping).unwrap();

        let opts = CanonicalizeOpts::default();
        let a = canonicalize(&graph, Some(&labeling), &opts).unwrap();
        let b = canonicalize(&permuted, Some(&permuted_labels), &opts).unwrap();
        prop_assert!(forms_equal(&a.form, &b.form));
    }

    #[test]
    fn invariance_holds_without_expansion(seed in any::<u64>(), nodes in 0usize..9) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_gnp(nodes, 0.4, &mut rng).unwrap();
        let mapping = random_permutation(nodes, &mut rng);
        let permuted = relabel_nodes(&graph, &mapping).unwrap();

        let opts = CanonicalizeOpts { expand: false };
        let a = canonicalize(&graph, None, &opts).unwrap();
        let b = canonicalize(&permuted, None, &opts).unwrap();
        prop_assert!(forms_equal(&a.form, &b.form));
    }

    #[test]
    fn label_multiset_is_preserved(seed in any::<u64>(), nodes in 0usize..10) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_gnp(nodes, 0.3, &mut rng).unwrap();
        let labeling = random_labeling(&graph, 4, &mut rng);

        let result = canonicalize(&graph, Some(&labeling), &CanonicalizeOpts::default()).unwrap();
        let mut expected: Vec<u64> = labeling.values().copied().collect();
        expected.sort_unstable();
        let mut produced = result.form.ordered_labels.clone();
        produced.sort_unstable();
        prop_assert_eq!(expected, produced);

        // The order itself is a permutation of the node set.
        let mut order = result.form.node_order.clone();
        order.sort_unstable();
        let nodes_sorted: Vec<NodeId> = graph.nodes().collect();
        prop_assert_eq!(order, nodes_sorted);
    }

    #[test]
    fn matrix_reflects_original_adjacency(seed in any::<u64>(), nodes in 0usize..10) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_gnp(nodes, 0.5, &mut rng).unwrap();
        let form = canonicalize(&graph, None, &CanonicalizeOpts::default()).unwrap().form;

        for i in 0..form.node_count() {
            prop_assert_eq!(form.matrix[i].len(), form.node_count() - i - 1);
            for j in (i + 1)..form.node_count() {
                let expected = u8::from(graph.has_edge(form.node_order[i], form.node_order[j]));
                prop_assert_eq!(form.matrix[i][j - i - 1], expected);
            }
        }
    }
}
