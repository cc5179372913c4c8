use canon_core::rng::RngHandle;
use canon_core::uniform_labeling;
use canon_graph::{expand_edges, gen_gnp};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

fn bench_build_and_expand(c: &mut Criterion) {
    c.bench_function("gen_gnp_64", |b| {
        b.iter_batched(
            || RngHandle::from_seed(7),
            |mut rng| gen_gnp(64, 0.1, &mut rng).unwrap(),
            BatchSize::SmallInput,
        )
    });

    let mut rng = RngHandle::from_seed(7);
    let graph = gen_gnp(64, 0.1, &mut rng).unwrap();
    let labeling = uniform_labeling(graph.nodes());
    c.bench_function("expand_edges_64", |b| {
        b.iter(|| expand_edges(&graph, &labeling).unwrap())
    });
}

criterion_group!(benches, bench_build_and_expand);
criterion_main!(benches);
