use ariadne_routing::{
    comparison::shared_segments, geopoint::GeoPoint, osm::raw_fragment::RawMapFragment,
    road_graph::RoadGraph, routing::search_algorithm::SearchAlgorithm, types::NodeId,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn grid(size: i64) -> RawMapFragment {
    let mut fragment = RawMapFragment::default();
    for row in 0..size {
        for col in 0..size {
            fragment = fragment.with_node(row * size + col, row as f64 * 0.001, col as f64 * 0.001);
        }
    }

    for line in 0..size {
        let row: Vec<i64> = (0..size).map(|col| line * size + col).collect();
        let col: Vec<i64> = (0..size).map(|row| row * size + line).collect();
        fragment = fragment
            .with_way(line, &row, None, false)
            .with_way(size + line, &col, None, false);
    }

    fragment
}

fn search_benchmark(c: &mut Criterion) {
    let size = 60;
    let graph = RoadGraph::from_fragment(&grid(size));
    let start = NodeId::from(0_i64);
    let goal = NodeId::from(size * size - 1);

    let mut group = c.benchmark_group("search");
    for algorithm in SearchAlgorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(algorithm.id()), &algorithm, |b, algorithm| {
            b.iter(|| black_box(algorithm.search(&graph, &start, &goal)))
        });
    }
    group.finish();
}

fn merge_benchmark(c: &mut Criterion) {
    let fragment = RoadGraph::from_fragment(&grid(60));

    c.bench_function("merge 60x60 into itself", |b| {
        b.iter(|| black_box(fragment.merged(&fragment)))
    });

    c.bench_function("find nearest 60x60", |b| {
        b.iter(|| black_box(fragment.find_nearest(&GeoPoint::new(0.0301, 0.0299))))
    });
}

fn shared_segments_benchmark(c: &mut Criterion) {
    let first: Vec<GeoPoint> = (0..2_000).map(|i| GeoPoint::new(i as f64 * 1e-4, 0.0)).collect();
    let second: Vec<GeoPoint> = first.iter().rev().copied().collect();

    c.bench_function("shared segments 2000", |b| {
        b.iter(|| black_box(shared_segments(&first, &second)))
    });
}

criterion_group!(
    benches,
    search_benchmark,
    merge_benchmark,
    shared_segments_benchmark
);
criterion_main!(benches);
