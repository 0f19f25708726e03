use fxhash::FxHashSet;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    geopoint::GeoPoint,
    graph::Graph,
    routing::{
        search_algorithm::SearchAlgorithm, search_metrics::SearchMetrics,
        search_result::SearchResult,
    },
    types::NodeId,
};

/// A straight piece of a drawn path, in travel order.
pub type Segment = (GeoPoint, GeoPoint);

/// Direction-independent identity of a segment.
///
/// Coordinates are compared bit for bit, after folding `-0.0` into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentKey([u64; 4]);

impl SegmentKey {
    pub fn new(a: &GeoPoint, b: &GeoPoint) -> Self {
        let a = point_bits(a);
        let b = point_bits(b);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        SegmentKey([low[0], low[1], high[0], high[1]])
    }
}

fn point_bits(point: &GeoPoint) -> [u64; 2] {
    [(point.lat + 0.0).to_bits(), (point.lng + 0.0).to_bits()]
}

/// Segments of `first` that `second` also traverses, in either direction.
///
/// The result follows `first`'s order. Paths with fewer than two points have no segments.
pub fn shared_segments(first: &[GeoPoint], second: &[GeoPoint]) -> Vec<Segment> {
    let second_keys: FxHashSet<SegmentKey> = second
        .windows(2)
        .map(|pair| SegmentKey::new(&pair[0], &pair[1]))
        .collect();

    first
        .windows(2)
        .filter(|pair| second_keys.contains(&SegmentKey::new(&pair[0], &pair[1])))
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct RaceEntry {
    pub algorithm: SearchAlgorithm,
    pub result: SearchResult,
    pub metrics: SearchMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct RaceOutcome {
    pub first: RaceEntry,
    pub second: RaceEntry,
    pub shared: Vec<Segment>,
}

impl RaceOutcome {
    /// Strategy that touched fewer edges, `None` on a draw.
    pub fn fewer_visits(&self) -> Option<SearchAlgorithm> {
        let first = self.first.metrics.visited_edges;
        let second = self.second.metrics.visited_edges;

        match first.cmp(&second) {
            std::cmp::Ordering::Less => Some(self.first.algorithm),
            std::cmp::Ordering::Greater => Some(self.second.algorithm),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Runs two strategies side by side on the same graph.
#[instrument(skip_all, fields(first = first.id(), second = second.id()))]
pub fn race<G: Graph + Sync>(
    graph: &G,
    first: SearchAlgorithm,
    second: SearchAlgorithm,
    start: &NodeId,
    goal: &NodeId,
) -> RaceOutcome {
    let run = |algorithm: SearchAlgorithm| {
        let (result, metrics) = algorithm.measure(graph, start, goal);
        RaceEntry {
            algorithm,
            result,
            metrics,
        }
    };

    let (first, second) = rayon::join(|| run(first), || run(second));

    let shared = match (first.result.path(), second.result.path()) {
        (Some(a), Some(b)) => shared_segments(a, b),
        _ => Vec::new(),
    };

    debug!(shared = shared.len(), "race finished");

    RaceOutcome {
        first,
        second,
        shared,
    }
}
