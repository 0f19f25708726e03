use jiff::SignedDuration;
use serde::Serialize;

use super::search_result::SearchResult;

/// On-screen statistics derived from a timed search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchMetrics {
    pub duration: SignedDuration,
    pub visited_edges: usize,
    pub distance_km: f64,
}

impl SearchMetrics {
    pub fn from_result(duration: SignedDuration, result: &SearchResult) -> Self {
        SearchMetrics {
            duration,
            visited_edges: result.visited_edge_count(),
            distance_km: result.path_distance().kilometers(),
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}
