use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::ParseAlgorithmError, graph::Graph, stopwatch::Stopwatch, types::NodeId};

use super::{
    astar::AStar, breadth_first::BreadthFirst, depth_first::DepthFirst, dijkstra::Dijkstra,
    greedy_best_first::GreedyBestFirst, search_metrics::SearchMetrics,
    search_result::SearchResult, search_strategy::SearchStrategy,
};

/// The strategies a user can pick from, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    #[default]
    #[serde(rename = "astar")]
    AStar,
    #[serde(rename = "dijkstra")]
    Dijkstra,
    #[serde(rename = "bfs")]
    BreadthFirst,
    #[serde(rename = "greedy")]
    GreedyBestFirst,
    #[serde(rename = "dfs")]
    DepthFirst,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 5] = [
        SearchAlgorithm::AStar,
        SearchAlgorithm::Dijkstra,
        SearchAlgorithm::BreadthFirst,
        SearchAlgorithm::GreedyBestFirst,
        SearchAlgorithm::DepthFirst,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SearchAlgorithm::AStar => "astar",
            SearchAlgorithm::Dijkstra => "dijkstra",
            SearchAlgorithm::BreadthFirst => "bfs",
            SearchAlgorithm::GreedyBestFirst => "greedy",
            SearchAlgorithm::DepthFirst => "dfs",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::AStar => "A* Search",
            SearchAlgorithm::Dijkstra => "Dijkstra",
            SearchAlgorithm::BreadthFirst => "Breadth-First",
            SearchAlgorithm::GreedyBestFirst => "Greedy Best-First",
            SearchAlgorithm::DepthFirst => "Depth-First",
        }
    }

    /// Whether the reported distance is guaranteed to be the shortest one.
    pub fn is_optimal(&self) -> bool {
        matches!(self, SearchAlgorithm::AStar | SearchAlgorithm::Dijkstra)
    }

    pub fn search<G: Graph>(&self, graph: &G, start: &NodeId, goal: &NodeId) -> SearchResult {
        match self {
            SearchAlgorithm::AStar => AStar::new().search(graph, start, goal),
            SearchAlgorithm::Dijkstra => Dijkstra::new().search(graph, start, goal),
            SearchAlgorithm::BreadthFirst => BreadthFirst.search(graph, start, goal),
            SearchAlgorithm::GreedyBestFirst => GreedyBestFirst.search(graph, start, goal),
            SearchAlgorithm::DepthFirst => DepthFirst.search(graph, start, goal),
        }
    }

    #[instrument(skip(self, graph), fields(algorithm = self.id()))]
    pub fn measure<G: Graph>(
        &self,
        graph: &G,
        start: &NodeId,
        goal: &NodeId,
    ) -> (SearchResult, SearchMetrics) {
        let stopwatch = Stopwatch::new(self.id());
        let result = self.search(graph, start, goal);
        let metrics = SearchMetrics::from_result(stopwatch.elapsed(), &result);

        debug!(
            visited_edges = metrics.visited_edges,
            distance_km = metrics.distance_km,
            found = result.has_path(),
            "{stopwatch}"
        );

        (result, metrics)
    }
}

impl Display for SearchAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}
