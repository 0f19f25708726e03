use crate::{graph::Graph, types::NodeId};

use super::search_result::SearchResult;

/// Contract shared by every exploration strategy.
///
/// Implementations stop as soon as the goal is solved and record every examined edge in
/// exploration order.
pub trait SearchStrategy {
    fn search<G: Graph>(&self, graph: &G, start: &NodeId, goal: &NodeId) -> SearchResult;
}

/// Resolves queries that need no exploration: unknown endpoints or `start == goal`.
pub(crate) fn degenerate_query<G: Graph>(
    graph: &G,
    start: &NodeId,
    goal: &NodeId,
) -> Option<SearchResult> {
    let Some(start_point) = graph.node_geometry(start) else {
        return Some(SearchResult::not_found(Vec::new()));
    };

    if !graph.contains_node(goal) {
        return Some(SearchResult::not_found(Vec::new()));
    }

    if start == goal {
        return Some(SearchResult::single_point(*start_point));
    }

    None
}
