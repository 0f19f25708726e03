use fxhash::{FxHashMap, FxHashSet};

use crate::{graph::Graph, meters::Meters, priority_queue::PriorityQueue, types::NodeId};

use super::{
    astar_heuristic::{AStarHeuristic, HaversineHeuristic},
    routing_path_builder::Predecessors,
    search_result::{SearchResult, VisitEvent},
    search_strategy::{SearchStrategy, degenerate_query},
};

/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The frontier is keyed by `g + h`. Outdated frontier entries are skipped when dequeued instead
/// of being updated in place, and an edge is logged each time it shortens the distance to its
/// target.
pub struct AStar<H: AStarHeuristic> {
    heuristic: H,
}

impl AStar<HaversineHeuristic> {
    pub fn new() -> Self {
        AStar::with_heuristic(HaversineHeuristic)
    }
}

impl Default for AStar<HaversineHeuristic> {
    fn default() -> Self {
        AStar::new()
    }
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> AStar<H> {
        AStar { heuristic }
    }
}

impl<H: AStarHeuristic> SearchStrategy for AStar<H> {
    fn search<G: Graph>(&self, graph: &G, start: &NodeId, goal: &NodeId) -> SearchResult {
        if let Some(result) = degenerate_query(graph, start, goal) {
            return result;
        }

        let mut g_scores: FxHashMap<NodeId, Meters> = FxHashMap::default();
        let mut settled: FxHashSet<NodeId> = FxHashSet::default();
        let mut predecessors = Predecessors::default();
        let mut heap: PriorityQueue<(NodeId, Meters)> = PriorityQueue::with_capacity(1024);
        let mut visitation_log = Vec::new();

        g_scores.insert(start.clone(), Meters::ZERO);
        let h_score = self.heuristic.estimate(graph, start, goal);
        heap.enqueue((start.clone(), Meters::ZERO), h_score.value());

        while let Some(((node, g_score), _)) = heap.dequeue() {
            if settled.contains(&node) {
                continue;
            }

            // Stale entry, the node was reached by a shorter route after this was queued
            if g_scores.get(&node).is_some_and(|best| g_score > *best) {
                continue;
            }

            if node == *goal {
                break;
            }

            for edge in graph.node_edges(&node) {
                let next = edge.to();
                if settled.contains(next) {
                    continue;
                }

                let tentative = g_score + edge.distance();
                let improves = g_scores.get(next).is_none_or(|best| tentative < *best);
                if !improves {
                    continue;
                }

                g_scores.insert(next.clone(), tentative);
                predecessors.set(next.clone(), node.clone(), edge.distance());

                let f_score = tentative + self.heuristic.estimate(graph, next, goal);
                heap.enqueue((next.clone(), tentative), f_score.value());

                visitation_log.push(VisitEvent::along(&node, edge));
            }

            settled.insert(node);
        }

        predecessors.into_result(graph, start, goal, visitation_log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geopoint::GeoPoint,
        test_graph_utils::test_graph::{
            SquareNode, create_grid_graph, create_square_graph, create_two_component_graph, node,
        },
    };

    #[test]
    fn test_square_route() {
        let graph = create_square_graph();
        let result = AStar::new().search(&graph, &SquareNode::N1.into(), &SquareNode::N3.into());

        let path = result.path().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], GeoPoint::new(0.0, 0.0));
        assert_eq!(path[2], GeoPoint::new(0.001, 0.001));
        assert!((result.path_distance().value() - 222.0).abs() < 3.0);
    }

    #[test]
    fn test_grid_route_is_manhattan() {
        let graph = create_grid_graph(5, 5);
        let result = AStar::new().search(&graph, &node(0), &node(24));

        // Eight hops of 0.001 degrees, nine points.
        assert_eq!(result.path().unwrap().len(), 9);
        assert!((result.path_distance().value() - 8.0 * 111.19).abs() < 5.0);
    }

    #[test]
    fn test_explores_less_than_everything_on_a_grid() {
        let graph = create_grid_graph(10, 10);
        let result = AStar::new().search(&graph, &node(0), &node(9));

        assert!(result.has_path());
        assert!(result.visited_edge_count() < graph.edge_count());
    }

    #[test]
    fn test_disconnected() {
        let graph = create_two_component_graph();
        let result = AStar::new().search(&graph, &node(1), &node(10));

        assert!(!result.has_path());
        assert!(result.path_distance().is_zero());
        assert!(!result.visitation_log().is_empty());
    }

    #[test]
    fn test_log_entries_are_edges() {
        let graph = create_grid_graph(4, 4);
        let result = AStar::new().search(&graph, &node(0), &node(15));

        for event in result.visitation_log() {
            assert!(
                graph
                    .node_edges(&event.from)
                    .iter()
                    .any(|edge| *edge.to() == event.to)
            );
        }
    }
}
