use fxhash::FxHashSet;

use crate::{graph::Graph, priority_queue::PriorityQueue, types::NodeId};

use super::{
    astar_heuristic::{AStarHeuristic, HaversineHeuristic},
    routing_path_builder::Predecessors,
    search_result::{SearchResult, VisitEvent},
    search_strategy::{SearchStrategy, degenerate_query},
};

/// Expands whichever frontier node looks closest to the goal, ignoring the cost already paid.
/// Fast, but the route it finds is not necessarily the shortest.
#[derive(Default)]
pub struct GreedyBestFirst;

impl SearchStrategy for GreedyBestFirst {
    fn search<G: Graph>(&self, graph: &G, start: &NodeId, goal: &NodeId) -> SearchResult {
        if let Some(result) = degenerate_query(graph, start, goal) {
            return result;
        }

        let heuristic = HaversineHeuristic;
        let mut heap = PriorityQueue::with_capacity(256);
        let mut discovered: FxHashSet<NodeId> = FxHashSet::default();
        let mut predecessors = Predecessors::default();
        let mut visitation_log = Vec::new();

        heap.enqueue(start.clone(), 0.0);
        discovered.insert(start.clone());

        while let Some((node, _)) = heap.dequeue() {
            if node == *goal {
                break;
            }

            for edge in graph.node_edges(&node) {
                let next = edge.to();
                if !discovered.insert(next.clone()) {
                    continue;
                }

                predecessors.set(next.clone(), node.clone(), edge.distance());
                heap.enqueue(next.clone(), heuristic.estimate(graph, next, goal).value());
                visitation_log.push(VisitEvent::along(&node, edge));
            }
        }

        predecessors.into_result(graph, start, goal, visitation_log)
    }
}
