use std::collections::VecDeque;

use fxhash::FxHashSet;

use crate::{graph::Graph, types::NodeId};

use super::{
    routing_path_builder::Predecessors,
    search_result::{SearchResult, VisitEvent},
    search_strategy::{SearchStrategy, degenerate_query},
};

/// Hop-count search over a FIFO queue. Stops as soon as the goal is discovered.
#[derive(Default)]
pub struct BreadthFirst;

impl SearchStrategy for BreadthFirst {
    fn search<G: Graph>(&self, graph: &G, start: &NodeId, goal: &NodeId) -> SearchResult {
        if let Some(result) = degenerate_query(graph, start, goal) {
            return result;
        }

        let mut queue = VecDeque::from([start.clone()]);
        let mut discovered: FxHashSet<NodeId> = FxHashSet::default();
        let mut predecessors = Predecessors::default();
        let mut visitation_log = Vec::new();

        discovered.insert(start.clone());

        'search: while let Some(node) = queue.pop_front() {
            for edge in graph.node_edges(&node) {
                let next = edge.to();
                if !discovered.insert(next.clone()) {
                    continue;
                }

                predecessors.set(next.clone(), node.clone(), edge.distance());
                visitation_log.push(VisitEvent::along(&node, edge));

                if next == goal {
                    break 'search;
                }

                queue.push_back(next.clone());
            }
        }

        predecessors.into_result(graph, start, goal, visitation_log)
    }
}
