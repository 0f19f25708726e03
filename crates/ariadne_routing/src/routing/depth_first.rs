use fxhash::FxHashSet;

use crate::{graph::Graph, types::NodeId};

use super::{
    routing_path_builder::Predecessors,
    search_result::{SearchResult, VisitEvent},
    search_strategy::{SearchStrategy, degenerate_query},
};

/// Stack-driven search.
///
/// A neighbor is logged when pushed, so a node can show up in the log several times before it is
/// popped. Its predecessor is overwritten on every push; the latest push is also the first popped,
/// which keeps the predecessor chain consistent with the pop order.
#[derive(Default)]
pub struct DepthFirst;

impl SearchStrategy for DepthFirst {
    fn search<G: Graph>(&self, graph: &G, start: &NodeId, goal: &NodeId) -> SearchResult {
        if let Some(result) = degenerate_query(graph, start, goal) {
            return result;
        }

        let mut stack = vec![start.clone()];
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut predecessors = Predecessors::default();
        let mut visitation_log = Vec::new();

        'search: while let Some(node) = stack.pop() {
            if !visited.insert(node.clone()) {
                continue;
            }

            for edge in graph.node_edges(&node) {
                let next = edge.to();
                if visited.contains(next) {
                    continue;
                }

                predecessors.set(next.clone(), node.clone(), edge.distance());
                visitation_log.push(VisitEvent::along(&node, edge));

                if next == goal {
                    break 'search;
                }

                stack.push(next.clone());
            }
        }

        predecessors.into_result(graph, start, goal, visitation_log)
    }
}
