use super::{astar::AStar, astar_heuristic::AStarHeuristic};
use crate::{graph::Graph, meters::Meters, types::NodeId};

pub struct DijkstraHeuristic;

impl AStarHeuristic for DijkstraHeuristic {
    #[inline(always)]
    fn estimate<G: Graph>(&self, _graph: &G, _node: &NodeId, _goal: &NodeId) -> Meters {
        Meters::ZERO
    }
}

pub struct Dijkstra;

/// Dijkstra is simply a variant of AStar with a zero heuristic
impl Dijkstra {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> AStar<DijkstraHeuristic> {
        AStar::with_heuristic(DijkstraHeuristic)
    }
}
