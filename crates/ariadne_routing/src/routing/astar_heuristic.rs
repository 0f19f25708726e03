use crate::{graph::Graph, meters::Meters, types::NodeId};

pub trait AStarHeuristic {
    fn estimate<G: Graph>(&self, graph: &G, node: &NodeId, goal: &NodeId) -> Meters;
}

/// Straight-line distance to the goal. Never overestimates, since every edge is itself a
/// great-circle segment.
pub struct HaversineHeuristic;

impl AStarHeuristic for HaversineHeuristic {
    fn estimate<G: Graph>(&self, graph: &G, node: &NodeId, goal: &NodeId) -> Meters {
        match (graph.node_geometry(node), graph.node_geometry(goal)) {
            (Some(from), Some(to)) => from.haversine_distance(to),
            _ => Meters::ZERO,
        }
    }
}
