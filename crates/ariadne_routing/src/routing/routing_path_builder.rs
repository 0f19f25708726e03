use fxhash::FxHashMap;

use crate::{geopoint::GeoPoint, graph::Graph, meters::Meters, types::NodeId};

use super::search_result::{SearchResult, VisitEvent};

/// Parent links recorded while searching: node -> (parent, length of the parent edge).
#[derive(Default)]
pub(crate) struct Predecessors {
    links: FxHashMap<NodeId, (NodeId, Meters)>,
}

impl Predecessors {
    pub(crate) fn set(&mut self, node: NodeId, parent: NodeId, distance: Meters) {
        self.links.insert(node, (parent, distance));
    }

    /// Walks the links back from `goal`. `None` when the chain never reaches `start`.
    pub(crate) fn build_path<G: Graph>(
        &self,
        graph: &G,
        start: &NodeId,
        goal: &NodeId,
    ) -> Option<(Vec<GeoPoint>, Meters)> {
        let mut path = Vec::with_capacity(32);
        let mut distance = Meters::ZERO;
        let mut node = goal;

        while node != start {
            // A chain longer than the number of links can only be a cycle.
            if path.len() > self.links.len() {
                return None;
            }

            let (parent, edge_distance) = self.links.get(node)?;
            path.push(*graph.node_geometry(node)?);
            distance += *edge_distance;
            node = parent;
        }

        path.push(*graph.node_geometry(start)?);
        path.reverse();

        Some((path, distance))
    }

    pub(crate) fn into_result<G: Graph>(
        self,
        graph: &G,
        start: &NodeId,
        goal: &NodeId,
        visitation_log: Vec<VisitEvent>,
    ) -> SearchResult {
        match self.build_path(graph, start, goal) {
            Some((path, distance)) => SearchResult::found(visitation_log, path, distance),
            None => SearchResult::not_found(visitation_log),
        }
    }
}
