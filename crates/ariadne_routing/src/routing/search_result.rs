use serde::Serialize;

use crate::{geopoint::GeoPoint, graph_edge::GraphEdge, meters::Meters, types::NodeId};

/// One edge examined by a strategy, in the order the strategy examined it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitEvent {
    pub from: NodeId,
    pub to: NodeId,
    pub geometry: (GeoPoint, GeoPoint),
}

impl VisitEvent {
    pub(crate) fn along(from: &NodeId, edge: &GraphEdge) -> Self {
        VisitEvent {
            from: from.clone(),
            to: edge.to().clone(),
            geometry: *edge.geometry(),
        }
    }
}

/// Outcome of a single search. A missing path is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    visitation_log: Vec<VisitEvent>,
    path: Option<Vec<GeoPoint>>,
    path_distance: Meters,
}

impl SearchResult {
    pub(crate) fn found(visitation_log: Vec<VisitEvent>, path: Vec<GeoPoint>, distance: Meters) -> Self {
        SearchResult {
            visitation_log,
            path: Some(path),
            path_distance: distance,
        }
    }

    pub(crate) fn not_found(visitation_log: Vec<VisitEvent>) -> Self {
        SearchResult {
            visitation_log,
            path: None,
            path_distance: Meters::ZERO,
        }
    }

    pub(crate) fn single_point(point: GeoPoint) -> Self {
        SearchResult::found(Vec::new(), vec![point], Meters::ZERO)
    }

    pub fn visitation_log(&self) -> &[VisitEvent] {
        &self.visitation_log
    }

    pub fn path(&self) -> Option<&[GeoPoint]> {
        self.path.as_deref()
    }

    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    /// Zero when no path was found.
    pub fn path_distance(&self) -> Meters {
        self.path_distance
    }

    pub fn visited_edge_count(&self) -> usize {
        self.visitation_log.len()
    }
}
