use std::sync::Arc;

use serde::Serialize;

use crate::{geopoint::GeoPoint, meters::Meters, types::NodeId};

/// A directed road segment. Edges are never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    to: NodeId,
    distance: Meters,
    street_name: Arc<str>,
    geometry: (GeoPoint, GeoPoint),
}

impl GraphEdge {
    pub fn new(
        to: NodeId,
        distance: Meters,
        street_name: Arc<str>,
        geometry: (GeoPoint, GeoPoint),
    ) -> Self {
        GraphEdge {
            to,
            distance,
            street_name,
            geometry,
        }
    }

    /// Builds the edge `from -> to`, weighted by the great-circle distance of its endpoints.
    pub fn between(from: &GeoPoint, to: NodeId, to_point: &GeoPoint, street_name: Arc<str>) -> Self {
        GraphEdge::new(
            to,
            from.haversine_distance(to_point),
            street_name,
            (*from, *to_point),
        )
    }

    pub fn to(&self) -> &NodeId {
        &self.to
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    pub fn geometry(&self) -> &(GeoPoint, GeoPoint) {
        &self.geometry
    }
}
