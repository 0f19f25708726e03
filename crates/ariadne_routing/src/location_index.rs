use rstar::{RStarInsertionStrategy, RTree, RTreeParams, primitives::GeomWithData};
use tracing::debug;

use crate::{
    constants::SNAP_RADIUS_METERS, geopoint::GeoPoint, meters::Meters, road_graph::RoadGraph,
    types::NodeId,
};

/// Candidates re-ranked by their true distance after the planar lookup.
const CANDIDATES: usize = 4;

type LocationIndexObject = GeomWithData<[f64; 2], (NodeId, GeoPoint)>;

struct LocationIndexTreeParams;

impl RTreeParams for LocationIndexTreeParams {
    type DefaultInsertionStrategy = RStarInsertionStrategy;

    const MAX_SIZE: usize = 64;
    const MIN_SIZE: usize = 28;
    const REINSERTION_COUNT: usize = 5;
}

/// Spatial index over the nodes of a graph snapshot.
///
/// Points are stored on a local equirectangular plane centred on the mean latitude, which keeps
/// lookups logarithmic. The few nearest planar candidates are re-ranked with the haversine
/// distance, so results agree with [`RoadGraph::nearest_within`] except at near-ties.
pub struct LocationIndex {
    tree: RTree<LocationIndexObject, LocationIndexTreeParams>,
    lng_scale: f64,
}

impl LocationIndex {
    pub fn build_from_graph(graph: &RoadGraph) -> LocationIndex {
        let (sum, count) = graph
            .nodes()
            .fold((0.0, 0usize), |(sum, count), (_, point)| (sum + point.lat, count + 1));
        let mean_lat = if count == 0 { 0.0 } else { sum / count as f64 };
        let lng_scale = mean_lat.to_radians().cos();

        let tree = RTree::bulk_load_with_params(
            graph
                .nodes()
                .map(|(node, point)| {
                    LocationIndexObject::new(project(point, lng_scale), (node.clone(), *point))
                })
                .collect(),
        );

        debug!(nodes = count, "built location index");

        LocationIndex { tree, lng_scale }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_nearest(&self, point: &GeoPoint) -> Option<NodeId> {
        self.nearest_within(point, Meters::new(SNAP_RADIUS_METERS))
            .map(|(node, _)| node)
    }

    pub fn nearest_within(&self, point: &GeoPoint, radius: Meters) -> Option<(NodeId, Meters)> {
        let query = project(point, self.lng_scale);

        self.tree
            .nearest_neighbor_iter(&query)
            .take(CANDIDATES)
            .map(|candidate| {
                let (node, coordinates) = &candidate.data;
                (node, coordinates.haversine_distance(point))
            })
            .min_by(|(node_a, a), (node_b, b)| a.cmp(b).then_with(|| node_a.cmp(node_b)))
            .filter(|(_, distance)| *distance <= radius)
            .map(|(node, distance)| (node.clone(), distance))
    }
}

fn project(point: &GeoPoint, lng_scale: f64) -> [f64; 2] {
    [point.lng * lng_scale, point.lat]
}
