use fxhash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::{
    constants::SNAP_RADIUS_METERS,
    geopoint::GeoPoint,
    graph::Graph,
    graph_edge::GraphEdge,
    meters::Meters,
    osm::{fragment_reader::FragmentReader, raw_fragment::RawMapFragment},
    types::NodeId,
};

/// Directed street network assembled from map fragments.
///
/// The graph only ever grows: merging adds nodes and edges but never rewrites an edge. Every
/// edge target and every adjacency key has a coordinate in `node_coords`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadGraph {
    node_coords: FxHashMap<NodeId, GeoPoint>,
    adjacency: FxHashMap<NodeId, Vec<GraphEdge>>,
}

impl RoadGraph {
    pub fn new() -> Self {
        RoadGraph::default()
    }

    pub fn from_fragment(fragment: &RawMapFragment) -> Self {
        let (graph, _report) = FragmentReader::default().read(fragment);
        graph
    }

    pub fn is_empty(&self) -> bool {
        self.node_coords.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &GeoPoint)> {
        self.node_coords.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &GraphEdge)> {
        self.adjacency
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |edge| (from, edge)))
    }

    /// Number of edges whose source or target has no coordinate.
    pub fn dangling_edges(&self) -> usize {
        self.edges()
            .filter(|(from, edge)| {
                !self.node_coords.contains_key(*from) || !self.node_coords.contains_key(edge.to())
            })
            .count()
    }

    /// Returns the previous coordinate when `node` was already known.
    pub(crate) fn insert_node(&mut self, node: NodeId, point: GeoPoint) -> Option<GeoPoint> {
        self.node_coords.insert(node, point)
    }

    /// Callers guarantee both endpoints are already known.
    pub(crate) fn push_edge(&mut self, from: NodeId, edge: GraphEdge) {
        debug_assert!(self.node_coords.contains_key(&from));
        debug_assert!(self.node_coords.contains_key(edge.to()));
        self.adjacency.entry(from).or_default().push(edge);
    }

    /// Folds `fragment` into this graph.
    ///
    /// Coordinates are unioned, the fragment winning on collisions. A node new to the graph adopts
    /// the fragment's edge list as is; for a known node a fragment edge is appended only when no
    /// edge from that node already targets the same destination.
    pub fn merge(&mut self, fragment: RoadGraph) {
        let RoadGraph {
            node_coords,
            adjacency,
        } = fragment;

        self.node_coords.extend(node_coords);

        for (from, edges) in adjacency {
            match self.adjacency.get_mut(&from) {
                None => {
                    self.adjacency.insert(from, edges);
                }
                Some(existing) => {
                    let mut targets: FxHashSet<NodeId> =
                        existing.iter().map(|edge| edge.to().clone()).collect();

                    for edge in edges {
                        if targets.insert(edge.to().clone()) {
                            existing.push(edge);
                        }
                    }
                }
            }
        }
    }

    /// Non-mutating form of [`RoadGraph::merge`].
    pub fn merged(&self, fragment: &RoadGraph) -> RoadGraph {
        let mut graph = self.clone();
        graph.merge(fragment.clone());
        graph
    }

    /// Closest known node to `point`, or `None` when it lies further than the snap radius.
    pub fn find_nearest(&self, point: &GeoPoint) -> Option<NodeId> {
        self.nearest_within(point, Meters::new(SNAP_RADIUS_METERS))
            .map(|(node, _)| node)
    }

    /// Linear scan over every coordinate. Equal distances resolve to the smallest id.
    pub fn nearest_within(&self, point: &GeoPoint, radius: Meters) -> Option<(NodeId, Meters)> {
        let nearest = self
            .node_coords
            .iter()
            .map(|(node, coordinates)| (node, coordinates.haversine_distance(point)))
            .min_by(|(node_a, a), (node_b, b)| a.cmp(b).then_with(|| node_a.cmp(node_b)));

        match nearest {
            Some((node, distance)) if distance <= radius => Some((node.clone(), distance)),
            Some((node, distance)) => {
                debug!(%node, %distance, "nearest node is outside of the snap radius");
                None
            }
            None => None,
        }
    }
}

impl Graph for RoadGraph {
    fn node_count(&self) -> usize {
        self.node_coords.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    fn node_geometry(&self, node: &NodeId) -> Option<&GeoPoint> {
        self.node_coords.get(node)
    }

    fn node_edges(&self, node: &NodeId) -> &[GraphEdge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}
