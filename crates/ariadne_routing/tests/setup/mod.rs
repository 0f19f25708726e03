#![allow(dead_code)]

use ariadne_routing::{
    geopoint::GeoPoint,
    graph::Graph,
    osm::raw_fragment::RawMapFragment,
    road_graph::RoadGraph,
    routing::search_result::SearchResult,
    types::NodeId,
};
use fxhash::FxHashSet;

/// A ring road with a one-way short cut through its middle, a way pointing at a point the
/// fragment lacks, and a separate island far to the north.
pub const TOWN_FRAGMENT: &str = r#"{
    "version": 0.6,
    "generator": "Overpass API",
    "elements": [
        { "type": "node", "id": 1, "lat": 51.5000, "lon": -0.0900 },
        { "type": "node", "id": 2, "lat": 51.5000, "lon": -0.0880 },
        { "type": "node", "id": 3, "lat": 51.5010, "lon": -0.0870 },
        { "type": "node", "id": 4, "lat": 51.5020, "lon": -0.0880 },
        { "type": "node", "id": 5, "lat": 51.5020, "lon": -0.0900 },
        { "type": "node", "id": 6, "lat": 51.5010, "lon": -0.0910 },
        { "type": "node", "id": 7, "lat": 51.5010, "lon": -0.0890 },
        { "type": "node", "id": 20, "lat": 51.6000, "lon": -0.2000 },
        { "type": "node", "id": 21, "lat": 51.6000, "lon": -0.1990 },
        { "type": "node", "id": 22, "lat": 51.6010, "lon": -0.1990 },
        { "type": "way", "id": 100, "nodes": [1, 2, 3, 4, 5, 6, 1], "tags": { "highway": "primary", "name": "Ring Road" } },
        { "type": "way", "id": 101, "nodes": [1, 7, 4], "tags": { "highway": "residential", "name": "High Street", "oneway": "yes" } },
        { "type": "way", "id": 102, "nodes": [7, 99], "tags": { "highway": "service" } },
        { "type": "way", "id": 103, "nodes": [20, 21, 22], "tags": { "highway": "track", "name": "Island Lane", "oneway": "-1" } },
        { "type": "relation", "id": 500, "members": [] }
    ]
}"#;

pub fn node(id: i64) -> NodeId {
    NodeId::from(id)
}

pub fn town_fragment() -> RawMapFragment {
    RawMapFragment::from_json_str(TOWN_FRAGMENT).unwrap()
}

pub fn town_graph() -> RoadGraph {
    RoadGraph::from_fragment(&town_fragment())
}

/// `rows` x `cols` lattice starting at `origin`, 0.001° apart, ids row-major from 0.
pub fn grid_fragment(origin: GeoPoint, rows: i64, cols: i64) -> RawMapFragment {
    let mut fragment = RawMapFragment::default();
    for row in 0..rows {
        for col in 0..cols {
            fragment = fragment.with_node(
                row * cols + col,
                origin.lat + row as f64 * 0.001,
                origin.lng + col as f64 * 0.001,
            );
        }
    }

    let mut way_id = 0;
    for row in 0..rows {
        let nodes: Vec<i64> = (0..cols).map(|col| row * cols + col).collect();
        fragment = fragment.with_way(way_id, &nodes, Some("Row"), false);
        way_id += 1;
    }
    for col in 0..cols {
        let nodes: Vec<i64> = (0..rows).map(|row| row * cols + col).collect();
        fragment = fragment.with_way(way_id, &nodes, Some("Column"), false);
        way_id += 1;
    }

    fragment
}

pub fn grid_graph(rows: i64, cols: i64) -> RoadGraph {
    RoadGraph::from_fragment(&grid_fragment(GeoPoint::new(48.85, 2.35), rows, cols))
}

/// Every node reachable from `start` along directed edges, `start` included.
pub fn reachable_from(graph: &RoadGraph, start: &NodeId) -> FxHashSet<NodeId> {
    let mut reached = FxHashSet::default();
    let mut stack = vec![start.clone()];

    while let Some(current) = stack.pop() {
        if reached.insert(current.clone()) {
            stack.extend(graph.node_edges(&current).iter().map(|edge| edge.to().clone()));
        }
    }

    reached
}

pub fn has_edge_between(graph: &RoadGraph, from: &GeoPoint, to: &GeoPoint) -> bool {
    graph.edges().any(|(source, edge)| {
        graph.node_geometry(source) == Some(from) && graph.node_geometry(edge.to()) == Some(to)
    })
}

/// A found path starts at `start`, ends at `goal`, follows directed edges and reports the sum of
/// its edge lengths.
pub fn assert_valid_path(graph: &RoadGraph, result: &SearchResult, start: &NodeId, goal: &NodeId) {
    let path = result.path().expect("expected a path");

    assert_eq!(path.first(), graph.node_geometry(start));
    assert_eq!(path.last(), graph.node_geometry(goal));

    let mut distance = 0.0;
    for pair in path.windows(2) {
        assert!(
            has_edge_between(graph, &pair[0], &pair[1]),
            "no edge between {:?} and {:?}",
            pair[0],
            pair[1]
        );
        distance += pair[0].haversine_distance(&pair[1]).value();
    }

    assert!((result.path_distance().value() - distance).abs() < 1e-6);
}
