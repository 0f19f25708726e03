use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{
    graph::Graph,
    graph_edge::GraphEdge,
    osm::raw_fragment::{OsmNode, OsmWay, RawMapFragment},
    road_graph::RoadGraph,
};

/// What happened while turning a fragment into a graph. Malformed input is skipped, not fatal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub nodes: usize,
    pub ways: usize,
    pub edges: usize,
    /// Ways with fewer than two nodes.
    pub dropped_ways: usize,
    /// Segments with an unknown endpoint, or looping back onto the same node.
    pub dropped_edges: usize,
    /// Elements that could not be decoded at all.
    pub malformed_elements: usize,
    /// Repeated point ids whose coordinates disagree with the first occurrence.
    pub conflicting_nodes: usize,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.malformed_elements == 0
            && self.dropped_ways == 0
            && self.dropped_edges == 0
            && self.conflicting_nodes == 0
    }
}

#[derive(Default)]
pub struct FragmentReader {
    graph: RoadGraph,
    report: ImportReport,
}

impl FragmentReader {
    #[instrument(skip_all, fields(elements = fragment.elements.len()))]
    pub fn read(mut self, fragment: &RawMapFragment) -> (RoadGraph, ImportReport) {
        self.report.malformed_elements = fragment.malformed();

        for node in fragment.nodes() {
            self.add_node(node);
        }

        for way in fragment.ways() {
            self.add_way(way);
        }

        debug!(
            nodes = self.report.nodes,
            ways = self.report.ways,
            edges = self.report.edges,
            "fragment imported"
        );

        if !self.report.is_clean() {
            warn!(
                malformed_elements = self.report.malformed_elements,
                dropped_ways = self.report.dropped_ways,
                dropped_edges = self.report.dropped_edges,
                conflicting_nodes = self.report.conflicting_nodes,
                "fragment contained malformed elements"
            );
        }

        (self.graph, self.report)
    }

    fn add_node(&mut self, node: &OsmNode) {
        let coordinates = node.coordinates();

        match self.graph.insert_node(node.id.clone(), coordinates) {
            None => self.report.nodes += 1,
            Some(previous) if previous == coordinates => {}
            Some(previous) => {
                debug!(node = %node.id, "conflicting coordinates, keeping the first occurrence");
                self.graph.insert_node(node.id.clone(), previous);
                self.report.conflicting_nodes += 1;
            }
        }
    }

    fn add_way(&mut self, way: &OsmWay) {
        if way.nodes.len() < 2 {
            debug!(way = way.id, "way has fewer than two nodes");
            self.report.dropped_ways += 1;
            return;
        }

        self.report.ways += 1;

        let street_name: Arc<str> = Arc::from(way.street_name());
        let oneway = way.is_oneway();

        for segment in way.nodes.windows(2) {
            let (Some(start), Some(end)) = (&segment[0], &segment[1]) else {
                self.report.dropped_edges += 1;
                continue;
            };

            let endpoints = self
                .graph
                .node_geometry(start)
                .copied()
                .zip(self.graph.node_geometry(end).copied());

            let Some((start_point, end_point)) = endpoints else {
                self.report.dropped_edges += 1;
                continue;
            };

            if start == end {
                self.report.dropped_edges += 1;
                continue;
            }

            self.graph.push_edge(
                start.clone(),
                GraphEdge::between(&start_point, end.clone(), &end_point, street_name.clone()),
            );
            self.report.edges += 1;

            if !oneway {
                self.graph.push_edge(
                    end.clone(),
                    GraphEdge::between(&end_point, start.clone(), &start_point, street_name.clone()),
                );
                self.report.edges += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeId;

    fn read(fragment: &RawMapFragment) -> (RoadGraph, ImportReport) {
        FragmentReader::default().read(fragment)
    }

    #[test]
    fn way_with_n_nodes_produces_n_minus_one_segments_each_way() {
        let fragment = RawMapFragment::default()
            .with_node(1, 0.0, 0.0)
            .with_node(2, 0.0, 0.001)
            .with_node(3, 0.0, 0.002)
            .with_node(4, 0.0, 0.003)
            .with_way(1, &[1, 2, 3, 4], Some("Long Street"), false);

        let (graph, report) = read(&fragment);

        assert_eq!(report.edges, 6);
        assert_eq!(graph.edge_count(), 6);
        assert!(report.is_clean());
        assert_eq!(graph.node_edges(&NodeId::from("1"))[0].street_name(), "Long Street");
    }

    #[test]
    fn oneway_has_no_reverse_edges() {
        let fragment = RawMapFragment::default()
            .with_node(1, 0.0, 0.0)
            .with_node(2, 0.0, 0.001)
            .with_node(3, 0.0, 0.002)
            .with_way(1, &[1, 2, 3], None, true);

        let (graph, _) = read(&fragment);

        assert_eq!(graph.edge_count(), 2);
        assert!(graph.node_edges(&NodeId::from("3")).is_empty());
        assert_eq!(graph.node_edges(&NodeId::from("1"))[0].street_name(), "Unnamed Street");
    }

    #[test]
    fn drops_segments_with_missing_points() {
        let fragment = RawMapFragment::default()
            .with_node(1, 0.0, 0.0)
            .with_node(2, 0.0, 0.001)
            .with_way(1, &[1, 2, 7, 2], None, false);

        let (graph, report) = read(&fragment);

        // 1-2 and the repeated 2-7/7-2 pair: only 1-2 survives.
        assert_eq!(report.dropped_edges, 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.dangling_edges(), 0);
        assert!(!graph.contains_node(&NodeId::from("7")));
    }

    #[test]
    fn drops_short_ways() {
        let fragment = RawMapFragment::default()
            .with_node(1, 0.0, 0.0)
            .with_way(1, &[1], Some("Stub"), false)
            .with_way(2, &[], None, false);

        let (graph, report) = read(&fragment);

        assert_eq!(report.dropped_ways, 2);
        assert_eq!(report.ways, 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn keeps_first_of_conflicting_points() {
        let fragment = RawMapFragment::default()
            .with_node(1, 0.0, 0.0)
            .with_node(1, 0.0, 0.0)
            .with_node(1, 5.0, 5.0);

        let (graph, report) = read(&fragment);

        assert_eq!(report.nodes, 1);
        assert_eq!(report.conflicting_nodes, 1);
        assert_eq!(
            graph.node_geometry(&NodeId::from("1")),
            Some(&crate::geopoint::GeoPoint::new(0.0, 0.0))
        );
    }

    #[test]
    fn drops_self_loops() {
        let fragment = RawMapFragment::default()
            .with_node(1, 0.0, 0.0)
            .with_node(2, 0.0, 0.001)
            .with_way(1, &[1, 1, 2], None, false);

        let (graph, report) = read(&fragment);

        assert_eq!(report.dropped_edges, 1);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn broken_point_keeps_the_rest_of_the_fragment() {
        let fragment = RawMapFragment::from_json_str(
            r#"{
                "elements": [
                    { "type": "node", "id": 1, "lat": 0.0, "lon": 0.0 },
                    { "type": "node", "id": 2, "lat": 0.0, "lon": 0.001 },
                    { "type": "node", "id": 3 },
                    { "type": "way", "id": 10, "nodes": [1, 2] },
                    { "type": "way", "id": 11, "nodes": [2, 3] },
                    { "type": "way", "id": 12, "nodes": [1, null] }
                ]
            }"#,
        )
        .unwrap();

        let (graph, report) = read(&fragment);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(report.malformed_elements, 1);
        // 2-3 has an unknown endpoint and 1-null is not a segment.
        assert_eq!(report.dropped_edges, 2);
        assert!(!report.is_clean());
        assert_eq!(graph.dangling_edges(), 0);
    }

    #[test]
    fn empty_fragment_is_an_empty_graph() {
        let (graph, report) = read(&RawMapFragment::default());
        assert!(graph.is_empty());
        assert_eq!(report, ImportReport::default());
    }
}
