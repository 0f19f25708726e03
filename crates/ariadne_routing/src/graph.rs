use crate::{geopoint::GeoPoint, graph_edge::GraphEdge, types::NodeId};

/// Read access the search strategies need from a road network.
pub trait Graph {
    fn node_count(&self) -> usize;
    fn edge_count(&self) -> usize;

    fn node_geometry(&self, node: &NodeId) -> Option<&GeoPoint>;

    /// Outgoing edges of `node`, in insertion order. Unknown nodes have none.
    fn node_edges(&self, node: &NodeId) -> &[GraphEdge];

    fn contains_node(&self, node: &NodeId) -> bool {
        self.node_geometry(node).is_some()
    }
}
