pub mod comparison;
pub mod constants;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod graph_edge;
pub mod location_index;
pub mod meters;
pub mod osm;
pub mod playback;
pub mod priority_queue;
pub mod road_graph;
pub mod routing;
pub mod session;
pub mod stopwatch;
pub mod types;

#[cfg(test)]
pub(crate) mod test_graph_utils;
