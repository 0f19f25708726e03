#[cfg(test)]
pub mod test_graph {
    use crate::{osm::raw_fragment::RawMapFragment, road_graph::RoadGraph, types::NodeId};

    /// Corners of a ~111 m square at the equator.
    #[derive(Clone, Copy, Debug)]
    pub enum SquareNode {
        N1 = 1,
        N2 = 2,
        N3 = 3,
        N4 = 4,
    }

    impl From<SquareNode> for NodeId {
        fn from(value: SquareNode) -> Self {
            NodeId::from(value as i64)
        }
    }

    /// Numeric id shorthand for fixtures.
    pub fn node(id: i64) -> NodeId {
        NodeId::from(id)
    }

    pub fn create_square_fragment() -> RawMapFragment {
        RawMapFragment::default()
            .with_node(1, 0.0, 0.0)
            .with_node(2, 0.0, 0.001)
            .with_node(3, 0.001, 0.001)
            .with_node(4, 0.001, 0.0)
            .with_way(101, &[1, 2], Some("South Street"), false)
            .with_way(102, &[2, 3], Some("East Street"), false)
            .with_way(103, &[3, 4], Some("North Street"), false)
            .with_way(104, &[4, 1], Some("West Street"), false)
    }

    pub fn create_square_graph() -> RoadGraph {
        RoadGraph::from_fragment(&create_square_fragment())
    }

    /// `rows` x `cols` lattice with 0.001° spacing, nodes numbered row-major from 0.
    pub fn create_grid_fragment(rows: i64, cols: i64) -> RawMapFragment {
        let mut fragment = RawMapFragment::default();
        for row in 0..rows {
            for col in 0..cols {
                fragment = fragment.with_node(row * cols + col, row as f64 * 0.001, col as f64 * 0.001);
            }
        }

        let mut way_id = 0;
        for row in 0..rows {
            let nodes: Vec<i64> = (0..cols).map(|col| row * cols + col).collect();
            fragment = fragment.with_way(way_id, &nodes, None, false);
            way_id += 1;
        }
        for col in 0..cols {
            let nodes: Vec<i64> = (0..rows).map(|row| row * cols + col).collect();
            fragment = fragment.with_way(way_id, &nodes, None, false);
            way_id += 1;
        }

        fragment
    }

    pub fn create_grid_graph(rows: i64, cols: i64) -> RoadGraph {
        RoadGraph::from_fragment(&create_grid_fragment(rows, cols))
    }

    /// A triangle (1, 2, 3) and, far away, a segment (10, 11).
    pub fn create_two_component_graph() -> RoadGraph {
        RoadGraph::from_fragment(
            &RawMapFragment::default()
                .with_node(1, 0.0, 0.0)
                .with_node(2, 0.0, 0.001)
                .with_node(3, 0.001, 0.0005)
                .with_node(10, 1.0, 1.0)
                .with_node(11, 1.0, 1.001)
                .with_way(1, &[1, 2, 3, 1], None, false)
                .with_way(2, &[10, 11], None, false),
        )
    }
}
