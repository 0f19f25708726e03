pub mod astar;
pub mod astar_heuristic;
pub mod breadth_first;
pub mod depth_first;
pub mod dijkstra;
pub mod greedy_best_first;
pub(crate) mod routing_path_builder;
pub mod search_algorithm;
pub mod search_metrics;
pub mod search_result;
pub mod search_strategy;
