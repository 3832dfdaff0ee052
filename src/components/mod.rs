pub mod force_graph;
pub mod location_map;
