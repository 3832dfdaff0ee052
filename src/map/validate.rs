use std::collections::HashSet;

use crate::components::force_graph::GraphData;
use crate::error::GraphError;
use crate::location::LocationId;

/// Every link endpoint must name a node of the same graph.
pub fn check(graph: &GraphData) -> Result<(), GraphError> {
	let ids: HashSet<LocationId> = graph.nodes.iter().map(|n| n.id).collect();
	match graph
		.links
		.iter()
		.find(|l| !ids.contains(&l.source) || !ids.contains(&l.target))
	{
		Some(link) => Err(GraphError::DanglingLink {
			from: link.source,
			to: link.target,
		}),
		None => Ok(()),
	}
}

pub fn validate(graph: &GraphData) -> bool {
	check(graph).is_ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::{GraphLink, GraphNode};

	fn node(id: LocationId) -> GraphNode {
		GraphNode {
			id,
			name: format!("loc {id}"),
			val: 1.0,
			display_name: true,
		}
	}

	fn link(source: LocationId, target: LocationId) -> GraphLink {
		GraphLink { source, target }
	}

	#[test]
	fn empty_graph_is_valid() {
		assert!(validate(&GraphData::default()));
	}

	#[test]
	fn nodes_without_links_are_valid() {
		let graph = GraphData {
			nodes: vec![node(1), node(2)],
			links: vec![],
		};
		assert!(validate(&graph));
	}

	#[test]
	fn resolved_links_are_valid() {
		let graph = GraphData {
			nodes: vec![node(1), node(2), node(3)],
			links: vec![link(1, 2), link(2, 3), link(3, 1)],
		};
		assert!(validate(&graph));
	}

	#[test]
	fn missing_target_is_rejected() {
		let graph = GraphData {
			nodes: vec![node(1), node(2)],
			links: vec![link(1, 2), link(2, 9)],
		};
		assert!(!validate(&graph));
		assert_eq!(check(&graph), Err(GraphError::DanglingLink { from: 2, to: 9 }));
	}

	#[test]
	fn missing_source_is_rejected() {
		let graph = GraphData {
			nodes: vec![node(1)],
			links: vec![link(5, 1)],
		};
		assert_eq!(check(&graph), Err(GraphError::DanglingLink { from: 5, to: 1 }));
	}

	#[test]
	fn links_into_an_empty_node_set_are_rejected() {
		let graph = GraphData {
			nodes: vec![],
			links: vec![link(1, 1)],
		};
		assert!(!validate(&graph));
	}
}
