use crate::location::{Location, LocationId};

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: LocationId,
	pub name: String,
	pub val: f64,
	pub display_name: bool,
}

impl From<&Location> for GraphNode {
	fn from(location: &Location) -> Self {
		Self {
			id: location.id,
			name: location.kind.clone(),
			val: 1.0,
			display_name: true,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GraphLink {
	pub source: LocationId,
	pub target: LocationId,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Append another fragment's nodes and links.
	pub fn extend(&mut self, other: GraphData) {
		self.nodes.extend(other.nodes);
		self.links.extend(other.links);
	}

	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
