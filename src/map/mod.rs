//! Location-graph discovery, validation and publication.

mod builder;
mod generation;
mod validate;

use log::{debug, info, warn};

pub use builder::{DEFAULT_MAX_DEPTH, GraphBuilder};
pub use generation::BuildGeneration;
pub use validate::{check, validate};

use crate::components::force_graph::GraphData;
use crate::location::{LocationId, LocationSource};

pub const MAP_ERROR: &str = "Failed to build the map. Please try refreshing.";

/// What became of one map build.
#[derive(Debug, PartialEq)]
pub enum BuildOutcome {
	/// Passed validation and is still the newest build.
	Committed(GraphData),
	/// Failed validation; the caller keeps its previous graph.
	Rejected,
	/// A newer build started while this one was in flight.
	Superseded,
}

/// Build, check and gate a graph for publication.
pub struct MapPipeline<S> {
	builder: GraphBuilder<S>,
	generation: BuildGeneration,
}

impl<S> Clone for MapPipeline<S> {
	fn clone(&self) -> Self {
		Self {
			builder: self.builder.clone(),
			generation: self.generation.clone(),
		}
	}
}

impl<S: LocationSource> MapPipeline<S> {
	pub fn new(builder: GraphBuilder<S>) -> Self {
		Self {
			builder,
			generation: BuildGeneration::default(),
		}
	}

	pub async fn run(&self, start: LocationId) -> BuildOutcome {
		let ticket = self.generation.next();
		let graph = self.builder.build(start).await;

		if !self.generation.is_current(ticket) {
			debug!("discarding map around {start}: superseded");
			return BuildOutcome::Superseded;
		}
		gate(start, graph)
	}
}

fn gate(start: LocationId, graph: GraphData) -> BuildOutcome {
	if !validate(&graph) {
		if let Err(err) = check(&graph) {
			warn!("rejecting map around {start}: {err}");
		}
		return BuildOutcome::Rejected;
	}
	info!(
		"map around {start}: {} locations, {} links",
		graph.nodes.len(),
		graph.links.len()
	);
	BuildOutcome::Committed(graph)
}

/// How the error banner changes once a build lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
	Unchanged,
	Clear,
	Show(&'static str),
}

/// Apply a finished build to the graph on screen. Only a committed graph
/// replaces `shown`; a rejected one leaves it in place and raises the banner.
pub fn commit(outcome: BuildOutcome, shown: &mut GraphData) -> Banner {
	match outcome {
		BuildOutcome::Committed(graph) => {
			*shown = graph;
			Banner::Clear
		}
		BuildOutcome::Rejected => Banner::Show(MAP_ERROR),
		BuildOutcome::Superseded => Banner::Unchanged,
	}
}

#[cfg(test)]
mod tests {
	use futures::executor::block_on;

	use super::*;
	use crate::components::force_graph::{GraphLink, GraphNode};
	use crate::location::{LocationCache, LocationFetcher};
	use crate::testing::{FakeSource, location};

	fn pipeline(source: FakeSource) -> MapPipeline<FakeSource> {
		let fetcher = LocationFetcher::new(source, LocationCache::new());
		MapPipeline::new(GraphBuilder::new(fetcher, DEFAULT_MAX_DEPTH))
	}

	fn world() -> Vec<crate::location::Location> {
		vec![
			location(1, "village", &[2]),
			location(2, "road", &[1, 3]),
			location(3, "bridge", &[]),
		]
	}

	#[test]
	fn lone_build_is_committed() {
		let outcome = block_on(pipeline(FakeSource::new(world())).run(1));
		let BuildOutcome::Committed(graph) = outcome else {
			panic!("expected a committed graph, got {outcome:?}");
		};
		assert_eq!(graph.nodes.len(), 3);
		assert!(validate(&graph));
	}

	#[test]
	fn overlapping_builds_commit_only_the_latest() {
		let pipeline = pipeline(FakeSource::new(world()).yielding());
		let (older, newer) = block_on(async { futures::join!(pipeline.run(1), pipeline.run(3)) });

		assert_eq!(older, BuildOutcome::Superseded);
		let BuildOutcome::Committed(graph) = newer else {
			panic!("expected newest build to commit, got {newer:?}");
		};
		assert_eq!(graph.nodes.len(), 1);
		assert_eq!(graph.nodes[0].id, 3);
	}

	#[test]
	fn sequential_builds_each_commit() {
		let pipeline = pipeline(FakeSource::new(world()));
		assert!(matches!(block_on(pipeline.run(1)), BuildOutcome::Committed(_)));
		assert!(matches!(block_on(pipeline.run(2)), BuildOutcome::Committed(_)));
	}

	#[test]
	fn missing_root_commits_an_empty_graph() {
		let outcome = block_on(pipeline(FakeSource::new(world())).run(99));
		assert_eq!(outcome, BuildOutcome::Committed(GraphData::default()));
	}

	fn dangling() -> GraphData {
		GraphData {
			nodes: vec![GraphNode {
				id: 9,
				name: "marsh".into(),
				val: 1.0,
				display_name: true,
			}],
			links: vec![GraphLink { source: 9, target: 10 }],
		}
	}

	#[test]
	fn dangling_links_are_rejected_at_the_gate() {
		assert_eq!(gate(9, dangling()), BuildOutcome::Rejected);
	}

	#[test]
	fn rejected_graph_keeps_the_previous_map() {
		let good = block_on(pipeline(FakeSource::new(world())).run(1));
		let mut shown = GraphData::default();
		assert_eq!(commit(good, &mut shown), Banner::Clear);
		let before = shown.clone();
		assert_eq!(before.nodes.len(), 3);

		assert_eq!(commit(gate(9, dangling()), &mut shown), Banner::Show(MAP_ERROR));
		assert_eq!(shown, before);
	}

	#[test]
	fn superseded_build_changes_nothing() {
		let mut shown = dangling();
		assert_eq!(commit(BuildOutcome::Superseded, &mut shown), Banner::Unchanged);
		assert_eq!(shown, dangling());
	}
}
