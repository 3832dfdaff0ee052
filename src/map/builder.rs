use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, join_all};

use crate::components::force_graph::{GraphData, GraphLink, GraphNode};
use crate::location::{LocationFetcher, LocationId, LocationSource};

/// Hops explored from the traversal root.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Ids already taken by some branch of one traversal.
///
/// Shared by every branch of a build. `claim` is the only mutator and runs
/// without suspending, so two siblings can never both expand one id.
#[derive(Clone, Debug, Default)]
struct VisitedSet(Rc<RefCell<HashSet<LocationId>>>);

impl VisitedSet {
	fn claim(&self, id: LocationId) -> bool {
		self.0.borrow_mut().insert(id)
	}
}

/// Discovers the map around a location by walking neighbor lists.
pub struct GraphBuilder<S> {
	fetcher: LocationFetcher<S>,
	max_depth: usize,
}

impl<S> Clone for GraphBuilder<S> {
	fn clone(&self) -> Self {
		Self {
			fetcher: self.fetcher.clone(),
			max_depth: self.max_depth,
		}
	}
}

impl<S: LocationSource> GraphBuilder<S> {
	pub fn new(fetcher: LocationFetcher<S>, max_depth: usize) -> Self {
		Self { fetcher, max_depth }
	}

	/// Walk outward from `start`, at most `max_depth` hops.
	///
	/// Each id is expanded at most once. A link is recorded only toward a
	/// neighbor this node was first to claim and that resolved, so the links
	/// form a tree rooted at `start`; edges back to visited ids are dropped.
	/// Locations that fail to load prune their subtree and nothing else.
	/// An id repeated in one neighbor list is claimed once and gets one link.
	pub async fn build(&self, start: LocationId) -> GraphData {
		let visited = VisitedSet::default();
		visited.claim(start);
		self.expand(start, 0, &visited).await.unwrap_or_default()
	}

	/// `id` must already be claimed in `visited`.
	fn expand<'a>(
		&'a self,
		id: LocationId,
		depth: usize,
		visited: &'a VisitedSet,
	) -> LocalBoxFuture<'a, Option<GraphData>> {
		async move {
			if depth > self.max_depth {
				return None;
			}
			let location = self.fetcher.fetch(id).await.ok()?;
			let mut graph = GraphData {
				nodes: vec![GraphNode::from(&location)],
				links: Vec::new(),
			};
			if depth == self.max_depth {
				return Some(graph);
			}

			// Claim every eligible neighbor before any child suspends.
			let children: Vec<_> = location
				.neighbor_ids
				.iter()
				.copied()
				.filter(|&neighbor| visited.claim(neighbor))
				.map(move |neighbor| {
					self.expand(neighbor, depth + 1, visited)
						.map(move |subtree| (neighbor, subtree))
				})
				.collect();

			for (neighbor, subtree) in join_all(children).await {
				let Some(subtree) = subtree else {
					continue;
				};
				graph.links.push(GraphLink {
					source: id,
					target: neighbor,
				});
				graph.extend(subtree);
			}
			Some(graph)
		}
		.boxed_local()
	}
}
