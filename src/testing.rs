//! In-memory stand-ins for the location backend.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::error::FetchError;
use crate::location::{Location, LocationId, LocationSource};

pub fn location(id: LocationId, kind: &str, neighbors: &[LocationId]) -> Location {
	Location {
		id,
		kind: kind.to_string(),
		description: format!("A {kind}."),
		neighbor_ids: neighbors.to_vec(),
	}
}

/// Backend double that records every `location` request.
pub struct FakeSource {
	world: HashMap<LocationId, Location>,
	failing: HashSet<LocationId>,
	current: Option<LocationId>,
	yielding: bool,
	requests: Rc<RefCell<Vec<LocationId>>>,
}

impl FakeSource {
	pub fn new(world: impl IntoIterator<Item = Location>) -> Self {
		Self {
			world: world.into_iter().map(|l| (l.id, l)).collect(),
			failing: HashSet::new(),
			current: None,
			yielding: false,
			requests: Rc::default(),
		}
	}

	/// Simulate a transport error for these ids.
	pub fn failing(mut self, ids: impl IntoIterator<Item = LocationId>) -> Self {
		self.failing.extend(ids);
		self
	}

	pub fn at(mut self, id: LocationId) -> Self {
		self.current = Some(id);
		self
	}

	/// Suspend once before every reply, like a real network round trip.
	pub fn yielding(mut self) -> Self {
		self.yielding = true;
		self
	}

	pub fn requests(&self) -> Rc<RefCell<Vec<LocationId>>> {
		self.requests.clone()
	}

	fn lookup(&self, id: LocationId) -> Result<Location, FetchError> {
		if self.failing.contains(&id) {
			return Err(FetchError::Transport("connection reset".into()));
		}
		self.world.get(&id).cloned().ok_or_else(|| FetchError::Status {
			url: format!("/location/{id}"),
			status: 404,
		})
	}
}

#[async_trait::async_trait(?Send)]
impl LocationSource for FakeSource {
	async fn location(&self, id: LocationId) -> Result<Location, FetchError> {
		self.requests.borrow_mut().push(id);
		if self.yielding {
			YieldOnce(false).await;
		}
		self.lookup(id)
	}

	async fn current(&self) -> Result<Location, FetchError> {
		match self.current {
			Some(id) => self.lookup(id),
			None => Err(FetchError::Status {
				url: "/location".into(),
				status: 500,
			}),
		}
	}
}

struct YieldOnce(bool);

impl Future for YieldOnce {
	type Output = ();

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
		if self.0 {
			return Poll::Ready(());
		}
		self.0 = true;
		cx.waker().wake_by_ref();
		Poll::Pending
	}
}
