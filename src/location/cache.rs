use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::types::{Location, LocationId};

/// Session-long memo of fetched locations.
///
/// Clones share one store. Lookups hand out copies, so nothing a caller does
/// with a returned [`Location`] is visible to other readers. There is no
/// eviction: the world is bounded and the store only empties on [`clear`].
///
/// [`clear`]: LocationCache::clear
#[derive(Clone, Debug, Default)]
pub struct LocationCache {
	entries: Rc<RefCell<HashMap<LocationId, Location>>>,
}

impl LocationCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, id: LocationId) -> Option<Location> {
		self.entries.borrow().get(&id).cloned()
	}

	/// Insert or overwrite by `location.id`.
	pub fn set(&self, location: Location) {
		self.entries.borrow_mut().insert(location.id, location);
	}

	pub fn clear(&self) {
		self.entries.borrow_mut().clear();
	}

	#[cfg(test)]
	pub fn contains(&self, id: LocationId) -> bool {
		self.entries.borrow().contains_key(&id)
	}

	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}
}
