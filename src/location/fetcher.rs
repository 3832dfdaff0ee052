use std::rc::Rc;

use log::{debug, warn};

use super::cache::LocationCache;
use super::types::{Location, LocationId};
use crate::error::FetchError;

/// Transport that knows how to ask the backend for locations.
#[async_trait::async_trait(?Send)]
pub trait LocationSource {
	/// `GET /location/{id}`
	async fn location(&self, id: LocationId) -> Result<Location, FetchError>;

	/// `GET /location`, the player's present location.
	async fn current(&self) -> Result<Location, FetchError>;
}

/// Cache-first location resolution.
pub struct LocationFetcher<S> {
	source: Rc<S>,
	cache: LocationCache,
}

impl<S> Clone for LocationFetcher<S> {
	fn clone(&self) -> Self {
		Self {
			source: self.source.clone(),
			cache: self.cache.clone(),
		}
	}
}

impl<S: LocationSource> LocationFetcher<S> {
	pub fn new(source: S, cache: LocationCache) -> Self {
		Self {
			source: Rc::new(source),
			cache,
		}
	}

	/// Resolve `id`, touching the network only on a cache miss.
	///
	/// Failures are logged and handed back as values; they are not cached,
	/// so a later call retries.
	pub async fn fetch(&self, id: LocationId) -> Result<Location, FetchError> {
		if let Some(hit) = self.cache.get(id) {
			debug!("location {id}: cache hit");
			return Ok(hit);
		}
		match self.source.location(id).await {
			Ok(location) => {
				self.cache.set(location.clone());
				Ok(location)
			}
			Err(err) => {
				warn!("location {id} unavailable: {err}");
				Err(err)
			}
		}
	}

	/// Resolve where the player is standing. Always hits the network since
	/// the answer changes as the player moves; the result seeds the cache.
	pub async fn current(&self) -> Result<Location, FetchError> {
		match self.source.current().await {
			Ok(location) => {
				self.cache.set(location.clone());
				Ok(location)
			}
			Err(err) => {
				warn!("current location unavailable: {err}");
				Err(err)
			}
		}
	}

	#[cfg(test)]
	pub fn cache(&self) -> &LocationCache {
		&self.cache
	}

	pub fn clear_cache(&self) {
		debug!("dropping {} cached locations", self.cache.len());
		self.cache.clear();
	}
}
