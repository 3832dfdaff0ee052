//! Runtime settings for the map page.

use crate::map::DEFAULT_MAX_DEPTH;

/// Backend used when `LOCATION_MAP_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Where locations come from and how far the map reaches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapConfig {
	/// Backend origin, without a trailing slash.
	pub api_base_url: String,
	/// Hops explored from the player's location.
	pub max_depth: usize,
}

impl Default for MapConfig {
	fn default() -> Self {
		Self::new(option_env!("LOCATION_MAP_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
	}
}

impl MapConfig {
	/// Settings for a backend at `api_base_url`.
	pub fn new(api_base_url: &str) -> Self {
		Self {
			api_base_url: api_base_url.trim_end_matches('/').to_string(),
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}

	/// Override the traversal depth.
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}
}
