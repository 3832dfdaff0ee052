//! Location records, their session cache and the cache-first fetcher.

mod cache;
mod fetcher;
mod http;
mod types;

pub use cache::LocationCache;
pub use fetcher::{LocationFetcher, LocationSource};
pub use http::HttpLocationSource;
pub use types::{Location, LocationId};
