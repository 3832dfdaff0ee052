//! Error types for location loading and graph integrity.

use thiserror::Error;

use crate::location::LocationId;

/// Why a location could not be resolved.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
	/// The request never produced a response.
	#[error("transport error: {0}")]
	Transport(String),
	/// The backend answered with a non-2xx status.
	#[error("{url} returned HTTP {status}")]
	Status { url: String, status: u16 },
	/// The response body was not a location.
	#[error("malformed location payload: {0}")]
	Decode(String),
}

/// Integrity failures found in a candidate graph.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
	#[error("link {from} -> {to} references a node outside the graph")]
	DanglingLink { from: LocationId, to: LocationId },
}
