use serde::{Deserialize, Serialize};

/// Backend location ids are 64-bit.
pub type LocationId = i64;

/// A world node as served by `GET /location/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
	pub id: LocationId,
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub neighbor_ids: Vec<LocationId>,
}
