use gloo_net::http::Request;

use super::fetcher::LocationSource;
use super::types::{Location, LocationId};
use crate::error::FetchError;

/// Browser `fetch` transport against the game backend.
#[derive(Clone, Debug)]
pub struct HttpLocationSource {
	base_url: String,
}

impl HttpLocationSource {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
		}
	}

	async fn get(&self, path: &str) -> Result<Location, FetchError> {
		let url = format!("{}{}", self.base_url, path);
		let response = Request::get(&url)
			.send()
			.await
			.map_err(|e| FetchError::Transport(e.to_string()))?;
		if !response.ok() {
			return Err(FetchError::Status {
				url,
				status: response.status(),
			});
		}
		response
			.json::<Location>()
			.await
			.map_err(|e| FetchError::Decode(e.to_string()))
	}
}

#[async_trait::async_trait(?Send)]
impl LocationSource for HttpLocationSource {
	async fn location(&self, id: LocationId) -> Result<Location, FetchError> {
		self.get(&format!("/location/{id}")).await
	}

	async fn current(&self) -> Result<Location, FetchError> {
		self.get("/location").await
	}
}
