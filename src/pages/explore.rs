use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::location_map::LocationMap;
use crate::config::MapConfig;
use crate::location::{HttpLocationSource, LocationCache, LocationFetcher, LocationId};

const LOCATE_ERROR: &str = "Failed to locate the player. Please try refreshing.";

/// Map of the world around the player.
#[component]
pub fn ExplorePage() -> impl IntoView {
	let config = use_context::<MapConfig>().unwrap_or_default();
	let fetcher = LocationFetcher::new(
		HttpLocationSource::new(config.api_base_url.clone()),
		LocationCache::new(),
	);
	let (current_id, set_current_id) = signal(None::<LocationId>);
	let (error, set_error) = signal(None::<String>);

	let locate = {
		let fetcher = fetcher.clone();
		move || {
			let fetcher = fetcher.clone();
			spawn_local(async move {
				match fetcher.current().await {
					Ok(location) => {
						set_current_id.set(Some(location.id));
						set_error.set(None);
					}
					Err(_) => set_error.set(Some(LOCATE_ERROR.to_string())),
				}
			});
		}
	};
	locate();

	let on_refresh = {
		let fetcher = fetcher.clone();
		move |_: leptos::ev::MouseEvent| {
			fetcher.clear_cache();
			locate();
		}
	};

	view! {
		<div class="explore-page">
			<div class="explore-toolbar">
				<button on:click=on_refresh>"Refresh"</button>
				{move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}
			</div>
			<LocationMap
				fetcher=fetcher
				current=current_id
				error=set_error
				max_depth=config.max_depth
				width=Some(300.0)
				height=Some(400.0)
			/>
		</div>
	}
}
