use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::location::{HttpLocationSource, LocationFetcher, LocationId};
use crate::map::{Banner, GraphBuilder, MapPipeline, commit};

/// Map of everything reachable from the player's location.
///
/// Rebuilds whenever `current` changes. A graph that fails validation is
/// dropped, leaving the last good map on screen and raising `error`.
#[component]
pub fn LocationMap(
	fetcher: LocationFetcher<HttpLocationSource>,
	#[prop(into)] current: Signal<Option<LocationId>>,
	error: WriteSignal<Option<String>>,
	#[prop(default = crate::map::DEFAULT_MAX_DEPTH)] max_depth: usize,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let pipeline = MapPipeline::new(GraphBuilder::new(fetcher, max_depth));
	let (graph, set_graph) = signal(GraphData::default());

	Effect::new(move |_| {
		let Some(id) = current.get() else {
			return;
		};
		let pipeline = pipeline.clone();
		spawn_local(async move {
			let outcome = pipeline.run(id).await;
			let mut banner = Banner::Unchanged;
			set_graph.maybe_update(|shown| {
				banner = commit(outcome, shown);
				banner == Banner::Clear
			});
			match banner {
				Banner::Clear => error.set(None),
				Banner::Show(message) => error.set(Some(message.to_string())),
				Banner::Unchanged => {}
			}
		});
	});

	view! {
		<div class="map-container">
			<ForceGraphCanvas data=graph current=current width=width height=height />
		</div>
	}
}
