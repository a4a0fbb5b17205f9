//! Leptos component binding the product space pipeline to the chart widget.

use leptos::prelude::*;

use super::pipeline::ProductSpace;
use super::scale::DEFAULT_PADDING;
use super::theme::SectorColors;
use super::viewport::use_viewport;
use crate::components::echart::{ChartEvent, EChart, SurfaceStyle};

/// Renders the product space network fitted to the window.
///
/// The chart option is recomputed from `data` whenever the window size
/// changes. `colors` defaults to the HS92 sector table.
#[component]
pub fn ProductSpaceChart(
	/// Datasets to render.
	#[prop(into)]
	data: Signal<ProductSpace>,
	/// Sector color table.
	#[prop(optional)]
	colors: SectorColors,
	/// Margin around the rescaled layout, in pixels.
	#[prop(default = DEFAULT_PADDING)]
	padding: f64,
	/// Surface size.
	#[prop(optional)]
	style: SurfaceStyle,
	/// Chart event subscriptions.
	#[prop(optional)]
	events: Vec<ChartEvent>,
) -> impl IntoView {
	let viewport = use_viewport();

	let option = Memo::new(move |_| {
		let viewport = viewport.get().with_padding(padding);
		data.with(|space| space.option(&viewport, &colors))
	});

	view! { <EChart option=option style=style events=events /> }
}
