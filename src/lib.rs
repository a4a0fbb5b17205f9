//! product-space: Interactive product space network visualization.
//!
//! This crate renders the product space graph with ECharts from a WASM
//! Leptos app. Node positions come from a precomputed layout that is joined
//! with product metadata and rescaled to the window.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
#[cfg(test)]
mod test_log;

pub use components::echart::{ChartEvent, EChart};
pub use components::product_space::{
	ChartOption, DatasetError, Edge, GraphNode, NodesEdges, Product, ProductCatalog, ProductSpace,
	ProductSpaceChart, RawNode, SectorColors, Viewport,
};

/// Element id of the script tag holding the nodes/edges document.
pub const NODES_EDGES_ID: &str = "nodes-edges";
/// Element id of the script tag holding the product metadata document.
pub const PRODUCT_METADATA_ID: &str = "product-metadata";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("product-space: logging initialized");
}

/// Text content of the `<script>` element with the given id.
fn script_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Parse one embedded dataset, falling back to an empty one.
fn load_dataset<T: Default>(id: &str, parse: impl FnOnce(&str) -> Result<T, DatasetError>) -> T {
	let Some(text) = script_text(id) else {
		warn!("product-space: no #{} element, using empty dataset", id);
		return T::default();
	};
	parse(&text).unwrap_or_else(|e| {
		warn!("product-space: {}", e);
		T::default()
	})
}

/// Load both datasets from script elements with id="nodes-edges" and
/// id="product-metadata".
pub fn load_datasets() -> ProductSpace {
	let graph = load_dataset(NODES_EDGES_ID, NodesEdges::from_json);
	let catalog = load_dataset(PRODUCT_METADATA_ID, ProductCatalog::from_json);
	info!(
		"product-space: loaded {} nodes, {} edges, {} products",
		graph.nodes.len(),
		graph.edges.len(),
		catalog.products.len()
	);
	ProductSpace::new(graph, catalog)
}

/// Main application component.
/// Loads the datasets from the DOM and renders the product space chart.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let space = load_datasets();
	let space_signal = Signal::derive(move || space.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Product Space" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="App">
			<ProductSpaceChart data=space_signal />
		</div>
	}
}
