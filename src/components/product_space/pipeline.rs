//! Filter, join and rescale, end to end.

use log::debug;

use super::filter::filter_nodes;
use super::join::combine_nodes_with_products;
use super::option::{ChartOption, product_space_option};
use super::scale::{Viewport, scale_nodes_to_viewport};
use super::theme::SectorColors;
use super::types::{GraphNode, NodesEdges, ProductCatalog};

/// The two static datasets a product space chart is built from.
///
/// Loaded once; [`layout`](Self::layout) and [`option`](Self::option) are
/// recomputed on every render pass.
#[derive(Clone, Debug, Default)]
pub struct ProductSpace {
	/// Layout nodes and edges.
	pub graph: NodesEdges,
	/// Product metadata joined onto the nodes.
	pub catalog: ProductCatalog,
}

impl ProductSpace {
	/// Pair a layout with its metadata.
	pub fn new(graph: NodesEdges, catalog: ProductCatalog) -> Self {
		Self { graph, catalog }
	}

	/// Positioned, metadata-enriched nodes fitted to `viewport`.
	pub fn layout(&self, viewport: &Viewport) -> Vec<GraphNode> {
		let placed = filter_nodes(&self.graph.nodes);
		let joined = combine_nodes_with_products(&placed, &self.catalog.products);
		debug!(
			"product-space: {} of {} nodes placed, {} edges",
			joined.len(),
			self.graph.nodes.len(),
			self.graph.edges.len()
		);
		scale_nodes_to_viewport(&joined, viewport)
	}

	/// Chart option for the current viewport.
	pub fn option(&self, viewport: &Viewport, colors: &SectorColors) -> ChartOption {
		product_space_option(&self.layout(viewport), &self.graph.edges, colors)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const NODES: &str = r#"{
		"nodes": [
			{"productId": "A", "x": 0, "y": 0, "productName": "a", "productSector": {"productId": "product-HS92-9"}},
			{"productId": "B", "x": 10, "y": 0},
			{"productId": "C", "x": null, "y": 5}
		],
		"edges": [{"source": "A", "target": "B"}, {"source": "B", "target": "C"}]
	}"#;

	const PRODUCTS: &str = r#"{"productHs92": [
		{"productId": "B", "productName": "Bananas", "productCode": "0803",
		 "productSector": {"productId": "product-HS92-2"}, "productLevel": 4}
	]}"#;

	fn space() -> ProductSpace {
		ProductSpace::new(
			NodesEdges::from_json(NODES).unwrap(),
			ProductCatalog::from_json(PRODUCTS).unwrap(),
		)
	}

	#[test]
	fn test_end_to_end_layout() {
		let viewport = Viewport::new(220.0, 220.0).with_padding(10.0);
		let nodes = space().layout(&viewport);

		assert_eq!(nodes.len(), 2);
		assert_eq!(nodes[0].product_id, "A");
		assert_eq!((nodes[0].x, nodes[0].y), (10.0, 10.0));
		assert_eq!(nodes[0].product_name, "a");
		assert_eq!(nodes[1].product_id, "B");
		assert_eq!((nodes[1].x, nodes[1].y), (210.0, 10.0));
		assert_eq!(nodes[1].product_name, "Bananas");
		assert_eq!(nodes[1].product_sector.product_id, "product-HS92-2");
	}

	#[test]
	fn test_option_keeps_dangling_edges() {
		let option = space().option(&Viewport::new(400.0, 300.0), &SectorColors::hs92());
		let series = &option.series[0];

		assert_eq!(series.data.len(), 2);
		assert_eq!(series.edges.len(), 2);
		assert_eq!(series.edges[1].target, "C");
		assert_eq!(series.data[1].item_style.color.as_deref(), Some("#F5CF23"));
	}

	#[test]
	fn test_pipeline_is_deterministic() {
		let viewport = Viewport::new(1280.0, 720.0);
		let colors = SectorColors::hs92();
		let first = serde_json::to_string(&space().option(&viewport, &colors)).unwrap();
		let second = serde_json::to_string(&space().option(&viewport, &colors)).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn test_empty_datasets_render_empty_chart() {
		let option = ProductSpace::default().option(&Viewport::new(100.0, 100.0), &SectorColors::hs92());
		assert!(option.series[0].data.is_empty());
		assert!(option.series[0].categories.is_empty());
	}
}
