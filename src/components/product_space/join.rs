//! Left join of layout nodes against product metadata.

use std::collections::HashMap;

use super::types::{GraphNode, Product};

/// Merge one node with its matching product, if any.
///
/// Precedence, field by field:
/// - `product_id`, `x`, `y`: always the node's.
/// - `product_name`, `product_code`, `product_sector`: the product's when
///   matched, otherwise the node's own.
pub fn merge_node(node: &GraphNode, product: Option<&Product>) -> GraphNode {
	let (product_name, product_code, product_sector) = match product {
		Some(p) => (
			p.product_name.clone(),
			p.product_code.clone(),
			p.product_sector.clone(),
		),
		None => (
			node.product_name.clone(),
			node.product_code.clone(),
			node.product_sector.clone(),
		),
	};

	GraphNode {
		product_id: node.product_id.clone(),
		x: node.x,
		y: node.y,
		product_name,
		product_code,
		product_sector,
	}
}

/// Index products by id. On duplicate ids the last one in iteration order wins.
pub fn product_index(products: &[Product]) -> HashMap<&str, &Product> {
	products
		.iter()
		.map(|p| (p.product_id.as_str(), p))
		.collect()
}

/// Join every node against `products` by `product_id`.
///
/// Unmatched nodes are expected (aggregate nodes in the layout have no
/// metadata) and keep their own fields.
pub fn combine_nodes_with_products(nodes: &[GraphNode], products: &[Product]) -> Vec<GraphNode> {
	let index = product_index(products);
	nodes
		.iter()
		.map(|node| merge_node(node, index.get(node.product_id.as_str()).copied()))
		.collect()
}
