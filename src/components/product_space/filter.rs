//! Drops layout nodes that have no usable position.

use super::types::{GraphNode, RawNode};

impl RawNode {
	/// Narrow to a [`GraphNode`] if both coordinates are present.
	pub fn placed(&self) -> Option<GraphNode> {
		let (x, y) = (self.x?, self.y?);
		Some(GraphNode {
			product_id: self.product_id.clone(),
			x,
			y,
			product_name: self.product_name.clone(),
			product_code: self.product_code.clone(),
			product_sector: self.product_sector.clone(),
		})
	}
}

/// Keep only nodes with both `x` and `y`, preserving input order.
pub fn filter_nodes(nodes: &[RawNode]) -> Vec<GraphNode> {
	nodes.iter().filter_map(RawNode::placed).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn raw(id: &str, x: Option<f64>, y: Option<f64>) -> RawNode {
		RawNode {
			product_id: id.into(),
			x,
			y,
			..Default::default()
		}
	}

	fn as_raw(node: &GraphNode) -> RawNode {
		RawNode {
			product_id: node.product_id.clone(),
			x: Some(node.x),
			y: Some(node.y),
			product_name: node.product_name.clone(),
			product_code: node.product_code.clone(),
			product_sector: node.product_sector.clone(),
		}
	}

	#[test]
	fn test_drops_nodes_missing_either_coordinate() {
		let nodes = vec![
			raw("a", Some(0.0), Some(0.0)),
			raw("b", None, Some(1.0)),
			raw("c", Some(1.0), None),
			raw("d", None, None),
			raw("e", Some(-3.5), Some(2.0)),
		];
		let kept: Vec<_> = filter_nodes(&nodes)
			.into_iter()
			.map(|n| n.product_id)
			.collect();
		assert_eq!(kept, vec!["a", "e"]);
	}

	#[test]
	fn test_zero_is_a_valid_coordinate() {
		let node = raw("origin", Some(0.0), Some(0.0)).placed().unwrap();
		assert_eq!((node.x, node.y), (0.0, 0.0));
	}

	fn arb_raw() -> impl Strategy<Value = RawNode> {
		(
			"[a-z]{1,4}",
			proptest::option::of(-1e6f64..1e6),
			proptest::option::of(-1e6f64..1e6),
		)
			.prop_map(|(id, x, y)| raw(&id, x, y))
	}

	proptest! {
		#[test]
		fn filter_is_stable_and_complete(nodes in prop::collection::vec(arb_raw(), 0..64)) {
			let out = filter_nodes(&nodes);
			prop_assert!(out.len() <= nodes.len());

			let expected: Vec<_> = nodes
				.iter()
				.filter(|n| n.x.is_some() && n.y.is_some())
				.map(|n| (n.product_id.clone(), n.x.unwrap(), n.y.unwrap()))
				.collect();
			let actual: Vec<_> = out.iter().map(|n| (n.product_id.clone(), n.x, n.y)).collect();
			prop_assert_eq!(actual, expected);
		}

		#[test]
		fn filter_is_idempotent(nodes in prop::collection::vec(arb_raw(), 0..64)) {
			let once = filter_nodes(&nodes);
			let again = filter_nodes(&once.iter().map(as_raw).collect::<Vec<_>>());
			prop_assert_eq!(once, again);
		}
	}
}
