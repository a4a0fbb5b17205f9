//! Fitting precomputed layout coordinates into the viewport.
//!
//! # Coordinate Spaces
//!
//! - **Layout-space**: The coordinates supplied by the nodes document. Their
//!   range is arbitrary and may be negative.
//! - **Viewport-space**: Pixel coordinates on the chart surface, with
//!   `(padding, padding)` as the top-left of the usable area.
//!
//! The mapping is a single uniform scale plus offset, so the layout's aspect
//! ratio survives: whichever axis is tighter decides the scale and the other
//! axis leaves slack on its far side.

use super::types::GraphNode;

/// Padding applied on every side when none is given.
pub const DEFAULT_PADDING: f64 = 20.0;

/// Target area for the rescaled layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
	/// Empty margin kept on every side.
	pub padding: f64,
}

impl Viewport {
	/// A viewport with [`DEFAULT_PADDING`].
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			padding: DEFAULT_PADDING,
		}
	}

	/// Same size with a different padding.
	pub fn with_padding(self, padding: f64) -> Self {
		Self { padding, ..self }
	}
}

/// Axis-aligned bounding box of a node set in layout-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Smallest x.
	pub min_x: f64,
	/// Largest x.
	pub max_x: f64,
	/// Smallest y.
	pub min_y: f64,
	/// Largest y.
	pub max_y: f64,
}

impl Bounds {
	/// Bounding box of `nodes`, or `None` when empty.
	pub fn of(nodes: &[GraphNode]) -> Option<Self> {
		let first = nodes.first()?;
		let init = Self {
			min_x: first.x,
			max_x: first.x,
			min_y: first.y,
			max_y: first.y,
		};
		Some(nodes[1..].iter().fold(init, |b, n| Self {
			min_x: b.min_x.min(n.x),
			max_x: b.max_x.max(n.x),
			min_y: b.min_y.min(n.y),
			max_y: b.max_y.max(n.y),
		}))
	}

	/// Horizontal extent, with a zero extent replaced by 1.
	pub fn width(&self) -> f64 {
		unit_if_zero(self.max_x - self.min_x)
	}

	/// Vertical extent, with a zero extent replaced by 1.
	pub fn height(&self) -> f64 {
		unit_if_zero(self.max_y - self.min_y)
	}
}

fn unit_if_zero(extent: f64) -> f64 {
	if extent == 0.0 { 1.0 } else { extent }
}

/// Layout-space to viewport-space mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
	/// Uniform scale factor for both axes.
	pub scale: f64,
	/// Layout-space x mapped onto the left padding edge.
	pub min_x: f64,
	/// Layout-space y mapped onto the top padding edge.
	pub min_y: f64,
	/// Viewport-space offset added after scaling.
	pub padding: f64,
}

impl ViewportTransform {
	/// Fit `bounds` into `viewport` with a uniform scale.
	///
	/// A degenerate axis (single node, or all nodes sharing a coordinate) is
	/// treated as unit width, so its scale becomes `dimension - 2 * padding`.
	/// Negative or zero viewports are not rejected.
	pub fn fit(bounds: &Bounds, viewport: &Viewport) -> Self {
		let scale_x = (viewport.width - 2.0 * viewport.padding) / bounds.width();
		let scale_y = (viewport.height - 2.0 * viewport.padding) / bounds.height();
		Self {
			scale: scale_x.min(scale_y),
			min_x: bounds.min_x,
			min_y: bounds.min_y,
			padding: viewport.padding,
		}
	}

	/// Map a layout-space point to viewport-space.
	pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
		(
			(x - self.min_x) * self.scale + self.padding,
			(y - self.min_y) * self.scale + self.padding,
		)
	}
}

/// Rescale node coordinates into the viewport. Other fields pass through.
pub fn scale_nodes_to_viewport(nodes: &[GraphNode], viewport: &Viewport) -> Vec<GraphNode> {
	let Some(bounds) = Bounds::of(nodes) else {
		return Vec::new();
	};
	let transform = ViewportTransform::fit(&bounds, viewport);

	nodes
		.iter()
		.map(|n| {
			let (x, y) = transform.apply(n.x, n.y);
			GraphNode {
				x,
				y,
				..n.clone()
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::product_space::types::SectorRef;
	use proptest::prelude::*;

	fn node(id: &str, x: f64, y: f64) -> GraphNode {
		GraphNode {
			product_id: id.into(),
			x,
			y,
			product_name: String::new(),
			product_code: String::new(),
			product_sector: SectorRef::default(),
		}
	}

	#[test]
	fn test_default_padding() {
		assert_eq!(Viewport::new(800.0, 600.0).padding, 20.0);
	}

	#[test]
	fn test_horizontal_line_scales_by_width() {
		let nodes = vec![node("A", 0.0, 0.0), node("B", 10.0, 0.0)];
		let viewport = Viewport::new(220.0, 220.0).with_padding(10.0);

		let bounds = Bounds::of(&nodes).unwrap();
		assert_eq!(bounds.width(), 10.0);
		assert_eq!(bounds.height(), 1.0);
		assert_eq!(ViewportTransform::fit(&bounds, &viewport).scale, 20.0);

		let out = scale_nodes_to_viewport(&nodes, &viewport);
		assert_eq!((out[0].x, out[0].y), (10.0, 10.0));
		assert_eq!((out[1].x, out[1].y), (210.0, 10.0));
	}

	#[test]
	fn test_single_node_is_finite() {
		let viewport = Viewport::new(100.0, 80.0);
		let out = scale_nodes_to_viewport(&[node("solo", 42.0, -7.0)], &viewport);

		assert_eq!(out.len(), 1);
		assert_eq!((out[0].x, out[0].y), (20.0, 20.0));
		let bounds = Bounds::of(&out).unwrap();
		assert_eq!(ViewportTransform::fit(&bounds, &viewport).scale, 40.0);
	}

	#[test]
	fn test_identical_coordinates_collapse_to_padding() {
		let nodes = vec![node("a", 3.0, 3.0), node("b", 3.0, 3.0), node("c", 3.0, 3.0)];
		let out = scale_nodes_to_viewport(&nodes, &Viewport::new(500.0, 500.0));
		assert!(out.iter().all(|n| n.x == 20.0 && n.y == 20.0));
	}

	#[test]
	fn test_empty_input() {
		assert!(scale_nodes_to_viewport(&[], &Viewport::new(100.0, 100.0)).is_empty());
		assert_eq!(Bounds::of(&[]), None);
	}

	#[test]
	fn test_non_geometric_fields_pass_through() {
		let mut n = node("p", 1.0, 1.0);
		n.product_name = "Tea".into();
		n.product_sector = SectorRef::new("product-HS92-2");
		let out = scale_nodes_to_viewport(&[n.clone(), node("q", 2.0, 5.0)], &Viewport::new(300.0, 300.0));
		assert_eq!(out[0].product_name, "Tea");
		assert_eq!(out[0].product_sector, n.product_sector);
	}

	fn arb_nodes() -> impl Strategy<Value = Vec<GraphNode>> {
		prop::collection::vec((-1e4f64..1e4, -1e4f64..1e4), 2..48).prop_map(|pts| {
			pts.into_iter()
				.enumerate()
				.map(|(i, (x, y))| node(&i.to_string(), x, y))
				.collect()
		})
	}

	proptest! {
		#[test]
		fn output_fits_padded_viewport(
			nodes in arb_nodes(),
			width in 100.0f64..2000.0,
			height in 100.0f64..2000.0,
			padding in 0.0f64..40.0,
		) {
			let viewport = Viewport::new(width, height).with_padding(padding);
			let out = scale_nodes_to_viewport(&nodes, &viewport);
			let eps = 1e-6;
			for n in &out {
				prop_assert!(n.x >= padding - eps && n.x <= width - padding + eps);
				prop_assert!(n.y >= padding - eps && n.y <= height - padding + eps);
			}
		}

		#[test]
		fn aspect_ratio_is_preserved(nodes in arb_nodes(), width in 100.0f64..2000.0, height in 100.0f64..2000.0) {
			let before = Bounds::of(&nodes).unwrap();
			prop_assume!(before.max_x > before.min_x && before.max_y > before.min_y);

			let viewport = Viewport::new(width, height);
			let scale = ViewportTransform::fit(&before, &viewport).scale;
			let after = Bounds::of(&scale_nodes_to_viewport(&nodes, &viewport)).unwrap();
			// Both axes stretch by the same factor, to within pixel rounding.
			prop_assert!(((after.max_x - after.min_x) - (before.max_x - before.min_x) * scale).abs() < 1e-6);
			prop_assert!(((after.max_y - after.min_y) - (before.max_y - before.min_y) * scale).abs() < 1e-6);
		}

		#[test]
		fn rescale_is_deterministic(nodes in arb_nodes()) {
			let viewport = Viewport::new(640.0, 480.0);
			prop_assert_eq!(
				scale_nodes_to_viewport(&nodes, &viewport),
				scale_nodes_to_viewport(&nodes, &viewport)
			);
		}
	}
}
