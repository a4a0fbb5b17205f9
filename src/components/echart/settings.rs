//! Chart initialization and update settings.

use serde::Serialize;

/// ECharts rendering backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
	/// Retained SVG; crisp at any zoom.
	#[default]
	Svg,
	/// Immediate-mode canvas; faster for very large graphs.
	Canvas,
}

/// Options passed to `echarts.init`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSettings {
	/// Rendering backend.
	pub renderer: Renderer,
	/// Enlarge hit areas for touch input.
	pub use_coarse_pointer: bool,
}

impl Default for ChartSettings {
	fn default() -> Self {
		Self {
			renderer: Renderer::Svg,
			use_coarse_pointer: true,
		}
	}
}

/// Options passed alongside each `setOption` call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOptionSettings {
	/// Replace the previous option instead of merging into it.
	pub not_merge: bool,
}

impl Default for SetOptionSettings {
	fn default() -> Self {
		Self { not_merge: true }
	}
}

/// CSS size of the chart surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceStyle {
	/// CSS width, e.g. `100%`.
	pub width: String,
	/// CSS height, e.g. `90vh`.
	pub height: String,
}

impl SurfaceStyle {
	/// Inline `style` attribute value.
	pub fn css(&self) -> String {
		format!("width: {}; height: {};", self.width, self.height)
	}
}

impl Default for SurfaceStyle {
	fn default() -> Self {
		Self {
			width: "100%".into(),
			height: "90vh".into(),
		}
	}
}
