//! Declarative ECharts option for the product space graph.
//!
//! The structs mirror the subset of the ECharts option schema the chart uses
//! and serialize with camelCase keys, so the value can be handed to
//! `setOption` as-is. Colors and tooltips are resolved here per node rather
//! than through JS callbacks.

use std::collections::HashMap;

use serde::Serialize;

use super::theme::SectorColors;
use super::types::{Edge, GraphNode, SectorRef};

/// Color of every edge, and of dimmed edges on hover.
pub const EDGE_COLOR: &str = "#ccc";
/// Opacity applied to everything outside the hovered node's adjacency.
pub const BLUR_OPACITY: f64 = 0.35;
/// Edge width of the hovered node's incident edges.
pub const EMPHASIS_EDGE_WIDTH: f64 = 4.0;

/// Top-level option passed to `setOption`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
	/// Chart title block.
	pub title: Title,
	/// Global tooltip switch; text comes from each datum.
	pub tooltip: Tooltip,
	/// Sector legend.
	pub legend: Vec<Legend>,
	/// Initial animation length in milliseconds.
	pub animation_duration: u32,
	/// Easing for option updates.
	pub animation_easing_update: &'static str,
	/// The single graph series.
	pub series: Vec<GraphSeries>,
}

/// Title and subtitle placement.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Title {
	/// Main title.
	pub text: String,
	/// Subtitle below the title.
	pub subtext: String,
	/// Vertical anchor (`"bottom"`).
	pub top: &'static str,
	/// Horizontal anchor (`"right"`).
	pub left: &'static str,
}

/// Chart-wide tooltip configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
	/// Whether tooltips are shown at all.
	pub show: bool,
	/// `"item"`: show on hover over a node or edge.
	pub trigger: &'static str,
}

/// One legend block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
	/// Category names listed in the legend.
	pub data: Vec<String>,
}

/// A `type: "graph"` series with fixed node positions.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSeries {
	/// Series name.
	pub name: String,
	/// Always `"graph"`.
	#[serde(rename = "type")]
	pub kind: &'static str,
	/// Node diameter in pixels.
	pub symbol_size: f64,
	/// Whether hovering a legend entry highlights its nodes.
	pub legend_hover_link: bool,
	/// `"none"`: nodes keep their `x`/`y`.
	pub layout: &'static str,
	/// Enables pan and zoom.
	pub roam: bool,
	/// Node label placement.
	pub label: Label,
	/// Default edge style.
	pub line_style: LineStyle,
	/// Hover emphasis.
	pub emphasis: Emphasis,
	/// Style of everything outside the emphasized adjacency.
	pub blur: Blur,
	/// Sector categories referenced by [`NodeDatum::category`].
	pub categories: Vec<Category>,
	/// Nodes.
	pub data: Vec<NodeDatum>,
	/// Edges.
	pub edges: Vec<EdgeDatum>,
}

/// Node label settings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
	/// Side of the node the label sits on.
	pub position: &'static str,
	/// ECharts template; `{b}` is the datum name.
	pub formatter: &'static str,
}

/// Edge stroke. Unset fields are omitted so ECharts defaults apply.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LineStyle {
	/// CSS color, or `"source"` to follow the source node.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
	/// Stroke width in pixels.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub width: Option<f64>,
	/// 0 for straight edges.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub curveness: Option<f64>,
}

/// Node fill. Unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ItemStyle {
	/// CSS color.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
	/// Opacity in `[0, 1]`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub opacity: Option<f64>,
}

/// Hover emphasis settings.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emphasis {
	/// `"adjacency"`: emphasize the node and its neighbors.
	pub focus: &'static str,
	/// Style of emphasized edges.
	pub line_style: LineStyle,
}

/// Style applied to blurred (non-emphasized) elements.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blur {
	/// Node style while blurred.
	pub item_style: ItemStyle,
}

/// A sector category.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
	/// Sector id.
	pub name: String,
	/// Sector color, used by the legend swatch.
	pub item_style: ItemStyle,
}

/// Per-datum tooltip override.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DatumTooltip {
	/// Pre-rendered HTML tooltip text.
	pub formatter: String,
}

/// One node of the graph series.
///
/// `id` links edges to nodes; `name` is what the `{b}` label shows.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDatum {
	/// Product id; edges refer to it.
	pub id: String,
	/// Product name.
	pub name: String,
	/// Viewport-space x.
	pub x: f64,
	/// Viewport-space y.
	pub y: f64,
	/// Product id, kept for event handlers.
	pub product_id: String,
	/// Product name, kept for event handlers.
	pub product_name: String,
	/// Product code.
	pub product_code: String,
	/// Sector reference.
	pub product_sector: SectorRef,
	/// Index into [`GraphSeries::categories`].
	pub category: usize,
	/// Resolved sector color.
	pub item_style: ItemStyle,
	/// Tooltip for this node.
	pub tooltip: DatumTooltip,
}

/// One edge of the graph series.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDatum {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Fixed edge style.
	pub line_style: LineStyle,
}

/// Escape text for inclusion in the HTML tooltip.
fn escape_html(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}

/// Two-line tooltip: bold product name, then the code in parentheses.
pub fn tooltip_text(node: &GraphNode) -> String {
	format!(
		"<strong>{}</strong><br/>({})",
		escape_html(&node.product_name),
		escape_html(&node.product_code)
	)
}

/// Distinct sectors of a node set, each with its color resolved once.
struct Categories<'a> {
	/// `(sector id, color)` in encounter order.
	sectors: Vec<(&'a str, &'a str)>,
	/// Index into `sectors` for each node.
	index_of: Vec<usize>,
}

fn categorize<'a>(nodes: &'a [GraphNode], colors: &'a SectorColors) -> Categories<'a> {
	let mut sectors: Vec<(&str, &str)> = Vec::new();
	let mut seen: HashMap<&str, usize> = HashMap::new();
	let index_of: Vec<usize> = nodes
		.iter()
		.map(|n| {
			let sector = n.product_sector.product_id.as_str();
			*seen.entry(sector).or_insert_with(|| {
				sectors.push((sector, colors.resolve(sector)));
				sectors.len() - 1
			})
		})
		.collect();
	Categories { sectors, index_of }
}

/// Build the chart option from rescaled nodes and edges.
///
/// Unknown sectors render with the fallback color; nothing here fails.
pub fn product_space_option(nodes: &[GraphNode], edges: &[Edge], colors: &SectorColors) -> ChartOption {
	let Categories { sectors, index_of } = categorize(nodes, colors);

	let categories = sectors
		.iter()
		.map(|&(sector, color)| Category {
			name: sector.to_string(),
			item_style: ItemStyle {
				color: Some(color.to_string()),
				opacity: None,
			},
		})
		.collect();

	let data = nodes
		.iter()
		.zip(index_of)
		.map(|(n, category)| NodeDatum {
			id: n.product_id.clone(),
			name: n.product_name.clone(),
			x: n.x,
			y: n.y,
			product_id: n.product_id.clone(),
			product_name: n.product_name.clone(),
			product_code: n.product_code.clone(),
			product_sector: n.product_sector.clone(),
			category,
			item_style: ItemStyle {
				color: Some(sectors[category].1.to_string()),
				opacity: None,
			},
			tooltip: DatumTooltip {
				formatter: tooltip_text(n),
			},
		})
		.collect();

	let edges = edges
		.iter()
		.map(|e| EdgeDatum {
			source: e.source.clone(),
			target: e.target.clone(),
			line_style: LineStyle {
				color: Some(EDGE_COLOR.into()),
				width: Some(1.0),
				curveness: None,
			},
		})
		.collect();

	ChartOption {
		title: Title {
			text: "Product Space".into(),
			subtext: "Default layout".into(),
			top: "bottom",
			left: "right",
		},
		tooltip: Tooltip {
			show: true,
			trigger: "item",
		},
		legend: vec![Legend {
			data: colors.sectors().map(str::to_string).collect(),
		}],
		animation_duration: 1500,
		animation_easing_update: "quinticInOut",
		series: vec![GraphSeries {
			name: "Product Space".into(),
			kind: "graph",
			symbol_size: 4.0,
			legend_hover_link: false,
			layout: "none",
			roam: true,
			label: Label {
				position: "right",
				formatter: "{b}",
			},
			line_style: LineStyle {
				color: Some("source".into()),
				width: None,
				curveness: Some(0.0),
			},
			emphasis: Emphasis {
				focus: "adjacency",
				line_style: LineStyle {
					width: Some(EMPHASIS_EDGE_WIDTH),
					..Default::default()
				},
			},
			blur: Blur {
				item_style: ItemStyle {
					color: None,
					opacity: Some(BLUR_OPACITY),
				},
			},
			categories,
			data,
			edges,
		}],
	}
}
