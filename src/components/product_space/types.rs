//! Dataset records for the product space graph.
//!
//! Field names follow the camelCase keys used by the layout and metadata
//! documents, so the structs deserialize straight from the embedded JSON.
//! Descriptive fields accept `null` as well as absence and fall back to
//! their defaults.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reference to the sector a product belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorRef {
	/// Sector id, e.g. `product-HS92-2`. Used as the category key.
	#[serde(default, deserialize_with = "null_as_default")]
	pub product_id: String,
}

impl SectorRef {
	/// Reference the sector with the given id.
	pub fn new(product_id: impl Into<String>) -> Self {
		Self {
			product_id: product_id.into(),
		}
	}
}

/// A layout node as it appears in the nodes/edges document.
///
/// Coordinates may be absent or `null`; such nodes are dropped by
/// [`filter_nodes`](super::filter::filter_nodes).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
	/// Unique product id. Edges reference nodes by this id.
	pub product_id: String,
	/// Layout x coordinate, if placed.
	#[serde(default)]
	pub x: Option<f64>,
	/// Layout y coordinate, if placed.
	#[serde(default)]
	pub y: Option<f64>,
	/// Fallback display name when no product metadata matches.
	#[serde(default, deserialize_with = "null_as_default")]
	pub product_name: String,
	/// Fallback product code when no product metadata matches.
	#[serde(default, deserialize_with = "null_as_default")]
	pub product_code: String,
	/// Fallback sector when no product metadata matches.
	#[serde(default, deserialize_with = "null_as_default")]
	pub product_sector: SectorRef,
}

/// A node with definite layout coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
	/// Unique product id.
	pub product_id: String,
	/// Horizontal position, in layout-space or viewport-space depending on stage.
	pub x: f64,
	/// Vertical position, in layout-space or viewport-space depending on stage.
	pub y: f64,
	/// Display name shown in labels and tooltips.
	pub product_name: String,
	/// Product code shown in tooltips.
	pub product_code: String,
	/// Sector used for coloring and categories.
	pub product_sector: SectorRef,
}

/// Canonical product attributes from the metadata document.
///
/// Any other attributes present in the document are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
	/// Product id, matched against [`RawNode::product_id`].
	pub product_id: String,
	/// Canonical display name.
	#[serde(default, deserialize_with = "null_as_default")]
	pub product_name: String,
	/// Canonical product code (e.g. HS92 `0901`).
	#[serde(default, deserialize_with = "null_as_default")]
	pub product_code: String,
	/// Canonical sector.
	#[serde(default, deserialize_with = "null_as_default")]
	pub product_sector: SectorRef,
}

/// An undirected relatedness edge between two product ids.
///
/// Ids are not checked against the node set.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Edge {
	/// Source product id.
	pub source: String,
	/// Target product id.
	pub target: String,
}

/// The nodes/edges layout document: `{ "nodes": [...], "edges": [...] }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NodesEdges {
	/// Layout nodes, placed or not.
	#[serde(default)]
	pub nodes: Vec<RawNode>,
	/// Relatedness edges.
	#[serde(default)]
	pub edges: Vec<Edge>,
}

impl NodesEdges {
	/// Parse a nodes/edges document.
	pub fn from_json(text: &str) -> Result<Self, DatasetError> {
		serde_json::from_str(text).map_err(DatasetError::NodesEdges)
	}
}

/// The wrapped metadata document shape.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WrappedCatalog {
	product_hs92: Vec<Product>,
}

/// Product metadata keyed by `productId`.
#[derive(Clone, Debug, Default)]
pub struct ProductCatalog {
	/// Products in document order.
	pub products: Vec<Product>,
}

impl ProductCatalog {
	/// Parse either a bare `Product[]` or `{ "productHs92": Product[] }`.
	///
	/// The shape is picked from the first token, so a malformed document
	/// reports the concrete serde error for that shape.
	pub fn from_json(text: &str) -> Result<Self, DatasetError> {
		let products = if text.trim_start().starts_with('{') {
			serde_json::from_str::<WrappedCatalog>(text)
				.map_err(DatasetError::Products)?
				.product_hs92
		} else {
			serde_json::from_str::<Vec<Product>>(text).map_err(DatasetError::Products)?
		};
		Ok(Self { products })
	}
}

/// Failure to parse one of the static datasets.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
	/// The nodes/edges document is malformed.
	#[error("invalid nodes/edges document: {0}")]
	NodesEdges(#[source] serde_json::Error),
	/// The product metadata document is malformed.
	#[error("invalid product metadata document: {0}")]
	Products(#[source] serde_json::Error),
}
