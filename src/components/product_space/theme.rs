//! Sector color table for product nodes.

use log::warn;

/// Color for any sector missing from the table.
pub const FALLBACK_COLOR: &str = "#ccc";

/// HS92 sector colors, in legend order.
pub const HS92_SECTOR_COLORS: [(&str, &str); 11] = [
	("product-HS92-1", "rgb(125, 218, 161)"),
	("product-HS92-2", "#F5CF23"),
	("product-HS92-3", "rgb(218, 180, 125)"),
	("product-HS92-4", "rgb(187, 150, 138)"),
	("product-HS92-5", "rgb(217, 123, 123)"),
	("product-HS92-6", "rgb(197, 123, 217)"),
	("product-HS92-7", "rgb(141, 123, 216)"),
	("product-HS92-8", "rgb(123, 162, 217)"),
	("product-HS92-9", "rgb(125, 218, 218)"),
	("product-HS92-10", "#2a607c"),
	("product-HS92-14", "rgb(178, 61, 109)"),
];

/// Maps sector ids to CSS colors, with a named fallback.
///
/// Entries keep insertion order so the legend lists sectors the way the
/// table declares them.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorColors {
	entries: Vec<(String, String)>,
	fallback: String,
}

impl SectorColors {
	/// Table from `(sector id, color)` pairs in legend order.
	pub fn new(entries: impl IntoIterator<Item = (String, String)>, fallback: impl Into<String>) -> Self {
		Self {
			entries: entries.into_iter().collect(),
			fallback: fallback.into(),
		}
	}

	/// The HS92 table with [`FALLBACK_COLOR`].
	pub fn hs92() -> Self {
		Self::new(
			HS92_SECTOR_COLORS
				.iter()
				.map(|(k, v)| (k.to_string(), v.to_string())),
			FALLBACK_COLOR,
		)
	}

	/// Color for `sector`, or `None` if the table has no entry.
	pub fn get(&self, sector: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(k, _)| k == sector)
			.map(|(_, v)| v.as_str())
	}

	/// Color for `sector`, falling back (with a warning) when unmapped.
	pub fn resolve(&self, sector: &str) -> &str {
		match self.get(sector) {
			Some(color) => color,
			None => {
				warn!(
					"product-space: no color for sector {:?}, using {}",
					sector, self.fallback
				);
				&self.fallback
			}
		}
	}

	/// Color used for unmapped sectors.
	pub fn fallback(&self) -> &str {
		&self.fallback
	}

	/// Sector ids in table order.
	pub fn sectors(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(k, _)| k.as_str())
	}
}

impl Default for SectorColors {
	fn default() -> Self {
		Self::hs92()
	}
}
