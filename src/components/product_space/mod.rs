//! Product space network visualization.
//!
//! Turns two static datasets into an ECharts graph option:
//! - Nodes without layout coordinates are dropped
//! - Surviving nodes are joined with product metadata by id
//! - Coordinates are rescaled into the window with uniform scale
//! - Nodes are colored by sector, edges drawn with a fixed style
//!
//! # Example
//!
//! ```ignore
//! use product_space::{NodesEdges, ProductCatalog, ProductSpace, ProductSpaceChart};
//!
//! let space = ProductSpace::new(
//!     NodesEdges::from_json(nodes_json)?,
//!     ProductCatalog::from_json(metadata_json)?,
//! );
//!
//! view! { <ProductSpaceChart data=Signal::derive(move || space.clone()) /> }
//! ```

mod component;
pub mod filter;
pub mod join;
pub mod option;
mod pipeline;
pub mod scale;
pub mod theme;
mod types;
pub mod viewport;

pub use component::ProductSpaceChart;
pub use option::{ChartOption, product_space_option};
pub use pipeline::ProductSpace;
pub use scale::{Viewport, scale_nodes_to_viewport};
pub use theme::{FALLBACK_COLOR, SectorColors};
pub use types::{DatasetError, Edge, GraphNode, NodesEdges, Product, ProductCatalog, RawNode, SectorRef};
