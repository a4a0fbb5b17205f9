//! ECharts widget for Leptos.
//!
//! Wraps an ECharts instance (loaded as the global `echarts` script) in a
//! component that owns the instance lifecycle:
//! - Initialization on mount with [`ChartSettings`]
//! - Option updates driven by a reactive signal
//! - Debounced `resize` on surface size changes
//! - Disposal of the chart, observer and timers on cleanup
//!
//! # Example
//!
//! ```ignore
//! use product_space::components::echart::{ChartEvent, EChart};
//!
//! let events = vec![ChartEvent::new("click", |params| log::info!("{:?}", params))];
//! view! { <EChart option=option events=events /> }
//! ```

mod bindings;
mod component;
pub mod debounce;
pub mod settings;

pub use bindings::{Chart, to_js};
pub use component::{ChartEvent, EChart};
pub use debounce::{BrowserTimers, Debouncer, RESIZE_DEBOUNCE, TimerHost};
pub use settings::{ChartSettings, Renderer, SetOptionSettings, SurfaceStyle};
