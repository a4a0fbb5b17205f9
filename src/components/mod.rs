//! UI components: the ECharts host widget and the product space chart.

pub mod echart;
pub mod product_space;
