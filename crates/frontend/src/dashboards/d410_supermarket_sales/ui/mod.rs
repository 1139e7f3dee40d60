mod breakdown_panel;
mod dashboard;
mod filter_bar;
mod trend_chart;

pub use breakdown_panel::BreakdownPanel;
pub use dashboard::SupermarketSalesDashboard;
pub use filter_bar::FilterBar;
pub use trend_chart::TrendChart;
