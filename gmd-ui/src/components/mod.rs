//! Reusable Dioxus RSX components for the dashboard.

mod card;
mod chart_container;
mod country_filter;
mod dashboard_header;
mod data_table;
mod error_display;
mod loading_spinner;
mod metric_selector;
mod section_header;
mod tab_bar;

pub use card::Card;
pub use chart_container::ChartContainer;
pub use country_filter::CountryFilter;
pub use dashboard_header::DashboardHeader;
pub use data_table::DataTable;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
pub use section_header::SectionHeader;
pub use tab_bar::TabBar;
