//! View-models for the Gapminder dashboard.
//!
//! Every function here is a pure projection from a read-only
//! [`gmd_db::Database`] and a view-state snapshot to a display artifact:
//! table rows, a bar chart, or a choropleth. Nothing mutates the dataset.
//! Figures are emitted as Plotly JSON for the JS bridge in `gmd-ui`.

pub mod chart;
pub mod color;
pub mod figure;
pub mod map;
pub mod state;
pub mod table;

pub use chart::{table_and_chart, Bar, ChartSpec, TableChartView};
pub use map::{map_view, MapSpec, Region};
pub use state::{Affected, Tab, ViewEvent, ViewState};
pub use table::{TablePage, TableQuery, PAGE_SIZE};
