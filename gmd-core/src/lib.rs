//! Core types for the Gapminder dashboard.
//!
//! - `record`: the per-country [`Record`](record::Record) row and its table [`Column`](record::Column)s
//! - `metric`: the three numeric indicators a user can chart
//! - `parse`: CSV parsing of the published dataset
//! - `error`: the dataset error type

pub mod error;
pub mod metric;
pub mod parse;
pub mod record;

pub use error::{DatasetError, Result};
pub use metric::Metric;
pub use record::{Column, Record};

/// Published location of the 2007 snapshot used by the dashboard.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/gapminder2007.csv";
