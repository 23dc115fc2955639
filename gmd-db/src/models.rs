//! Query result model structs.
//!
//! Full rows come back as [`gmd_core::Record`]; aggregates use the structs here.

use serde::Serialize;

/// Arithmetic mean of one metric over every record of a continent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContinentMean {
    /// Continent label as written in the dataset.
    pub continent: String,
    /// Mean of the metric across the continent's records.
    pub mean: f64,
    /// Number of records averaged.
    pub count: usize,
}
