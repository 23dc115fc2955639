//! The numeric indicators offered by the metric chooser.

use crate::record::{Column, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three chartable indicators.
///
/// Serializes to the dataset's column id (`pop`, `lifeExp`, `gdpPercap`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "pop")]
    Population,
    #[default]
    #[serde(rename = "lifeExp")]
    LifeExpectancy,
    #[serde(rename = "gdpPercap")]
    GdpPerCapita,
}

impl Metric {
    /// All metrics in the order the chooser lists them.
    pub const ALL: [Metric; 3] = [
        Metric::Population,
        Metric::LifeExpectancy,
        Metric::GdpPerCapita,
    ];

    /// Column id in the source CSV.
    pub fn column_id(self) -> &'static str {
        self.column().id()
    }

    /// Human readable label for radio buttons and axis titles.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Population => "Population",
            Metric::LifeExpectancy => "Life expectancy",
            Metric::GdpPerCapita => "GDP per capita",
        }
    }

    /// Table column backing this metric.
    pub fn column(self) -> Column {
        match self {
            Metric::Population => Column::Population,
            Metric::LifeExpectancy => Column::LifeExpectancy,
            Metric::GdpPerCapita => Column::GdpPerCapita,
        }
    }

    /// Read this metric off a record.
    pub fn value_of(self, record: &Record) -> f64 {
        match self {
            Metric::Population => record.population as f64,
            Metric::LifeExpectancy => record.life_expectancy,
            Metric::GdpPerCapita => record.gdp_per_capita,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_id())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.column_id() == s)
            .ok_or_else(|| format!("unknown metric '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chad() -> Record {
        Record {
            country: "Chad".to_string(),
            continent: "Africa".to_string(),
            year: 2007,
            life_expectancy: 50.651,
            population: 10_238_807,
            gdp_per_capita: 1704.063724,
        }
    }

    #[test]
    fn default_is_life_expectancy() {
        assert_eq!(Metric::default(), Metric::LifeExpectancy);
    }

    #[test]
    fn parses_column_ids() {
        assert_eq!("pop".parse::<Metric>().unwrap(), Metric::Population);
        assert_eq!("lifeExp".parse::<Metric>().unwrap(), Metric::LifeExpectancy);
        assert_eq!("gdpPercap".parse::<Metric>().unwrap(), Metric::GdpPerCapita);
        assert!("country".parse::<Metric>().is_err());
    }

    #[test]
    fn reads_value_from_record() {
        let r = chad();
        assert_eq!(Metric::Population.value_of(&r), 10_238_807.0);
        assert!((Metric::LifeExpectancy.value_of(&r) - 50.651).abs() < 1e-9);
        assert!((Metric::GdpPerCapita.value_of(&r) - 1704.063724).abs() < 1e-9);
    }

    #[test]
    fn displays_as_column_id() {
        assert_eq!(Metric::GdpPerCapita.to_string(), "gdpPercap");
        assert_eq!(Metric::Population.column(), Column::Population);
    }
}
