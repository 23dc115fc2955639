//! The country/year observation row and its display columns.

use serde::{Deserialize, Serialize};

/// One country, one year snapshot.
///
/// Serializes with the dataset's own column ids so rows can be handed to the
/// table as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub country: String,
    pub continent: String,
    pub year: i32,
    #[serde(rename = "lifeExp")]
    pub life_expectancy: f64,
    #[serde(rename = "pop")]
    pub population: u64,
    #[serde(rename = "gdpPercap")]
    pub gdp_per_capita: f64,
}

/// A table column, in the order the source file lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "country")]
    Country,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "pop")]
    Population,
    #[serde(rename = "continent")]
    Continent,
    #[serde(rename = "lifeExp")]
    LifeExpectancy,
    #[serde(rename = "gdpPercap")]
    GdpPerCapita,
}

/// A single cell, typed so sorting and filtering can tell text from numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Country,
        Column::Year,
        Column::Population,
        Column::Continent,
        Column::LifeExpectancy,
        Column::GdpPerCapita,
    ];

    /// Column id as written in the CSV header.
    pub fn id(self) -> &'static str {
        match self {
            Column::Country => "country",
            Column::Year => "year",
            Column::Population => "pop",
            Column::Continent => "continent",
            Column::LifeExpectancy => "lifeExp",
            Column::GdpPerCapita => "gdpPercap",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Column::Country | Column::Continent)
    }
}

impl Record {
    /// Typed value of `column` for this row.
    pub fn cell(&self, column: Column) -> Cell<'_> {
        match column {
            Column::Country => Cell::Text(&self.country),
            Column::Continent => Cell::Text(&self.continent),
            Column::Year => Cell::Number(self.year as f64),
            Column::Population => Cell::Number(self.population as f64),
            Column::LifeExpectancy => Cell::Number(self.life_expectancy),
            Column::GdpPerCapita => Cell::Number(self.gdp_per_capita),
        }
    }

    /// Cell rendered for the table body.
    pub fn display(&self, column: Column) -> String {
        match column {
            Column::Country => self.country.clone(),
            Column::Continent => self.continent.clone(),
            Column::Year => self.year.to_string(),
            Column::Population => self.population.to_string(),
            Column::LifeExpectancy => self.life_expectancy.to_string(),
            Column::GdpPerCapita => self.gdp_per_capita.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn france() -> Record {
        Record {
            country: "France".to_string(),
            continent: "Europe".to_string(),
            year: 2007,
            life_expectancy: 80.657,
            population: 61_083_916,
            gdp_per_capita: 30470.0167,
        }
    }

    #[test]
    fn columns_follow_file_order() {
        let ids: Vec<&str> = Column::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["country", "year", "pop", "continent", "lifeExp", "gdpPercap"]);
    }

    #[test]
    fn only_country_and_continent_are_text() {
        let text: Vec<Column> = Column::ALL
            .into_iter()
            .filter(|c| !c.is_numeric())
            .collect();
        assert_eq!(text, vec![Column::Country, Column::Continent]);
    }

    #[test]
    fn cell_is_typed() {
        let r = france();
        assert_eq!(r.cell(Column::Country), Cell::Text("France"));
        assert_eq!(r.cell(Column::Year), Cell::Number(2007.0));
        assert_eq!(r.cell(Column::Population), Cell::Number(61_083_916.0));
    }

    #[test]
    fn display_renders_plain_values() {
        let r = france();
        assert_eq!(r.display(Column::Population), "61083916");
        assert_eq!(r.display(Column::LifeExpectancy), "80.657");
        assert_eq!(r.display(Column::Continent), "Europe");
    }
}
