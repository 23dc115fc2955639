//! CSV parsing for the indicators dataset.
//!
//! Expected format (with headers, any column order):
//!
//! ```text
//! country,year,pop,continent,lifeExp,gdpPercap
//! Afghanistan,2007,31889923.0,Asia,43.828,974.5803384
//! ```
//!
//! `pop` is published as a real number and is rounded to a whole population.

use crate::error::{DatasetError, Result};
use crate::record::Record;
use serde::Deserialize;

/// Headers that must be present in the file.
pub const REQUIRED_COLUMNS: [&str; 6] = ["country", "continent", "year", "lifeExp", "pop", "gdpPercap"];

#[derive(Debug, Deserialize)]
struct RawRecord {
    country: String,
    continent: String,
    year: i32,
    #[serde(rename = "lifeExp")]
    life_exp: f64,
    pop: f64,
    #[serde(rename = "gdpPercap")]
    gdp_percap: f64,
}

/// Parse the dataset CSV into records, preserving file order.
pub fn parse_records(csv_data: &str) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DatasetError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRecord = row.deserialize(Some(&headers))?;

        check_positive(line, "lifeExp", raw.life_exp)?;
        check_positive(line, "pop", raw.pop)?;
        check_positive(line, "gdpPercap", raw.gdp_percap)?;

        records.push(Record {
            country: raw.country,
            continent: raw.continent,
            year: raw.year,
            life_expectancy: raw.life_exp,
            population: raw.pop.round() as u64,
            gdp_per_capita: raw.gdp_percap,
        });
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }
    log::info!("[GMD] parse: parsed {} records", records.len());
    Ok(records)
}

fn check_positive(line: u64, field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DatasetError::InvalidValue { line, field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
country,year,pop,continent,lifeExp,gdpPercap
Afghanistan,2007,31889923.0,Asia,43.828,974.5803384
Albania,2007,3600523.0,Europe,76.423,5937.029526
";

    #[test]
    fn parses_canonical_layout() {
        let records = parse_records(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "Afghanistan");
        assert_eq!(records[0].continent, "Asia");
        assert_eq!(records[0].year, 2007);
        assert_eq!(records[0].population, 31_889_923);
        assert!((records[1].gdp_per_capita - 5937.029526).abs() < 1e-9);
    }

    #[test]
    fn columns_may_appear_in_any_order() {
        let csv = "\
continent,country,gdpPercap,lifeExp,pop,year
Africa,Chad,900,50,10238807,2007
";
        let records = parse_records(csv).unwrap();
        assert_eq!(records[0].country, "Chad");
        assert_eq!(records[0].population, 10_238_807);
    }

    #[test]
    fn trims_whitespace() {
        let csv = "country, year, pop, continent, lifeExp, gdpPercap\n France , 2007 , 61083916 , Europe , 80.657 , 30470.0167\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records[0].country, "France");
        assert_eq!(records[0].continent, "Europe");
    }

    #[test]
    fn rounds_fractional_population() {
        let csv = "country,year,pop,continent,lifeExp,gdpPercap\nX,2007,10.6,Asia,1,1\n";
        assert_eq!(parse_records(csv).unwrap()[0].population, 11);
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "country,year,pop,lifeExp,gdpPercap\nChad,2007,1,50,900\n";
        match parse_records(csv) {
            Err(DatasetError::MissingColumn(col)) => assert_eq!(col, "continent"),
            other => panic!("expected missing column, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_value_is_a_csv_error() {
        let csv = "country,year,pop,continent,lifeExp,gdpPercap\nChad,2007,lots,Africa,50,900\n";
        assert!(matches!(parse_records(csv), Err(DatasetError::CsvParse(_))));
    }

    #[test]
    fn negative_value_names_the_line() {
        let csv = "country,year,pop,continent,lifeExp,gdpPercap\nChad,2007,1,Africa,50,900\nMali,2007,1,Africa,-1,900\n";
        match parse_records(csv) {
            Err(DatasetError::InvalidValue { line, field, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(field, "lifeExp");
            }
            other => panic!("expected invalid value, got {:?}", other),
        }
    }

    #[test]
    fn header_only_file_is_empty() {
        let csv = "country,year,pop,continent,lifeExp,gdpPercap\n";
        assert!(matches!(parse_records(csv), Err(DatasetError::Empty)));
    }

    #[test]
    fn parses_fixture() {
        let records = parse_records(include_str!("../../fixtures/gapminder_sample.csv")).unwrap();
        assert_eq!(records.len(), 12);
        assert!(records.iter().all(|r| r.year == 2007));
    }
}
