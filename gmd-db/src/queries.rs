//! Typed query methods over the `records` table.
//!
//! Row-returning queries order by `row_idx`, so results keep the order of the
//! source file. Aggregates order continents by their first appearance, which
//! is also the order the charts assign continent colours in.

use crate::models::ContinentMean;
use crate::Database;
use gmd_core::{Metric, Record};
use rusqlite::{params_from_iter, Row};

const RECORD_COLUMNS: &str = "country, continent, year, life_exp, pop, gdp_percap";

/// SQL column holding `metric`.
fn metric_column(metric: Metric) -> &'static str {
    match metric {
        Metric::Population => "pop",
        Metric::LifeExpectancy => "life_exp",
        Metric::GdpPerCapita => "gdp_percap",
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        country: row.get(0)?,
        continent: row.get(1)?,
        year: row.get(2)?,
        life_expectancy: row.get(3)?,
        population: row.get::<_, i64>(4)? as u64,
        gdp_per_capita: row.get(5)?,
    })
}

impl Database {
    /// Number of records loaded.
    pub fn query_record_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Every record, in file order.
    pub fn query_records(&self) -> anyhow::Result<Vec<Record>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM records ORDER BY row_idx",
            RECORD_COLUMNS
        ))?;
        let rows = stmt
            .query_map([], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[GMD] query: query_records returned {} records", rows.len());
        Ok(rows)
    }

    /// Records whose country is one of `countries`, in file order.
    ///
    /// Names are matched exactly. An empty slice matches nothing; treating an
    /// empty selection as "everything" is the caller's policy.
    pub fn query_records_for_countries(&self, countries: &[String]) -> anyhow::Result<Vec<Record>> {
        if countries.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = vec!["?"; countries.len()].join(", ");
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM records WHERE country IN ({}) ORDER BY row_idx",
            RECORD_COLUMNS, placeholders
        ))?;
        let rows = stmt
            .query_map(params_from_iter(countries.iter()), record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GMD] query: query_records_for_countries({} names) returned {} records",
            countries.len(),
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct country names, alphabetically.
    pub fn query_countries(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT country FROM records ORDER BY country")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Distinct continents in order of first appearance.
    pub fn query_continents(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT continent FROM records
             GROUP BY continent
             ORDER BY MIN(row_idx)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Mean of `metric` per continent over the whole dataset.
    ///
    /// Continents come back in order of first appearance.
    pub fn query_continent_means(&self, metric: Metric) -> anyhow::Result<Vec<ContinentMean>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT continent, AVG({col}), COUNT(*)
             FROM records
             GROUP BY continent
             ORDER BY MIN(row_idx)",
            col = metric_column(metric)
        ))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ContinentMean {
                    continent: row.get(0)?,
                    mean: row.get(1)?,
                    count: row.get::<_, i64>(2)? as usize,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GMD] query: query_continent_means({}) returned {} continents",
            metric,
            rows.len()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_country_db() -> Database {
        let db = Database::new().unwrap();
        db.load_records(include_str!("../../fixtures/three_countries.csv"))
            .unwrap();
        db
    }

    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        db.load_records(include_str!("../../fixtures/gapminder_sample.csv"))
            .unwrap();
        db
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.country.as_str()).collect()
    }

    #[test]
    fn query_records_keeps_file_order() {
        let db = three_country_db();
        let records = db.query_records().unwrap();
        assert_eq!(names(&records), vec!["France", "Germany", "Chad"]);
        assert_eq!(records[1].population, 82_400_996);
        assert!((records[2].gdp_per_capita - 900.0).abs() < 0.01);
    }

    #[test]
    fn query_records_for_countries_keeps_file_order() {
        let db = three_country_db();
        // Selection order must not leak into the result order
        let selected = vec!["Chad".to_string(), "France".to_string()];
        let records = db.query_records_for_countries(&selected).unwrap();
        assert_eq!(names(&records), vec!["France", "Chad"]);
    }

    #[test]
    fn query_records_for_countries_ignores_unknown_names() {
        let db = three_country_db();
        let selected = vec!["Atlantis".to_string()];
        assert!(db.query_records_for_countries(&selected).unwrap().is_empty());
    }

    #[test]
    fn query_records_for_no_countries_is_empty() {
        let db = three_country_db();
        assert!(db.query_records_for_countries(&[]).unwrap().is_empty());
    }

    #[test]
    fn query_countries_is_alphabetical() {
        let db = three_country_db();
        assert_eq!(
            db.query_countries().unwrap(),
            vec!["Chad", "France", "Germany"]
        );
    }

    #[test]
    fn query_continents_in_first_appearance_order() {
        let db = sample_db();
        assert_eq!(
            db.query_continents().unwrap(),
            vec!["Asia", "Europe", "Africa", "Americas", "Oceania"]
        );
    }

    #[test]
    fn query_continent_means_gdp() {
        let db = three_country_db();
        let means = db.query_continent_means(Metric::GdpPerCapita).unwrap();
        assert_eq!(means.len(), 2);
        assert_eq!(means[0].continent, "Europe");
        assert!((means[0].mean - 30500.0).abs() < 1e-9);
        assert_eq!(means[0].count, 2);
        assert_eq!(means[1].continent, "Africa");
        assert!((means[1].mean - 900.0).abs() < 1e-9);
    }

    #[test]
    fn query_continent_means_population_is_real() {
        let db = three_country_db();
        let means = db.query_continent_means(Metric::Population).unwrap();
        assert!((means[0].mean - (61_083_916.0 + 82_400_996.0) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn continent_means_do_not_depend_on_row_order() {
        let db = sample_db();
        let mut reversed = db.query_records().unwrap();
        reversed.reverse();
        let permuted = Database::new().unwrap();
        permuted.insert_records(&reversed).unwrap();

        for metric in Metric::ALL {
            let mut a = db.query_continent_means(metric).unwrap();
            let mut b = permuted.query_continent_means(metric).unwrap();
            a.sort_by(|x, y| x.continent.cmp(&y.continent));
            b.sort_by(|x, y| x.continent.cmp(&y.continent));
            assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(b.iter()) {
                assert_eq!(x.continent, y.continent);
                assert!(
                    (x.mean - y.mean).abs() <= 1e-9 * x.mean.abs().max(1.0),
                    "{} mean differs for {}",
                    metric,
                    x.continent
                );
            }
        }
    }

    #[test]
    fn queries_leave_rows_untouched() {
        let db = sample_db();
        let before = db.query_records().unwrap();
        db.query_continent_means(Metric::LifeExpectancy).unwrap();
        db.query_records_for_countries(&["Benin".to_string()]).unwrap();
        assert_eq!(db.query_records().unwrap(), before);
    }
}
