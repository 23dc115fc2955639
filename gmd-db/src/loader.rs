//! Loading parsed records into the database.
//!
//! CSV parsing lives in [`gmd_core::parse`]; this module only inserts rows.
//! Each row is stored with its position so queries can restore file order.

use crate::Database;
use gmd_core::parse::parse_records;
use gmd_core::Record;
use rusqlite::params;

impl Database {
    /// Parse the dataset CSV and append its rows.
    ///
    /// Returns the number of rows inserted. Nothing is inserted if any row
    /// fails to parse.
    pub fn load_records(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = parse_records(csv_data)?;
        self.insert_records(&records)
    }

    /// Append already-parsed records, continuing the row numbering.
    pub fn insert_records(&self, records: &[Record]) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        let next_idx: i64 =
            tx.query_row("SELECT COALESCE(MAX(row_idx) + 1, 0) FROM records", [], |row| {
                row.get(0)
            })?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO records (row_idx, country, continent, year, life_exp, pop, gdp_percap)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for (offset, r) in records.iter().enumerate() {
                stmt.execute(params![
                    next_idx + offset as i64,
                    r.country,
                    r.continent,
                    r.year,
                    r.life_expectancy,
                    r.population as i64,
                    r.gdp_per_capita,
                ])?;
            }
        }
        tx.commit()?;

        log::info!("[GMD] loader: Loaded {} records", records.len());
        Ok(records.len())
    }
}
