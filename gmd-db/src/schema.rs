//! SQL schema for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// One table, `records`, holds the dataset. `row_idx` is the zero-based
/// position of the row in the source file and doubles as the primary key.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS records (
        row_idx INTEGER PRIMARY KEY,
        country TEXT NOT NULL,
        continent TEXT NOT NULL,
        year INTEGER NOT NULL,
        life_exp REAL NOT NULL,
        pop INTEGER NOT NULL,
        gdp_percap REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_records_country ON records(country);
    CREATE INDEX IF NOT EXISTS idx_records_continent ON records(continent);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_table_and_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for (kind, name) in [
            ("table", "records"),
            ("index", "idx_records_country"),
            ("index", "idx_records_continent"),
        ] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name = ?2",
                    [kind, name],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "{} '{}' should exist", kind, name);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
