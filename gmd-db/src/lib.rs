//! In-memory SQLite store for the Gapminder country indicators.
//!
//! The dataset is fetched once, parsed by `gmd-core`, and inserted into an
//! in-memory SQLite database. After loading, the store is only read: every
//! view-model takes a [`Database`] handle and projects it into a display
//! artifact without touching the rows.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - `row_idx` keeps each record's position in the source file so every query
//!   can return rows in original order
//! - Typed query methods returning [`gmd_core::Record`] or structs from [`models`]
//!
//! # Usage
//!
//! ```rust
//! use gmd_core::Metric;
//! use gmd_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_records("country,year,pop,continent,lifeExp,gdpPercap\nChad,2007,10238807,Africa,50,900\n").unwrap();
//!
//! let countries = db.query_countries().unwrap();
//! let means = db.query_continent_means(Metric::GdpPerCapita).unwrap();
//! assert_eq!(countries, vec!["Chad".to_string()]);
//! assert_eq!(means.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the indicators dataset.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
///
/// # Example
///
/// ```rust
/// use gmd_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_records("country,year,pop,continent,lifeExp,gdpPercap\nFrance,2007,61083916,Europe,80.657,30470.0167\n").unwrap();
/// assert_eq!(db.query_record_count().unwrap(), 1);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`load_records`](Self::load_records)
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
