//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The three view inputs (tab, selected countries, metric) live in separate
//! signals so an effect only re-runs when the input it reads changes. Input
//! handlers go through [`AppState::dispatch`], which applies the event to a
//! [`ViewState`] snapshot and writes back only what changed, table page
//! included.

use gmd_core::{Metric, Record};
use gmd_db::Database;
use gmd_view::color::ContinentColors;
use gmd_view::{Affected, Tab, TableQuery, ViewEvent, ViewState};
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Distinct country names, alphabetical, for the filter options
    pub countries: Signal<Vec<String>>,
    /// Continent colours assigned from the full dataset
    pub continent_colors: Signal<ContinentColors>,
    /// Active tab
    pub tab: Signal<Tab>,
    /// Selected countries in selection order (empty = no filter)
    pub selected_countries: Signal<Vec<String>>,
    /// Metric shown in the chart
    pub metric: Signal<Metric>,
    /// Rows currently feeding the table
    pub table_rows: Signal<Vec<Record>>,
    /// Table sort, filters and page
    pub table_query: Signal<TableQuery>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let defaults = ViewState::default();
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            countries: Signal::new(Vec::new()),
            continent_colors: Signal::new(ContinentColors::default()),
            tab: Signal::new(defaults.tab),
            selected_countries: Signal::new(defaults.countries),
            metric: Signal::new(defaults.metric),
            table_rows: Signal::new(Vec::new()),
            table_query: Signal::new(TableQuery::default()),
        }
    }

    /// Current view inputs, read without subscribing.
    pub fn snapshot(&self) -> ViewState {
        ViewState {
            tab: *self.tab.peek(),
            countries: self.selected_countries.peek().clone(),
            metric: *self.metric.peek(),
        }
    }

    /// Current view inputs; the calling component re-renders when they change.
    pub fn view(&self) -> ViewState {
        ViewState {
            tab: (self.tab)(),
            countries: (self.selected_countries)(),
            metric: (self.metric)(),
        }
    }

    /// Apply a user input event.
    pub fn dispatch(&mut self, event: ViewEvent) -> Affected {
        let mut view = self.snapshot();
        let mut table = self.table_query.peek().clone();
        let affected = view.apply_with_table(event, &mut table);
        log::info!("[GMD] dispatch: {:?}", affected);

        match affected {
            Affected::None => {}
            Affected::Tab => self.tab.set(view.tab),
            Affected::TableAndChart => {
                if *self.selected_countries.peek() != view.countries {
                    self.selected_countries.set(view.countries);
                }
                if *self.metric.peek() != view.metric {
                    self.metric.set(view.metric);
                }
                if *self.table_query.peek() != table {
                    self.table_query.set(table);
                }
            }
        }
        affected
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
