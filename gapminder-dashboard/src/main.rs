//! Gapminder 2007 analytics dashboard
//!
//! One page, two tabs: a filterable table with a bar chart, and a world map
//! of mean GDP per capita by continent. Charts are drawn by Plotly.js.
//!
//! Data flow:
//! 1. On mount: fetch the CSV, load it into the in-memory database and
//!    fill the country options and continent colours.
//! 2. On tab / selection / metric change: recompute table rows and the
//!    chart figure, then re-render via Plotly.
//! 3. On tab change: recompute the map figure when the map tab is active.

use dioxus::prelude::*;
use gmd_db::Database;
use gmd_ui::components::{
    Card, ChartContainer, CountryFilter, DashboardHeader, DataTable, ErrorDisplay,
    LoadingSpinner, MetricSelector, SectionHeader, TabBar,
};
use gmd_ui::js_bridge;
use gmd_ui::state::AppState;
use gmd_view::color::ContinentColors;
use gmd_view::{map_view, table_and_chart, Tab};

/// DOM id for the bar chart container div.
const INDICATOR_CHART_ID: &str = "indicator-chart";
/// DOM id for the choropleth container div.
const MAP_CHART_ID: &str = "gdp-map";

const INDICATOR_CHART_HEIGHT: u32 = 500;
const MAP_CHART_HEIGHT: u32 = 700;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

/// Fetch the dataset and load it into a fresh in-memory database.
async fn load_dataset(url: &str) -> anyhow::Result<Database> {
    let csv_text = js_bridge::fetch_text(url).await?;
    let db = Database::new()?;
    let count = db.load_records(&csv_text)?;
    log::info!("[GMD] dataset ready: {} records", count);
    Ok(db)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Fetch and load the dataset once on mount ───
    use_effect(move || {
        js_bridge::init_charts();

        spawn(async move {
            let loaded = load_dataset(gmd_core::DATASET_URL).await.and_then(|db| {
                let countries = db.query_countries()?;
                let continents = db.query_continents()?;
                Ok((db, countries, continents))
            });

            match loaded {
                Ok((db, countries, continents)) => {
                    state.countries.set(countries);
                    state.continent_colors.set(ContinentColors::new(&continents));
                    state.db.set(Some(db));
                }
                Err(e) => {
                    log::error!("[GMD] failed to load dataset: {:#}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load dataset: {:#}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // ─── Effect 2: Table rows and bar chart ───
    // Re-runs whenever the dataset, tab, selection or metric change.
    use_effect(move || {
        let tab = (state.tab)();
        let countries = (state.selected_countries)();
        let metric = (state.metric)();
        let Some(db) = state.db.read().clone() else {
            return;
        };
        if tab != Tab::TableAndChart {
            return;
        }

        match table_and_chart(&db, &countries, metric) {
            Ok(view) => {
                let figure = view.chart.to_figure(&state.continent_colors.peek());
                state.table_rows.set(view.rows);
                js_bridge::render_figure(INDICATOR_CHART_ID, &figure.to_string());
            }
            Err(e) => {
                log::error!("[GMD] table/chart view failed: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
    });

    // ─── Effect 3: Choropleth map ───
    use_effect(move || {
        let tab = (state.tab)();
        let Some(db) = state.db.read().clone() else {
            return;
        };

        match map_view(&db, tab) {
            Ok(spec) if spec.is_empty() => js_bridge::purge_figure(MAP_CHART_ID),
            Ok(spec) => js_bridge::render_figure(MAP_CHART_ID, &spec.to_figure().to_string()),
            Err(e) => {
                log::error!("[GMD] map view failed: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
    });

    // ─── Render ───
    let loaded = state.db.read().is_some();
    let tab = (state.tab)();

    rsx! {
        div {
            style: "padding: 20px; font-family: Roboto, sans-serif; max-width: 1400px; margin: 0 auto;",

            DashboardHeader {
                title: "Analytics Dashboard".to_string(),
                subtitle: "Interactive view of world socio-economic indicators".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if loaded {
                TabBar {}
                if tab == Tab::TableAndChart {
                    TableAndChartTab {}
                } else {
                    MapTab {}
                }
            }
        }
    }
}

/// Filters, data table and bar chart.
#[component]
fn TableAndChartTab() -> Element {
    rsx! {
        Card {
            CountryFilter {}
            MetricSelector {}
        }
        Card {
            SectionHeader { title: "Detailed data".to_string(), icon: "fas fa-table".to_string() }
            DataTable {}
        }
        Card {
            SectionHeader { title: "Visualization".to_string(), icon: "fas fa-chart-bar".to_string() }
            ChartContainer {
                id: INDICATOR_CHART_ID.to_string(),
                height: INDICATOR_CHART_HEIGHT,
            }
        }
    }
}

/// Full-width world map.
#[component]
fn MapTab() -> Element {
    rsx! {
        Card {
            SectionHeader {
                title: "Mean GDP per capita by continent".to_string(),
                icon: "fas fa-map".to_string(),
            }
            ChartContainer {
                id: MAP_CHART_ID.to_string(),
                height: MAP_CHART_HEIGHT,
            }
        }
    }
}
