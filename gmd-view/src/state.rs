//! Dashboard view state and its transitions.
//!
//! All transitions come from direct user input. [`ViewState::apply`] reports
//! which part of the page has to be recomputed so the UI only redraws that
//! subtree.

use crate::table::TableQuery;
use gmd_core::Metric;
use serde::{Deserialize, Serialize};

/// The two top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    #[serde(rename = "tab-1")]
    TableAndChart,
    #[serde(rename = "tab-2")]
    Map,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::TableAndChart, Tab::Map];

    pub fn id(self) -> &'static str {
        match self {
            Tab::TableAndChart => "tab-1",
            Tab::Map => "tab-2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::TableAndChart => "Data & Analysis",
            Tab::Map => "World Map",
        }
    }
}

/// A user input event.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    SelectTab(Tab),
    AddCountry(String),
    RemoveCountry(String),
    ClearCountries,
    SelectMetric(Metric),
}

impl ViewEvent {
    /// True for events that edit the selected countries.
    pub fn edits_selection(&self) -> bool {
        matches!(
            self,
            ViewEvent::AddCountry(_) | ViewEvent::RemoveCountry(_) | ViewEvent::ClearCountries
        )
    }
}

/// Which subtree an event invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affected {
    /// Nothing changed.
    None,
    /// The tab switched; the new tab's content must be rebuilt.
    Tab,
    /// Table rows and chart must be recomputed.
    TableAndChart,
}

/// Snapshot of the three user-controlled inputs.
///
/// `countries` keeps selection order for display; an empty list means no
/// filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub tab: Tab,
    pub countries: Vec<String>,
    pub metric: Metric,
}

impl ViewState {
    pub fn has_selection(&self) -> bool {
        !self.countries.is_empty()
    }

    pub fn is_selected(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    /// Filter options: `all` minus the countries already selected, order kept.
    pub fn country_options(&self, all: &[String]) -> Vec<String> {
        all.iter()
            .filter(|c| !self.is_selected(c))
            .cloned()
            .collect()
    }

    /// Apply `event`, sending the table back to its first page when the
    /// selection actually changed.
    pub fn apply_with_table(&mut self, event: ViewEvent, table: &mut TableQuery) -> Affected {
        let edits_selection = event.edits_selection();
        let affected = self.apply(event);
        if edits_selection && affected == Affected::TableAndChart {
            table.reset_page();
        }
        affected
    }

    /// Apply one event and report what needs redrawing.
    pub fn apply(&mut self, event: ViewEvent) -> Affected {
        match event {
            ViewEvent::SelectTab(tab) => {
                if self.tab == tab {
                    return Affected::None;
                }
                self.tab = tab;
                Affected::Tab
            }
            ViewEvent::AddCountry(country) => {
                if country.is_empty() || self.is_selected(&country) {
                    return Affected::None;
                }
                self.countries.push(country);
                Affected::TableAndChart
            }
            ViewEvent::RemoveCountry(country) => {
                let before = self.countries.len();
                self.countries.retain(|c| *c != country);
                if self.countries.len() == before {
                    Affected::None
                } else {
                    Affected::TableAndChart
                }
            }
            ViewEvent::ClearCountries => {
                if self.countries.is_empty() {
                    return Affected::None;
                }
                self.countries.clear();
                Affected::TableAndChart
            }
            ViewEvent::SelectMetric(metric) => {
                if self.metric == metric {
                    return Affected::None;
                }
                self.metric = metric;
                Affected::TableAndChart
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = ViewState::default();
        assert_eq!(state.tab, Tab::TableAndChart);
        assert!(state.countries.is_empty());
        assert_eq!(state.metric, Metric::LifeExpectancy);
    }

    #[test]
    fn add_country_is_deduplicated() {
        let mut state = ViewState::default();
        assert_eq!(state.apply(ViewEvent::AddCountry("France".into())), Affected::TableAndChart);
        assert_eq!(state.apply(ViewEvent::AddCountry("France".into())), Affected::None);
        assert_eq!(state.countries, vec!["France"]);
    }

    #[test]
    fn selection_keeps_insertion_order() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::AddCountry("Germany".into()));
        state.apply(ViewEvent::AddCountry("Chad".into()));
        state.apply(ViewEvent::AddCountry("France".into()));
        state.apply(ViewEvent::RemoveCountry("Chad".into()));
        assert_eq!(state.countries, vec!["Germany", "France"]);
    }

    #[test]
    fn removing_unknown_country_is_a_no_op() {
        let mut state = ViewState::default();
        assert_eq!(state.apply(ViewEvent::RemoveCountry("Chad".into())), Affected::None);
    }

    #[test]
    fn clear_empties_selection() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::AddCountry("Chad".into()));
        assert_eq!(state.apply(ViewEvent::ClearCountries), Affected::TableAndChart);
        assert!(!state.has_selection());
        assert_eq!(state.apply(ViewEvent::ClearCountries), Affected::None);
    }

    #[test]
    fn tab_switch_reports_tab() {
        let mut state = ViewState::default();
        assert_eq!(state.apply(ViewEvent::SelectTab(Tab::TableAndChart)), Affected::None);
        assert_eq!(state.apply(ViewEvent::SelectTab(Tab::Map)), Affected::Tab);
        assert_eq!(state.tab, Tab::Map);
    }

    #[test]
    fn metric_change_reports_table_and_chart() {
        let mut state = ViewState::default();
        assert_eq!(
            state.apply(ViewEvent::SelectMetric(Metric::LifeExpectancy)),
            Affected::None
        );
        assert_eq!(
            state.apply(ViewEvent::SelectMetric(Metric::Population)),
            Affected::TableAndChart
        );
    }

    #[test]
    fn empty_name_is_ignored() {
        let mut state = ViewState::default();
        assert_eq!(state.apply(ViewEvent::AddCountry(String::new())), Affected::None);
    }

    #[test]
    fn options_hide_selected_countries() {
        let all: Vec<String> = ["Chad", "France", "Germany"].iter().map(|s| s.to_string()).collect();
        let mut state = ViewState::default();
        assert_eq!(state.country_options(&all), all);

        state.apply(ViewEvent::AddCountry("France".into()));
        assert_eq!(state.country_options(&all), vec!["Chad", "Germany"]);
    }

    #[test]
    fn selection_change_resets_table_page() {
        let mut state = ViewState::default();
        let mut table = TableQuery {
            page: 3,
            ..TableQuery::default()
        };
        state.apply_with_table(ViewEvent::AddCountry("Chad".into()), &mut table);
        assert_eq!(table.page, 0);

        table.page = 2;
        state.apply_with_table(ViewEvent::RemoveCountry("Chad".into()), &mut table);
        assert_eq!(table.page, 0);
    }

    #[test]
    fn other_events_keep_table_page() {
        let mut state = ViewState::default();
        let mut table = TableQuery {
            page: 2,
            ..TableQuery::default()
        };
        state.apply_with_table(ViewEvent::SelectMetric(Metric::Population), &mut table);
        state.apply_with_table(ViewEvent::SelectTab(Tab::Map), &mut table);
        // Nothing selected, so clearing is a no-op
        state.apply_with_table(ViewEvent::ClearCountries, &mut table);
        assert_eq!(table.page, 2);
    }

    #[test]
    fn tab_ids_match_page_ids() {
        assert_eq!(Tab::TableAndChart.id(), "tab-1");
        assert_eq!(Tab::Map.id(), "tab-2");
    }
}
