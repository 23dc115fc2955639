//! Multi-select country filter.
//!
//! Picking an option adds it to the selection; each selected country shows as
//! a removable chip, and "Clear" empties the selection.

use crate::state::AppState;
use dioxus::prelude::*;
use gmd_view::ViewEvent;

const CHIP_STYLE: &str = "display: inline-flex; align-items: center; padding: 2px 8px; margin: 2px 4px 2px 0; border-radius: 12px; background: #e3f2fd; color: #2c3e50; font-size: 13px;";
const PLACEHOLDER_VALUE: &str = "";
const CHIP_BUTTON_STYLE: &str = "border: none; background: transparent; margin-left: 4px; cursor: pointer; color: #7f8c8d;";

#[component]
pub fn CountryFilter() -> Element {
    let mut state = use_context::<AppState>();
    let view = state.view();
    // Options stay alphabetical; already selected names are hidden
    let options = view.country_options(&state.countries.read());
    let has_selection = view.has_selection();
    let selected = view.countries;

    rsx! {
        div {
            class: "mb-4",
            label {
                r#for: "country-filter",
                class: "form-label fw-bold",
                "Filter by country"
            }
            div {
                style: "width: 100%; border-radius: 8px; border: 1px solid #dfe6e9; padding: 6px; display: flex; flex-wrap: wrap; align-items: center; gap: 4px;",
                for country in selected {
                    span {
                        key: "{country}",
                        style: CHIP_STYLE,
                        "{country}"
                        button {
                            style: CHIP_BUTTON_STYLE,
                            title: "Remove",
                            onclick: {
                                let country = country.clone();
                                move |_| {
                                    state.dispatch(ViewEvent::RemoveCountry(country.clone()));
                                }
                            },
                            "×"
                        }
                    }
                }
                // When the picked option leaves the list the browser falls
                // back to the first enabled option, so the placeholder must
                // stay enabled. Picking it adds nothing.
                select {
                    id: "country-filter",
                    style: "flex: 1; min-width: 200px; border: none; outline: none; background: transparent;",
                    onchange: move |evt: Event<FormData>| {
                        state.dispatch(ViewEvent::AddCountry(evt.value()));
                    },
                    option {
                        value: PLACEHOLDER_VALUE,
                        selected: true,
                        "Select one or more countries..."
                    }
                    for country in options {
                        option {
                            key: "{country}",
                            value: "{country}",
                            "{country}"
                        }
                    }
                }
                if has_selection {
                    button {
                        class: "btn btn-sm btn-outline-secondary",
                        onclick: move |_| {
                            state.dispatch(ViewEvent::ClearCountries);
                        },
                        "Clear"
                    }
                }
            }
        }
    }
}
