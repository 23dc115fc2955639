//! Top-level tab strip.

use crate::state::AppState;
use dioxus::prelude::*;
use gmd_view::{Tab, ViewEvent};

const TAB_STYLE: &str = "border: none; background: transparent; padding: 12px 24px; font-weight: 600; color: #7f8c8d; border-bottom: 3px solid transparent; cursor: pointer;";
const TAB_SELECTED_STYLE: &str = "border: none; background: transparent; padding: 12px 24px; font-weight: 600; color: #3498db; border-bottom: 3px solid #3498db; cursor: pointer;";

/// Tab buttons. Switching dispatches [`ViewEvent::SelectTab`].
#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.tab)();
    let tabs: Vec<(Tab, &'static str, &'static str, &'static str)> = Tab::ALL
        .into_iter()
        .map(|tab| {
            let style = if tab == current { TAB_SELECTED_STYLE } else { TAB_STYLE };
            (tab, tab.id(), tab.label(), style)
        })
        .collect();

    rsx! {
        div {
            id: "tabs",
            role: "tablist",
            style: "display: flex; border-bottom: 1px solid #dfe6e9; margin-bottom: 30px;",
            for (tab, id, label, style) in tabs {
                button {
                    key: "{id}",
                    id: "{id}",
                    role: "tab",
                    style: "{style}",
                    onclick: move |_| {
                        state.dispatch(ViewEvent::SelectTab(tab));
                    },
                    "{label}"
                }
            }
        }
    }
}
