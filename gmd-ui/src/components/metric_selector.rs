//! Radio group choosing the charted metric.

use crate::state::AppState;
use dioxus::prelude::*;
use gmd_core::Metric;
use gmd_view::ViewEvent;

#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.metric)();
    let options: Vec<(Metric, &'static str, &'static str, bool)> = Metric::ALL
        .into_iter()
        .map(|m| (m, m.column_id(), m.label(), m == current))
        .collect();

    rsx! {
        div {
            label {
                class: "form-label fw-bold",
                "Metric to display"
            }
            div {
                style: "padding: 15px; border-radius: 8px; background-color: #f8f9fa; margin-bottom: 20px; display: flex; flex-wrap: wrap;",
                for (metric, id, label, checked) in options {
                    label {
                        key: "{id}",
                        style: "display: flex; align-items: center; margin-right: 20px; cursor: pointer;",
                        input {
                            r#type: "radio",
                            name: "metric",
                            value: "{id}",
                            checked: checked,
                            style: "margin-right: 8px;",
                            onchange: move |_| {
                                state.dispatch(ViewEvent::SelectMetric(metric));
                            },
                        }
                        "{label}"
                    }
                }
            }
        }
    }
}
