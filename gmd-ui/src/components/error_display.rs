//! Fatal error panel shown in place of the dashboard.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Bootstrap danger card with the failure cause.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "card p-4 mb-4",
            role: "alert",
            style: "border-radius: 10px; box-shadow: 0 4px 6px rgba(0,0,0,0.05); border: none; border-left: 4px solid #e74c3c; color: #2c3e50;",
            h5 {
                class: "mb-2",
                style: "color: #e74c3c; font-weight: 600;",
                i { class: "fas fa-triangle-exclamation me-2" }
                "The dataset could not be loaded"
            }
            p {
                class: "mb-0",
                style: "font-family: monospace; font-size: 13px; white-space: pre-wrap;",
                "{props.message}"
            }
        }
    }
}
