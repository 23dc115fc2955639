use dioxus::prelude::*;

/// White rounded panel grouping a section of the page.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        div {
            class: "card p-4 mb-4",
            style: "border-radius: 10px; box-shadow: 0 4px 6px rgba(0,0,0,0.05); border: none; margin-bottom: 20px;",
            {children}
        }
    }
}
