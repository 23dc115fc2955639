use dioxus::prelude::*;

/// Bootstrap spinner shown while the dataset is fetched.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "card p-4 mb-4",
            style: "border-radius: 10px; box-shadow: 0 4px 6px rgba(0,0,0,0.05); border: none; align-items: center;",
            div {
                class: "spinner-border",
                role: "status",
                style: "color: #3498db; width: 3rem; height: 3rem;",
                span { class: "visually-hidden", "Loading..." }
            }
            p {
                class: "mt-3 mb-0",
                style: "color: #7f8c8d;",
                "Fetching the Gapminder dataset"
            }
        }
    }
}
