//! Section heading with a Font Awesome icon.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    /// Section title
    pub title: String,
    /// Font Awesome classes, e.g. "fas fa-table"
    #[props(default = String::new())]
    pub icon: String,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    let icon_class = format!("{} me-2", props.icon);
    rsx! {
        h4 {
            class: "mb-3",
            if !props.icon.is_empty() {
                i { class: "{icon_class}" }
            }
            "{props.title}"
        }
    }
}
