use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Gradient banner at the top of the page.
#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    rsx! {
        div {
            class: "row",
            div {
                style: "background: linear-gradient(135deg, #2c3e50 0%, #3498db 100%); color: white; padding: 25px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); margin-bottom: 30px;",
                h1 {
                    class: "mb-2",
                    style: "font-weight: 700; font-size: 2.5rem; text-align: center; margin-bottom: 0;",
                    i { class: "fas fa-chart-line me-3" }
                    "{props.title}"
                }
                if !props.subtitle.is_empty() {
                    p {
                        style: "text-align: center; font-size: 1.1rem; opacity: 0.9; margin-top: 10px;",
                        "{props.subtitle}"
                    }
                }
            }
        }
    }
}
