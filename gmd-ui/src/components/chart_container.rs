//! White rounded panel that Plotly draws a figure into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id passed to `js_bridge::render_figure`
    pub id: String,
    /// Figure height in pixels
    #[props(default = 500)]
    pub height: u32,
}

fn graph_style(height: u32) -> String {
    format!(
        "height: {}px; border-radius: 10px; box-shadow: 0 4px 6px rgba(0,0,0,0.05); padding: 15px; background-color: white;",
        height
    )
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = graph_style(props.height);
    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_style_carries_height() {
        assert!(graph_style(700).starts_with("height: 700px;"));
    }
}
