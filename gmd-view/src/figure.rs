//! Shared Plotly figure pieces.

use serde_json::{json, Value};

/// Font family used across the dashboard.
pub const FONT_FAMILY: &str = "Roboto";

/// Figure with no traces; Plotly renders it as an empty plot area.
pub fn empty_figure() -> Value {
    json!({ "data": [], "layout": {} })
}

/// Layout shared by both bar chart modes.
pub fn bar_layout(title: &str, x_title: &str, y_title: &str, legend_title: &str) -> Value {
    json!({
        "title": { "text": title, "x": 0.5, "font": { "size": 20 } },
        "xaxis": { "title": { "text": x_title } },
        "yaxis": { "title": { "text": y_title } },
        "legend": { "title": { "text": legend_title } },
        "barmode": "relative",
        "height": 500,
        "plot_bgcolor": "rgba(0,0,0,0)",
        "paper_bgcolor": "rgba(0,0,0,0)",
        "font": { "family": FONT_FAMILY, "color": "#2c3e50" },
        "hovermode": "closest",
        "margin": { "l": 40, "r": 40, "t": 80, "b": 40 },
    })
}

/// Marker style shared by bar traces.
pub fn bar_marker(color: &str) -> Value {
    json!({
        "color": color,
        "line": { "width": 1, "color": "white" },
    })
}
