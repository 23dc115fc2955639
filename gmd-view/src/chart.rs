//! Table/chart view-model.
//!
//! The table shows the filtered subset; the chart depends on whether anything
//! is selected:
//!
//! - selection non-empty: one bar per filtered record (country, metric value),
//!   coloured by continent;
//! - selection empty: one bar per continent holding the mean of the metric
//!   over the FULL dataset.
//!
//! Zero selected countries means "all rows" for the table but switches the
//! chart to continent means.

use crate::color::ContinentColors;
use crate::figure::{bar_layout, bar_marker};
use gmd_core::{Metric, Record};
use gmd_db::Database;
use serde::Serialize;
use serde_json::{json, Value};

/// One bar of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// X-axis category: a country or a continent.
    pub label: String,
    /// Colour group.
    pub continent: String,
    pub value: f64,
}

/// What the chart area should draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    /// A bar per selected record.
    CountryBars { metric: Metric, bars: Vec<Bar> },
    /// A bar per continent: the mean of `metric` across every record.
    ContinentMeans { metric: Metric, bars: Vec<Bar> },
}

/// Output of [`table_and_chart`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableChartView {
    /// Filtered subset, all columns, original order.
    pub rows: Vec<Record>,
    pub chart: ChartSpec,
}

/// Compute table rows and chart for the current selection and metric.
pub fn table_and_chart(
    db: &Database,
    countries: &[String],
    metric: Metric,
) -> anyhow::Result<TableChartView> {
    if countries.is_empty() {
        let rows = db.query_records()?;
        let bars = db
            .query_continent_means(metric)?
            .into_iter()
            .map(|m| Bar {
                label: m.continent.clone(),
                continent: m.continent,
                value: m.mean,
            })
            .collect();
        return Ok(TableChartView {
            rows,
            chart: ChartSpec::ContinentMeans { metric, bars },
        });
    }

    let rows = db.query_records_for_countries(countries)?;
    let bars = rows
        .iter()
        .map(|r| Bar {
            label: r.country.clone(),
            continent: r.continent.clone(),
            value: metric.value_of(r),
        })
        .collect();
    Ok(TableChartView {
        rows,
        chart: ChartSpec::CountryBars { metric, bars },
    })
}

impl ChartSpec {
    pub fn metric(&self) -> Metric {
        match self {
            ChartSpec::CountryBars { metric, .. } | ChartSpec::ContinentMeans { metric, .. } => {
                *metric
            }
        }
    }

    pub fn bars(&self) -> &[Bar] {
        match self {
            ChartSpec::CountryBars { bars, .. } | ChartSpec::ContinentMeans { bars, .. } => bars,
        }
    }

    pub fn title(&self) -> String {
        match self {
            ChartSpec::CountryBars { metric, .. } => {
                format!("<b>{}</b> for selected countries", metric)
            }
            ChartSpec::ContinentMeans { metric, .. } => {
                format!("<b>Average {}</b> by continent", metric)
            }
        }
    }

    fn x_title(&self) -> &'static str {
        match self {
            ChartSpec::CountryBars { .. } => "Country",
            ChartSpec::ContinentMeans { .. } => "Continent",
        }
    }

    /// Continents present in the bars, in order of first appearance.
    pub fn continents(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for bar in self.bars() {
            if !seen.contains(&bar.continent.as_str()) {
                seen.push(bar.continent.as_str());
            }
        }
        seen
    }

    /// Plotly figure: one trace per continent so the legend groups by colour.
    pub fn to_figure(&self, colors: &ContinentColors) -> Value {
        let metric = self.metric();
        let traces: Vec<Value> = self
            .continents()
            .into_iter()
            .map(|continent| {
                let (x, y): (Vec<&str>, Vec<f64>) = self
                    .bars()
                    .iter()
                    .filter(|b| b.continent == continent)
                    .map(|b| (b.label.as_str(), b.value))
                    .unzip();
                json!({
                    "type": "bar",
                    "name": continent,
                    "legendgroup": continent,
                    "x": x,
                    "y": y,
                    "marker": bar_marker(colors.color_for(continent)),
                    "hovertemplate": format!(
                        "continent={}<br>%{{x}}<br>{}=%{{y}}<extra></extra>",
                        continent,
                        metric.label()
                    ),
                })
            })
            .collect();

        json!({
            "data": traces,
            "layout": bar_layout(&self.title(), self.x_title(), metric.label(), "continent"),
        })
    }
}
