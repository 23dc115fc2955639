//! Map view-model: countries coloured by their continent's mean GDP per capita.
//!
//! Only computed while the map tab is showing; for any other tab it returns
//! [`MapSpec::empty`]. Country names are passed to Plotly's `country names`
//! lookup as-is; names it does not know render unfilled.

use crate::color::{normalize, viridis};
use crate::figure::{empty_figure, FONT_FAMILY};
use crate::state::Tab;
use gmd_core::Metric;
use gmd_db::Database;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;

/// One choropleth region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub country: String,
    pub continent: String,
    /// Mean GDP per capita of the country's continent.
    pub continent_mean: f64,
    /// Viridis colour for `continent_mean`, as `#rrggbb`.
    pub color: String,
}

/// Choropleth specification.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct MapSpec {
    pub regions: Vec<Region>,
    /// Lower bound of the colour scale.
    pub zmin: f64,
    /// Upper bound of the colour scale.
    pub zmax: f64,
}

/// Build the map for `tab`. Any tab other than [`Tab::Map`] yields an empty spec.
pub fn map_view(db: &Database, tab: Tab) -> anyhow::Result<MapSpec> {
    if tab != Tab::Map {
        return Ok(MapSpec::empty());
    }

    let means = db.query_continent_means(Metric::GdpPerCapita)?;
    let zmin = means.iter().map(|m| m.mean).fold(f64::INFINITY, f64::min);
    let zmax = means.iter().map(|m| m.mean).fold(f64::NEG_INFINITY, f64::max);
    let by_continent: HashMap<&str, f64> = means
        .iter()
        .map(|m| (m.continent.as_str(), m.mean))
        .collect();

    let mut regions = Vec::new();
    for record in db.query_records()? {
        // Every record's continent was aggregated above
        let Some(&mean) = by_continent.get(record.continent.as_str()) else {
            continue;
        };
        regions.push(Region {
            color: viridis(normalize(mean, zmin, zmax)),
            country: record.country,
            continent: record.continent,
            continent_mean: mean,
        });
    }

    log::info!("[GMD] map: built {} regions", regions.len());
    if regions.is_empty() {
        return Ok(MapSpec::empty());
    }
    Ok(MapSpec {
        regions,
        zmin,
        zmax,
    })
}

impl MapSpec {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Plotly choropleth figure. An empty spec gives an empty figure.
    pub fn to_figure(&self) -> Value {
        if self.is_empty() {
            return empty_figure();
        }

        let locations: Vec<&str> = self.regions.iter().map(|r| r.country.as_str()).collect();
        let z: Vec<f64> = self.regions.iter().map(|r| r.continent_mean).collect();
        let continents: Vec<&str> = self.regions.iter().map(|r| r.continent.as_str()).collect();

        json!({
            "data": [{
                "type": "choropleth",
                "locations": locations,
                "locationmode": "country names",
                "z": z,
                "zmin": self.zmin,
                "zmax": self.zmax,
                "colorscale": "Viridis",
                "customdata": continents,
                "hovertext": locations,
                "hovertemplate": "<b>%{hovertext}</b><br>continent=%{customdata}<br>Mean GDP per capita by continent=%{z:.2f}<extra></extra>",
                "colorbar": { "title": { "text": "Mean GDP" }, "thickness": 20, "len": 0.75 },
            }],
            "layout": {
                "title": { "text": "<b>Mean GDP per capita by continent</b>", "x": 0.5 },
                "width": 1400,
                "height": 700,
                "geo": {
                    "showframe": false,
                    "showcoastlines": true,
                    "projection": { "type": "equirectangular" },
                },
                "margin": { "r": 0, "t": 80, "l": 0, "b": 0 },
                "font": { "family": FONT_FAMILY },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_country_db() -> Database {
        let db = Database::new().unwrap();
        db.load_records(include_str!("../../fixtures/three_countries.csv"))
            .unwrap();
        db
    }

    #[test]
    fn other_tab_is_a_no_op() {
        let db = three_country_db();
        let spec = map_view(&db, Tab::TableAndChart).unwrap();
        assert!(spec.is_empty());
        assert_eq!(spec.to_figure(), empty_figure());
    }

    #[test]
    fn every_country_inherits_its_continent_mean() {
        let db = three_country_db();
        let spec = map_view(&db, Tab::Map).unwrap();
        assert_eq!(spec.regions.len(), 3);

        let france = &spec.regions[0];
        let germany = &spec.regions[1];
        let chad = &spec.regions[2];
        assert_eq!(france.country, "France");
        assert!((france.continent_mean - 30500.0).abs() < 1e-9);
        assert!((germany.continent_mean - 30500.0).abs() < 1e-9);
        assert!((chad.continent_mean - 900.0).abs() < 1e-9);
    }

    #[test]
    fn same_continent_same_colour() {
        let db = three_country_db();
        let spec = map_view(&db, Tab::Map).unwrap();
        assert_eq!(spec.regions[0].color, spec.regions[1].color);
        assert_ne!(spec.regions[0].color, spec.regions[2].color);
        // Highest mean at the top of the scale, lowest at the bottom
        assert_eq!(spec.regions[0].color, "#fde725");
        assert_eq!(spec.regions[2].color, "#440154");
    }

    #[test]
    fn recomputing_is_idempotent() {
        let db = three_country_db();
        let first = map_view(&db, Tab::Map).unwrap();
        let _ = map_view(&db, Tab::TableAndChart).unwrap();
        let second = map_view(&db, Tab::Map).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_continent_uses_low_end() {
        let db = Database::new().unwrap();
        db.load_records("country,year,pop,continent,lifeExp,gdpPercap\nA,2007,1,Asia,1,100\nB,2007,1,Asia,1,300\n")
            .unwrap();
        let spec = map_view(&db, Tab::Map).unwrap();
        assert!(spec.regions.iter().all(|r| r.color == "#440154"));
        assert_eq!(spec.zmin, spec.zmax);
    }

    #[test]
    fn empty_database_gives_empty_map() {
        let db = Database::new().unwrap();
        assert!(map_view(&db, Tab::Map).unwrap().is_empty());
    }

    #[test]
    fn figure_uses_country_names_lookup() {
        let db = three_country_db();
        let fig = map_view(&db, Tab::Map).unwrap().to_figure();
        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["locationmode"], "country names");
        assert_eq!(trace["colorscale"], "Viridis");
        assert_eq!(trace["locations"], json!(["France", "Germany", "Chad"]));
        assert_eq!(trace["zmin"], json!(900.0));
        assert_eq!(trace["zmax"], json!(30500.0));
        assert_eq!(fig["layout"]["geo"]["projection"]["type"], "equirectangular");
    }
}
