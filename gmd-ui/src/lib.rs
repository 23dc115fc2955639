//! Shared Dioxus components and Plotly.js bridge for the Gapminder dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Plotly.js calls via `js_sys::eval()`, plus the dataset fetch
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (header, tabs, filters, table, chart containers)

pub mod js_bridge;
pub mod state;
pub mod components;
