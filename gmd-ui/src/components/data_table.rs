//! Paginated, sortable, filterable data table.
//!
//! Reads the rows and the [`TableQuery`](gmd_view::TableQuery) from
//! `AppState`; all sorting, filtering and paging happens in `gmd_view::table`.

use crate::state::AppState;
use dioxus::prelude::*;
use gmd_core::Column;
use gmd_view::table::SortDirection;

const HEADER_STYLE: &str = "background-color: #3498db; color: white; font-weight: bold; text-transform: uppercase; font-size: 13px; padding: 12px; text-align: left; cursor: pointer; user-select: none; border: 1px solid #f1f1f1;";
const FILTER_CELL_STYLE: &str = "padding: 4px; border: 1px solid #f1f1f1; background: white;";
const CELL_STYLE: &str = "text-align: left; padding: 12px; font-family: Roboto; font-size: 14px; border: 1px solid #f1f1f1; cursor: pointer;";
const ACTIVE_CELL_STYLE: &str = "text-align: left; padding: 12px; font-family: Roboto; font-size: 14px; border: 1px solid #3498db; cursor: pointer; background-color: rgba(52, 152, 219, 0.2);";
const EVEN_ROW_STYLE: &str = "background-color: white;";
const ODD_ROW_STYLE: &str = "background-color: #f8f9fa;";

/// Header label with a sort marker; the position is shown when several
/// columns are sorted.
fn header_label(column: Column, sort: Option<(usize, SortDirection)>, sort_len: usize) -> String {
    match sort {
        None => column.id().to_string(),
        Some((pos, dir)) => {
            let arrow = match dir {
                SortDirection::Ascending => "▲",
                SortDirection::Descending => "▼",
            };
            if sort_len > 1 {
                format!("{} {}{}", column.id(), arrow, pos + 1)
            } else {
                format!("{} {}", column.id(), arrow)
            }
        }
    }
}

fn cell_style(active: bool) -> &'static str {
    if active {
        ACTIVE_CELL_STYLE
    } else {
        CELL_STYLE
    }
}

#[component]
pub fn DataTable() -> Element {
    let mut state = use_context::<AppState>();
    // Clicked cell as (row key, column)
    let mut active_cell: Signal<Option<(String, Column)>> = use_signal(|| None);
    let active = active_cell();
    let rows = state.table_rows.read().clone();
    let query = (state.table_query)();
    let page = gmd_view::table::apply(&rows, &query);

    let headers: Vec<(Column, &'static str, String, String)> = Column::ALL
        .into_iter()
        .map(|c| {
            (
                c,
                c.id(),
                header_label(c, query.sort_of(c), query.sort.len()),
                query.filter_text(c).to_string(),
            )
        })
        .collect();

    let body: Vec<(String, &'static str, Vec<(Column, String, &'static str)>)> = page
        .rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let style = if i % 2 == 1 { ODD_ROW_STYLE } else { EVEN_ROW_STYLE };
            let key = format!("{}-{}", r.country, r.year);
            let cells = Column::ALL
                .into_iter()
                .map(|c| {
                    let is_active = active
                        .as_ref()
                        .is_some_and(|(k, col)| *k == key && *col == c);
                    (c, r.display(c), cell_style(is_active))
                })
                .collect();
            (key, style, cells)
        })
        .collect();

    let current_page = page.page;
    let page_label = format!("{} / {}", page.page + 1, page.page_count);
    let has_previous = page.has_previous();
    let has_next = page.has_next();
    let total_rows = page.total_rows;

    rsx! {
        div {
            style: "overflow-x: auto; border-radius: 10px; box-shadow: 0 4px 6px rgba(0,0,0,0.05);",
            table {
                id: "datatable",
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        for (column, id, label, _) in headers.iter().cloned() {
                            th {
                                key: "{id}",
                                style: HEADER_STYLE,
                                onclick: move |_| {
                                    state.table_query.write().toggle_sort(column);
                                },
                                "{label}"
                            }
                        }
                    }
                    tr {
                        for (column, id, _, filter) in headers.iter().cloned() {
                            th {
                                key: "filter-{id}",
                                style: FILTER_CELL_STYLE,
                                input {
                                    r#type: "text",
                                    placeholder: "filter data...",
                                    value: "{filter}",
                                    style: "width: 100%; border: none; font-size: 13px;",
                                    oninput: move |evt: Event<FormData>| {
                                        state.table_query.write().set_filter(column, &evt.value());
                                    },
                                }
                            }
                        }
                    }
                }
                tbody {
                    for (key, style, cells) in body {
                        tr {
                            key: "{key}",
                            style: style,
                            for (column, text, td_style) in cells {
                                td {
                                    style: td_style,
                                    onclick: {
                                        let key = key.clone();
                                        move |_| active_cell.set(Some((key.clone(), column)))
                                    },
                                    "{text}"
                                }
                            }
                        }
                    }
                }
            }
        }
        div {
            style: "display: flex; justify-content: flex-end; align-items: center; gap: 8px; margin-top: 8px; font-size: 13px; color: #2c3e50;",
            span { "{total_rows} rows" }
            button {
                class: "btn btn-sm btn-outline-secondary",
                disabled: !has_previous,
                onclick: move |_| {
                    state.table_query.write().page = current_page.saturating_sub(1);
                },
                "‹"
            }
            span { "{page_label}" }
            button {
                class: "btn btn-sm btn-outline-secondary",
                disabled: !has_next,
                onclick: move |_| {
                    state.table_query.write().page = current_page + 1;
                },
                "›"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsorted_header_is_plain_id() {
        assert_eq!(header_label(Column::LifeExpectancy, None, 0), "lifeExp");
    }

    #[test]
    fn single_sort_shows_arrow_only() {
        assert_eq!(
            header_label(Column::Population, Some((0, SortDirection::Ascending)), 1),
            "pop ▲"
        );
    }

    #[test]
    fn multi_sort_shows_position() {
        assert_eq!(
            header_label(Column::Country, Some((1, SortDirection::Descending)), 2),
            "country ▼2"
        );
    }

    #[test]
    fn active_cell_is_highlighted() {
        assert!(cell_style(true).contains("rgba(52, 152, 219, 0.2)"));
        assert!(cell_style(true).contains("border: 1px solid #3498db"));
        assert!(!cell_style(false).contains("rgba"));
    }
}
