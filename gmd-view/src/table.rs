//! Client-side table interaction: filter, multi-column sort, pagination.
//!
//! Applied in that order by [`apply`]. The input rows are borrowed, never
//! reordered in place.
//!
//! # Filter syntax
//!
//! One expression per column, all active columns AND-ed:
//!
//! ```text
//! = v   != v   < v   <= v   > v   >= v   contains v
//! ```
//!
//! A bare value means `contains` on text columns and `=` on numeric columns.
//! Quotes around the value are stripped. An operator with no value, or a
//! non-numeric value for a numeric comparison, matches no rows.

use gmd_core::record::Cell;
use gmd_core::{Column, Record};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Rows per page.
pub const PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Contains,
}

/// A parsed column filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Compare(FilterOp, String),
    /// Syntactically broken; matches nothing.
    Invalid,
}

// Longest operators first so `>=` is not read as `>`.
const SYMBOL_OPS: [(&str, FilterOp); 6] = [
    (">=", FilterOp::Ge),
    ("<=", FilterOp::Le),
    ("!=", FilterOp::Ne),
    ("=", FilterOp::Eq),
    (">", FilterOp::Gt),
    ("<", FilterOp::Lt),
];

const WORD_OPS: [(&str, FilterOp); 7] = [
    ("contains", FilterOp::Contains),
    ("eq", FilterOp::Eq),
    ("ne", FilterOp::Ne),
    ("lt", FilterOp::Lt),
    ("le", FilterOp::Le),
    ("gt", FilterOp::Gt),
    ("ge", FilterOp::Ge),
];

impl Filter {
    /// Parse `expr` for `column`. Blank input yields `None` (no filter).
    pub fn parse(expr: &str, column: Column) -> Option<Filter> {
        let expr = expr.trim();
        if expr.is_empty() {
            return None;
        }

        let split = SYMBOL_OPS
            .iter()
            .find_map(|(sym, op)| expr.strip_prefix(*sym).map(|rest| (*op, rest)))
            .or_else(|| {
                WORD_OPS.iter().find_map(|(word, op)| {
                    expr.strip_prefix(*word)
                        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
                        .map(|rest| (*op, rest))
                })
            });

        let (op, operand) = match split {
            Some((op, rest)) => (op, rest),
            None if column.is_numeric() => (FilterOp::Eq, expr),
            None => (FilterOp::Contains, expr),
        };

        let operand = unquote(operand.trim());
        if operand.is_empty() {
            return Some(Filter::Invalid);
        }
        Some(Filter::Compare(op, operand.to_string()))
    }

    pub fn matches(&self, cell: &Cell<'_>) -> bool {
        let (op, operand) = match self {
            Filter::Invalid => return false,
            Filter::Compare(op, operand) => (*op, operand.as_str()),
        };

        match cell {
            Cell::Number(value) => {
                if op == FilterOp::Contains {
                    return value.to_string().contains(operand);
                }
                match operand.parse::<f64>() {
                    Ok(target) => compare(op, value.partial_cmp(&target)),
                    Err(_) => false,
                }
            }
            Cell::Text(text) => {
                if op == FilterOp::Contains {
                    return text.contains(operand);
                }
                compare(op, Some((*text).cmp(operand)))
            }
        }
    }
}

fn compare(op: FilterOp, ordering: Option<Ordering>) -> bool {
    let Some(ordering) = ordering else {
        return false;
    };
    match op {
        FilterOp::Eq => ordering == Ordering::Equal,
        FilterOp::Ne => ordering != Ordering::Equal,
        FilterOp::Lt => ordering == Ordering::Less,
        FilterOp::Le => ordering != Ordering::Greater,
        FilterOp::Gt => ordering == Ordering::Greater,
        FilterOp::Ge => ordering != Ordering::Less,
        FilterOp::Contains => false,
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Sort keys, filter expressions and current page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableQuery {
    /// Sort keys in click order; the first one is primary.
    pub sort: Vec<(Column, SortDirection)>,
    /// Raw filter text per column.
    pub filters: BTreeMap<Column, String>,
    pub page: usize,
}

impl TableQuery {
    /// Header click: ascending, then descending, then unsorted.
    pub fn toggle_sort(&mut self, column: Column) {
        match self.sort.iter().position(|(c, _)| *c == column) {
            None => self.sort.push((column, SortDirection::Ascending)),
            Some(i) => match self.sort[i].1 {
                SortDirection::Ascending => self.sort[i].1 = SortDirection::Descending,
                SortDirection::Descending => {
                    self.sort.remove(i);
                }
            },
        }
    }

    /// Position in the sort list and direction, if `column` is sorted.
    pub fn sort_of(&self, column: Column) -> Option<(usize, SortDirection)> {
        self.sort
            .iter()
            .position(|(c, _)| *c == column)
            .map(|i| (i, self.sort[i].1))
    }

    /// Replace the filter text for `column` and return to the first page.
    pub fn set_filter(&mut self, column: Column, expr: &str) {
        if expr.trim().is_empty() {
            self.filters.remove(&column);
        } else {
            self.filters.insert(column, expr.to_string());
        }
        self.reset_page();
    }

    /// Back to the first page.
    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    pub fn filter_text(&self, column: Column) -> &str {
        self.filters.get(&column).map(String::as_str).unwrap_or("")
    }

    fn parsed_filters(&self) -> Vec<(Column, Filter)> {
        self.filters
            .iter()
            .filter_map(|(col, expr)| Filter::parse(expr, *col).map(|f| (*col, f)))
            .collect()
    }
}

/// One page of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a Record>,
    /// Page actually shown, after clamping.
    pub page: usize,
    pub page_count: usize,
    /// Rows left after filtering.
    pub total_rows: usize,
}

impl TablePage<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }
}

/// Rows passing every filter in `query`, in input order.
pub fn filter_rows<'a>(rows: &'a [Record], query: &TableQuery) -> Vec<&'a Record> {
    let filters = query.parsed_filters();
    rows.iter()
        .filter(|r| filters.iter().all(|(col, f)| f.matches(&r.cell(*col))))
        .collect()
}

/// Stable multi-key sort; ties keep their current order.
pub fn sort_rows(rows: &mut [&Record], sort: &[(Column, SortDirection)]) {
    if sort.is_empty() {
        return;
    }
    rows.sort_by(|a, b| {
        for (col, dir) in sort {
            let ord = compare_cells(&a.cell(*col), &b.cell(*col));
            let ord = match dir {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}

fn compare_cells(a: &Cell<'_>, b: &Cell<'_>) -> Ordering {
    match (a, b) {
        (Cell::Number(x), Cell::Number(y)) => x.total_cmp(y),
        (Cell::Text(x), Cell::Text(y)) => x.cmp(y),
        (Cell::Number(_), Cell::Text(_)) => Ordering::Less,
        (Cell::Text(_), Cell::Number(_)) => Ordering::Greater,
    }
}

/// Filter, sort, then cut out the requested page.
pub fn apply<'a>(rows: &'a [Record], query: &TableQuery) -> TablePage<'a> {
    let mut visible = filter_rows(rows, query);
    sort_rows(&mut visible, &query.sort);

    let total_rows = visible.len();
    let page_count = total_rows.div_ceil(PAGE_SIZE).max(1);
    let page = query.page.min(page_count - 1);
    let start = page * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total_rows);

    TablePage {
        rows: visible[start..end].to_vec(),
        page,
        page_count,
        total_rows,
    }
}
