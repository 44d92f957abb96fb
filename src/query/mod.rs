//! # Query Pipeline
//!
//! Stateless filter → sort → paginate over a snapshot of the product collection.
//! Nothing here touches the repository; callers hand in an owned `Vec<Product>`.

use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Numeric field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Quantity,
    Price,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Parameters of a list request after coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    /// Lowercased, trimmed needle; `None` disables filtering.
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub order: SortOrder,
    /// 1-based.
    pub page: usize,
    pub limit: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort_by: None,
            order: SortOrder::Asc,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ProductQuery {
    /// Builds a query from raw request values.
    ///
    /// `page` and `limit` fall back to their defaults when absent, non-numeric, zero or
    /// negative. A blank search term is treated as absent.
    pub fn from_raw(
        search: Option<&str>,
        sort_by: Option<SortField>,
        order: Option<SortOrder>,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> Self {
        Self {
            search: normalize_search(search),
            sort_by,
            order: order.unwrap_or_default(),
            page: positive_or(page, DEFAULT_PAGE),
            limit: positive_or(limit, DEFAULT_LIMIT),
        }
    }
}

/// One page of results plus the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

fn normalize_search(raw: Option<&str>) -> Option<String> {
    raw.map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

/// Parses a positive integer, otherwise returns `default`.
///
/// Accepts anything that parses as a number (`"2"`, `" 2 "`, `"2.0"`); fractional values
/// are truncated.
pub fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n >= 1.0)
        .map(|n| n as usize)
        .unwrap_or(default)
}

/// Runs the pipeline: filter by name, stable sort, then slice out the requested page.
pub fn apply(products: Vec<Product>, query: &ProductQuery) -> Page<Product> {
    let mut matched: Vec<Product> = match &query.search {
        Some(needle) => products
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(needle.as_str()))
            .collect(),
        None => products,
    };

    if let Some(field) = query.sort_by {
        // `sort_by` is stable; reversing the comparator keeps ties in snapshot order.
        matched.sort_by(|a, b| {
            let ordering = compare(a, b, field);
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    let total = matched.len();
    let start = query.page.saturating_sub(1).saturating_mul(query.limit);
    let items = matched
        .into_iter()
        .skip(start)
        .take(query.limit)
        .collect();

    Page { items, total }
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Quantity => a.quantity.total_cmp(&b.quantity),
        SortField::Price => a.price.total_cmp(&b.price),
    }
}
