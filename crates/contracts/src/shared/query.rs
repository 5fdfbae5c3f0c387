//! Query-string builders for the catalog endpoints.
//!
//! Builders return raw `(name, value)` pairs; percent-encoding happens in the
//! HTTP layer.

use crate::domain::a003_product::ItemType;
use crate::shared::filters::{CatalogFilters, VehicleFilters};

/// `GET /products?type=&page=&pageSize=` and
/// `GET /products/category/:id?type=&page=&pageSize=&search=&filters=`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub item_type: Option<ItemType>,
    pub page: usize,
    pub page_size: usize,
    pub search: Option<String>,
    pub filters: Option<VehicleFilters>,
}

impl ProductQuery {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            item_type: Some(ItemType::Single),
            page: page.max(1),
            page_size,
            search: None,
            filters: None,
        }
    }

    /// Query for the catalog list from the current filter state
    pub fn from_filters(filters: &CatalogFilters) -> Self {
        Self {
            item_type: Some(ItemType::Single),
            page: filters.page.max(1),
            page_size: filters.page_size,
            search: filters.server_search().map(str::to_string),
            filters: filters.server_filters().cloned(),
        }
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(t) = self.item_type {
            pairs.push(("type", t.as_str().to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("pageSize", self.page_size.to_string()));
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(filters) = self.filters.as_ref().filter(|f| !f.is_empty()) {
            pairs.push(("filters", filters.to_json()));
        }
        pairs
    }
}

/// Query for `GET /products/category/:id/filters[?filters=<json>]`
pub fn filter_options_pairs(selected: &VehicleFilters) -> Vec<(&'static str, String)> {
    if selected.is_empty() {
        Vec::new()
    } else {
        vec![("filters", selected.to_json())]
    }
}
