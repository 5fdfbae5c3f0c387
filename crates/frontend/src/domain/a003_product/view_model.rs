//! Хуки загрузки товаров: страница списка и варианты фильтров по автомобилю.

use super::model;
use crate::shared::fetch_state::FetchState;
use contracts::domain::a002_category::CategoryId;
use contracts::domain::a003_product::{FilterOptions, ProductPage};
use contracts::shared::filters::{CatalogFilters, VehicleFilters};
use contracts::shared::query::ProductQuery;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProductsVm {
    pub state: FetchState<ProductPage>,
}

impl ProductsVm {
    /// Загружает страницу по текущим фильтрам. С категорией работают поиск и
    /// фильтры по автомобилю, без неё только простой постраничный список.
    pub fn load(&self, filters: &CatalogFilters) {
        let query = ProductQuery::from_filters(filters);
        match filters.category_id {
            Some(category_id) => self.state.run("products", move |signal| {
                model::fetch_products_by_category(category_id, query, signal)
            }),
            None => {
                let query = ProductQuery::new(query.page, query.page_size);
                self.state
                    .run("products", move |signal| model::fetch_products(query, signal))
            }
        }
    }

    /// Загрузка без категории (галерея)
    pub fn load_page(&self, page: usize, page_size: usize) {
        let query = ProductQuery::new(page, page_size);
        self.state
            .run("products", move |signal| model::fetch_products(query, signal));
    }

    pub fn total(&self) -> usize {
        self.state.data.with(|p| p.total)
    }

    pub fn total_pages(&self) -> usize {
        self.state.data.with(|p| p.page_count())
    }
}

pub fn use_products() -> ProductsVm {
    ProductsVm {
        state: FetchState::new(),
    }
}

#[derive(Clone, Copy)]
pub struct FilterOptionsVm {
    pub state: FetchState<FilterOptions>,
}

impl FilterOptionsVm {
    pub fn load(&self, category_id: Option<CategoryId>, selected: &VehicleFilters) {
        let Some(category_id) = category_id else {
            self.state.reset();
            return;
        };
        let selected = selected.clone();
        self.state.run("filter options", move |signal| {
            model::fetch_filter_options(category_id, selected, signal)
        });
    }
}

pub fn use_filter_options() -> FilterOptionsVm {
    FilterOptionsVm {
        state: FetchState::new(),
    }
}
