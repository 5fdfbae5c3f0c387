use super::model;
use crate::shared::fetch_state::FetchState;
use contracts::domain::a001_brand::BrandId;
use contracts::domain::a002_category::{for_brand, Category, CategoryId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CategoriesVm {
    pub state: FetchState<Vec<Category>>,
}

impl CategoriesVm {
    pub fn fetch(&self) {
        self.state.run("categories", model::fetch_categories);
    }

    /// Пары (id, название) для выпадающего списка
    pub fn options_for(&self, brand_id: Option<BrandId>) -> Vec<(String, String)> {
        self.state.data.with(|cats| {
            for_brand(cats, brand_id)
                .into_iter()
                .map(|c| (c.id.to_string(), c.name.clone()))
                .collect()
        })
    }
}

pub fn use_categories() -> CategoriesVm {
    let vm = CategoriesVm {
        state: FetchState::new(),
    };
    vm.fetch();
    vm
}

/// Категория со схемой атрибутов
#[derive(Clone, Copy)]
pub struct CategoryVm {
    pub state: FetchState<Option<Category>>,
}

impl CategoryVm {
    pub fn load(&self, id: Option<CategoryId>) {
        match id {
            Some(id) => self.state.run("category", move |signal| async move {
                model::fetch_category(id, signal).await.map(Some)
            }),
            None => self.state.reset(),
        }
    }

    /// Текущая схема, если загружена именно эта категория
    pub fn schema_for(&self, id: Option<CategoryId>) -> Option<Category> {
        self.state
            .data
            .get()
            .filter(|c| Some(c.id) == id)
    }
}

pub fn use_category() -> CategoryVm {
    CategoryVm {
        state: FetchState::new(),
    }
}
