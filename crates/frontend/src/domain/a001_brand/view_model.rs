use super::model;
use crate::shared::fetch_state::FetchState;
use contracts::domain::a001_brand::{Brand, BrandId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BrandsVm {
    pub state: FetchState<Vec<Brand>>,
}

impl BrandsVm {
    pub fn fetch(&self) {
        self.state.run("brands", model::fetch_brands);
    }

    pub fn name_of(&self, id: BrandId) -> Option<String> {
        self.state
            .data
            .with(|brands| brands.iter().find(|b| b.id == id).map(|b| b.name.clone()))
    }
}

/// Список брендов, загружается сразу при создании
pub fn use_brands() -> BrandsVm {
    let vm = BrandsVm {
        state: FetchState::new(),
    };
    vm.fetch();
    vm
}
