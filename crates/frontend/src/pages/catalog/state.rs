use contracts::domain::a003_product::Item;
use contracts::shared::filters::CatalogFilters;
use contracts::shared::pagination::normalize_page_size;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "catalog_list_state_v1";

/// Между сессиями помним только размер страницы
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedState {
    pub page_size: usize,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted() -> Option<PersistedState> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str::<PersistedState>(&raw).ok()
}

fn save_persisted(st: &PersistedState) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(st) else { return };
    let _ = storage.set_item(STORAGE_KEY, &raw);
}

pub fn persist_state(filters: RwSignal<CatalogFilters>) {
    let page_size = filters.with_untracked(|f| f.page_size);
    save_persisted(&PersistedState { page_size });
}

pub fn restore_state(filters: RwSignal<CatalogFilters>) {
    if let Some(p) = load_persisted() {
        filters.update(|f| f.page_size = normalize_page_size(p.page_size));
    }
}

/// Локальный фильтр по кросс-номеру поверх загруженной страницы
pub fn apply_local_filters(items: &[Item], filters: &CatalogFilters) -> Vec<Item> {
    match filters.local_reference() {
        Some(text) => items
            .iter()
            .filter(|item| item.matches_reference(text))
            .cloned()
            .collect(),
        None => items.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::CategoryId;
    use contracts::domain::a003_product::{ItemId, ItemType, Reference, ReferenceId};
    use contracts::shared::filters::FilterMode;

    fn item(sku: &str, numbers: &[&str]) -> Item {
        Item {
            id: ItemId::new_v4(),
            sku: sku.to_string(),
            name: sku.to_string(),
            description: None,
            item_type: ItemType::Single,
            category_id: CategoryId::new_v4(),
            brand_id: None,
            images: Vec::new(),
            attribute_values: Vec::new(),
            references: numbers
                .iter()
                .map(|n| Reference {
                    id: ReferenceId::new_v4(),
                    brand: None,
                    number: n.to_string(),
                    notes: None,
                    attribute_values: Vec::new(),
                })
                .collect(),
            applications: Vec::new(),
            variants: Vec::new(),
            components: Vec::new(),
        }
    }

    #[test]
    fn test_reference_filter_is_local_and_case_insensitive() {
        let items = vec![item("DF-1", &["09.A727.11"]), item("DF-2", &["DF4321"])];
        let mut filters = CatalogFilters::default();
        filters.set_page(3);
        filters.set_reference("a727");

        let visible = apply_local_filters(&items, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].sku, "DF-1");
        // локальный фильтр не трогает страницу
        assert_eq!(filters.page, 3);
    }

    #[test]
    fn test_other_modes_keep_all_items() {
        let items = vec![item("DF-1", &["X"]), item("DF-2", &[])];
        let mut filters = CatalogFilters::default();
        filters.set_reference("zzz");
        filters.set_mode(FilterMode::PartNumber);
        assert_eq!(apply_local_filters(&items, &filters).len(), 2);
    }
}
