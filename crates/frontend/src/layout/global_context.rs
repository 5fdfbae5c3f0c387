use contracts::domain::a001_brand::BrandId;
use contracts::domain::a003_product::ItemId;
use contracts::domain::common::AggregateId;
use contracts::shared::filters::CatalogFilters;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::window;

/// Активная страница приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Catalog,
    Product(ItemId),
    Gallery,
    Bulletins,
    Brands,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Catalog => "Catálogo",
            Page::Product(_) => "Producto",
            Page::Gallery => "Galería",
            Page::Bulletins => "Boletines",
            Page::Brands => "Marcas",
        }
    }
}

/// Состояние страницы в query string: `?view=product&id=...`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct UrlState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

pub fn page_to_query(page: Page) -> String {
    let state = match page {
        Page::Catalog => UrlState::default(),
        Page::Product(id) => UrlState {
            view: Some("product".to_string()),
            id: Some(id.as_string()),
        },
        Page::Gallery => UrlState {
            view: Some("gallery".to_string()),
            id: None,
        },
        Page::Bulletins => UrlState {
            view: Some("bulletins".to_string()),
            id: None,
        },
        Page::Brands => UrlState {
            view: Some("brands".to_string()),
            id: None,
        },
    };
    let qs = serde_qs::to_string(&state).unwrap_or_default();
    if qs.is_empty() {
        String::new()
    } else {
        format!("?{}", qs)
    }
}

/// Неизвестное или битое состояние открывает каталог
pub fn page_from_query(search: &str) -> Page {
    let state: UrlState = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    match state.view.as_deref() {
        Some("product") => state
            .id
            .as_deref()
            .and_then(|id| ItemId::from_string(id).ok())
            .map(Page::Product)
            .unwrap_or_default(),
        Some("gallery") => Page::Gallery,
        Some("bulletins") => Page::Bulletins,
        Some("brands") => Page::Brands,
        _ => Page::Catalog,
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    /// Фильтры каталога живут здесь, чтобы пережить переход в карточку и обратно
    pub catalog_filters: RwSignal<CatalogFilters>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::default()),
            catalog_filters: RwSignal::new(CatalogFilters::default()),
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {:?}", page);
        self.page.set(page);
        if let Some(w) = window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    pub fn open_product(&self, id: ItemId) {
        self.navigate(Page::Product(id));
    }

    /// Каталог, отфильтрованный по бренду (клик по карточке на странице Marcas)
    pub fn open_catalog_for_brand(&self, brand_id: BrandId) {
        self.catalog_filters.update(|f| f.set_brand(Some(brand_id)));
        self.navigate(Page::Catalog);
    }

    pub fn init_router_integration(&self) {
        self.page.set(page_from_query(&current_search()));

        let this = *self;
        // кнопки «назад/вперёд» браузера
        let _popstate = window_event_listener(leptos::ev::popstate, move |_| {
            this.page.set(page_from_query(&current_search()));
        });

        Effect::new(move |_| {
            let new_url = page_to_query(this.page.get());
            let target = if new_url.is_empty() { "?" } else { new_url.as_str() };

            // Only update URL if it actually changed
            if current_search() != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(target));
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_empty_query() {
        assert_eq!(page_to_query(Page::Catalog), "");
        assert_eq!(page_from_query(""), Page::Catalog);
        assert_eq!(page_from_query("?"), Page::Catalog);
    }

    #[test]
    fn test_product_page_round_trips_through_query() {
        let id = ItemId::new_v4();
        let query = page_to_query(Page::Product(id));
        assert_eq!(query, format!("?view=product&id={}", id));
        assert_eq!(page_from_query(&query), Page::Product(id));
    }

    #[test]
    fn test_static_pages() {
        assert_eq!(page_to_query(Page::Gallery), "?view=gallery");
        assert_eq!(page_from_query("?view=bulletins"), Page::Bulletins);
        assert_eq!(page_from_query("view=brands"), Page::Brands);
    }

    #[test]
    fn test_broken_state_falls_back_to_catalog() {
        assert_eq!(page_from_query("?view=product&id=not-a-uuid"), Page::Catalog);
        assert_eq!(page_from_query("?view=product"), Page::Catalog);
        assert_eq!(page_from_query("?view=unknown"), Page::Catalog);
    }
}
