//! Страница «Galería»: сетка изображений товаров без категории.

use crate::domain::a003_product::view_model::use_products;
use crate::layout::global_context::use_app_context;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status::{ErrorBanner, NO_RESULTS};
use crate::shared::config::config;
use crate::shared::icons::icon;
use contracts::domain::a003_product::Item;
use contracts::shared::fetch_status::FetchStatus;
use leptos::prelude::*;
use thaw::*;

/// Товары, у которых есть хотя бы одно изображение
fn with_images(items: &[Item]) -> Vec<Item> {
    items
        .iter()
        .filter(|i| i.main_image().is_some())
        .cloned()
        .collect()
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let app = use_app_context();
    let products = use_products();

    let page = RwSignal::new(1usize);
    let page_size = RwSignal::new(config().default_page_size);

    Effect::new(move |_| {
        products.load_page(page.get(), page_size.get());
    });

    let tiles = Signal::derive(move || products.state.data.with(|p| with_images(&p.items)));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("image")}
                    <h1 class="page__title">"Galería"</h1>
                </div>
                <div class="page__header-right">
                    <PaginationControls
                        current_page=page
                        total_pages=Signal::derive(move || products.total_pages())
                        total_count=Signal::derive(move || products.total())
                        page_size=page_size
                        on_page_change=Callback::new(move |p| page.set(p))
                        on_page_size_change=Callback::new(move |s| {
                            page_size.set(s);
                            page.set(1);
                        })
                    />
                </div>
            </div>

            <ErrorBanner error=products.state.error />

            {move || match products.state.status(|p| p.items.len()) {
                FetchStatus::Idle | FetchStatus::Loading => view! {
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Spinner />
                        <span class="text-muted">"Cargando…"</span>
                    </Flex>
                }
                .into_any(),
                FetchStatus::NoResults => view! { <p class="text-muted">{NO_RESULTS}</p> }.into_any(),
                FetchStatus::Loaded => view! {
                    <div class="gallery-grid">
                        <For
                            each=move || tiles.get()
                            key=|item| item.id
                            children=move |item| {
                                let id = item.id;
                                let src = item.main_image().map(|i| i.url.clone()).unwrap_or_default();
                                view! {
                                    <figure class="gallery-tile" on:click=move |_| app.open_product(id)>
                                        <img src=src alt=item.name.clone() loading="lazy" />
                                        <figcaption>
                                            <span class="gallery-tile__sku">{item.sku.clone()}</span>
                                            <span class="gallery-tile__name">{item.name.clone()}</span>
                                        </figcaption>
                                    </figure>
                                }
                            }
                        />
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_images_skips_items_without_pictures() {
        let json = r#"[
            {"id":"6a1f0c1e-51c4-4c64-8c52-3f7d2b9e0a11","sku":"A","name":"A",
             "categoryId":"0b7c6a57-5a3f-4f5c-8f0e-2d1a4e6b7c80","images":[{"url":"a.jpg"}]},
            {"id":"6a1f0c1e-51c4-4c64-8c52-3f7d2b9e0a12","sku":"B","name":"B",
             "categoryId":"0b7c6a57-5a3f-4f5c-8f0e-2d1a4e6b7c80"}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        let shown = with_images(&items);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].sku, "A");
    }
}
