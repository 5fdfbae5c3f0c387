use crate::domain::a001_brand::ui::list::BrandsList;
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::Shell;
use crate::pages::bulletins::BulletinsPage;
use crate::pages::catalog::CatalogPage;
use crate::pages::gallery::GalleryPage;
use leptos::prelude::*;

/// Активная страница из `AppGlobalContext` → её view
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    // синхронизация с адресной строкой, один раз при создании
    ctx.init_router_integration();

    view! {
        <Shell>
            {move || match ctx.page.get() {
                Page::Catalog => view! { <CatalogPage /> }.into_any(),
                Page::Product(id) => {
                    view! { <ProductDetails id=Signal::derive(move || id) /> }.into_any()
                }
                Page::Gallery => view! { <GalleryPage /> }.into_any(),
                Page::Bulletins => view! { <BulletinsPage /> }.into_any(),
                Page::Brands => view! { <BrandsList /> }.into_any(),
            }}
        </Shell>
    }
}
