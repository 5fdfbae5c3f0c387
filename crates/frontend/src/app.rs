use crate::domain::a003_product::context::ItemContext;
use crate::layout::global_context::AppGlobalContext;
use crate::pages::catalog::state::restore_state;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Глобальное состояние навигации и фильтров каталога
    let ctx = AppGlobalContext::new();
    restore_state(ctx.catalog_filters);
    provide_context(ctx);

    // Выбранный товар/вариант и фильтры по автомобилю для страницы товара
    provide_context(ItemContext::new());

    view! {
        <AppRoutes />
    }
}
