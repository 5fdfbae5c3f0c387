use crate::shared::components::table::DynamicTable;
use contracts::domain::a002_category::Category;
use contracts::domain::a003_product::Item;
use contracts::shared::columns::ColumnModel;
use leptos::prelude::*;

/// Список товаров: изображение, SKU, название и атрибуты товара из схемы категории.
/// Без схемы остаются только фиксированные колонки.
#[component]
pub fn ProductsTable(
    #[prop(into)] category: Signal<Option<Category>>,
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] loading: Signal<bool>,
    on_open: Callback<Item>,
) -> impl IntoView {
    let model = Signal::derive(move || {
        category.with(|c| match c {
            Some(c) => ColumnModel::for_products(&c.attributes.product),
            None => ColumnModel::for_products(&[]),
        })
    });

    view! {
        <DynamicTable model=model rows=items loading=loading on_row_click=on_open />
    }
}
