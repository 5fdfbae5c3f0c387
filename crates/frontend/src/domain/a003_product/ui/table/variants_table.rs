use crate::shared::components::table::DynamicTable;
use contracts::domain::a002_category::Attribute;
use contracts::domain::a003_product::{Variant, VariantId};
use contracts::shared::columns::ColumnModel;
use leptos::prelude::*;

/// Варианты товара; клик по строке выбирает вариант
#[component]
pub fn VariantsTable(
    #[prop(into)] attributes: Signal<Vec<Attribute>>,
    #[prop(into)] variants: Signal<Vec<Variant>>,
    #[prop(into)] selected: Signal<Option<VariantId>>,
    on_select: Callback<Variant>,
) -> impl IntoView {
    let model = Signal::derive(move || attributes.with(|a| ColumnModel::for_variants(a)));
    let is_selected = Callback::new(move |v: Variant| selected.get() == Some(v.id));

    view! {
        <DynamicTable
            model=model
            rows=variants
            on_row_click=on_select
            highlight=is_selected
            quick_filter=false
        />
    }
}
