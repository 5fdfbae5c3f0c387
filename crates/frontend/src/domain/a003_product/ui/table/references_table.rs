use crate::shared::components::table::DynamicTable;
use contracts::domain::a002_category::Attribute;
use contracts::domain::a003_product::Reference;
use contracts::shared::columns::ColumnModel;
use leptos::prelude::*;

/// Кросс-номера: марка, номер и атрибуты области `reference`
#[component]
pub fn ReferencesTable(
    #[prop(into)] attributes: Signal<Vec<Attribute>>,
    #[prop(into)] references: Signal<Vec<Reference>>,
) -> impl IntoView {
    let model = Signal::derive(move || attributes.with(|a| ColumnModel::for_references(a)));

    view! {
        <DynamicTable model=model rows=references />
    }
}
