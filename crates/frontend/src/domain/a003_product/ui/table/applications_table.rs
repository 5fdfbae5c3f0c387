use crate::shared::components::table::DynamicTable;
use contracts::domain::a002_category::Attribute;
use contracts::domain::a003_product::Application;
use contracts::shared::columns::ColumnModel;
use contracts::shared::filters::VehicleFilters;
use leptos::prelude::*;

/// Применяемость: по колонке на каждый видимый атрибут автомобиля.
/// Строки, совпадающие с фильтром каталога, подсвечиваются.
#[component]
pub fn ApplicationsTable(
    #[prop(into)] attributes: Signal<Vec<Attribute>>,
    #[prop(into)] applications: Signal<Vec<Application>>,
    #[prop(optional, into)] selected: Signal<VehicleFilters>,
) -> impl IntoView {
    let model = Signal::derive(move || attributes.with(|a| ColumnModel::for_applications(a)));
    let highlight = Callback::new(move |row: Application| {
        selected.with(|f| !f.is_empty() && f.matches(&row))
    });

    view! {
        <DynamicTable model=model rows=applications highlight=highlight />
    }
}
