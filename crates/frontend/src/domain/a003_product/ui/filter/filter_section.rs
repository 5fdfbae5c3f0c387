//! Панель фильтров каталога: режим поиска и цепочка фильтров по автомобилю.

use super::filter_component::FilterComponent;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::ui::RadioGroup;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a002_category::{Attribute, AttributeId};
use contracts::domain::a003_product::FilterOptions;
use contracts::shared::filters::{CatalogFilters, FilterMode};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn FilterSection(
    /// Состояние фильтров страницы
    filters: RwSignal<CatalogFilters>,
    /// Атрибуты применяемости категории в порядке цепочки
    #[prop(into)]
    chain: Signal<Vec<Attribute>>,
    /// Значения для выпадающих списков (сервер или выведенные из товаров)
    #[prop(into)]
    options: Signal<FilterOptions>,
    #[prop(optional, into)] options_loading: Signal<bool>,
    /// Пагинация в заголовке панели
    #[prop(optional)]
    pagination: Option<AnyView>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);
    let has_category = Signal::derive(move || filters.with(|f| f.category_id.is_some()));
    let mode = Signal::derive(move || filters.with(|f| f.mode));

    let mode_options: Vec<(FilterMode, &'static str)> =
        FilterMode::ALL.iter().map(|m| (*m, m.label())).collect();

    let select_value = move |attribute_id: AttributeId, value: String| {
        chain.with_untracked(|attrs| {
            let refs: Vec<&Attribute> = attrs.iter().collect();
            filters.update(|f| f.select_vehicle_value(&refs, attribute_id, &value));
        });
    };

    let clear_value = move |attribute_id: AttributeId| {
        chain.with_untracked(|attrs| {
            let refs: Vec<&Attribute> = attrs.iter().collect();
            filters.update(|f| f.clear_vehicle_value(&refs, attribute_id));
        });
    };

    let tags = view! {
        {move || {
            let f = filters.get();
            let mut tags = Vec::new();
            if let Some(text) = f.server_search() {
                tags.push(view! {
                    <FilterTag
                        label=format!("N° de parte: {}", text)
                        on_remove=Callback::new(move |_| filters.update(|f| f.set_part_number("")))
                    />
                }.into_any());
            }
            if let Some(text) = f.local_reference() {
                tags.push(view! {
                    <FilterTag
                        label=format!("Referencia: {}", text)
                        on_remove=Callback::new(move |_| filters.update(|f| f.set_reference("")))
                    />
                }.into_any());
            }
            if let Some(vehicle) = f.server_filters() {
                let attrs = chain.get();
                for attribute in attrs.iter().filter(|a| vehicle.get(a.id).is_some()) {
                    let id = attribute.id;
                    let label = format!("{}: {}", attribute.label(), vehicle.get(id).unwrap_or_default());
                    tags.push(view! {
                        <FilterTag
                            label=label
                            on_remove=Callback::new(move |_| clear_value(id))
                        />
                    }.into_any());
                }
            }
            tags
        }}
    }
    .into_any();

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=Signal::derive(move || filters.with(|f| f.active_count()))
            pagination_controls=pagination.unwrap_or_else(|| view! { <></> }.into_any())
            filter_tags=tags
        >
            {move || if has_category.get() {
                view! { <></> }.into_any()
            } else {
                view! {
                    <p class="text-muted">"Seleccione una categoría para filtrar por número de parte, referencia o vehículo."</p>
                }.into_any()
            }}

            <RadioGroup
                label="Buscar por"
                name="filter-mode"
                value=mode
                options=mode_options
                on_change=Callback::new(move |m: FilterMode| filters.update(|f| f.set_mode(m)))
                disabled=Signal::derive(move || !has_category.get())
            />

            {move || match mode.get() {
                FilterMode::PartNumber => view! {
                    <SearchInput
                        value=Memo::new(move |_| filters.with(|f| f.part_number.clone()))
                        on_change=Callback::new(move |text: String| filters.update(|f| f.set_part_number(&text)))
                        placeholder="Número de parte…"
                    />
                }.into_any(),
                FilterMode::Reference => view! {
                    <SearchInput
                        value=Memo::new(move |_| filters.with(|f| f.reference.clone()))
                        on_change=Callback::new(move |text: String| filters.update(|f| f.set_reference(&text)))
                        placeholder="Referencia cruzada…"
                    />
                }.into_any(),
                FilterMode::Vehicle => view! {
                    <div class="vehicle-filters">
                        <For
                            each=move || chain.get()
                            key=|a| a.id
                            children=move |attribute: Attribute| {
                                let id = attribute.id;
                                view! {
                                    <FilterComponent
                                        label=attribute.label().to_string()
                                        options=Signal::derive(move || options.with(|o| o.get(id).to_vec()))
                                        value=Signal::derive(move || {
                                            filters.with(|f| f.vehicle.get(id).unwrap_or_default().to_string())
                                        })
                                        disabled=Signal::derive(move || options_loading.get() || !has_category.get())
                                        on_change=Callback::new(move |value: String| select_value(id, value))
                                    />
                                }
                            }
                        />
                        {move || chain.with(|c| c.is_empty()).then(|| view! {
                            <p class="text-muted">"Esta categoría no tiene atributos de vehículo."</p>
                        })}
                    </div>
                }.into_any(),
            }}

            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| filters.update(|f| f.clear())
                disabled=Signal::derive(move || filters.with(|f| f.active_count() == 0))
            >
                "Limpiar filtros"
            </Button>
        </FilterPanel>
    }
}
