use crate::shared::components::ui::Select;
use leptos::prelude::*;

/// Выпадающий список значений одного атрибута автомобиля
#[component]
pub fn FilterComponent(
    #[prop(into)] label: String,
    /// Допустимые значения с учётом уже выбранных атрибутов
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Выбранное значение, пустая строка если не выбрано
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    on_change: Callback<String>,
) -> impl IntoView {
    let pairs = Signal::derive(move || {
        options.with(|list| list.iter().map(|v| (v.clone(), v.clone())).collect::<Vec<_>>())
    });
    let is_disabled =
        Signal::derive(move || disabled.get() || (pairs.with(|p| p.is_empty()) && value.get().is_empty()));

    view! {
        <div class="vehicle-filter">
            <Select
                label=label
                value=value
                options=pairs
                placeholder="Todos"
                disabled=is_disabled
                on_change=on_change
            />
        </div>
    }
}
