use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Сворачиваемая панель фильтров.
///
/// В заголовке счётчик активных фильтров и (опционально) пагинация,
/// под полями формы ряд тегов активных фильтров.
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    #[prop(optional)] pagination_controls: Option<AnyView>,
    #[prop(optional)] filter_tags: Option<AnyView>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="filter-panel" class:filter-panel--collapsed=move || !is_expanded.get()>
            <header class="filter-panel-header">
                <button
                    class="filter-panel-header__toggle"
                    aria-expanded=move || is_expanded.get().to_string()
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                            {move || active_filters_count.get()}
                        </Badge>
                    </Show>
                </button>
                <div class="filter-panel-header__pagination">{pagination_controls}</div>
            </header>

            <div class="filter-panel-content" hidden=move || !is_expanded.get()>
                {children()}
            </div>
            {filter_tags.map(|tags| view! { <div class="filter-tags">{tags}</div> })}
        </section>
    }
}

/// Тег активного фильтра с кнопкой сброса
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <span class="filter-tag">
            {label}
            <button
                class="filter-tag__remove"
                title="Quitar filtro"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </span>
    }
}
