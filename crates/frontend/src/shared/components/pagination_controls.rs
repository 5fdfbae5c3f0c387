use crate::shared::icons::icon;
use contracts::shared::pagination::{clamp_page, shown_range, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// Подпись вида «21–40 de 45»
fn range_caption(page: usize, page_size: usize, total: usize) -> String {
    match shown_range(page, page_size, total) {
        Some((first, last)) => format!("{}–{} de {}", first, last, total),
        None => "0 de 0".to_string(),
    }
}

/// Постраничная навигация. Страницы с 1, номер страницы хранит родитель:
/// компонент только сообщает, куда перейти.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    #[prop(optional)] page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let sizes = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());

    let page = Signal::derive(move || clamp_page(current_page.get(), total_pages.get()));
    let last = Signal::derive(move || total_pages.get().max(1));
    let go = move |target: usize| {
        let target = clamp_page(target, total_pages.get_untracked());
        if target != page.get_untracked() {
            on_page_change.run(target);
        }
    };

    // target/at_edge получают (текущая страница, последняя страница)
    let nav_button = move |glyph: &'static str,
                           title: &'static str,
                           target: fn(usize, usize) -> usize,
                           at_edge: fn(usize, usize) -> bool| {
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=move || at_edge(page.get(), last.get())
                on:click=move |_| go(target(page.get_untracked(), last.get_untracked()))
            >
                {icon(glyph)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav_button("chevrons-left", "Primera página", |_, _| 1, |p, _| p <= 1)}
            {nav_button("chevron-left", "Página anterior", |p, _| p.saturating_sub(1), |p, _| p <= 1)}
            <span class="pagination-info">
                {move || format!("Página {} de {}", page.get(), last.get())}
                <span class="pagination-info__range">
                    {move || range_caption(page.get(), page_size.get(), total_count.get())}
                </span>
            </span>
            {nav_button("chevron-right", "Página siguiente", |p, _| p + 1, |p, l| p >= l)}
            {nav_button("chevrons-right", "Última página", |_, l| l, |p, l| p >= l)}
            <select
                class="page-size-select"
                title="Resultados por página"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {sizes
                    .into_iter()
                    .map(|size| view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size}
                        </option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_caption() {
        assert_eq!(range_caption(2, 20, 45), "21–40 de 45");
        assert_eq!(range_caption(1, 20, 0), "0 de 0");
    }
}
