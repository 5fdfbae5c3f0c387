/// Утилиты для списков: поле поиска с debounce и классы заголовков сортировки
use super::config::config;
use super::debounce::Debouncer;
use super::icons::icon;
use contracts::shared::columns::SortState;
use leptos::prelude::*;

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
    /// Задержка, по умолчанию из конфигурации
    #[prop(optional)]
    debounce_ms: Option<u32>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar…".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let input_value = RwSignal::new(value.get_untracked());
    let debouncer = Debouncer::new(debounce_ms.unwrap_or(config().search_debounce_ms));

    // внешний сброс (смена режима, категории) перетирает ввод
    Effect::new(move |prev: Option<String>| {
        let external = value.get();
        if needs_sync(prev.as_deref(), &external, &input_value.get_untracked()) {
            debouncer.cancel();
            input_value.set(external.clone());
        }
        external
    });

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        debouncer.call(move || on_change.run(new_value));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        debouncer.cancel();
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class=move || if is_filter_active() {
                    "search-input__field search-input__field--active"
                } else {
                    "search-input__field"
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Limpiar">
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Перетирать ли локальный ввод внешним значением: только когда внешнее
/// значение действительно изменилось с прошлого запуска эффекта
fn needs_sync(previous: Option<&str>, external: &str, local: &str) -> bool {
    previous != Some(external) && local != external
}

/// CSS-класс заголовка сортируемой колонки
pub fn get_sort_class(sort: &SortState, key: &str) -> &'static str {
    if sort.key.as_deref() == Some(key) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_class_marks_active_column() {
        let mut sort = SortState::default();
        assert_eq!(get_sort_class(&sort, "sku"), "table__sort-indicator");
        sort.cycle("sku");
        assert_eq!(
            get_sort_class(&sort, "sku"),
            "table__sort-indicator table__sort-indicator--active"
        );
        assert_eq!(get_sort_class(&sort, "name"), "table__sort-indicator");
    }

    #[test]
    fn test_unrelated_update_keeps_pending_input() {
        // смена страницы или сортировки перезапускает эффект с тем же значением
        assert!(!needs_sync(Some(""), "", "DF-2"));
        assert!(!needs_sync(Some("DF"), "DF", "DF-22"));
    }

    #[test]
    fn test_external_reset_overwrites_input() {
        assert!(needs_sync(Some("DF-22"), "", "DF-22"));
        assert!(needs_sync(Some("DF"), "", "DF-2"));
        assert!(!needs_sync(Some("DF-2"), "DF-22", "DF-22"));
        assert!(!needs_sync(None, "DF", "DF"));
    }
}
