//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="SKU"
//!     sort_key="sku"
//!     sort=Signal::derive(move || sort.get())
//!     on_sort=Callback::new(move |key: String| sort.update(|s| s.cycle(&key)))
//! />
//! ```

use crate::shared::list_utils::get_sort_class;
use contracts::shared::columns::SortState;
use leptos::prelude::*;
use thaw::*;

/// Клик по заголовку переключает сортировку: по возрастанию, по убыванию, без сортировки
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ колонки
    #[prop(into)]
    sort_key: String,

    /// Текущая сортировка таблицы
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Колонка без сортировки (изображение)
    #[prop(optional, default = true)]
    sortable: bool,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Закреплённая колонка не прокручивается по горизонтали и не меняет ширину
    #[prop(optional)]
    pinned: bool,

    /// Inline-стиль закрепления (`position: sticky; left: ...`)
    #[prop(optional, into)]
    style: String,
) -> impl IntoView {
    let class = if pinned { "table__cell--pinned" } else { "" };

    if !sortable || pinned {
        let header = if sortable {
            sortable_label(label, sort_key, sort, on_sort).into_any()
        } else {
            label.into_any()
        };
        return view! {
            <TableHeaderCell class=class attr:style=style min_width=min_width>{header}</TableHeaderCell>
        }
        .into_any();
    }

    view! {
        <TableHeaderCell resizable=true min_width=min_width>
            {sortable_label(label, sort_key, sort, on_sort)}
        </TableHeaderCell>
    }
    .into_any()
}

fn sortable_label(
    label: String,
    sort_key: String,
    sort: Signal<SortState>,
    on_sort: Callback<String>,
) -> impl IntoView {
    let key_for_click = sort_key.clone();
    let key_for_class = sort_key.clone();

    view! {
        <div
            class="table__sortable-header"
            style="cursor: pointer;"
            on:click=move |_| on_sort.run(key_for_click.clone())
        >
            {label}
            <span class=move || sort.with(|s| get_sort_class(s, &key_for_class))>
                {move || sort.with(|s| s.indicator(&sort_key))}
            </span>
        </div>
    }
}
