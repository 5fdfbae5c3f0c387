//! Таблица с колонками из атрибутов категории.
//!
//! Колонки приходят готовой [`ColumnModel`]; таблица отвечает только за
//! локальный быстрый фильтр, сортировку по клику и отрисовку ячеек
//! (обрезка до 30 символов, полный текст в `title`). Колонки идентичности
//! закреплены слева через `position: sticky`.

use super::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::status::StatusRow;
use crate::shared::icons::icon;
use contracts::shared::columns::{Column, ColumnKind, ColumnModel, SortState, TableRow as CatalogRow};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DynamicTable<T>(
    #[prop(into)] model: Signal<ColumnModel>,
    #[prop(into)] rows: Signal<Vec<T>>,
    #[prop(optional, into)] loading: Signal<bool>,
    /// Клик по строке (переход к товару)
    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
    /// Подсветка строки, например совместимых применяемостей
    #[prop(optional)]
    highlight: Option<Callback<T, bool>>,
    /// Поле быстрого фильтра над таблицей
    #[prop(optional, default = true)]
    quick_filter: bool,
) -> impl IntoView
where
    T: CatalogRow + Clone + Send + Sync + 'static,
{
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::default());

    // новая схема колонок: сортировка по исчезнувшей колонке не имеет смысла
    Effect::new(move |_| {
        let model = model.get();
        let stale = sort.with_untracked(|s| {
            s.key
                .as_deref()
                .is_some_and(|key| model.column(key).is_none())
        });
        if stale {
            sort.set(SortState::default());
        }
    });

    let visible_rows = move || {
        let model = model.get();
        let q = query.get();
        let sort = sort.get();
        rows.with(|rows| {
            let mut filtered = model.filter_rows(rows, &q);
            model.sort_rows(&mut filtered, &sort);
            filtered.into_iter().cloned().collect::<Vec<T>>()
        })
    };

    let on_sort = Callback::new(move |key: String| sort.update(|s| s.cycle(&key)));

    view! {
        <div class="dynamic-table">
            {quick_filter.then(|| view! {
                <div class="dynamic-table__toolbar">
                    <Input value=query placeholder="Filtrar resultados…" />
                </div>
            })}
            <div style="width: 100%; overflow-x: auto;">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {move || {
                                let columns = model.get().columns;
                                let offsets = pinned_offsets(&columns);
                                columns
                                    .into_iter()
                                    .zip(offsets)
                                    .map(|(column, left)| {
                                        let sortable = column.is_sortable();
                                        let width = header_width(&column.kind);
                                        let style = left
                                            .map(|left| pinned_style(left, width))
                                            .unwrap_or_default();
                                        view! {
                                            <SortableHeaderCell
                                                label=column.label
                                                sort_key=column.key
                                                sort=sort
                                                on_sort=on_sort
                                                sortable=sortable
                                                min_width=width
                                                pinned=left.is_some()
                                                style=style
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let data = visible_rows();
                            let model = model.get();
                            if data.is_empty() {
                                return view! {
                                    <StatusRow colspan=model.columns.len() loading=loading.get() />
                                }
                                .into_any();
                            }
                            data.into_iter()
                                .map(|row| render_row(&model, row, on_row_click, highlight))
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

fn header_width(kind: &ColumnKind) -> f64 {
    match kind {
        ColumnKind::Image => 72.0,
        ColumnKind::Name => 220.0,
        _ => 110.0,
    }
}

/// Смещение `left` для каждой закреплённой колонки: сумма ширин закреплённых
/// колонок левее неё. `None` у обычных колонок.
fn pinned_offsets(columns: &[Column]) -> Vec<Option<f64>> {
    let mut left = 0.0;
    columns
        .iter()
        .map(|column| {
            column.pinned.then(|| {
                let at = left;
                left += header_width(&column.kind);
                at
            })
        })
        .collect()
}

fn pinned_style(left: f64, width: f64) -> String {
    format!(
        "position: sticky; left: {left}px; z-index: 1; width: {width}px; min-width: {width}px; \
         max-width: {width}px; background: var(--colorNeutralBackground1);"
    )
}

fn render_row<T>(
    model: &ColumnModel,
    row: T,
    on_row_click: Option<Callback<T>>,
    highlight: Option<Callback<T, bool>>,
) -> impl IntoView
where
    T: CatalogRow + Clone + Send + Sync + 'static,
{
    let highlighted = highlight.map(|h| h.run(row.clone())).unwrap_or(false);
    let cells = model
        .columns
        .iter()
        .zip(pinned_offsets(&model.columns))
        .map(|(column, left)| {
            let style = left
                .map(|left| pinned_style(left, header_width(&column.kind)))
                .unwrap_or_default();
            render_cell(model, column, &row, style)
        })
        .collect_view();
    let clickable = on_row_click.is_some();

    view! {
        <TableRow
            class:table__row--clickable=clickable
            class:table__row--highlighted=highlighted
            on:click=move |_| {
                if let Some(cb) = on_row_click {
                    cb.run(row.clone());
                }
            }
        >
            {cells}
        </TableRow>
    }
}

fn render_cell<T: CatalogRow>(model: &ColumnModel, column: &Column, row: &T, style: String) -> AnyView {
    let pinned = if column.pinned { "table__cell--pinned" } else { "" };

    if column.kind == ColumnKind::Image {
        let thumb = match row.identity(ColumnKind::Image) {
            Some(url) => view! {
                <img class="table__thumb" src=url alt="" loading="lazy" />
            }
            .into_any(),
            None => view! { <span class="table__thumb table__thumb--empty">{icon("image")}</span> }.into_any(),
        };
        return view! {
            <TableCell class=format!("table__cell--image {pinned}") attr:style=style>
                <TableCellLayout>{thumb}</TableCellLayout>
            </TableCell>
        }
        .into_any();
    }

    let cell = model.cell(column, row);
    view! {
        <TableCell class=pinned attr:title=cell.full attr:style=style>
            <TableCellLayout>{cell.shown}</TableCellLayout>
        </TableCell>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::Attribute;

    #[test]
    fn test_identity_columns_stick_in_order() {
        let model = ColumnModel::for_products(&Vec::<Attribute>::new());
        let offsets = pinned_offsets(&model.columns);
        assert_eq!(offsets, vec![Some(0.0), Some(72.0), Some(182.0)]);

        let mut expected_left = 0.0;
        for (column, left) in model.columns.iter().zip(&offsets) {
            if column.pinned {
                assert_eq!(*left, Some(expected_left), "column {}", column.key);
                expected_left += header_width(&column.kind);
            } else {
                assert_eq!(*left, None, "column {}", column.key);
            }
        }
    }

    #[test]
    fn test_attribute_columns_scroll() {
        let mut model = ColumnModel::for_variants(&Vec::<Attribute>::new());
        model.columns[1].pinned = false;
        assert_eq!(pinned_offsets(&model.columns), vec![Some(0.0), None]);
    }

    #[test]
    fn test_pinned_style_is_sticky() {
        let style = pinned_style(72.0, 110.0);
        assert!(style.contains("position: sticky"));
        assert!(style.contains("left: 72px"));
        assert!(style.contains("min-width: 110px"));
    }
}
