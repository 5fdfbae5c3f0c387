use leptos::prelude::*;
use thaw::*;

pub const NO_RESULTS: &str = "No se encontraron resultados";

/// Баннер ошибки загрузки; пустой, пока ошибки нет
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            }
        })
    }
}

/// Строка таблицы на всю ширину: спиннер загрузки или «нет результатов»
#[component]
pub fn StatusRow(colspan: usize, loading: bool) -> impl IntoView {
    let colspan = colspan.max(1).to_string();
    view! {
        <TableRow>
            <TableCell attr:colspan=colspan>
                <TableCellLayout>
                    {if loading {
                        view! {
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <Spinner />
                                <span class="text-muted">"Cargando…"</span>
                            </Flex>
                        }
                        .into_any()
                    } else {
                        view! { <span class="text-muted">{NO_RESULTS}</span> }.into_any()
                    }}
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}
