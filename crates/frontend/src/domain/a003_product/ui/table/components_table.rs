use crate::shared::components::status::StatusRow;
use crate::shared::icons::icon;
use contracts::domain::a003_product::Component;
use contracts::shared::text::{truncate, TRUNCATE_AT};
use leptos::prelude::*;
use thaw::*;

/// Состав набора (kit)
#[component]
pub fn ComponentsTable(#[prop(into)] components: Signal<Vec<Component>>) -> impl IntoView {
    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell min_width=72.0>"Imagen"</TableHeaderCell>
                    <TableHeaderCell min_width=110.0>"SKU"</TableHeaderCell>
                    <TableHeaderCell min_width=220.0>"Nombre"</TableHeaderCell>
                    <TableHeaderCell min_width=80.0>"Cantidad"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let data = components.get();
                    if data.is_empty() {
                        return view! { <StatusRow colspan=4 loading=false /> }.into_any();
                    }
                    data.into_iter()
                        .map(|c| {
                            let name = truncate(&c.name, TRUNCATE_AT);
                            view! {
                                <TableRow>
                                    <TableCell class="table__cell--image">
                                        <TableCellLayout>
                                            {match c.image_url {
                                                Some(url) => view! { <img class="table__thumb" src=url alt="" /> }.into_any(),
                                                None => icon("image"),
                                            }}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{c.sku}</TableCellLayout></TableCell>
                                    <TableCell attr:title=name.full>
                                        <TableCellLayout>{name.shown}</TableCellLayout>
                                    </TableCell>
                                    <TableCell class="table__cell--right">
                                        <TableCellLayout>{c.quantity}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </TableBody>
        </Table>
    }
}
