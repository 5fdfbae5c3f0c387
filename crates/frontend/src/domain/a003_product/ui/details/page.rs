use super::gallery::ImageGallery;
use super::view_model::{attribute_sheet, use_product, ProductDetail};
use crate::domain::a003_product::context::use_item_context;
use crate::domain::a003_product::ui::table::{
    ApplicationsTable, ComponentsTable, ReferencesTable, VariantsTable,
};
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::status::ErrorBanner;
use crate::shared::icons::icon;
use contracts::domain::a002_category::AttributeScope;
use contracts::domain::a003_product::{ItemId, ItemType, Variant, VariantId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(#[prop(into)] id: Signal<ItemId>) -> impl IntoView {
    let app = use_app_context();
    let item_ctx = use_item_context();
    let vm = use_product();

    Effect::new(move |_| {
        vm.load(id.get());
    });

    // новый товар в контексте: тип, вариант, индекс атрибутов
    Effect::new(move |_| {
        vm.state.data.with(|d| match d {
            Some(detail) => item_ctx.select_item(&detail.item),
            None => item_ctx.clear(),
        });
    });

    // фильтр по автомобилю из каталога подсвечивает совместимые строки
    Effect::new(move |_| {
        let vehicle = app.catalog_filters.with(|f| f.server_filters().cloned().unwrap_or_default());
        item_ctx.selected_filters.set(vehicle);
    });

    let detail = Memo::new(move |_| vm.state.data.get());

    view! {
        <div class="page page--wide product-details">
            <div class="page__header">
                <div class="page__header-left">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| app.navigate(Page::Catalog)
                    >
                        {icon("arrow-left")}
                        " Volver al catálogo"
                    </Button>
                </div>
            </div>

            <ErrorBanner error=vm.state.error />

            {move || {
                if vm.state.loading.get() {
                    return view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <Spinner />
                            <span class="text-muted">"Cargando producto…"</span>
                        </Flex>
                    }
                    .into_any();
                }
                match detail.get() {
                    Some(detail) => view! { <DetailBody detail=detail /> }.into_any(),
                    None if vm.state.loaded.get() && vm.state.error.get().is_none() => view! {
                        <div class="empty-state">
                            <h2>"Producto no encontrado"</h2>
                        </div>
                    }
                    .into_any(),
                    None => view! { <></> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn DetailBody(detail: ProductDetail) -> impl IntoView {
    let item_ctx = use_item_context();
    let detail = StoredValue::new(detail);

    let item = move || detail.with_value(|d| d.item.clone());
    let variant = move || {
        let id = item_ctx.variant_id.get()?;
        detail.with_value(|d| d.item.variant(id).cloned())
    };

    // изображения выбранного варианта заменяют изображения товара
    let images = Signal::derive(move || match variant() {
        Some(v) if !v.images.is_empty() => v.images,
        _ => detail.with_value(|d| d.item.images.clone()),
    });
    let sku = move || variant().map(|v| v.sku).unwrap_or_else(|| item().sku);

    let sheet = move || {
        let attributes = detail.with_value(|d| {
            let mut attrs = d.attributes(AttributeScope::Product);
            if item_ctx.variant_id.get().is_some() {
                attrs.extend(d.attributes(AttributeScope::Variant));
            }
            attrs
        });
        item_ctx
            .attribute_index
            .with(|index| attribute_sheet(&attributes, index))
    };

    let variant_options = detail.with_value(|d| {
        d.item
            .variants
            .iter()
            .map(|v| (v.id.as_string(), format!("{} · {}", v.sku, v.name)))
            .collect::<Vec<_>>()
    });
    let has_variants = !variant_options.is_empty();
    let selected_variant = RwSignal::new(String::new());
    Effect::new(move |_| {
        let raw = selected_variant.get();
        let id = VariantId::from_string(&raw).ok();
        detail.with_value(|d| item_ctx.select_variant(&d.item, id));
    });

    let variants = Signal::derive(move || detail.with_value(|d| d.item.variants.clone()));
    let variant_attrs =
        Signal::derive(move || detail.with_value(|d| d.attributes(AttributeScope::Variant)));
    let on_variant_row =
        Callback::new(move |v: Variant| selected_variant.set(v.id.as_string()));

    let is_kit = detail.with_value(|d| d.item.item_type == ItemType::Kit);
    let components = Signal::derive(move || detail.with_value(|d| d.item.components.clone()));
    let references = Signal::derive(move || detail.with_value(|d| d.item.references.clone()));
    let reference_attrs =
        Signal::derive(move || detail.with_value(|d| d.attributes(AttributeScope::Reference)));
    let applications = Signal::derive(move || detail.with_value(|d| d.item.applications.clone()));
    let application_attrs =
        Signal::derive(move || detail.with_value(|d| d.attributes(AttributeScope::Application)));
    let name = Signal::derive(move || item().name);

    view! {
        <div class="product-details__top">
            <ImageGallery images=images alt=name />

            <div class="product-details__info">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || item().item_type.label()}
                    </Badge>
                    <span class="product-details__sku">{sku}</span>
                </Flex>
                <h1 class="page__title">{move || item().name}</h1>
                {move || item().description.map(|d| view! { <p class="product-details__description">{d}</p> })}

                {has_variants.then(|| view! {
                    <div class="product-details__variants">
                        <Label>"Variante"</Label>
                        <Select value=selected_variant>
                            <option value="">"Producto base"</option>
                            {variant_options
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                })}

                <table class="attribute-sheet">
                    <tbody>
                        {move || {
                            sheet()
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <tr>
                                        <th>{label}</th>
                                        <td>{value}</td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>

        {has_variants.then(|| view! {
            <section class="product-details__section">
                <h2>"Variantes"</h2>
                <VariantsTable
                    attributes=variant_attrs
                    variants=variants
                    selected=item_ctx.variant_id
                    on_select=on_variant_row
                />
            </section>
        })}

        {is_kit.then(|| view! {
            <section class="product-details__section">
                <h2>"Componentes del kit"</h2>
                <ComponentsTable components=components />
            </section>
        })}

        <section class="product-details__section">
            <h2>"Referencias cruzadas"</h2>
            <ReferencesTable attributes=reference_attrs references=references />
        </section>

        <section class="product-details__section">
            <h2>"Aplicaciones"</h2>
            <ApplicationsTable
                attributes=application_attrs
                applications=applications
                selected=item_ctx.selected_filters
            />
        </section>
    }
}
