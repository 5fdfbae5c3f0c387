//! Страница «Catálogo».
//!
//! Состояние фильтров живёт в `AppGlobalContext`, страница только связывает
//! его с хуками загрузки: схема категории, страница товаров и варианты
//! фильтров по автомобилю перезапрашиваются при изменении своих входов.

use super::state::{apply_local_filters, persist_state};
use crate::domain::a001_brand::view_model::use_brands;
use crate::domain::a002_category::view_model::{use_categories, use_category};
use crate::domain::a003_product::ui::filter::FilterSection;
use crate::domain::a003_product::ui::table::ProductsTable;
use crate::domain::a003_product::view_model::{use_filter_options, use_products};
use crate::layout::global_context::use_app_context;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status::ErrorBanner;
use crate::shared::components::ui::Select;
use crate::shared::config::config;
use crate::shared::icons::icon;
use contracts::domain::a001_brand::BrandId;
use contracts::domain::a002_category::{Attribute, CategoryId};
use contracts::domain::a003_product::{FilterOptions, Item};
use contracts::domain::common::AggregateId;
use contracts::shared::fetch_status::FetchStatus;
use contracts::shared::filters::{derive_vehicle_options, FilterMode, VehicleFilters};
use contracts::shared::query::ProductQuery;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, Flex, FlexAlign, FlexGap};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let app = use_app_context();
    let filters = app.catalog_filters;

    let brands = use_brands();
    let categories = use_categories();
    let category = use_category();
    let products = use_products();
    let options = use_filter_options();

    let category_id = Memo::new(move |_| filters.with(|f| f.category_id));

    // схема атрибутов выбранной категории
    Effect::new(move |_| {
        category.load(category_id.get());
    });

    // серверные входы списка; смена локального фильтра по кросс-номеру сюда не попадает
    let product_query = Memo::new(move |_| {
        filters.with(|f| (f.category_id, ProductQuery::from_filters(f)))
    });
    Effect::new(move |_| {
        product_query.track();
        products.load(&filters.get_untracked());
    });

    let vehicle_selection = Memo::new(move |_| {
        filters.with(|f| {
            let selected = if f.mode == FilterMode::Vehicle {
                f.vehicle.clone()
            } else {
                VehicleFilters::default()
            };
            (f.category_id, selected)
        })
    });
    Effect::new(move |_| {
        let (category_id, selected) = vehicle_selection.get();
        options.load(category_id, &selected);
    });

    let schema = Signal::derive(move || category.schema_for(category_id.get()));
    let chain = Signal::derive(move || {
        schema.with(|c| {
            c.as_ref()
                .map(|c| c.vehicle_attributes().into_iter().cloned().collect::<Vec<Attribute>>())
                .unwrap_or_default()
        })
    });

    // серверные списки, пустые дополняются значениями из загруженных товаров
    let merged_options = Signal::derive(move || -> FilterOptions {
        let server = options.state.data.get();
        let (_, selected) = vehicle_selection.get();
        let derived = chain.with(|attrs| {
            let refs: Vec<&Attribute> = attrs.iter().collect();
            products
                .state
                .data
                .with(|p| derive_vehicle_options(&p.items, &refs, &selected))
        });
        server.or_derived(derived)
    });

    let visible_items = Signal::derive(move || {
        products
            .state
            .data
            .with(|p| filters.with(|f| apply_local_filters(&p.items, f)))
    });

    let error = Signal::derive(move || {
        products
            .state
            .error
            .get()
            .or_else(|| category.state.error.get())
            .or_else(|| categories.state.error.get())
    });

    let brand_options = Signal::derive(move || {
        brands.state.data.with(|list| {
            list.iter()
                .map(|b| (b.id.as_string(), b.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let category_options =
        Signal::derive(move || categories.options_for(filters.with(|f| f.brand_id)));

    let on_brand = Callback::new(move |raw: String| {
        let id = BrandId::from_string(&raw).ok();
        filters.update(|f| f.set_brand(id));
    });
    let on_category = Callback::new(move |raw: String| {
        let id = CategoryId::from_string(&raw).ok();
        filters.update(|f| f.set_category(id));
    });

    let go_to_page = move |page: usize| {
        filters.update(|f| f.set_page(page));
    };
    let change_page_size = move |size: usize| {
        filters.update(|f| f.set_page_size(size));
        persist_state(filters);
    };

    let pagination = view! {
        <PaginationControls
            current_page=Signal::derive(move || filters.with(|f| f.page))
            total_pages=Signal::derive(move || products.total_pages())
            total_count=Signal::derive(move || products.total())
            page_size=Signal::derive(move || filters.with(|f| f.page_size))
            on_page_change=Callback::new(go_to_page)
            on_page_size_change=Callback::new(change_page_size)
            page_size_options=config().page_size_options.clone()
        />
    }
    .into_any();

    let status_text = move || match products.state.status(|p| p.items.len()) {
        FetchStatus::Idle => "",
        FetchStatus::Loading => "Cargando…",
        FetchStatus::Loaded => "",
        FetchStatus::NoResults => "Sin resultados",
    };

    view! {
        <div class="page page--wide">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("products")}
                    <h1 class="page__title">"Catálogo"</h1>
                    {move || {
                        filters
                            .with(|f| f.brand_id)
                            .and_then(|id| brands.name_of(id))
                            .map(|name| view! { <span class="page__subtitle">{name}</span> })
                    }}
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || products.total().to_string()}</span>
                    </Badge>
                    <span class="text-muted">{status_text}</span>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| products.load(&filters.get_untracked())
                        disabled=products.state.loading
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <ErrorBanner error=error />

            <Flex gap=FlexGap::Medium align=FlexAlign::End class="catalog__scope">
                <div style="min-width: 240px;">
                    <Select
                        label="Marca"
                        value=Signal::derive(move || {
                            filters.with(|f| f.brand_id.map(|id| id.as_string()).unwrap_or_default())
                        })
                        options=brand_options
                        placeholder="Todas las marcas"
                        on_change=on_brand
                    />
                </div>
                <div style="min-width: 240px;">
                    <Select
                        label="Categoría"
                        value=Signal::derive(move || {
                            filters.with(|f| f.category_id.map(|id| id.as_string()).unwrap_or_default())
                        })
                        options=category_options
                        placeholder="Todas las categorías"
                        disabled=categories.state.loading
                        on_change=on_category
                    />
                </div>
            </Flex>

            <FilterSection
                filters=filters
                chain=chain
                options=merged_options
                options_loading=options.state.loading
                pagination=pagination
            />

            <div class="page-content">
                <ProductsTable
                    category=schema
                    items=visible_items
                    loading=products.state.loading
                    on_open=Callback::new(move |item: Item| app.open_product(item.id))
                />
            </div>
        </div>
    }
}
