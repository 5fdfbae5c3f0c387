use crate::domain::a001_brand::view_model::use_brands;
use crate::layout::global_context::use_app_context;
use crate::shared::components::status::{ErrorBanner, NO_RESULTS};
use crate::shared::icons::icon;
use contracts::domain::a001_brand::Brand;
use contracts::shared::fetch_status::FetchStatus;
use leptos::prelude::*;
use thaw::*;

/// Страница «Marcas»: карточки брендов, клик открывает каталог бренда
#[component]
pub fn BrandsList() -> impl IntoView {
    let app = use_app_context();
    let brands = use_brands();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("tag")}
                    <h1 class="page__title">"Marcas"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || brands.state.data.with(|b| b.len()).to_string()}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| brands.fetch()
                        disabled=brands.state.loading
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <ErrorBanner error=brands.state.error />

            {move || match brands.state.status(|b| b.len()) {
                FetchStatus::Idle | FetchStatus::Loading => view! {
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Spinner />
                        <span class="text-muted">"Cargando…"</span>
                    </Flex>
                }
                .into_any(),
                FetchStatus::NoResults => view! {
                    <p class="text-muted">{NO_RESULTS}</p>
                }
                .into_any(),
                FetchStatus::Loaded => view! {
                    <div class="brand-grid">
                        {brands
                            .state
                            .data
                            .get()
                            .into_iter()
                            .map(|brand| view! {
                                <BrandCard
                                    brand=brand.clone()
                                    on_open=Callback::new(move |_| app.open_catalog_for_brand(brand.id))
                                />
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn BrandCard(brand: Brand, on_open: Callback<()>) -> impl IntoView {
    view! {
        <div class="brand-card" on:click=move |_| on_open.run(())>
            <div class="brand-card__logo">
                {match brand.logo_url {
                    Some(url) => view! { <img src=url alt=brand.name.clone() /> }.into_any(),
                    None => icon("tag"),
                }}
            </div>
            <h3 class="brand-card__name">{brand.name}</h3>
            {brand.description.map(|d| view! { <p class="brand-card__description">{d}</p> })}
            {brand.website.map(|url| view! {
                <a
                    class="brand-card__link"
                    href=url
                    target="_blank"
                    rel="noopener"
                    on:click=|e| e.stop_propagation()
                >
                    "Sitio web " {icon("external-link")}
                </a>
            })}
        </div>
    }
}
