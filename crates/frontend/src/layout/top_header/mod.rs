//! TopHeader component - application top navigation bar.
//!
//! Contains the brand title and the page navigation.

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

const NAV: [(Page, &str); 4] = [
    (Page::Catalog, "products"),
    (Page::Brands, "tag"),
    (Page::Gallery, "image"),
    (Page::Bulletins, "file-text"),
];

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    let is_active = move |page: Page| {
        let current = ctx.page.get();
        match (current, page) {
            // карточка товара открывается из каталога
            (Page::Product(_), Page::Catalog) => true,
            (current, page) => current == page,
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand" on:click=move |_| ctx.navigate(Page::Catalog)>
                {icon("car")}
                <span class="top-header__title">"Catálogo de autopartes"</span>
            </div>

            <nav class="top-header__nav">
                {NAV
                    .into_iter()
                    .map(|(page, icon_name)| {
                        view! {
                            <button
                                class="top-header__nav-btn"
                                class:top-header__nav-btn--active=move || is_active(page)
                                on:click=move |_| ctx.navigate(page)
                            >
                                {icon(icon_name)}
                                <span>{page.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
