use crate::shared::icons::icon;
use contracts::domain::a003_product::{sorted_images, ItemImage};
use leptos::prelude::*;

/// Главное изображение и лента миниатюр
#[component]
pub fn ImageGallery(
    #[prop(into)] images: Signal<Vec<ItemImage>>,
    #[prop(into)] alt: Signal<String>,
) -> impl IntoView {
    let selected = RwSignal::new(0usize);
    let ordered = Memo::new(move |_| {
        images.with(|imgs| sorted_images(imgs).into_iter().cloned().collect::<Vec<_>>())
    });

    // другой набор (сменился вариант) начинается с первого изображения
    Effect::new(move |_| {
        ordered.track();
        selected.set(0);
    });

    let main = move || {
        let imgs = ordered.get();
        let idx = selected.get().min(imgs.len().saturating_sub(1));
        imgs.get(idx).cloned()
    };

    view! {
        <div class="gallery">
            <div class="gallery__main">
                {move || match main() {
                    Some(img) => {
                        let alt_text = img.alt.clone().unwrap_or_else(|| alt.get());
                        view! { <img class="gallery__image" src=img.url alt=alt_text /> }.into_any()
                    }
                    None => view! {
                        <div class="gallery__placeholder">
                            {icon("image")}
                            <span class="text-muted">"Sin imagen"</span>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
            {move || {
                let imgs = ordered.get();
                (imgs.len() > 1).then(|| {
                    view! {
                        <div class="gallery__thumbs">
                            {imgs
                                .into_iter()
                                .enumerate()
                                .map(|(i, img)| {
                                    view! {
                                        <button
                                            class="gallery__thumb"
                                            class:gallery__thumb--active=move || selected.get() == i
                                            on:click=move |_| selected.set(i)
                                        >
                                            <img src=img.url alt="" loading="lazy" />
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
            }}
        </div>
    }
}
