use leptos::prelude::*;

/// Нативный select с подписью и пустым пунктом.
///
/// Пустая строка в `value` означает «ничего не выбрано». Если выбранного
/// значения нет среди `options` (список ещё грузится или сервер его не вернул),
/// оно всё равно показывается первым пунктом, чтобы выбор не терялся.
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// (значение, подпись)
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let entries = Memo::new(move |_| {
        let current = value.get();
        let mut list = options.get();
        if !current.is_empty() && !list.iter().any(|(v, _)| *v == current) {
            list.insert(0, (current.clone(), current));
        }
        list
    });

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <select
                class="form__select"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.with(String::is_empty)>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                <For
                    each=move || entries.get()
                    key=|(v, caption)| (v.clone(), caption.clone())
                    children=move |(v, caption)| {
                        let selected = {
                            let v = v.clone();
                            move || value.with(|cur| *cur == v)
                        };
                        view! { <option value=v selected=selected>{caption}</option> }
                    }
                />
            </select>
        </div>
    }
}
