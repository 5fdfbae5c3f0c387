use leptos::prelude::*;

/// Группа радиокнопок над значениями `T`.
///
/// `options` фиксированы на время жизни компонента: (значение, подпись).
#[component]
pub fn RadioGroup<T>(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<T>,
    on_change: Callback<T>,
    /// `name` у input'ов, должен быть уникален на странице
    #[prop(into)]
    name: String,
    options: Vec<(T, &'static str)>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    let buttons = options
        .into_iter()
        .enumerate()
        .map(|(idx, (option, caption))| {
            let input_id = radio_input_id(&name, idx);
            let label_for = input_id.clone();
            view! {
                <label
                    class="form__radio-wrapper"
                    class:form__radio-wrapper--disabled=move || disabled.get()
                    class:form__radio-wrapper--checked=move || value.get() == option
                    for=label_for
                >
                    <input
                        id=input_id
                        type="radio"
                        class="form__radio"
                        name=name.clone()
                        prop:checked=move || value.get() == option
                        disabled=move || disabled.get()
                        on:change=move |_| on_change.run(option)
                    />
                    <span class="form__radio-label">{caption}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <div class="form__radio-group" role="radiogroup">
                {buttons}
            </div>
        </div>
    }
}

/// id инпута, на который ссылается `for` подписи
fn radio_input_id(name: &str, idx: usize) -> String {
    format!("{}-{}", name, idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_input_share_id() {
        let input_id = radio_input_id("filter-mode", 2);
        let label_for = input_id.clone();
        assert_eq!(label_for, "filter-mode-2");
        assert_eq!(input_id, label_for);
        assert_ne!(radio_input_id("filter-mode", 0), radio_input_id("filter-mode", 1));
    }
}
