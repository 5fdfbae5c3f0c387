use crate::shared::api::get_json;
use crate::shared::api_utils::api_url;
use crate::shared::config::config;
use crate::shared::fetch_state::FetchState;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "API: en línea",
            ServerStatus::Offline => "API: sin conexión",
            ServerStatus::Checking => "API: comprobando…",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let ping: FetchState<serde_json::Value> = FetchState::new();

    // Запускаем проверку при монтировании; ответ `/brands` не разбирается
    ping.run("ping", |signal| async move {
        get_json::<serde_json::Value>(&api_url("/brands", &[]), signal.as_ref()).await
    });

    let status = move || {
        if ping.loading.get() || !ping.loaded.get() {
            ServerStatus::Checking
        } else if ping.error.get().is_some() {
            ServerStatus::Offline
        } else {
            ServerStatus::Online
        }
    };

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class="status-bar__copyright">"© Catálogo de autopartes"</span>
            <span class=move || status().css_class() title=config().api_url.clone()>
                {move || status().display_text()}
            </span>
        </footer>
    }
}
