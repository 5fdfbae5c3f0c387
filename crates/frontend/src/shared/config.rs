//! Runtime configuration of the catalog front-end.
//!
//! The API base URL comes from `CATALOG_API_URL` at build time; without it the
//! app talks to the backend on port 3000 of the host that served the page.

use super::api_utils::api_base;
use contracts::shared::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub api_url: String,
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    pub search_debounce_ms: u32,
}

impl CatalogConfig {
    fn load() -> Self {
        let api_url = resolve_api_url(option_env!("CATALOG_API_URL"), api_base);
        log::info!("Catalog API: {}", api_url);
        Self {
            api_url,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: 500,
        }
    }
}

pub static CONFIG: Lazy<CatalogConfig> = Lazy::new(CatalogConfig::load);

pub fn config() -> &'static CatalogConfig {
    &CONFIG
}

/// Env value wins when non-blank; trailing slashes are dropped so paths can
/// always start with `/`
fn resolve_api_url(env: Option<&str>, origin: impl FnOnce() -> String) -> String {
    let url = match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => url.to_string(),
        None => format!("{}/api", origin()),
    };
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_url_wins() {
        let url = resolve_api_url(Some("https://api.example.com/v1/"), || {
            panic!("origin must not be read")
        });
        assert_eq!(url, "https://api.example.com/v1");
    }

    #[test]
    fn test_blank_env_falls_back_to_origin() {
        let url = resolve_api_url(Some("  "), || "http://localhost:3000".to_string());
        assert_eq!(url, "http://localhost:3000/api");
        let url = resolve_api_url(None, || "http://localhost:3000".to_string());
        assert_eq!(url, "http://localhost:3000/api");
    }
}
