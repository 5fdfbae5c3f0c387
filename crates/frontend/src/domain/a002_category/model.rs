use crate::shared::api::{get_json, ApiError};
use crate::shared::api_utils::api_url;
use contracts::domain::a002_category::{Category, CategoryId};
use web_sys::AbortSignal;

/// `GET /categories`, без атрибутов
pub async fn fetch_categories(signal: Option<AbortSignal>) -> Result<Vec<Category>, ApiError> {
    get_json(&api_url("/categories", &[]), signal.as_ref()).await
}

/// `GET /categories/:id?attributes=true`
pub async fn fetch_category(
    id: CategoryId,
    signal: Option<AbortSignal>,
) -> Result<Category, ApiError> {
    let url = api_url(
        &format!("/categories/{}", id),
        &[("attributes", "true".to_string())],
    );
    get_json(&url, signal.as_ref()).await
}
