use crate::shared::api::{get_json, ApiError};
use crate::shared::api_utils::api_url;
use contracts::domain::a001_brand::Brand;
use web_sys::AbortSignal;

/// `GET /brands`
pub async fn fetch_brands(signal: Option<AbortSignal>) -> Result<Vec<Brand>, ApiError> {
    get_json(&api_url("/brands", &[]), signal.as_ref()).await
}
