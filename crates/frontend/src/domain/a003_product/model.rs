use crate::shared::api::{get_json, ApiError};
use crate::shared::api_utils::api_url;
use contracts::domain::a002_category::CategoryId;
use contracts::domain::a003_product::{FilterOptions, Item, ItemId, ProductPage};
use contracts::shared::filters::VehicleFilters;
use contracts::shared::query::{filter_options_pairs, ProductQuery};
use web_sys::AbortSignal;

/// `GET /products?type=&page=&pageSize=`
pub async fn fetch_products(
    query: ProductQuery,
    signal: Option<AbortSignal>,
) -> Result<ProductPage, ApiError> {
    let url = api_url("/products", &query.to_pairs());
    get_json(&url, signal.as_ref()).await
}

/// `GET /products/category/:id?type=single&page=&pageSize=&search=&filters=`
pub async fn fetch_products_by_category(
    category_id: CategoryId,
    query: ProductQuery,
    signal: Option<AbortSignal>,
) -> Result<ProductPage, ApiError> {
    let url = api_url(
        &format!("/products/category/{}", category_id),
        &query.to_pairs(),
    );
    get_json(&url, signal.as_ref()).await
}

/// `GET /products/category/:id/filters[?filters=<json>]`
pub async fn fetch_filter_options(
    category_id: CategoryId,
    selected: VehicleFilters,
    signal: Option<AbortSignal>,
) -> Result<FilterOptions, ApiError> {
    let url = api_url(
        &format!("/products/category/{}/filters", category_id),
        &filter_options_pairs(&selected),
    );
    get_json(&url, signal.as_ref()).await
}

/// `GET /products/:id`
pub async fn fetch_product(id: ItemId, signal: Option<AbortSignal>) -> Result<Item, ApiError> {
    get_json(&api_url(&format!("/products/{}", id), &[]), signal.as_ref()).await
}
