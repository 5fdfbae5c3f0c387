pub mod columns;
pub mod fetch_status;
pub mod filters;
pub mod pagination;
pub mod query;
pub mod text;
