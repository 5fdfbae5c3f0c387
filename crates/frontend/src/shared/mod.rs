pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod debounce;
pub mod fetch_state;
pub mod icons;
pub mod list_utils;
pub mod request_slot;
