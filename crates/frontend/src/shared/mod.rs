pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod entity_page;
pub mod entity_store;
pub mod error;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod storage;
