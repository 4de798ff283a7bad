pub mod api;
pub mod stores;
