// Adapters layer: concrete implementations for external systems (catalog over HTTP, web API).

pub mod http_catalog;
pub mod web;
