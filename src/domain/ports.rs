use crate::core::summary::WordRanking;
use crate::domain::model::Product;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;

/// Supplies the full, unfiltered catalog on every call.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_url(&self) -> &str;
    fn bind_addr(&self) -> SocketAddr;
    fn request_timeout(&self) -> Option<Duration>;
    fn word_ranking(&self) -> WordRanking;
}
