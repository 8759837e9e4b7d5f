use crate::domain::model::Product;
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;

/// Catalog source backed by a JSON endpoint returning an array of products.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_timeout(config.catalog_url(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<Product>> {
        tracing::debug!("Making catalog request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        tracing::debug!("Catalog response status: {}", response.status());

        let response = response.error_for_status().inspect_err(|e| {
            tracing::error!("Error occurred while fetching products: {}", e);
        })?;

        let body = response.text().await?;
        tracing::trace!("Catalog response content: {}", body);

        let products = decode_products(&body)?;
        tracing::debug!("Decoded {} products", products.len());

        Ok(products)
    }
}

/// 解析上游回傳的商品陣列，欄位名稱不分大小寫
pub fn decode_products(body: &str) -> Result<Vec<Product>> {
    let items: Vec<Map<String, Value>> = serde_json::from_str(body)?;

    items
        .into_iter()
        .map(|item| -> Result<Product> {
            let normalized: Map<String, Value> = item
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect();
            Ok(serde_json::from_value(Value::Object(normalized))?)
        })
        .collect()
}
