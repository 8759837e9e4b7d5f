pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{http_catalog::HttpCatalogSource, web::router};
pub use crate::config::{ServiceSettings, TomlConfig};
pub use crate::core::{engine::FilterEngine, summary::WordRanking};
pub use crate::domain::model::{FilterParameters, FilterResult, Product, Summary};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::{Result, ServiceError};
