pub mod engine;
pub mod filters;
pub mod highlight;
pub mod summary;

pub use crate::domain::model::{FilterParameters, FilterResult, Product, Summary};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
