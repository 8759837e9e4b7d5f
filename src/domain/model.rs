use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// 查詢參數，欄位名稱與 HTTP query string 一致 (minPrice, maxPrice, size, highlight)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParameters {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max_price: Option<f64>,
    pub size: Option<String>,
    pub highlight: Option<String>,
}

// `?minPrice=` 視為未提供，而不是解析錯誤
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

/// Statistics over the whole catalog, independent of the applied filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub min_price: f64,
    pub max_price: f64,
    pub sizes: Vec<String>,
    pub common_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterResult {
    pub products: Vec<Product>,
    #[serde(rename = "filter")]
    pub summary: Summary,
}
