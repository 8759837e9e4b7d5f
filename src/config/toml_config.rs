use crate::core::summary::WordRanking;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_positive_number, validate_socket_addr, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub summary: SummaryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub skip_most_common: Option<usize>,
    pub common_word_count: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn word_ranking(&self) -> WordRanking {
        let defaults = WordRanking::default();
        WordRanking {
            skip_most_common: self
                .summary
                .skip_most_common
                .unwrap_or(defaults.skip_most_common),
            common_word_count: self
                .summary
                .common_word_count
                .unwrap_or(defaults.common_word_count),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.catalog.url {
            validate_url("catalog.url", url)?;
        }

        if let Some(bind) = &self.server.bind {
            validate_socket_addr("server.bind", bind)?;
        }

        if let Some(timeout) = self.catalog.timeout_seconds {
            validate_positive_number("catalog.timeout_seconds", timeout as usize, 1)?;
        }

        validate_positive_number("summary.common_word_count", self.word_ranking().common_word_count, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
bind = "0.0.0.0:9000"

[catalog]
url = "https://catalog.example.com/products"
timeout_seconds = 5

[summary]
skip_most_common = 3
common_word_count = 7

[logging]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.server.bind.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(
            config.catalog.url.as_deref(),
            Some("https://catalog.example.com/products")
        );
        assert_eq!(config.catalog.timeout_seconds, Some(5));
        assert_eq!(
            config.word_ranking(),
            WordRanking {
                skip_most_common: 3,
                common_word_count: 7
            }
        );
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.catalog.url.is_none());
        assert_eq!(config.word_ranking(), WordRanking::default());
        assert!(!config.logging.json);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PRODUCT_FILTER_TEST_CATALOG", "https://test.catalog.com/products");

        let toml_content = r#"
[catalog]
url = "${PRODUCT_FILTER_TEST_CATALOG}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.catalog.url.as_deref(),
            Some("https://test.catalog.com/products")
        );

        std::env::remove_var("PRODUCT_FILTER_TEST_CATALOG");
    }

    #[test]
    fn test_unset_env_var_is_left_intact() {
        let toml_content = r#"
[catalog]
url = "${PRODUCT_FILTER_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.catalog.url.as_deref(),
            Some("${PRODUCT_FILTER_TEST_UNSET_VARIABLE}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let invalid_bind = TomlConfig::from_toml_str("[server]\nbind = \"nowhere\"\n").unwrap();
        assert!(invalid_bind.validate().is_err());

        let zero_words = TomlConfig::from_toml_str("[summary]\ncommon_word_count = 0\n").unwrap();
        assert!(zero_words.validate().is_err());

        let zero_timeout = TomlConfig::from_toml_str("[catalog]\ntimeout_seconds = 0\n").unwrap();
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[catalog\nurl = ");

        assert!(matches!(result, Err(ServiceError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[catalog]
url = "https://catalog.example.com/products"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.catalog.url.as_deref(),
            Some("https://catalog.example.com/products")
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/definitely/not/here/product-filter.toml");

        assert!(matches!(result, Err(ServiceError::IoError(_))));
    }
}
