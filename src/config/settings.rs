use crate::config::toml_config::TomlConfig;
use crate::core::summary::WordRanking;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_positive_number, validate_required_field, validate_socket_addr, validate_url, Validate,
};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Values given on the command line; each one wins over the TOML file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub catalog_url: Option<String>,
    pub bind: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub json_logs: bool,
}

/// Fully resolved service configuration, passed explicitly to the adapters.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    catalog_url: String,
    bind_addr: SocketAddr,
    request_timeout: Option<Duration>,
    word_ranking: WordRanking,
    json_logs: bool,
}

impl ServiceSettings {
    pub fn new(catalog_url: impl Into<String>, bind_addr: SocketAddr) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            bind_addr,
            request_timeout: None,
            word_ranking: WordRanking::default(),
            json_logs: false,
        }
    }

    pub fn resolve(file: Option<&TomlConfig>, overrides: &SettingsOverrides) -> Result<Self> {
        // 只驗證合併後的結果，命令列可取代檔案中無效或未展開的值
        let file_config = file.cloned().unwrap_or_default();

        let catalog_url = overrides
            .catalog_url
            .clone()
            .or_else(|| file_config.catalog.url.clone());
        let catalog_url = validate_required_field("catalog.url", &catalog_url)?.clone();

        let bind = overrides
            .bind
            .clone()
            .or_else(|| file_config.server.bind.clone())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = validate_socket_addr("server.bind", &bind)?;

        let timeout_seconds = overrides
            .timeout_seconds
            .or(file_config.catalog.timeout_seconds);

        let settings = Self {
            catalog_url,
            bind_addr,
            request_timeout: timeout_seconds.map(Duration::from_secs),
            word_ranking: file_config.word_ranking(),
            json_logs: overrides.json_logs || file_config.logging.json,
        };
        settings.validate()?;

        Ok(settings)
    }

    pub fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl ConfigProvider for ServiceSettings {
    fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    fn word_ranking(&self) -> WordRanking {
        self.word_ranking
    }
}

impl Validate for ServiceSettings {
    fn validate(&self) -> Result<()> {
        validate_url("catalog.url", &self.catalog_url)?;

        if let Some(timeout) = self.request_timeout {
            validate_positive_number("catalog.timeout_seconds", timeout.as_secs() as usize, 1)?;
        }

        validate_positive_number(
            "summary.common_word_count",
            self.word_ranking.common_word_count,
            1,
        )
    }
}
