use crate::config::settings::{ServiceSettings, SettingsOverrides};
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "product-filter")]
#[command(about = "HTTP service filtering a product catalog and summarizing it")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// URL of the upstream product catalog (JSON array)
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Address to listen on, e.g. 127.0.0.1:8080
    #[arg(long)]
    pub bind: Option<String>,

    /// Timeout for each catalog request
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            catalog_url: self.catalog_url.clone(),
            bind: self.bind.clone(),
            timeout_seconds: self.timeout_seconds,
            json_logs: self.json_logs,
        }
    }

    /// 載入設定檔 (若有指定) 並套用命令列覆蓋
    pub fn settings(&self) -> Result<ServiceSettings> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        ServiceSettings::resolve(file.as_ref(), &self.overrides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_arguments() {
        let cli = CliConfig::parse_from([
            "product-filter",
            "--catalog-url",
            "https://catalog.example.com/products",
            "--bind",
            "0.0.0.0:3000",
            "--timeout-seconds",
            "7",
            "-v",
        ]);

        assert_eq!(
            cli.catalog_url.as_deref(),
            Some("https://catalog.example.com/products")
        );
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:3000"));
        assert_eq!(cli.timeout_seconds, Some(7));
        assert!(cli.verbose);
        assert!(!cli.json_logs);
    }

    #[test]
    fn test_settings_from_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\nurl = \"https://file.example.com/products\"\n")
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_string_lossy().to_string()),
            bind: Some("127.0.0.1:3001".to_string()),
            ..Default::default()
        };

        let settings = cli.settings().unwrap();

        assert_eq!(settings.catalog_url(), "https://file.example.com/products");
        assert_eq!(settings.bind_addr().port(), 3001);
    }
}
