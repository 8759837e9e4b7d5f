use clap::Parser;
use product_filter::utils::error::ErrorSeverity;
use product_filter::utils::logger;
use product_filter::{router, CliConfig, ConfigProvider, FilterEngine, HttpCatalogSource};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 解析設定 (日誌格式取決於設定內容，因此先於日誌初始化)
    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            let exit_code = match e.severity() {
                ErrorSeverity::Critical => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    };

    if settings.json_logs() {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting product-filter service");
    tracing::debug!("Resolved settings: {:?}", settings);

    let source = HttpCatalogSource::from_config(&settings)?;
    tracing::info!("📦 Catalog source: {}", source.url());

    let engine = Arc::new(FilterEngine::new(source).with_word_ranking(settings.word_ranking()));
    let app = router(engine);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
