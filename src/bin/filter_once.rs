use clap::Parser;
use product_filter::utils::logger;
use product_filter::{FilterEngine, FilterParameters, HttpCatalogSource};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "filter-once")]
#[command(about = "Run one filter request against a catalog and print the result")]
struct Args {
    /// URL of the upstream product catalog
    #[arg(long)]
    catalog_url: String,

    #[arg(long)]
    min_price: Option<f64>,

    #[arg(long)]
    max_price: Option<f64>,

    #[arg(long)]
    size: Option<String>,

    /// Comma-separated words to highlight
    #[arg(long)]
    highlight: Option<String>,

    #[arg(long)]
    timeout_seconds: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let source = HttpCatalogSource::with_timeout(
        args.catalog_url.clone(),
        args.timeout_seconds.map(Duration::from_secs),
    )?;
    let engine = FilterEngine::new(source);

    let params = FilterParameters {
        min_price: args.min_price,
        max_price: args.max_price,
        size: args.size,
        highlight: args.highlight,
    };

    match engine.filter_products(&params).await {
        Ok(result) => {
            tracing::info!(
                "✅ {} products matched, {} common words",
                result.products.len(),
                result.summary.common_words.len()
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Filtering failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
