use std::process::ExitCode;

use frontiers_scraper::{ScrapeRequest, ScraperService};
use tower::Service;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // ログ設定（RUST_LOG 未設定なら info）
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut service = ScraperService::new();

    match service.call(ScrapeRequest::default()).await {
        Ok(result) => {
            info!(
                "{} articles written to {}",
                result.articles.len(),
                result.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Scrape failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
