//! ヘッド付きデバッグ実行
//!
//! ブラウザ画面と DevTools を表示したまま検索・抽出を行い、
//! 結果を表示して Ctrl+C まで待機する。
//!
//! 実行方法:
//! ```
//! RUST_LOG=debug cargo run --example debug_headful -- "phage therapy"
//! ```

use frontiers_scraper::{FrontiersScraper, Scraper, ScraperConfig};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ログ設定
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "bacteriophage".to_string());

    let config = ScraperConfig::new(query)
        .with_debug(true)
        .with_settle_delay(Duration::from_secs(2));

    let mut scraper = FrontiersScraper::new(config);

    println!("=== Frontiers Debug Scrape ===");

    scraper.initialize().await?;
    let outcome = match scraper.search().await {
        Ok(()) => scraper.extract().await,
        Err(e) => Err(e),
    };

    match &outcome {
        Ok(articles) => {
            println!("Articles: {}", articles.len());
            for (i, a) in articles.iter().enumerate() {
                println!(
                    "{:>3}. {} [{}] {}\n     {}\n     {}",
                    i + 1,
                    a.title,
                    a.article_type,
                    a.published_on,
                    a.authors.join(", "),
                    a.article_link
                );
            }
        }
        Err(e) => eprintln!("エラー: {}", e),
    }

    // ブラウザを開いたまま確認できるように待機
    println!("Ctrl+C で終了");
    tokio::signal::ctrl_c().await?;

    scraper.close().await?;
    outcome?;
    Ok(())
}
