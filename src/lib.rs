//! Frontiers 論文検索スクレイパーライブラリ
//!
//! ヘッドレスブラウザで検索ページにクエリを送信し、検索結果の各アイテムから
//! タイトル・著者・公開日・記事種別・リンクを抽出して
//! `<prefix>_<timestamp>.json` に書き出す。
//!
//! # 使用例
//!
//! ```rust,ignore
//! use frontiers_scraper::{ScraperService, ScrapeRequest};
//! use tower::Service;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut service = ScraperService::new();
//!
//!     let request = ScrapeRequest::new("bacteriophage")
//!         .with_output_dir("./data")
//!         .with_headless(true);
//!
//!     let result = service.call(request).await.unwrap();
//!     println!("{} articles -> {:?}", result.articles.len(), result.output_path);
//! }
//! ```
//!
//! # 抽出のみ
//!
//! ```rust,ignore
//! use frontiers_scraper::{FrontiersScraper, Scraper, ScraperConfig};
//!
//! let mut scraper = FrontiersScraper::new(ScraperConfig::new("phage therapy"));
//! let articles = scraper.execute().await?;
//! ```

pub mod config;
pub mod error;
pub mod frontiers;
pub mod output;
pub mod service;
pub mod traits;

// 主要な型をリエクスポート
pub use config::ScraperConfig;
pub use error::ScraperError;
pub use frontiers::{extract_articles, Article, FrontiersScraper};
pub use output::{read_snapshot, snapshot_file_name, SnapshotWriter};
pub use service::{ScrapeRequest, ScrapeResult, ScraperService};
pub use traits::Scraper;
