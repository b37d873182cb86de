use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use tower::Service;
use tracing::info;

use crate::config::{ScraperConfig, DEFAULT_QUERY};
use crate::error::ScraperError;
use crate::frontiers::{Article, FrontiersScraper};
use crate::output::SnapshotWriter;
use crate::traits::Scraper;

/// スクレイピングリクエスト
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub query: String,
    pub output_dir: PathBuf,
    pub headless: bool,
}

impl Default for ScrapeRequest {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY)
    }
}

impl ScrapeRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            output_dir: PathBuf::from("."),
            headless: true,
        }
    }

    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }
}

impl From<ScrapeRequest> for ScraperConfig {
    fn from(req: ScrapeRequest) -> Self {
        ScraperConfig::new(req.query)
            .with_output_dir(req.output_dir)
            .with_headless(req.headless)
    }
}

/// スクレイピング結果
#[derive(Debug)]
pub struct ScrapeResult {
    pub output_path: PathBuf,
    pub articles: Vec<Article>,
}

/// tower::Serviceを実装したスクレイパーサービス
///
/// 1リクエスト = ブラウザ起動 → 検索 → 抽出 → 終了 → JSON書き出し
#[derive(Debug, Clone, Default)]
pub struct ScraperService {}

impl ScraperService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<ScrapeRequest> for ScraperService {
    type Response = ScrapeResult;
    type Error = ScraperError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ScrapeRequest) -> Self::Future {
        info!("Scrape request received: query={}", req.query);

        Box::pin(async move {
            let config: ScraperConfig = req.into();
            let writer = SnapshotWriter::from(&config);
            let mut scraper = FrontiersScraper::new(config);

            let articles = scraper.execute().await?;
            let output_path = writer.write(&articles)?;

            info!(
                "Scrape completed: path={}, articles={}",
                output_path.display(),
                articles.len()
            );

            Ok(ScrapeResult {
                output_path,
                articles,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_request_builder() {
        let req = ScrapeRequest::new("phage therapy")
            .with_output_dir("/tmp/out")
            .with_headless(false);

        assert_eq!(req.query, "phage therapy");
        assert_eq!(req.output_dir, PathBuf::from("/tmp/out"));
        assert!(!req.headless);
    }

    #[test]
    fn test_default_request_uses_default_query() {
        let req = ScrapeRequest::default();
        assert_eq!(req.query, "bacteriophage");
        assert!(req.headless);
    }

    #[test]
    fn test_scrape_request_to_config() {
        let req = ScrapeRequest::new("phage").with_output_dir("/tmp/out");
        let config: ScraperConfig = req.into();

        assert_eq!(config.query, "phage");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.file_prefix, "scrape");
        assert!(config.headless);
    }
}
