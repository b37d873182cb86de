use async_trait::async_trait;

use crate::error::ScraperError;
use crate::frontiers::Article;

#[async_trait]
pub trait Scraper: Send + Sync {
    /// ブラウザ初期化
    async fn initialize(&mut self) -> Result<(), ScraperError>;

    /// 検索ページを開いてクエリを送信
    async fn search(&mut self) -> Result<(), ScraperError>;

    /// 検索結果を抽出
    async fn extract(&mut self) -> Result<Vec<Article>, ScraperError>;

    /// リソース解放
    async fn close(&mut self) -> Result<(), ScraperError>;

    /// 一括実行（initialize → search → extract → close）
    ///
    /// 途中で失敗してもブラウザは閉じてからエラーを返す。
    async fn execute(&mut self) -> Result<Vec<Article>, ScraperError> {
        let outcome: Result<Vec<Article>, ScraperError> = async {
            self.initialize().await?;
            self.search().await?;
            self.extract().await
        }
        .await;
        let closed = self.close().await;

        let articles = outcome?;
        closed?;
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq)]
    enum FailAt {
        Nothing,
        Initialize,
        Search,
        Extract,
        Close,
    }

    struct MockScraper {
        fail_at: FailAt,
        calls: Vec<&'static str>,
    }

    impl MockScraper {
        fn new(fail_at: FailAt) -> Self {
            Self {
                fail_at,
                calls: Vec::new(),
            }
        }

        fn step(&mut self, name: &'static str, at: FailAt) -> Result<(), ScraperError> {
            self.calls.push(name);
            if self.fail_at != at {
                return Ok(());
            }
            Err(match at {
                FailAt::Initialize => ScraperError::BrowserInit("launch".into()),
                FailAt::Search => ScraperError::Search("enter".into()),
                FailAt::Extract => ScraperError::ElementNotFound("div.title".into()),
                _ => ScraperError::BrowserClose("close".into()),
            })
        }
    }

    #[async_trait]
    impl Scraper for MockScraper {
        async fn initialize(&mut self) -> Result<(), ScraperError> {
            self.step("initialize", FailAt::Initialize)
        }

        async fn search(&mut self) -> Result<(), ScraperError> {
            self.step("search", FailAt::Search)
        }

        async fn extract(&mut self) -> Result<Vec<Article>, ScraperError> {
            self.step("extract", FailAt::Extract)?;
            Ok(vec![Article {
                title: "Phage therapy".to_string(),
                authors: vec!["Ana Lopez".to_string()],
                published_on: "04 January 2024".to_string(),
                article_type: "Review".to_string(),
                article_link: "https://www.frontiersin.org/articles/1".to_string(),
            }])
        }

        async fn close(&mut self) -> Result<(), ScraperError> {
            self.step("close", FailAt::Close)
        }
    }

    #[tokio::test]
    async fn test_execute_runs_all_steps_in_order() {
        let mut scraper = MockScraper::new(FailAt::Nothing);

        let articles = scraper.execute().await.unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(scraper.calls, ["initialize", "search", "extract", "close"]);
    }

    #[tokio::test]
    async fn test_execute_closes_when_search_fails() {
        let mut scraper = MockScraper::new(FailAt::Search);

        let err = scraper.execute().await.unwrap_err();

        assert!(matches!(err, ScraperError::Search(_)));
        assert_eq!(scraper.calls, ["initialize", "search", "close"]);
    }

    #[tokio::test]
    async fn test_execute_closes_when_extract_fails() {
        let mut scraper = MockScraper::new(FailAt::Extract);

        let err = scraper.execute().await.unwrap_err();

        assert!(matches!(err, ScraperError::ElementNotFound(_)));
        assert_eq!(scraper.calls, ["initialize", "search", "extract", "close"]);
    }

    #[tokio::test]
    async fn test_execute_closes_when_initialize_fails() {
        let mut scraper = MockScraper::new(FailAt::Initialize);

        let err = scraper.execute().await.unwrap_err();

        assert!(matches!(err, ScraperError::BrowserInit(_)));
        assert_eq!(scraper.calls, ["initialize", "close"]);
    }

    #[tokio::test]
    async fn test_execute_reports_close_failure_after_success() {
        let mut scraper = MockScraper::new(FailAt::Close);

        let err = scraper.execute().await.unwrap_err();

        assert!(matches!(err, ScraperError::BrowserClose(_)));
    }
}
