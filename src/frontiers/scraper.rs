//! Frontiers スクレイパー実装
//!
//! 検索ページを開き、クエリを入力して Enter で送信し、
//! 描画済みのHTMLから検索結果を抽出する

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::traits::Scraper;

use super::extract::extract_articles;
use super::types::{Article, SEARCH_INPUT_SELECTOR};

/// 連続でHTML長が変わらなければ安定とみなす回数
const REQUIRED_STABLE_CHECKS: u32 = 3;
const STABLE_CHECK_INTERVAL_MS: u64 = 300;

pub struct FrontiersScraper {
    config: ScraperConfig,
    browser: Option<Browser>,
    page: Option<Page>,
    handler_task: Option<JoinHandle<()>>,
}

impl FrontiersScraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            config,
            browser: None,
            page: None,
            handler_task: None,
        }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    fn get_page(&self) -> Result<&Page, ScraperError> {
        self.page
            .as_ref()
            .ok_or_else(|| ScraperError::BrowserInit("ブラウザが初期化されていません".into()))
    }

    fn browser_config(&self) -> Result<BrowserConfig, ScraperError> {
        let mut builder = BrowserConfig::builder()
            .window_size(1280, 800)
            .request_timeout(self.config.timeout);

        if let Ok(path) = std::env::var("CHROME_PATH").or_else(|_| std::env::var("CHROMIUM_PATH")) {
            builder = builder.chrome_executable(path);
        }

        if !self.config.headless {
            builder = builder.with_head();
        }

        if self.config.debug {
            builder = builder
                .arg("--auto-open-devtools-for-tabs")
                .arg("--enable-logging=stderr")
                .arg("--v=1");
        }

        builder
            .build()
            .map_err(|e| ScraperError::BrowserInit(format!("ブラウザ設定エラー: {}", e)))
    }

    /// ページが安定するまで待機（HTML長が連続して変化しなくなるまで）
    async fn wait_stable(&self, page: &Page) -> Result<(), ScraperError> {
        debug!("Waiting for page to stabilize...");
        let start = Instant::now();

        let mut last_html_len: Option<usize> = None;
        let mut stable_count = 0;

        while start.elapsed() < self.config.timeout {
            match page
                .evaluate("document.documentElement.outerHTML.length")
                .await
            {
                Ok(val) => {
                    let current_len = val.into_value::<usize>().unwrap_or(0);

                    match last_html_len {
                        Some(last) if last == current_len => {
                            stable_count += 1;
                            if stable_count >= REQUIRED_STABLE_CHECKS {
                                debug!("Page stable after {:?}", start.elapsed());
                                return Ok(());
                            }
                        }
                        _ => stable_count = 0,
                    }

                    last_html_len = Some(current_len);
                }
                Err(e) => {
                    debug!("Page stable check error: {}", e);
                    stable_count = 0;
                }
            }

            sleep(Duration::from_millis(STABLE_CHECK_INTERVAL_MS)).await;
        }

        warn!(
            "Page stable timeout after {:?}, proceeding anyway",
            start.elapsed()
        );
        Ok(())
    }

    /// デバッグスクリーンショットをログに出力
    async fn log_screenshot(&self, page: &Page) {
        match page
            .screenshot(ScreenshotParams::builder().full_page(true).build())
            .await
        {
            Ok(screenshot) => {
                use base64::Engine;
                let encoded = base64::engine::general_purpose::STANDARD.encode(&screenshot);
                debug!("Search screenshot: data:image/png;base64,{}", encoded);
            }
            Err(e) => debug!("Failed to take screenshot: {}", e),
        }
    }

    /// 相対リンク解決用の基準URL（取得できなければ設定の検索URL）
    async fn base_url(&self, page: &Page) -> Result<Url, ScraperError> {
        let current = page.url().await.ok().flatten();
        match current {
            Some(url) => Ok(Url::parse(&url)?),
            None => Ok(Url::parse(&self.config.search_url)?),
        }
    }
}

#[async_trait]
impl Scraper for FrontiersScraper {
    async fn initialize(&mut self) -> Result<(), ScraperError> {
        info!("Launching browser (headless={})...", self.config.headless);

        let config = self.browser_config()?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;

        // ブラウザイベントハンドラをバックグラウンドで実行
        // new_page が失敗しても close で解放できるよう先に保持する
        self.handler_task = Some(tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                debug!("Browser event: {:?}", event);
            }
        }));
        let browser = self.browser.insert(browser);

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;
        self.page = Some(page);

        info!("Browser initialized");
        Ok(())
    }

    async fn search(&mut self) -> Result<(), ScraperError> {
        let page = self.get_page()?;
        info!("Opening search page: {}", self.config.search_url);

        page.goto(self.config.search_url.as_str())
            .await
            .map_err(|e| ScraperError::Navigation(e.to_string()))?;
        self.wait_stable(page).await?;

        let input = page
            .find_element(SEARCH_INPUT_SELECTOR)
            .await
            .map_err(|e| {
                ScraperError::ElementNotFound(format!("検索入力欄 {}: {}", SEARCH_INPUT_SELECTOR, e))
            })?;

        input
            .click()
            .await
            .map_err(|e| ScraperError::Search(format!("入力欄クリック: {}", e)))?;
        input
            .type_str(&self.config.query)
            .await
            .map_err(|e| ScraperError::Search(format!("クエリ入力: {}", e)))?;
        input
            .press_key("Enter")
            .await
            .map_err(|e| ScraperError::Search(format!("検索送信: {}", e)))?;
        info!("Submitted query: {}", self.config.query);

        page.wait_for_navigation()
            .await
            .map_err(|e| ScraperError::Navigation(e.to_string()))?;

        sleep(self.config.settle_delay).await;

        if self.config.debug {
            self.log_screenshot(page).await;
        }

        Ok(())
    }

    async fn extract(&mut self) -> Result<Vec<Article>, ScraperError> {
        let page = self.get_page()?;

        let html = page
            .content()
            .await
            .map_err(|e| ScraperError::Navigation(format!("ページ内容取得: {}", e)))?;
        let base_url = self.base_url(page).await?;
        debug!("Retrieved {} bytes of HTML from {}", html.len(), base_url);

        let articles = extract_articles(&html, &base_url)?;
        info!("Extracted {} articles", articles.len());
        info!("Articles: {:?}", articles);

        Ok(articles)
    }

    async fn close(&mut self) -> Result<(), ScraperError> {
        info!("Closing browser...");

        self.page = None;

        let result = match self.browser.take() {
            Some(mut browser) => match browser.close().await {
                Ok(_) => {
                    if let Err(e) = browser.wait().await {
                        debug!("Browser wait error: {}", e);
                    }
                    Ok(())
                }
                Err(e) => Err(ScraperError::BrowserClose(e.to_string())),
            },
            None => Ok(()),
        };

        if let Some(task) = self.handler_task.take() {
            task.abort();
        }

        info!("Browser closed");
        result
    }
}
