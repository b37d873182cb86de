use std::path::PathBuf;
use std::time::Duration;

/// Frontiers 記事検索ページ
pub const DEFAULT_SEARCH_URL: &str = "https://www.frontiersin.org/search?tab=articles";
pub const DEFAULT_QUERY: &str = "bacteriophage";
pub const DEFAULT_FILE_PREFIX: &str = "scrape";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub search_url: String,
    pub query: String,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub headless: bool,
    /// ヘッド付き + DevTools + スクリーンショットログ
    pub debug: bool,
    /// 検索送信後の固定待機時間
    pub settle_delay: Duration,
    /// CDPリクエスト / ページ安定待機の上限
    pub timeout: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            query: DEFAULT_QUERY.to_string(),
            output_dir: PathBuf::from("."),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            headless: true,
            debug: false,
            settle_delay: Duration::from_secs(5),
            timeout: Duration::from_secs(60),
        }
    }
}

impl ScraperConfig {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// デバッグモードはヘッド付きで起動する
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        if debug {
            self.headless = false;
        }
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
