use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("ブラウザ初期化エラー: {0}")]
    BrowserInit(String),

    #[error("ナビゲーションエラー: {0}")]
    Navigation(String),

    #[error("検索エラー: {0}")]
    Search(String),

    #[error("要素が見つかりません: {0}")]
    ElementNotFound(String),

    #[error("セレクタが不正です: {0}")]
    Selector(String),

    #[error("URLが不正です: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("ブラウザ終了エラー: {0}")]
    BrowserClose(String),

    #[error("ファイル操作エラー: {0}")]
    FileIO(#[from] std::io::Error),

    #[error("JSON変換エラー: {0}")]
    Json(#[from] serde_json::Error),
}
