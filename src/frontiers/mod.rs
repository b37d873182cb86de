//! Frontiers 記事検索スクレイパーモジュール
//!
//! 検索ページでクエリを送信し、結果リストから論文メタデータを抽出する

mod extract;
mod scraper;
mod types;

pub use extract::extract_articles;
pub use scraper::FrontiersScraper;
pub use types::Article;
