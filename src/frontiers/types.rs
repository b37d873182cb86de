//! Frontiers 検索結果の型定義とセレクタ

use serde::{Deserialize, Serialize};

/// 検索クエリ入力欄
pub const SEARCH_INPUT_SELECTOR: &str = "#search_query_input";

/// 検索結果の各アイテム
pub const RESULT_ITEM_SELECTOR: &str = "#article-results > ul > li";

// 以下はアイテム内の相対セレクタ
pub const TITLE_SELECTOR: &str = "div.data-top > div.title";
pub const AUTHOR_SELECTOR: &str = "div.data-top > ul > li";
pub const DATE_SELECTOR: &str = "div.data-bottom > div.date";
pub const ARTICLE_TYPE_SELECTOR: &str = "div.data-bottom > div.text > span.article-type";
pub const LINK_SELECTOR: &str = "a[href]";

/// 検索結果1件分の論文データ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// 表示順の著者名（空の場合あり）
    pub authors: Vec<String>,
    /// 公開日（ページ表記のまま）
    pub published_on: String,
    pub article_type: String,
    /// 絶対URL
    pub article_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_json_keys() {
        let article = Article {
            title: "Phage therapy".to_string(),
            authors: vec![],
            published_on: "12 March 2024".to_string(),
            article_type: "Review".to_string(),
            article_link: "https://www.frontiersin.org/articles/1".to_string(),
        };

        let value = serde_json::to_value(&article).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["article_link", "article_type", "authors", "published_on", "title"]
        );
        // 著者なしは null ではなく空配列
        assert_eq!(obj["authors"], serde_json::json!([]));
    }
}
