//! 検索結果HTMLから論文データを抽出

use ::scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::error::ScraperError;

use super::types::{
    Article, ARTICLE_TYPE_SELECTOR, AUTHOR_SELECTOR, DATE_SELECTOR, LINK_SELECTOR,
    RESULT_ITEM_SELECTOR, TITLE_SELECTOR,
};

struct ArticleSelectors {
    item: Selector,
    title: Selector,
    author: Selector,
    date: Selector,
    article_type: Selector,
    link: Selector,
}

impl ArticleSelectors {
    fn parse() -> Result<Self, ScraperError> {
        Ok(Self {
            item: parse_selector(RESULT_ITEM_SELECTOR)?,
            title: parse_selector(TITLE_SELECTOR)?,
            author: parse_selector(AUTHOR_SELECTOR)?,
            date: parse_selector(DATE_SELECTOR)?,
            article_type: parse_selector(ARTICLE_TYPE_SELECTOR)?,
            link: parse_selector(LINK_SELECTOR)?,
        })
    }

    /// `position` は1始まり（エラーメッセージ用）
    fn extract(
        &self,
        item: ElementRef<'_>,
        position: usize,
        base_url: &Url,
    ) -> Result<Article, ScraperError> {
        let title = required_text(item, &self.title, TITLE_SELECTOR, position)?;

        let authors = item.select(&self.author).map(element_text).collect();

        let published_on = required_text(item, &self.date, DATE_SELECTOR, position)?;
        let article_type =
            required_text(item, &self.article_type, ARTICLE_TYPE_SELECTOR, position)?;

        let href = item
            .select(&self.link)
            .find_map(|a| a.value().attr("href"))
            .ok_or_else(|| {
                ScraperError::ElementNotFound(format!("{} (結果 #{})", LINK_SELECTOR, position))
            })?;
        let article_link = base_url.join(href.trim())?.to_string();

        Ok(Article {
            title,
            authors,
            published_on,
            article_type,
            article_link,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ScraperError> {
    Selector::parse(selector).map_err(|e| ScraperError::Selector(format!("{}: {}", selector, e)))
}

/// innerText 相当：連続する空白を1つにまとめる
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn required_text(
    item: ElementRef<'_>,
    selector: &Selector,
    selector_src: &str,
    position: usize,
) -> Result<String, ScraperError> {
    item.select(selector)
        .next()
        .map(element_text)
        .ok_or_else(|| {
            ScraperError::ElementNotFound(format!("{} (結果 #{})", selector_src, position))
        })
}

/// レンダリング済みページのHTMLから検索結果を文書順に抽出する
///
/// 相対リンクは `base_url` で解決する。必須要素（タイトル・日付・種別・リンク）
/// が1件でも欠けていればエラー。
pub fn extract_articles(html: &str, base_url: &Url) -> Result<Vec<Article>, ScraperError> {
    let selectors = ArticleSelectors::parse()?;
    let document = Html::parse_document(html);

    let articles = document
        .select(&selectors.item)
        .enumerate()
        .map(|(i, item)| selectors.extract(item, i + 1, base_url))
        .collect::<Result<Vec<_>, _>>()?;

    if articles.is_empty() {
        warn!("No result items matched {}", RESULT_ITEM_SELECTOR);
    } else {
        debug!("Extracted {} result items", articles.len());
    }

    Ok(articles)
}
