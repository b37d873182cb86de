//! 抽出結果をタイムスタンプ付きJSONファイルに保存する

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::frontiers::Article;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// `<prefix>_<YYYYMMDDhhmmss>.json`
pub fn snapshot_file_name(prefix: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.json", prefix, at.format(TIMESTAMP_FORMAT))
}

#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    dir: PathBuf,
    prefix: String,
}

impl SnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    /// 現在時刻（ローカル）で書き出す
    pub fn write(&self, articles: &[Article]) -> Result<PathBuf, ScraperError> {
        self.write_at(articles, Local::now().naive_local())
    }

    /// 既存ファイルは上書きしない（同名があれば `FileIO` エラー）
    pub fn write_at(
        &self,
        articles: &[Article],
        at: NaiveDateTime,
    ) -> Result<PathBuf, ScraperError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(snapshot_file_name(&self.prefix, at));

        let file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, articles)?;
        writer.flush()?;

        info!("Data written to file: {}", path.display());
        Ok(path)
    }
}

impl From<&ScraperConfig> for SnapshotWriter {
    fn from(config: &ScraperConfig) -> Self {
        Self::new(&config.output_dir, &config.file_prefix)
    }
}

/// 書き出したスナップショットを読み戻す
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Vec<Article>, ScraperError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
