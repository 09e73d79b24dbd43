//! カタログストア
//!
//! ビルド時に埋め込まれたJSONからプロジェクト一覧を読み込み、
//! featured / all / bestseller の派生ビューを構築する。
//! 読み込み後は不変で、実行中の追加・更新・削除はない。

use crate::error::{Error, Result};
use crate::filter::{self, FilterToken};
use crate::types::ProjectRecord;
use regex::Regex;
use std::collections::HashSet;

lazy_static::lazy_static! {
    static ref DISPLAY_INDEX_RE: Regex = Regex::new(r"^\d{2}$").unwrap();
    static ref URL_RE: Regex = Regex::new(r"^https?://\S+$").unwrap();
}

/// 派生ビューの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Featured,
    All,
    Bestseller,
}

/// 静的カタログ
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    all: Vec<ProjectRecord>,
    featured: Vec<ProjectRecord>,
    bestseller: Vec<ProjectRecord>,
}

impl Catalog {
    /// JSON文字列（ProjectRecordの配列）から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// レコード列を検証してカタログを構築
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self> {
        validate(&records)?;

        let featured: Vec<ProjectRecord> = records.iter().filter(|p| p.featured).cloned().collect();
        let bestseller: Vec<ProjectRecord> = records.iter().filter(|p| p.bestseller).cloned().collect();

        tracing::info!(
            total = records.len(),
            featured = featured.len(),
            bestseller = bestseller.len(),
            "catalog loaded"
        );

        Ok(Self {
            all: records,
            featured,
            bestseller,
        })
    }

    pub fn view(&self, view: View) -> &[ProjectRecord] {
        match view {
            View::Featured => &self.featured,
            View::All => &self.all,
            View::Bestseller => &self.bestseller,
        }
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.all.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// フィルタボタン一覧（ALL + データ由来の分類）
    pub fn tokens(&self, view: View) -> Vec<FilterToken> {
        filter::available_tokens(self.view(view))
    }

    /// フィルタボタンのバッジ件数
    pub fn count(&self, view: View, token: &FilterToken) -> usize {
        filter::count_visible(self.view(view), token)
    }
}

fn validate(records: &[ProjectRecord]) -> Result<()> {
    let mut seen = HashSet::new();

    for record in records {
        if record.id.trim().is_empty() {
            return Err(Error::Catalog("empty id".into()));
        }
        if !seen.insert(record.id.as_str()) {
            return Err(Error::Catalog(format!("duplicate id: {}", record.id)));
        }
        if !DISPLAY_INDEX_RE.is_match(&record.display_index) {
            return Err(Error::Catalog(format!(
                "{}: displayIndex must be two digits, got '{}'",
                record.id, record.display_index
            )));
        }
        if let Some(url) = record.links.urls().find(|url| !URL_RE.is_match(url)) {
            return Err(Error::Catalog(format!("{}: invalid url '{}'", record.id, url)));
        }
        if record.gallery.iter().any(|path| path.trim().is_empty()) {
            return Err(Error::Catalog(format!("{}: empty gallery path", record.id)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(id: &str, index: &str, category: &str, featured: bool, bestseller: bool) -> String {
        format!(
            r#"{{"id":"{}","displayIndex":"{}","category":"{}","price":1100,
                "primaryImage":"/p/{}.png","featured":{},"bestseller":{}}}"#,
            id, index, category, id, featured, bestseller
        )
    }

    fn catalog_json(entries: &[String]) -> String {
        format!("[{}]", entries.join(","))
    }

    #[test]
    fn test_views_preserve_order() {
        let json = catalog_json(&[
            record_json("A-01", "01", "PORTFOLIO", true, false),
            record_json("A-02", "02", "API", false, true),
            record_json("A-03", "03", "PORTFOLIO", true, true),
        ]);
        let catalog = Catalog::from_json(&json).unwrap();

        let ids = |v: View| catalog.view(v).iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(View::All), vec!["A-01", "A-02", "A-03"]);
        assert_eq!(ids(View::Featured), vec!["A-01", "A-03"]);
        assert_eq!(ids(View::Bestseller), vec!["A-02", "A-03"]);
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("A-02").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = catalog_json(&[
            record_json("A-01", "01", "API", true, false),
            record_json("A-01", "02", "API", true, false),
        ]);
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::Catalog(ref msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_display_index_must_be_two_digits() {
        let json = catalog_json(&[record_json("A-01", "1", "API", true, false)]);
        assert!(matches!(Catalog::from_json(&json), Err(Error::Catalog(_))));
    }

    #[test]
    fn test_invalid_demo_url_rejected() {
        let json = r#"[{"id":"A-01","displayIndex":"01","category":"API","price":1,
            "primaryImage":"x.png","links":{"demoUrl":"javascript:alert(1)"}}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("invalid url"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Catalog::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_tokens_and_counts_from_featured() {
        let json = catalog_json(&[
            record_json("A-01", "01", "PORTFOLIO", true, false),
            record_json("A-02", "02", "API", true, false),
            record_json("A-03", "03", "PORTFOLIO", true, false),
            record_json("A-04", "04", "DESIGN", false, false),
        ]);
        let catalog = Catalog::from_json(&json).unwrap();
        let labels: Vec<String> = catalog.tokens(View::Featured).iter().map(|t| t.label().to_string()).collect();
        assert_eq!(labels, vec!["ALL", "PORTFOLIO", "API"]);
        assert_eq!(catalog.count(View::Featured, &FilterToken::All), 3);
        assert_eq!(catalog.count(View::Featured, &FilterToken::from_label("PORTFOLIO")), 2);
    }
}
