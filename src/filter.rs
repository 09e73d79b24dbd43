//! フィルタエンジン
//!
//! 分類トークン（ALL を含む）からカタログの表示部分集合を導出する。
//! 常に基準リストから再計算し、差分更新はしない。

use crate::types::{Category, ProjectRecord};
use std::fmt;
use std::sync::Arc;

/// フィルタトークン
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterToken {
    #[default]
    All,
    Only(Category),
}

impl FilterToken {
    pub const ALL_LABEL: &'static str = "ALL";

    /// ボタン表示ラベルからトークンを得る
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case(Self::ALL_LABEL) || trimmed == "*" {
            FilterToken::All
        } else {
            FilterToken::Only(Category::from_label(trimmed))
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterToken::All => Self::ALL_LABEL,
            FilterToken::Only(category) => category.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterToken::All)
    }

    fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            FilterToken::All => true,
            FilterToken::Only(category) => &record.category == category,
        }
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 未知の分類（列挙外かつデータにも無い）を ALL に倒す
pub fn resolve(base: &[ProjectRecord], token: &FilterToken) -> FilterToken {
    match token {
        FilterToken::Only(Category::Other(label)) if !base.iter().any(|p| p.category.as_str() == label) => {
            tracing::warn!(category = %label, "unknown category, falling back to ALL");
            FilterToken::All
        }
        other => other.clone(),
    }
}

/// 表示対象を計算（元の並び順を保持）
pub fn compute_visible(base: &[ProjectRecord], token: &FilterToken) -> Vec<ProjectRecord> {
    let token = resolve(base, token);
    base.iter().filter(|p| token.matches(p)).cloned().collect()
}

/// 件数のみ
pub fn count_visible(base: &[ProjectRecord], token: &FilterToken) -> usize {
    let token = resolve(base, token);
    base.iter().filter(|p| token.matches(p)).count()
}

/// ALL + 出現順の分類一覧
pub fn available_tokens(base: &[ProjectRecord]) -> Vec<FilterToken> {
    let mut tokens = vec![FilterToken::All];
    for record in base {
        let token = FilterToken::Only(record.category.clone());
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// フィルタ状態
///
/// `visible` は常に `compute_visible(base, selected)` と一致する。
#[derive(Debug, Clone)]
pub struct FilterState {
    base: Arc<[ProjectRecord]>,
    selected: FilterToken,
    visible: Vec<ProjectRecord>,
}

impl FilterState {
    pub fn new(base: impl Into<Arc<[ProjectRecord]>>) -> Self {
        let base = base.into();
        let visible = base.to_vec();
        Self {
            base,
            selected: FilterToken::All,
            visible,
        }
    }

    /// 選択を切り替えて表示対象を再計算
    pub fn apply(&mut self, token: &FilterToken) {
        self.selected = resolve(&self.base, token);
        self.visible = compute_visible(&self.base, &self.selected);
    }

    pub fn selected(&self) -> &FilterToken {
        &self.selected
    }

    pub fn visible(&self) -> &[ProjectRecord] {
        &self.visible
    }

    pub fn base(&self) -> &[ProjectRecord] {
        &self.base
    }

    pub fn count(&self) -> usize {
        self.visible.len()
    }

    /// 空状態（「該当なし」表示とリセットボタン）
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// "Showing N projects matching "X"" の文言
    pub fn summary(&self) -> String {
        let noun = if self.count() == 1 { "project" } else { "projects" };
        if self.selected.is_all() {
            format!("Showing {} {}", self.count(), noun)
        } else {
            format!("Showing {} {} matching \"{}\"", self.count(), noun, self.selected)
        }
    }
}
