//! カタログの型定義
//!
//! ビルド時に埋め込まれる静的データ（`data/catalog.json`）の形:
//! - ProjectRecord: 販売テンプレート1件
//! - Category: フィルタ・配色を決める分類
//! - ExternalLinks: デモURLとソースリポジトリ

use serde::{Deserialize, Serialize};
use std::fmt;

/// プロジェクト分類
///
/// 既知の分類は列挙子、データ側で追加された未知の分類は `Other` に入る。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    WebApp,
    MobileApp,
    Design,
    FullStack,
    AiApp,
    Tool,
    Portfolio,
    Api,
    AiAppFullStack,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::WebApp => "WEB APP",
            Category::MobileApp => "MOBILE APP",
            Category::Design => "DESIGN",
            Category::FullStack => "FULL STACK",
            Category::AiApp => "AI APP",
            Category::Tool => "TOOL",
            Category::Portfolio => "PORTFOLIO",
            Category::Api => "API",
            Category::AiAppFullStack => "AI APP & FULL STACK",
            Category::Other(label) => label.as_str(),
        }
    }

    /// 表示ラベルから分類を得る（大文字小文字・前後空白は無視）
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_uppercase();
        match normalized.as_str() {
            "WEB APP" => Category::WebApp,
            "MOBILE APP" => Category::MobileApp,
            "DESIGN" => Category::Design,
            "FULL STACK" => Category::FullStack,
            "AI APP" => Category::AiApp,
            "TOOL" => Category::Tool,
            "PORTFOLIO" => Category::Portfolio,
            "API" => Category::Api,
            "AI APP & FULL STACK" => Category::AiAppFullStack,
            _ => Category::Other(normalized),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// カードのアクセント配色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorScheme {
    Orange,
    OrangeLight,
    Blue,
    Yellow,
    Red,
    Green,
    #[default]
    Purple,
    Indigo,
    Cyan,
    Pink,
}

impl ColorScheme {
    /// CSSクラス接尾辞（`card-gradient-*`）
    pub fn gradient_class(&self) -> &'static str {
        match self {
            ColorScheme::Pink | ColorScheme::Red => "card-gradient-pink",
            ColorScheme::Purple => "card-gradient-purple",
            ColorScheme::Cyan | ColorScheme::Blue => "card-gradient-cyan",
            ColorScheme::Orange | ColorScheme::OrangeLight | ColorScheme::Yellow => "card-gradient-orange",
            ColorScheme::Green => "card-gradient-green",
            ColorScheme::Indigo => "card-gradient-indigo",
        }
    }

    /// ホバー時のグロー色（hex）
    pub fn accent_hex(&self) -> &'static str {
        match self {
            ColorScheme::Pink => "#ec4899",
            ColorScheme::Purple => "#8b5cf6",
            ColorScheme::Cyan => "#06b6d4",
            ColorScheme::Orange => "#f97316",
            ColorScheme::OrangeLight => "#fb923c",
            ColorScheme::Green => "#10b981",
            ColorScheme::Indigo => "#6366f1",
            ColorScheme::Blue => "#3b82f6",
            ColorScheme::Yellow => "#eab308",
            ColorScheme::Red => "#ef4444",
        }
    }
}

/// ソースリポジトリへのリンク（"Frontend" / "Backend" など）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoLink {
    pub label: String,
    pub url: String,
}

/// 外部リンク
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalLinks {
    pub demo_url: Option<String>,
    pub repos: Vec<RepoLink>,
}

impl ExternalLinks {
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.demo_url
            .as_deref()
            .into_iter()
            .chain(self.repos.iter().map(|r| r.url.as_str()))
    }
}

/// 販売テンプレート1件（ビルド時に確定、実行中は不変）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,

    /// 2桁の表示用番号（配列インデックスではない）
    pub display_index: String,

    pub category: Category,

    #[serde(default)]
    pub title: String,

    /// カテゴリ表示行（"Portfolio Website" など）
    #[serde(default)]
    pub subtitle: String,

    #[serde(default)]
    pub description: String,

    /// 価格（バーツ）
    pub price: u32,

    #[serde(default)]
    pub original_price: Option<u32>,

    pub primary_image: String,

    /// ギャラリー画像（順序付き、空でもよい）
    #[serde(default)]
    pub gallery: Vec<String>,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub links: ExternalLinks,

    #[serde(default)]
    pub color_scheme: ColorScheme,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub bestseller: bool,
}

impl ProjectRecord {
    /// ギャラリーを開けるか
    pub fn has_gallery(&self) -> bool {
        !self.gallery.is_empty()
    }

    /// 見出し（タイトルが空ならサブタイトル）
    pub fn heading(&self) -> &str {
        if self.title.is_empty() {
            &self.subtitle
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_known_labels() {
        for label in ["WEB APP", "PORTFOLIO", "API", "AI APP & FULL STACK"] {
            let category = Category::from_label(label);
            assert!(!matches!(category, Category::Other(_)), "{}", label);
            assert_eq!(category.as_str(), label);
        }
    }

    #[test]
    fn test_category_unknown_label() {
        let category = Category::from_label(" game ");
        assert_eq!(category, Category::Other("GAME".to_string()));
        assert_eq!(category.to_string(), "GAME");
    }

    #[test]
    fn test_record_deserialize_minimal() {
        let json = r#"{
            "id": "API-01",
            "displayIndex": "01",
            "category": "API",
            "price": 900,
            "primaryImage": "/project/api-01/01.png"
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Category::Api);
        assert!(record.gallery.is_empty());
        assert!(!record.has_gallery());
        assert_eq!(record.color_scheme, ColorScheme::Purple);
        assert!(record.links.demo_url.is_none());
        assert!(!record.featured);
    }

    #[test]
    fn test_color_scheme_camel_case() {
        let scheme: ColorScheme = serde_json::from_str("\"orangeLight\"").unwrap();
        assert_eq!(scheme, ColorScheme::OrangeLight);
        assert_eq!(scheme.gradient_class(), "card-gradient-orange");
    }

    #[test]
    fn test_links_urls_order() {
        let links = ExternalLinks {
            demo_url: Some("https://demo.example".into()),
            repos: vec![
                RepoLink { label: "Frontend".into(), url: "https://github.com/a/fe".into() },
                RepoLink { label: "Backend".into(), url: "https://github.com/a/be".into() },
            ],
        };
        let urls: Vec<&str> = links.urls().collect();
        assert_eq!(urls, vec!["https://demo.example", "https://github.com/a/fe", "https://github.com/a/be"]);
    }

    #[test]
    fn test_heading_falls_back_to_subtitle() {
        let json = r#"{"id":"P-01","displayIndex":"01","category":"PORTFOLIO","price":1,
            "primaryImage":"x.png","subtitle":"Portfolio Website"}"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.heading(), "Portfolio Website");
    }
}
