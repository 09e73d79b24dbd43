//! 分類ごとの配色
//!
//! フィルタボタン、見出しのアクセント、タイムライン、ドットで使う。

use crate::filter::FilterToken;
use crate::types::Category;

/// 配色セット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub hex: &'static str,
    /// 50% アルファ（ドット・パルス）
    pub rgba: &'static str,
    /// 40% アルファ（ボタンのグロー）
    pub glow: &'static str,
}

const ALL: Palette = Palette {
    hex: "#ec4899",
    rgba: "rgba(236,72,153,0.5)",
    glow: "rgba(236,72,153,0.4)",
};

pub fn palette(token: &FilterToken) -> Palette {
    match token {
        FilterToken::All => ALL,
        FilterToken::Only(category) => category_palette(category),
    }
}

pub fn category_palette(category: &Category) -> Palette {
    match category {
        Category::WebApp => Palette {
            hex: "#3b82f6",
            rgba: "rgba(59,130,246,0.5)",
            glow: "rgba(59,130,246,0.4)",
        },
        Category::MobileApp => Palette {
            hex: "#10b981",
            rgba: "rgba(16,185,129,0.5)",
            glow: "rgba(16,185,129,0.4)",
        },
        Category::Design => Palette {
            hex: "#f97316",
            rgba: "rgba(249,115,22,0.5)",
            glow: "rgba(249,115,22,0.4)",
        },
        Category::FullStack | Category::AiAppFullStack => Palette {
            hex: "#8b5cf6",
            rgba: "rgba(139,92,246,0.5)",
            glow: "rgba(139,92,246,0.4)",
        },
        Category::AiApp => Palette {
            hex: "#06b6d4",
            rgba: "rgba(6,182,212,0.5)",
            glow: "rgba(6,182,212,0.4)",
        },
        Category::Tool => Palette {
            hex: "#eab308",
            rgba: "rgba(234,179,8,0.5)",
            glow: "rgba(234,179,8,0.4)",
        },
        Category::Portfolio => Palette {
            hex: "#6366f1",
            rgba: "rgba(99,102,241,0.5)",
            glow: "rgba(99,102,241,0.4)",
        },
        Category::Api => Palette {
            hex: "#ef4444",
            rgba: "rgba(239,68,68,0.5)",
            glow: "rgba(239,68,68,0.4)",
        },
        Category::Other(_) => ALL,
    }
}

/// タイムラインのグラデーション
pub fn timeline_gradient(token: &FilterToken) -> String {
    format!(
        "linear-gradient(to bottom, {}, #8b5cf6, #06b6d4)",
        palette(token).hex
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_palette() {
        assert_eq!(palette(&FilterToken::All).hex, "#ec4899");
    }

    #[test]
    fn test_unknown_category_uses_all_palette() {
        let token = FilterToken::Only(Category::Other("GAME".into()));
        assert_eq!(palette(&token), palette(&FilterToken::All));
    }

    #[test]
    fn test_timeline_gradient_uses_active_color() {
        let gradient = timeline_gradient(&FilterToken::Only(Category::Api));
        assert!(gradient.starts_with("linear-gradient(to bottom, #ef4444"));
    }
}
