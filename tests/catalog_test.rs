//! 同梱データのテスト
//!
//! `data/catalog.json` と `data/site.json` が読み込めることと、派生ビューの性質を検証

mod support;

use codestore::filter::{available_tokens, compute_visible};
use codestore::{Category, FilterToken, SiteConfig, View};
use support::bundled_catalog;

const SITE_JSON: &str = include_str!("../data/site.json");

#[test]
fn test_bundled_catalog_loads() {
    let catalog = bundled_catalog();
    assert!(!catalog.is_empty());
    assert!(catalog.view(View::Featured).iter().all(|p| p.featured));
    assert!(catalog.view(View::Bestseller).iter().all(|p| p.bestseller));
    assert_eq!(catalog.view(View::All).len(), catalog.len());
}

/// 全トークンで、結果が元リストの部分列になっている
#[test]
fn test_every_token_yields_ordered_subsequence() {
    let catalog = bundled_catalog();
    let base = catalog.view(View::Featured);

    for token in available_tokens(base) {
        let visible = compute_visible(base, &token);
        let mut cursor = base.iter();
        for item in &visible {
            assert!(cursor.any(|p| p.id == item.id), "{} out of order for {}", item.id, token);
            if let FilterToken::Only(category) = &token {
                assert_eq!(&item.category, category);
            }
        }
        assert_eq!(visible.len(), catalog.count(View::Featured, &token));
    }
}

#[test]
fn test_bundled_tokens_are_data_derived() {
    let catalog = bundled_catalog();
    let tokens = catalog.tokens(View::Featured);
    assert_eq!(tokens[0], FilterToken::All);
    assert!(tokens.contains(&FilterToken::Only(Category::Portfolio)));
    assert!(!tokens.contains(&FilterToken::Only(Category::Design)));
}

/// ギャラリーの無いレコードは開くボタンを出さない
#[test]
fn test_gallery_flag_matches_images() {
    let catalog = bundled_catalog();
    let api = catalog.get("API-01").expect("API-01 exists");
    assert!(!api.has_gallery());
    let portfolio = catalog.get("PORTFOLIO-01").expect("PORTFOLIO-01 exists");
    assert_eq!(portfolio.gallery.len(), 8);
}

#[test]
fn test_bundled_site_config_loads() {
    let config = SiteConfig::from_json(SITE_JSON).expect("bundled site config must load");
    assert_eq!(config.store_name, "CodeStore");
    assert_eq!(config.social_links.len(), 3);
    assert_eq!(config.motion.exit_stagger_ms, 20);
}
