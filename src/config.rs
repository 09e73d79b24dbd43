//! サイト設定
//!
//! `data/site.json` をビルド時に埋め込み、起動時に読み込む。
//! 未指定の項目は既定値。

use crate::error::{Error, Result};
use crate::motion::MotionConfig;
use serde::{Deserialize, Serialize};

/// ソーシャルリンク（フッター）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub store_name: String,
    pub support_email: String,
    pub github_url: String,
    pub social_links: Vec<SocialLink>,
    /// tracing のフィルタ指定（"info", "codestore=debug" など）
    pub log_level: String,
    pub motion: MotionConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            store_name: "CodeStore".into(),
            support_email: "support@codestore.dev".into(),
            github_url: "https://github.com/codestore".into(),
            social_links: Vec::new(),
            log_level: "info".into(),
            motion: MotionConfig::default(),
        }
    }
}

impl SiteConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.support_email.contains('@') {
            return Err(Error::Config(format!("supportEmail is not an address: '{}'", self.support_email)));
        }
        if self.log_level.trim().is_empty() {
            return Err(Error::Config("logLevel must not be empty".into()));
        }
        Ok(())
    }

    pub fn support_mailto(&self) -> String {
        format!("mailto:{}", self.support_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.support_mailto(), "mailto:support@codestore.dev");
    }

    #[test]
    fn test_from_json_overrides() {
        let json = r#"{
            "storeName": "Shop",
            "logLevel": "codestore=debug",
            "socialLinks": [{"name": "GitHub", "href": "https://github.com/x", "username": "x"}],
            "motion": {"enterStaggerMs": 80}
        }"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert_eq!(config.store_name, "Shop");
        assert_eq!(config.social_links.len(), 1);
        assert_eq!(config.motion.enter_stagger_ms, 80);
        assert_eq!(config.motion.exit_stagger_ms, 20);
    }

    #[test]
    fn test_invalid_email() {
        let err = SiteConfig::from_json(r#"{"supportEmail": "nobody"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
