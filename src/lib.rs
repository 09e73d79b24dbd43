//! CodeStore カタログのコアライブラリ
//!
//! Web(WASM)フロントエンドから使う描画非依存のロジック:
//! カタログ、フィルタ、トランジション制御、ギャラリー、スクロール・リビール

pub mod error;
pub mod types;
pub mod catalog;
pub mod filter;
pub mod theme;
pub mod motion;
pub mod effects;
pub mod transition;
pub mod gallery;
pub mod reveal;
pub mod nav;
pub mod pricing;
pub mod config;

pub use error::{Error, Result};
pub use types::{Category, ColorScheme, ExternalLinks, ProjectRecord, RepoLink};
pub use catalog::{Catalog, View};
pub use filter::{compute_visible, FilterState, FilterToken};
pub use effects::{BindingId, EffectHost, EffectId, EffectSet, ScrollBinding, Target, Ticket, Timeline, Track};
pub use transition::{Phase, StageHost, TransitionController};
pub use gallery::{CloseReason, GalleryController, GalleryError, GalleryState, ModalHost, ModalPhase};
pub use reveal::{RevealBinder, RevealSpec};
pub use config::SiteConfig;
