//! メインアプリケーションコンポーネント

use crate::components::{
    about_section::AboutSection,
    footer::Footer,
    gallery_modal::GalleryModal,
    navbar::Navbar,
    work_section::WorkSection,
};
use codestore::catalog::{Catalog, View};
use codestore::filter::{FilterState, FilterToken};
use codestore::gallery::GalleryState;
use codestore::{ProjectRecord, SiteConfig};
use leptos::prelude::*;

/// コントローラから更新される表示状態
///
/// `visible` / `active` / `summary` は差し替え時にまとめて更新される。
#[derive(Clone, Copy)]
pub struct PageSignals {
    pub visible: RwSignal<Vec<ProjectRecord>>,
    pub active: RwSignal<FilterToken>,
    pub summary: RwSignal<String>,
    pub gallery: RwSignal<GalleryState>,
}

impl PageSignals {
    pub fn new(initial: &FilterState) -> Self {
        Self {
            visible: RwSignal::new(initial.visible().to_vec()),
            active: RwSignal::new(initial.selected().clone()),
            summary: RwSignal::new(initial.summary()),
            gallery: RwSignal::new(GalleryState::default()),
        }
    }
}

/// フィルタボタン1つ分
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub token: FilterToken,
    pub count: usize,
}

/// 描画に必要な読み込み済みデータ
#[derive(Clone)]
pub struct PageData {
    pub config: SiteConfig,
    pub filters: Vec<FilterOption>,
    pub signals: PageSignals,
}

impl PageData {
    pub fn new(config: SiteConfig, catalog: &Catalog, signals: PageSignals) -> Self {
        let filters = catalog
            .tokens(View::Featured)
            .into_iter()
            .map(|token| FilterOption {
                count: catalog.count(View::Featured, &token),
                token,
            })
            .collect();
        Self {
            config,
            filters,
            signals,
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App(page: PageData) -> impl IntoView {
    provide_context(page.config.clone());
    let signals = page.signals;

    view! {
        <div class="app">
            <Navbar store_name=page.config.store_name.clone() />
            <main>
                <WorkSection filters=page.filters signals=signals />
                <AboutSection />
            </main>
            <Footer />
            <GalleryModal gallery=signals.gallery />
        </div>
    }
}

/// 同梱データが読めなかったときの表示
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-label">"ERROR:"</span>
            " "
            {message}
        </div>
    }
}
