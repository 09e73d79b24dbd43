//! CodeStore Web App (Leptos + WASM)

mod app;
mod components;
mod dom;
mod host;
mod logging;
mod stage;

use app::{App, ErrorBanner, PageData, PageSignals};
use codestore::{Catalog, FilterState, SiteConfig, View};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

const CATALOG_JSON: &str = include_str!("../../data/catalog.json");
const SITE_JSON: &str = include_str!("../../data/site.json");

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_json(SITE_JSON);
    let log_level = config.as_ref().map(|c| c.log_level.clone()).unwrap_or_else(|_| "info".into());
    logging::init(&log_level);
    let config = config.unwrap_or_else(|err| {
        tracing::error!(error = %err, "site.json rejected, using defaults");
        SiteConfig::default()
    });

    let catalog = match Catalog::from_json(CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "catalog.json rejected");
            let message = format!("Product catalog could not be loaded: {}", err);
            leptos::mount::mount_to_body(move || view! { <ErrorBanner message=message /> });
            return;
        }
    };

    let base = catalog.view(View::Featured).to_vec();
    let signals = PageSignals::new(&FilterState::new(base.clone()));
    stage::install(stage::Stage::new(base, config.motion.clone(), signals));

    let page = PageData::new(config, &catalog, signals);
    leptos::mount::mount_to_body(move || view! { <App page=page /> });

    // 初回描画のレイアウト確定後にスクロール連動を張る
    wasm_bindgen_futures::spawn_local(async {
        dom::next_frame().await;
        stage::mount();
    });
}
