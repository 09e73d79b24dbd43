//! ナビゲーションバー
//!
//! スクロール量でコンパクト表示に切り替え、表示中のセクションをハイライトする。

use crate::dom;
use codestore::nav::{active_section, anchor, is_scrolled, should_collapse_menu, ACTIVE_THRESHOLD_PX, NAV_ITEMS};
use codestore::SiteConfig;
use gloo::events::EventListener;
use leptos::prelude::*;
use std::cell::Cell;

#[component]
pub fn Navbar(store_name: String) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(None::<&'static str>);

    // ページと同じ寿命なので外さない
    if let Some(window) = web_sys::window() {
        let last_y = Cell::new(dom::scroll_y());
        EventListener::new(&window, "scroll", move |_| {
            let y = dom::scroll_y();
            set_scrolled.set(is_scrolled(y));
            if menu_open.get_untracked() && should_collapse_menu(last_y.get(), y) {
                set_menu_open.set(false);
            }
            last_y.set(y);

            let tops: Vec<(&'static str, f64)> = NAV_ITEMS
                .iter()
                .filter_map(|item| dom::section_top(item.id).map(|top| (item.id, top)))
                .collect();
            set_active.set(active_section(&tops, ACTIVE_THRESHOLD_PX));
        })
        .forget();
    }

    let links = move || {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let id = item.id;
                view! {
                    <a
                        href=anchor(id)
                        class="nav-link"
                        class:active=move || active.get() == Some(id)
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <div class="navbar-inner">
                <a href="#" class="brand">
                    <span class="brand-prompt">"~/"</span>
                    {store_name}
                </a>

                <div class="nav-links">{links}</div>

                <div class="nav-actions">
                    <a href=config.github_url.clone() target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        "GitHub"
                    </a>
                    <a href=config.support_mailto() aria-label="Email">"Email"</a>
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">{links}</div>
            </Show>
        </nav>
    }
}
