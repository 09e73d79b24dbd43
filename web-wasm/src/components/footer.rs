//! フッター（問い合わせ・リンク）

use codestore::effects::Target;
use codestore::nav::{anchor, NAV_ITEMS};
use codestore::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let social = config
        .social_links
        .iter()
        .map(|link| {
            view! {
                <a class="social-link" href=link.href.clone() target="_blank" rel="noopener noreferrer">
                    <span class="social-name">{link.name.clone()}</span>
                    <span class="social-user">{link.username.clone()}</span>
                </a>
            }
        })
        .collect_view();

    let quick_links = NAV_ITEMS
        .iter()
        .map(|item| view! { <li><a href=anchor(item.id)>{item.label}</a></li> })
        .collect_view();

    view! {
        <footer id="contact" class="footer">
            <div class="footer-content" data-fx=Target::Section("footer".into()).key() data-reveal="">
                <div class="footer-header">
                    <span class="label-text">"CONTACT US"</span>
                    <h2 class="text-section">
                        <span class="method">"GET"</span>
                        " "
                        <span class="path">"/api/"</span>
                        <span class="gradient-text-cyan">"support"</span>
                    </h2>
                    <p>"Need help with your purchase? Have questions about our products? We're here to help!"</p>
                </div>

                <div class="contact-grid">
                    <a class="contact-card" href=config.support_mailto()>
                        <span class="contact-key">"support"</span>
                        <span class="contact-value">{config.support_email.clone()}</span>
                    </a>
                    <div class="contact-card">
                        <span class="contact-key">"response time"</span>
                        <span class="contact-value">"Within 24 hours"</span>
                    </div>
                </div>

                <div class="footer-links">
                    <div>
                        <h3>"Quick Links"</h3>
                        <ul>{quick_links}</ul>
                    </div>
                    <div class="social-links">{social}</div>
                </div>

                <p class="copyright">{format!("© {}. All rights reserved.", config.store_name)}</p>
            </div>
        </footer>
    }
}
