//! プロジェクトカード

use crate::stage;
use codestore::pricing::{discount_percent, format_price, purchase_mailto};
use codestore::theme::category_palette;
use codestore::{ProjectRecord, SiteConfig};
use leptos::prelude::*;

#[component]
pub fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let colors = category_palette(&project.category);

    let discount = discount_percent(project.price, project.original_price);
    let original = project.original_price.filter(|_| discount.is_some()).map(format_price);
    let buy_href = purchase_mailto(&config.support_email, &project);

    let gallery_button = project.has_gallery().then(|| {
        let count = project.gallery.len();
        let target = project.clone();
        view! {
            <button
                class="gallery-button"
                on:click=move |ev| {
                    ev.stop_propagation();
                    stage::open_gallery(&target);
                }
            >
                {format!("View {} images", count)}
            </button>
        }
    });

    let features = project
        .features
        .iter()
        .map(|feature| view! { <li>{feature.clone()}</li> })
        .collect_view();
    let technologies = project
        .technologies
        .iter()
        .map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
        .collect_view();

    // 外部リンクは新しいタブで開く
    let demo = project.links.demo_url.clone().map(|url| {
        view! {
            <a class="link-button" href=url target="_blank" rel="noopener noreferrer">"Live Demo"</a>
        }
    });
    let repos = project
        .links
        .repos
        .iter()
        .map(|repo| {
            view! {
                <a class="link-button" href=repo.url.clone() target="_blank" rel="noopener noreferrer">
                    {repo.label.clone()}
                </a>
            }
        })
        .collect_view();

    let heading = project.heading().to_string();

    view! {
        <article
            class=format!("project-card {}", project.color_scheme.gradient_class())
            style=format!("--accent: {}", project.color_scheme.accent_hex())
        >
            <header class="card-header">
                <span class="card-index">{project.display_index.clone()}</span>
                <span class="category-badge" style=format!("color: {}; border-color: {}", colors.hex, colors.rgba)>
                    {project.category.to_string()}
                </span>
                {project.bestseller.then(|| view! { <span class="badge-bestseller">"BESTSELLER"</span> })}
            </header>

            <div class="card-media">
                <img src=project.primary_image.clone() alt=heading.clone() loading="lazy" />
                {gallery_button}
            </div>

            <div class="card-body">
                <p class="card-subtitle">{project.subtitle.clone()}</p>
                <h3 class="card-title">{heading}</h3>
                <p class="card-description">{project.description.clone()}</p>
                <ul class="card-features">{features}</ul>
                <div class="card-tech">{technologies}</div>
            </div>

            <footer class="card-footer">
                <div class="card-price">
                    <span class="price">{format_price(project.price)}</span>
                    {original.map(|price| view! { <span class="price-original">{price}</span> })}
                    {discount.map(|percent| view! { <span class="price-discount">{format!("-{}%", percent)}</span> })}
                </div>
                <div class="card-actions">
                    {demo}
                    {repos}
                    <a class="buy-button" href=buy_href>"Buy Now"</a>
                </div>
            </footer>
        </article>
    }
}
