//! 制作物セクション
//!
//! フィルタバー、タイムライン、カードグリッド、該当なし表示。
//! 要素には `data-fx` を付け、遷移エフェクトの対象として引けるようにする。

use crate::app::{FilterOption, PageSignals};
use crate::components::project_card::ProjectCard;
use crate::stage;
use codestore::effects::Target;
use codestore::filter::FilterToken;
use codestore::theme::{category_palette, palette, timeline_gradient};
use codestore::ProjectRecord;
use leptos::prelude::*;

#[component]
pub fn WorkSection(filters: Vec<FilterOption>, signals: PageSignals) -> impl IntoView {
    let active = signals.active;
    let accent = move || palette(&active.get()).hex;

    view! {
        <section id="work" class="work-section">
            <div class="work-header" data-fx=Target::Section("work-header".into()).key() data-reveal="">
                <div class="section-label">
                    <span
                        class="label-line"
                        style=move || format!("background: linear-gradient(to right, transparent, {})", accent())
                    />
                    <span class="label-text" style=move || format!("color: {}", accent())>
                        "PERSONAL PROJECT"
                    </span>
                    <span
                        class="label-line"
                        style=move || format!("background: linear-gradient(to left, transparent, {})", accent())
                    />
                </div>

                <h2 class="text-section">
                    <span class="text-white">"git status "</span>
                    <span class="gradient-text-pink">"--short personal-project"</span>
                </h2>
                <p class="section-lead">
                    <span class="comment">"// "</span>
                    "A selection of projects that showcase my skills and passion for building digital products"
                </p>

                <FilterBar filters=filters active=active />

                <p class="filter-result">{move || signals.summary.get()}</p>
            </div>

            <div class="timeline-container" data-fx=Target::TimelineContainer.key()>
                <div class="timeline" aria-hidden="true">
                    <div class="timeline-track" />
                    <div
                        class="timeline-line"
                        data-fx=Target::TimelineLine.key()
                        style=move || format!("background: {}", timeline_gradient(&active.get()))
                    />
                </div>

                <div class="project-grid">
                    <For
                        each=move || signals.visible.get().into_iter().enumerate()
                        key=|(index, project)| (*index, project.id.clone())
                        children=move |(index, project)| view! { <GridItem index=index project=project /> }
                    />
                </div>

                <Show when=move || signals.visible.with(Vec::is_empty)>
                    <EmptyState />
                </Show>
            </div>
        </section>
    }
}

/// カテゴリ別のフィルタボタン（件数付き）
#[component]
fn FilterBar(filters: Vec<FilterOption>, active: RwSignal<FilterToken>) -> impl IntoView {
    let buttons = filters
        .into_iter()
        .map(|FilterOption { token, count }| {
            let colors = palette(&token);
            let label = token.label().to_string();
            let is_active = {
                let token = token.clone();
                move || active.get() == token
            };
            let style = {
                let is_active = is_active.clone();
                move || {
                    if is_active() {
                        format!("background: {}; box-shadow: 0 0 20px {}; color: #fff", colors.hex, colors.glow)
                    } else {
                        format!("border-color: {}", colors.rgba)
                    }
                }
            };
            let pressed = is_active.clone();

            view! {
                <button
                    class="filter-button"
                    class:active=is_active
                    style=style
                    aria-pressed=move || pressed().to_string()
                    on:click=move |_| stage::select(token.clone())
                >
                    {label}
                    <span class="filter-count">{count}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="filter-bar" data-fx=Target::Section("work-filter".into()).key() data-reveal="">
            {buttons}
        </div>
    }
}

/// タイムライン上の1行（ドット + カード）
#[component]
fn GridItem(index: usize, project: ProjectRecord) -> impl IntoView {
    let side = if index % 2 == 0 { "left" } else { "right" };
    let colors = category_palette(&project.category);
    let dot = Target::Dot(project.id.clone()).key();
    let card = Target::Card(project.id.clone()).key();

    view! {
        <div class=format!("grid-item grid-item-{}", side)>
            <span
                class="timeline-dot"
                data-fx=dot
                style=format!("background: {}; box-shadow: 0 0 12px {}", colors.hex, colors.rgba)
            />
            <div class="card-slot" data-fx=card>
                <ProjectCard project=project />
            </div>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="terminal-line">
                <span class="error-label">"ERROR:"</span>
                " No projects found matching filter"
            </div>
            <button class="reset-button" on:click=|_| stage::select(FilterToken::All)>
                "Reset filter"
            </button>
        </div>
    }
}
