//! テスト用の記録ホスト
//!
//! 再生・キャンセル・バインド・差し替えを全て記録し、
//! 完了通知はテスト側から明示的に流す。

#![allow(dead_code)]

use codestore::effects::{BindingId, EffectHost, EffectId, ScrollBinding, Target, Ticket, Timeline};
use codestore::filter::FilterState;
use codestore::gallery::{GalleryState, ModalHost};
use codestore::transition::{Phase, StageHost, TransitionController};
use codestore::{Catalog, ProjectRecord, View};
use std::collections::BTreeMap;

pub const CATALOG_JSON: &str = include_str!("../../data/catalog.json");

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("codestore=debug")
        .try_init();
}

pub fn bundled_catalog() -> Catalog {
    Catalog::from_json(CATALOG_JSON).expect("bundled catalog must load")
}

/// id と分類だけのレコード
pub fn record(id: &str, category: &str) -> ProjectRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "displayIndex": "01",
        "category": category,
        "price": 1100,
        "primaryImage": format!("/p/{}.png", id),
        "featured": true,
    }))
    .expect("valid record")
}

pub fn record_with_gallery(id: &str, images: usize) -> ProjectRecord {
    let mut project = record(id, "PORTFOLIO");
    project.gallery = (1..=images).map(|i| format!("/p/{}/{:02}.png", id, i)).collect();
    project
}

pub fn featured(catalog: &Catalog) -> Vec<ProjectRecord> {
    catalog.view(View::Featured).to_vec()
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    next_id: u64,
    pub playing: BTreeMap<EffectId, (u64, Timeline)>,
    pub bindings: BTreeMap<BindingId, (Target, ScrollBinding)>,
    pub played: Vec<Timeline>,
    pub cancelled: Vec<EffectId>,
    pub unbound: Vec<BindingId>,
    pub commits: Vec<Vec<String>>,
    pub layout_requests: Vec<u64>,
    pub scroll_frozen: bool,
    pub scroll_changes: Vec<bool>,
    pub shown: Vec<GalleryState>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// 再生中の全エフェクトを完了させ、通知を返す
    pub fn finish_all(&mut self) -> Vec<Ticket> {
        std::mem::take(&mut self.playing)
            .into_iter()
            .map(|(effect, (epoch, _))| Ticket { epoch, effect })
            .collect()
    }

    pub fn take_layout_requests(&mut self) -> Vec<u64> {
        std::mem::take(&mut self.layout_requests)
    }

    /// バインド中のカード・ドットのID
    pub fn bound_item_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .bindings
            .values()
            .filter_map(|(target, _)| match target {
                Target::Card(id) | Target::Dot(id) => Some(id.clone()),
                _ => None,
            })
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    pub fn last_commit(&self) -> Option<&Vec<String>> {
        self.commits.last()
    }
}

impl EffectHost for RecordingHost {
    fn play(&mut self, epoch: u64, timeline: Timeline) -> EffectId {
        self.next_id += 1;
        let id = EffectId(self.next_id);
        self.played.push(timeline.clone());
        self.playing.insert(id, (epoch, timeline));
        id
    }

    fn cancel(&mut self, effect: EffectId) {
        self.playing.remove(&effect);
        self.cancelled.push(effect);
    }

    fn bind(&mut self, target: Target, binding: ScrollBinding) -> BindingId {
        self.next_id += 1;
        let id = BindingId(self.next_id);
        self.bindings.insert(id, (target, binding));
        id
    }

    fn unbind(&mut self, binding: BindingId) {
        self.bindings.remove(&binding);
        self.unbound.push(binding);
    }
}

impl StageHost for RecordingHost {
    fn commit(&mut self, state: &FilterState) {
        self.commits.push(state.visible().iter().map(|p| p.id.clone()).collect());
    }

    fn request_layout(&mut self, epoch: u64) {
        self.layout_requests.push(epoch);
    }
}

impl ModalHost for RecordingHost {
    fn set_scroll_frozen(&mut self, frozen: bool) {
        self.scroll_frozen = frozen;
        self.scroll_changes.push(frozen);
    }

    fn show(&mut self, state: &GalleryState) {
        self.shown.push(state.clone());
    }
}

/// Idle になるまで完了通知と描画完了を流す
pub fn drive_to_idle(controller: &mut TransitionController, host: &mut RecordingHost) {
    for _ in 0..16 {
        if controller.phase() == Phase::Idle && host.playing.is_empty() {
            return;
        }
        for ticket in host.finish_all() {
            controller.on_effect_finished(ticket, host);
        }
        for epoch in host.take_layout_requests() {
            controller.on_layout_ready(epoch, host);
        }
    }
    panic!("controller did not settle: phase {}", controller.phase());
}
