//! ページ全体のコントローラ置き場
//!
//! グリッド遷移・ギャラリー・リビールの各コントローラとホストを
//! スレッドローカルに1つだけ持ち、UIイベントと非同期の完了通知をここに集める。

use crate::app::PageSignals;
use crate::host::{DomHost, Owner};
use codestore::effects::{BindingId, Ticket};
use codestore::filter::FilterToken;
use codestore::gallery::{CloseReason, GalleryController};
use codestore::motion::MotionConfig;
use codestore::reveal::{default_sections, RevealBinder};
use codestore::transition::TransitionController;
use codestore::ProjectRecord;
use gloo::events::EventListener;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

thread_local! {
    static STAGE: RefCell<Option<Stage>> = const { RefCell::new(None) };
}

pub struct Stage {
    grid: TransitionController,
    grid_host: DomHost,
    gallery: GalleryController,
    modal_host: DomHost,
    reveal: RevealBinder,
    reveal_host: DomHost,
    _listeners: Vec<EventListener>,
}

impl Stage {
    pub fn new(base: Vec<ProjectRecord>, timing: MotionConfig, signals: PageSignals) -> Self {
        let mut listeners = Vec::new();
        if let Some(window) = web_sys::window() {
            listeners.push(EventListener::new(&window, "keydown", |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    key_pressed(&event.key());
                }
            }));
            listeners.push(EventListener::new(&window, "pagehide", |_| unmount()));
        }

        Self {
            grid: TransitionController::new(base, timing.clone()),
            grid_host: DomHost::new(Owner::Grid, signals),
            gallery: GalleryController::new(timing),
            modal_host: DomHost::new(Owner::Gallery, signals),
            reveal: RevealBinder::new(default_sections()),
            reveal_host: DomHost::new(Owner::Reveal, signals),
            _listeners: listeners,
        }
    }

    fn host_mut(&mut self, owner: Owner) -> &mut DomHost {
        match owner {
            Owner::Grid => &mut self.grid_host,
            Owner::Gallery => &mut self.modal_host,
            Owner::Reveal => &mut self.reveal_host,
        }
    }

    fn mount(&mut self) {
        self.grid.mount(&mut self.grid_host);
        self.reveal.attach(&mut self.reveal_host);
    }

    fn unmount(&mut self) {
        self.grid.unmount(&mut self.grid_host);
        self.gallery.unmount(&mut self.modal_host);
        self.reveal.detach(&mut self.reveal_host);
    }

    fn effect_finished(&mut self, owner: Owner, ticket: Ticket) {
        self.host_mut(owner).complete(ticket.effect);
        match owner {
            Owner::Grid => self.grid.on_effect_finished(ticket, &mut self.grid_host),
            Owner::Gallery => self.gallery.on_effect_finished(ticket, &mut self.modal_host),
            Owner::Reveal => self.reveal.on_effect_finished(ticket),
        }
    }
}

pub fn install(stage: Stage) {
    STAGE.with(|cell| {
        if let Some(mut previous) = cell.borrow_mut().replace(stage) {
            previous.unmount();
        }
    });
}

/// ステージを借りて処理する。未登録・借用中なら None
///
/// ホストの完了通知・トリガー・描画完了はすべて `spawn_local` か
/// ブラウザのイベント経由で後から届くので、借用中に同期的に再入する経路は無い。
/// 借用中の分岐はその前提が崩れたときの検出用。
pub fn with_stage<R>(f: impl FnOnce(&mut Stage) -> R) -> Option<R> {
    STAGE.with(|cell| match cell.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            tracing::warn!("stage is busy; event dropped");
            None
        }
    })
}

pub fn with_host<R>(owner: Owner, f: impl FnOnce(&mut DomHost) -> R) -> Option<R> {
    with_stage(|stage| f(stage.host_mut(owner)))
}

/// 初回描画後の連動登録
pub fn mount() {
    with_stage(Stage::mount);
}

/// ページ離脱時。再生中のエフェクトと連動を全て外し、スクロール固定を戻す
pub fn unmount() {
    with_stage(Stage::unmount);
}

pub fn select(token: FilterToken) {
    with_stage(|stage| stage.grid.select(token, &mut stage.grid_host));
}

pub fn open_gallery(project: &ProjectRecord) {
    with_stage(|stage| {
        if let Err(err) = stage.gallery.open(project, &mut stage.modal_host) {
            tracing::warn!(project = %project.id, error = %err, "gallery not opened");
        }
    });
}

pub fn close_gallery(reason: CloseReason) {
    with_stage(|stage| stage.gallery.close(reason, &mut stage.modal_host));
}

fn key_pressed(key: &str) {
    with_stage(|stage| stage.gallery.on_key(key, &mut stage.modal_host));
}

pub fn effect_finished(owner: Owner, ticket: Ticket) {
    with_stage(|stage| stage.effect_finished(owner, ticket));
}

pub fn layout_ready(owner: Owner, epoch: u64) {
    if owner != Owner::Grid {
        return;
    }
    with_stage(|stage| stage.grid.on_layout_ready(epoch, &mut stage.grid_host));
}

pub fn trigger_fired(owner: Owner, binding: BindingId) {
    if owner != Owner::Reveal {
        return;
    }
    with_stage(|stage| stage.reveal.on_trigger(binding, &mut stage.reveal_host));
}
