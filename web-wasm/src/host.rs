//! ブラウザ側のエフェクトホスト
//!
//! コントローラからの再生・連動要求を Web Animations とスクロールリスナーに変換し、
//! 完了はタスクキュー経由で `stage` に戻す（コントローラの借用中に再入しない）。

use crate::app::PageSignals;
use crate::{dom, stage};
use codestore::effects::{BindingId, EffectHost, EffectId, ScrollBinding, Target, Ticket, Timeline};
use codestore::filter::FilterState;
use codestore::gallery::{GalleryState, ModalHost};
use codestore::transition::StageHost;
use futures::future::join_all;
use gloo::events::EventListener;
use leptos::prelude::*;
use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Animation;

/// 完了通知の戻り先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Grid,
    Gallery,
    Reveal,
}

pub struct DomHost {
    owner: Owner,
    signals: PageSignals,
    next_id: u64,
    /// 次フレームで開始予定
    scheduled: HashSet<EffectId>,
    running: HashMap<EffectId, Vec<Animation>>,
    /// drop でリスナーが外れる
    bindings: HashMap<BindingId, EventListener>,
}

impl DomHost {
    pub fn new(owner: Owner, signals: PageSignals) -> Self {
        Self {
            owner,
            signals,
            next_id: 0,
            scheduled: HashSet::new(),
            running: HashMap::new(),
            bindings: HashMap::new(),
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// 予約済みのエフェクトを開始し、完了待ちの Promise を返す
    pub fn start(&mut self, effect: EffectId, timeline: &Timeline) -> Option<Vec<js_sys::Promise>> {
        if !self.scheduled.remove(&effect) {
            return None;
        }
        let animations: Vec<Animation> = timeline.tracks.iter().filter_map(dom::animate).collect();
        if animations.len() < timeline.tracks.len() {
            tracing::debug!(
                effect = effect.0,
                missing = timeline.tracks.len() - animations.len(),
                "some targets are not in the document"
            );
        }
        let finished = animations.iter().filter_map(|a| a.finished().ok()).collect();
        self.running.insert(effect, animations);
        Some(finished)
    }

    /// 完了したエフェクトの最終状態を確定
    pub fn complete(&mut self, effect: EffectId) {
        if let Some(animations) = self.running.remove(&effect) {
            animations.iter().for_each(dom::settle);
        }
    }

    pub fn active_effects(&self) -> usize {
        self.scheduled.len() + self.running.len()
    }

    pub fn active_bindings(&self) -> usize {
        self.bindings.len()
    }
}

impl EffectHost for DomHost {
    fn play(&mut self, epoch: u64, timeline: Timeline) -> EffectId {
        let effect = EffectId(self.next_id());
        self.scheduled.insert(effect);
        let owner = self.owner;

        spawn_local(async move {
            // 直前の signal 更新が DOM に反映されるのを待つ
            dom::next_frame().await;
            let Some(promises) = stage::with_host(owner, |host| host.start(effect, &timeline)).flatten() else {
                return;
            };
            let results = join_all(promises.into_iter().map(JsFuture::from)).await;
            if results.iter().any(Result::is_err) {
                // cancel() で中断された
                return;
            }
            stage::effect_finished(owner, Ticket { epoch, effect });
        });

        effect
    }

    fn cancel(&mut self, effect: EffectId) {
        self.scheduled.remove(&effect);
        if let Some(animations) = self.running.remove(&effect) {
            // 途中の見た目で止める
            animations.iter().for_each(dom::settle);
        }
    }

    fn bind(&mut self, target: Target, binding: ScrollBinding) -> BindingId {
        let id = BindingId(self.next_id());
        let Some(window) = web_sys::window() else {
            return id;
        };

        let listener = match binding {
            ScrollBinding::Scrub {
                trigger,
                start,
                end,
                motion,
            } => {
                dom::apply_scrub(&target, &trigger, &start, &end, &motion);
                EventListener::new(&window, "scroll", move |_| {
                    dom::apply_scrub(&target, &trigger, &start, &end, &motion);
                })
            }
            ScrollBinding::Trigger { trigger, start } => {
                let owner = self.owner;
                let fired = Rc::new(Cell::new(false));
                let check = Rc::new(move || {
                    if !fired.get() && dom::crossed(&trigger, &start) {
                        fired.set(true);
                        spawn_local(async move { stage::trigger_fired(owner, id) });
                    }
                });

                // 最初から画面内にある要素
                let initial = check.clone();
                spawn_local(async move {
                    dom::next_frame().await;
                    initial();
                });

                EventListener::new(&window, "scroll", move |_| check())
            }
        };

        self.bindings.insert(id, listener);
        id
    }

    fn unbind(&mut self, binding: BindingId) {
        self.bindings.remove(&binding);
    }
}

impl StageHost for DomHost {
    fn commit(&mut self, state: &FilterState) {
        self.signals.visible.set(state.visible().to_vec());
        self.signals.active.set(state.selected().clone());
        self.signals.summary.set(state.summary());
    }

    fn request_layout(&mut self, epoch: u64) {
        let owner = self.owner;
        spawn_local(async move {
            // 2フレーム待てば新しい要素のレイアウトが確定している
            dom::next_frame().await;
            dom::next_frame().await;
            stage::layout_ready(owner, epoch);
        });
    }
}

impl ModalHost for DomHost {
    fn set_scroll_frozen(&mut self, frozen: bool) {
        dom::set_scroll_frozen(frozen);
    }

    fn show(&mut self, state: &GalleryState) {
        self.signals.gallery.set(state.clone());
    }
}
