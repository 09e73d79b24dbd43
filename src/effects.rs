//! 視覚エフェクトのハンドル管理
//!
//! コントローラは描画環境を直接触らず、`EffectHost` を通して
//! タイムライン再生とスクロール連動を依頼する。
//! 返されたハンドルは `EffectSet` で保持し、同期的にキャンセルできる。

use crate::motion::{Motion, TriggerPoint};

/// 再生中タイムラインのハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub u64);

/// スクロール連動のハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(pub u64);

/// 完了通知。発行時の epoch を持ち、古い epoch の通知は無視される
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub epoch: u64,
    pub effect: EffectId,
}

/// エフェクト対象の要素
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Card(String),
    Dot(String),
    TimelineLine,
    TimelineContainer,
    ModalBackdrop,
    ModalPanel,
    Section(String),
}

impl Target {
    /// `data-fx` 属性値。DOM側はこの値で要素を特定する
    pub fn key(&self) -> String {
        match self {
            Target::Card(id) => format!("card:{}", id),
            Target::Dot(id) => format!("dot:{}", id),
            Target::TimelineLine => "timeline-line".to_string(),
            Target::TimelineContainer => "timeline-container".to_string(),
            Target::ModalBackdrop => "modal-backdrop".to_string(),
            Target::ModalPanel => "modal-panel".to_string(),
            Target::Section(id) => format!("section:{}", id),
        }
    }

    pub fn selector(&self) -> String {
        format!("[data-fx=\"{}\"]", self.key())
    }
}

/// 1要素分のアニメーション
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub target: Target,
    pub motion: Motion,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

/// 同時に開始し、全トラック終了で1回だけ完了するアニメーション群
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    pub tracks: Vec<Track>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: Target, motion: Motion, delay_ms: u32, duration_ms: u32) {
        self.tracks.push(Track {
            target,
            motion,
            delay_ms,
            duration_ms,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// 最後のトラックが終わるまでの時間
    pub fn total_ms(&self) -> u32 {
        self.tracks
            .iter()
            .map(|t| t.delay_ms.saturating_add(t.duration_ms))
            .max()
            .unwrap_or(0)
    }
}

/// スクロール位置との結び付け
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollBinding {
    /// トリガー要素が start→end を通過する間、進捗に比例して motion を適用
    Scrub {
        trigger: Target,
        start: TriggerPoint,
        end: TriggerPoint,
        motion: Motion,
    },
    /// トリガー要素が start を越えたら1回だけ通知（`on_trigger`）
    Trigger { trigger: Target, start: TriggerPoint },
}

/// 描画環境側の実装
///
/// `play` の完了は、ホストが `Ticket { epoch, effect }` で所有コントローラに返す。
/// `cancel` / `unbind` は同期的に効果を止め、その後の完了通知は出さない。
pub trait EffectHost {
    fn play(&mut self, epoch: u64, timeline: Timeline) -> EffectId;
    fn cancel(&mut self, effect: EffectId);
    fn bind(&mut self, target: Target, binding: ScrollBinding) -> BindingId;
    fn unbind(&mut self, binding: BindingId);
}

/// コントローラが所有するハンドルの集合
#[derive(Debug, Default)]
pub struct EffectSet {
    effects: Vec<EffectId>,
    bindings: Vec<BindingId>,
}

impl EffectSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_effect(&mut self, effect: EffectId) {
        self.effects.push(effect);
    }

    pub fn track_binding(&mut self, binding: BindingId) {
        self.bindings.push(binding);
    }

    /// 完了したエフェクトを外す。保持していなければ false
    pub fn finish(&mut self, effect: EffectId) -> bool {
        match self.effects.iter().position(|e| *e == effect) {
            Some(pos) => {
                self.effects.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// バインディングを1つ外す（ホスト側の解除は呼び出し元が行う）
    pub fn forget_binding(&mut self, binding: BindingId) -> bool {
        match self.bindings.iter().position(|b| *b == binding) {
            Some(pos) => {
                self.bindings.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn has_binding(&self, binding: BindingId) -> bool {
        self.bindings.contains(&binding)
    }

    pub fn pending_effects(&self) -> usize {
        self.effects.len()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.bindings.is_empty()
    }

    /// 全エフェクトとバインディングを解除
    pub fn cancel_all<H: EffectHost + ?Sized>(&mut self, host: &mut H) {
        for effect in self.effects.drain(..) {
            host.cancel(effect);
        }
        for binding in self.bindings.drain(..) {
            host.unbind(binding);
        }
    }
}
