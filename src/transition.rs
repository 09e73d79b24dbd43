//! フィルタ切替のトランジション制御
//!
//! 状態遷移:
//! - Idle --select--> ExitingOut: 表示中カード・ドットのエフェクトとスクロール連動を解除し、退場アニメーション開始
//! - ExitingOut --退場完了--> Swapped: フィルタを再計算し、表示コレクションを一括で差し替え
//! - Swapped --描画完了--> EnteringIn: 新しいカード・ドットの登場アニメーション開始
//! - EnteringIn --登場完了--> Idle: 新しい要素にだけスクロール連動を張り直す
//!
//! Idle 以外で select が来たら、進行中のエフェクトと連動を全てキャンセルしてから
//! ExitingOut をやり直す。選択を無視したりキューに積んだりはしない。

use crate::effects::{EffectHost, EffectSet, ScrollBinding, Target, Ticket, Timeline};
use crate::filter::{FilterState, FilterToken};
use crate::motion::{stagger_delay, Easing, Edge, Motion, MotionConfig, Pose, TriggerPoint};
use crate::types::ProjectRecord;
use std::fmt;
use std::sync::Arc;

/// トランジションの段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ExitingOut,
    Swapped,
    EnteringIn,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::ExitingOut => "exiting-out",
            Phase::Swapped => "swapped",
            Phase::EnteringIn => "entering-in",
        };
        f.write_str(name)
    }
}

/// グリッドを描画する側
pub trait StageHost: EffectHost {
    /// 表示コレクションを一括で置き換える
    fn commit(&mut self, state: &FilterState);

    /// 次の描画パス完了後に `on_layout_ready(epoch)` を呼ぶよう予約する
    fn request_layout(&mut self, epoch: u64);
}

/// フィルタ・トランジションのコントローラ
#[derive(Debug)]
pub struct TransitionController {
    filter: FilterState,
    phase: Phase,
    target: Option<FilterToken>,
    epoch: u64,
    effects: EffectSet,
    rendered: Vec<String>,
    timing: MotionConfig,
    mounted: bool,
}

impl TransitionController {
    pub fn new(base: impl Into<Arc<[ProjectRecord]>>, timing: MotionConfig) -> Self {
        let filter = FilterState::new(base);
        let rendered = ids(filter.visible());
        Self {
            filter,
            phase: Phase::Idle,
            target: None,
            epoch: 0,
            effects: EffectSet::new(),
            rendered,
            timing,
            mounted: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// 進行中トランジションの行き先
    pub fn target(&self) -> Option<&FilterToken> {
        self.target.as_ref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn active_effects(&self) -> usize {
        self.effects.pending_effects()
    }

    pub fn active_bindings(&self) -> usize {
        self.effects.binding_count()
    }

    /// 描画済みのカードID（表示順）
    pub fn rendered(&self) -> &[String] {
        &self.rendered
    }

    /// 初回描画後に呼ぶ。現在の要素にスクロール連動を張る
    pub fn mount<H: StageHost + ?Sized>(&mut self, host: &mut H) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        // 遷移中なら登場完了時の settle で張られる
        if self.phase == Phase::Idle {
            self.bind_scroll(host);
        }
        tracing::debug!(items = self.rendered.len(), phase = %self.phase, "transition controller mounted");
    }

    /// 全エフェクトと連動を解除する
    pub fn unmount<H: StageHost + ?Sized>(&mut self, host: &mut H) {
        self.effects.cancel_all(host);
        self.epoch += 1;
        self.phase = Phase::Idle;
        self.target = None;
        self.mounted = false;
        tracing::debug!("transition controller unmounted");
    }

    /// 分類を選択する
    pub fn select<H: StageHost + ?Sized>(&mut self, token: FilterToken, host: &mut H) {
        if self.phase != Phase::Idle {
            tracing::debug!(
                phase = %self.phase,
                from = ?self.target,
                to = %token,
                "interrupting transition"
            );
        }

        self.effects.cancel_all(host);
        self.epoch += 1;
        self.target = Some(token);
        self.enter_phase(Phase::ExitingOut);

        let timeline = self.exit_timeline();
        if timeline.is_empty() {
            self.swap(host);
        } else {
            let effect = host.play(self.epoch, timeline);
            self.effects.track_effect(effect);
        }
    }

    /// ホストからの完了通知
    pub fn on_effect_finished<H: StageHost + ?Sized>(&mut self, ticket: Ticket, host: &mut H) {
        if ticket.epoch != self.epoch || !self.effects.finish(ticket.effect) {
            tracing::warn!(
                epoch = ticket.epoch,
                current = self.epoch,
                effect = ticket.effect.0,
                "ignoring stale effect completion"
            );
            return;
        }
        if self.effects.pending_effects() > 0 {
            return;
        }

        match self.phase {
            Phase::ExitingOut => self.swap(host),
            Phase::EnteringIn => self.settle(host),
            phase => tracing::warn!(%phase, "effect completion in unexpected phase"),
        }
    }

    /// 差し替え後の描画が完了した
    pub fn on_layout_ready<H: StageHost + ?Sized>(&mut self, epoch: u64, host: &mut H) {
        if epoch != self.epoch || self.phase != Phase::Swapped {
            tracing::warn!(epoch, current = self.epoch, phase = %self.phase, "ignoring stale layout notification");
            return;
        }

        self.enter_phase(Phase::EnteringIn);
        let timeline = self.enter_timeline();
        if timeline.is_empty() {
            self.settle(host);
        } else {
            let effect = host.play(self.epoch, timeline);
            self.effects.track_effect(effect);
        }
    }

    fn swap<H: StageHost + ?Sized>(&mut self, host: &mut H) {
        let token = self.target.clone().unwrap_or_default();
        self.filter.apply(&token);
        self.rendered = ids(self.filter.visible());
        host.commit(&self.filter);
        self.enter_phase(Phase::Swapped);
        host.request_layout(self.epoch);
    }

    fn settle<H: StageHost + ?Sized>(&mut self, host: &mut H) {
        self.bind_scroll(host);
        // 連動を張った時点でマウント済み扱い（後の mount で二重に張らない）
        self.mounted = true;
        self.target = None;
        self.enter_phase(Phase::Idle);
    }

    fn enter_phase(&mut self, phase: Phase) {
        tracing::debug!(from = %self.phase, to = %phase, epoch = self.epoch, "transition phase");
        self.phase = phase;
    }

    /// カード・ドットの縮小フェードアウトとタイムライン線の収縮
    pub fn exit_timeline(&self) -> Timeline {
        let t = &self.timing;
        let mut timeline = Timeline::new();

        // 線は表示件数が 0 でも常に存在するので、空のグリッドからの退場も線の収縮1本になる
        timeline.push(
            Target::TimelineLine,
            Motion::to(Pose::collapsed_y(), Easing::PowerIn),
            0,
            t.line_exit_ms,
        );
        for (index, id) in self.rendered.iter().enumerate() {
            let delay = stagger_delay(index, t.exit_stagger_ms, 0);
            timeline.push(
                Target::Dot(id.clone()),
                Motion::to(Pose::faded(0.0, 0.0), Easing::PowerIn),
                delay,
                t.exit_duration_ms,
            );
            timeline.push(
                Target::Card(id.clone()),
                Motion::to(Pose::faded(15.0, 0.98), Easing::PowerIn),
                delay,
                t.exit_duration_ms,
            );
        }
        timeline
    }

    /// 新しいカード・ドットの登場（初回表示より短い）
    pub fn enter_timeline(&self) -> Timeline {
        let t = &self.timing;
        let mut timeline = Timeline::new();

        for (index, id) in self.rendered.iter().enumerate() {
            timeline.push(
                Target::Card(id.clone()),
                Motion::from_to(Pose::faded(30.0, 0.95), Pose::IDENTITY, Easing::PowerOut),
                stagger_delay(index, t.enter_stagger_ms, 0),
                t.enter_card_ms,
            );
            timeline.push(
                Target::Dot(id.clone()),
                Motion::from_to(Pose::faded(0.0, 0.0), Pose::IDENTITY, Easing::BackOut),
                stagger_delay(index, t.enter_stagger_ms, t.enter_dot_offset_ms),
                t.enter_dot_ms,
            );
        }
        timeline
    }

    /// 描画済み要素に対するスクロール連動一式
    pub fn scroll_bindings(&self) -> Vec<(Target, ScrollBinding)> {
        let mut bindings = vec![(
            Target::TimelineLine,
            ScrollBinding::Scrub {
                trigger: Target::TimelineContainer,
                start: TriggerPoint::new(Edge::Top, Edge::Center, 0.0),
                end: TriggerPoint::new(Edge::Bottom, Edge::Center, 0.0),
                motion: Motion::from_to(Pose::collapsed_y(), Pose::IDENTITY, Easing::Linear),
            },
        )];

        for id in &self.rendered {
            let dot = Target::Dot(id.clone());
            bindings.push((
                dot.clone(),
                ScrollBinding::Scrub {
                    trigger: dot,
                    start: TriggerPoint::new(Edge::Top, Edge::Center, 150.0),
                    end: TriggerPoint::new(Edge::Top, Edge::Center, 0.0),
                    motion: Motion::from_to(Pose::faded(0.0, 0.0), Pose::IDENTITY, Easing::BackOut),
                },
            ));

            let card = Target::Card(id.clone());
            bindings.push((
                card.clone(),
                ScrollBinding::Scrub {
                    trigger: card,
                    start: TriggerPoint::new(Edge::Top, Edge::Bottom, -50.0),
                    end: TriggerPoint::new(Edge::Top, Edge::Center, 100.0),
                    motion: Motion::from_to(Pose::faded(40.0, 0.95), Pose::IDENTITY, Easing::PowerOut),
                },
            ));
        }
        bindings
    }

    fn bind_scroll<H: StageHost + ?Sized>(&mut self, host: &mut H) {
        for (target, binding) in self.scroll_bindings() {
            let id = host.bind(target, binding);
            self.effects.track_binding(id);
        }
    }
}

fn ids(records: &[ProjectRecord]) -> Vec<String> {
    records.iter().map(|p| p.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn record(id: &str, category: Category) -> ProjectRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "displayIndex": "01",
            "category": category.as_str(),
            "price": 1100,
            "primaryImage": format!("/p/{}.png", id),
        }))
        .unwrap()
    }

    fn controller() -> TransitionController {
        TransitionController::new(
            vec![
                record("P1", Category::Portfolio),
                record("P2", Category::Portfolio),
                record("A1", Category::Api),
            ],
            MotionConfig::default(),
        )
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.rendered(), &["P1", "P2", "A1"]);
        assert!(c.filter().selected().is_all());
        assert_eq!(c.active_bindings(), 0);
    }

    #[test]
    fn test_exit_timeline_staggers_by_position() {
        let c = controller();
        let timeline = c.exit_timeline();
        // 線 + (ドット + カード) × 3
        assert_eq!(timeline.tracks.len(), 7);
        assert_eq!(timeline.tracks[0].target, Target::TimelineLine);
        assert_eq!(timeline.tracks[0].duration_ms, 250);

        let card_delays: Vec<u32> = timeline
            .tracks
            .iter()
            .filter(|t| matches!(t.target, Target::Card(_)))
            .map(|t| t.delay_ms)
            .collect();
        assert_eq!(card_delays, vec![0, 20, 40]);
        assert_eq!(timeline.total_ms(), 250);
    }

    #[test]
    fn test_enter_timeline_is_shorter_and_dots_offset() {
        let c = controller();
        let timeline = c.enter_timeline();
        let dot_delays: Vec<u32> = timeline
            .tracks
            .iter()
            .filter(|t| matches!(t.target, Target::Dot(_)))
            .map(|t| t.delay_ms)
            .collect();
        assert_eq!(dot_delays, vec![100, 160, 220]);
        assert!(timeline.tracks.iter().all(|t| t.duration_ms < 100));
    }

    #[test]
    fn test_scroll_bindings_cover_line_and_items() {
        let c = controller();
        let bindings = c.scroll_bindings();
        assert_eq!(bindings.len(), 1 + 2 * 3);
        assert_eq!(bindings[0].0, Target::TimelineLine);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::EnteringIn.to_string(), "entering-in");
    }
}
