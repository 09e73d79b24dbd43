//! スクロール・リビール
//!
//! 静的セクションが初めてトリガー位置に入ったときに1回だけ表示アニメーションを再生する。
//! フィルタのトランジションとは無関係に動く。

use crate::effects::{BindingId, EffectHost, EffectSet, ScrollBinding, Target, Ticket, Timeline};
use crate::motion::{Easing, Edge, Motion, Pose, TriggerPoint};
use std::collections::HashSet;

/// 1セクション分の設定
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSpec {
    pub section: String,
    pub start: TriggerPoint,
    pub offset_y: f64,
    pub duration_ms: u32,
}

impl RevealSpec {
    /// "top bottom-=<margin>" でトリガーするセクション
    pub fn new(section: &str, margin_px: f64, offset_y: f64, duration_ms: u32) -> Self {
        Self {
            section: section.to_string(),
            start: TriggerPoint::new(Edge::Top, Edge::Bottom, -margin_px),
            offset_y,
            duration_ms,
        }
    }

    fn timeline(&self) -> Timeline {
        let mut timeline = Timeline::new();
        timeline.push(
            Target::Section(self.section.clone()),
            Motion::from_to(Pose::faded(self.offset_y, 1.0), Pose::IDENTITY, Easing::Power3Out),
            0,
            self.duration_ms,
        );
        timeline
    }
}

/// ページの標準セクション
pub fn default_sections() -> Vec<RevealSpec> {
    vec![
        RevealSpec::new("work-header", 100.0, 40.0, 600),
        RevealSpec::new("work-filter", 50.0, 20.0, 500),
        RevealSpec::new("about", 100.0, 40.0, 700),
        RevealSpec::new("footer", 100.0, 30.0, 600),
    ]
}

#[derive(Debug)]
pub struct RevealBinder {
    specs: Vec<RevealSpec>,
    bound: Vec<(BindingId, usize)>,
    fired: HashSet<String>,
    effects: EffectSet,
    epoch: u64,
}

impl RevealBinder {
    pub fn new(specs: Vec<RevealSpec>) -> Self {
        Self {
            specs,
            bound: Vec::new(),
            fired: HashSet::new(),
            effects: EffectSet::new(),
            epoch: 0,
        }
    }

    /// 未発火のセクションにトリガーを張る
    ///
    /// epoch は detach でのみ進める（再生中のリビールの完了を受け取れるように）
    pub fn attach<H: EffectHost + ?Sized>(&mut self, host: &mut H) {
        for (index, spec) in self.specs.iter().enumerate() {
            if self.fired.contains(&spec.section) || self.bound.iter().any(|(_, i)| *i == index) {
                continue;
            }
            let target = Target::Section(spec.section.clone());
            let binding = host.bind(
                target.clone(),
                ScrollBinding::Trigger {
                    trigger: target,
                    start: spec.start,
                },
            );
            self.effects.track_binding(binding);
            self.bound.push((binding, index));
        }
        tracing::debug!(sections = self.bound.len(), "scroll reveals attached");
    }

    /// ホストからのトリガー通知
    pub fn on_trigger<H: EffectHost + ?Sized>(&mut self, binding: BindingId, host: &mut H) {
        let Some(pos) = self.bound.iter().position(|(b, _)| *b == binding) else {
            tracing::warn!(binding = binding.0, "ignoring unknown reveal trigger");
            return;
        };
        let (_, index) = self.bound.swap_remove(pos);
        if self.effects.forget_binding(binding) {
            host.unbind(binding);
        }

        let spec = &self.specs[index];
        if !self.fired.insert(spec.section.clone()) {
            return;
        }
        tracing::debug!(section = %spec.section, "section revealed");
        let effect = host.play(self.epoch, spec.timeline());
        self.effects.track_effect(effect);
    }

    pub fn on_effect_finished(&mut self, ticket: Ticket) {
        if ticket.epoch == self.epoch {
            self.effects.finish(ticket.effect);
        }
    }

    /// トリガーと再生中アニメーションを全て解除
    pub fn detach<H: EffectHost + ?Sized>(&mut self, host: &mut H) {
        self.effects.cancel_all(host);
        self.bound.clear();
        self.epoch += 1;
    }

    pub fn is_revealed(&self, section: &str) -> bool {
        self.fired.contains(section)
    }

    pub fn active_bindings(&self) -> usize {
        self.effects.binding_count()
    }

    pub fn active_effects(&self) -> usize {
        self.effects.pending_effects()
    }
}
