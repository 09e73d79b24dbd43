//! モーション定義とスクロール連動の計算
//!
//! - Pose / Motion: 要素の見た目の状態と、その間の遷移
//! - MotionConfig: 各アニメーションの時間・スタッガー（site.json で上書き可）
//! - TriggerPoint: "top bottom-=50" 形式のスクロールトリガー位置

use serde::{Deserialize, Serialize};

/// 要素の見た目
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub scale_y: f64,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
        scale_y: 1.0,
    };

    /// 透明・オフセット・縮小
    pub const fn faded(translate_y: f64, scale: f64) -> Pose {
        Pose {
            opacity: 0.0,
            translate_y,
            scale,
            scale_y: 1.0,
        }
    }

    pub const fn collapsed_y() -> Pose {
        Pose {
            scale_y: 0.0,
            ..Pose::IDENTITY
        }
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            translate_y: mix(self.translate_y, to.translate_y),
            scale: mix(self.scale, to.scale),
            scale_y: mix(self.scale_y, to.scale_y),
        }
    }

    /// CSS transform 値
    pub fn transform(&self) -> String {
        format!(
            "translateY({}px) scale({}) scaleY({})",
            self.translate_y, self.scale, self.scale_y
        )
    }
}

/// イージング
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    PowerIn,
    PowerOut,
    Power3Out,
    BackOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::PowerIn => "cubic-bezier(0.55, 0.085, 0.68, 0.53)",
            Easing::PowerOut => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::BackOut => "cubic-bezier(0.175, 0.885, 0.32, 1.6)",
        }
    }
}

/// Pose 間の遷移。`from` が None なら現在の見た目から始める
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Option<Pose>,
    pub to: Pose,
    pub easing: Easing,
}

impl Motion {
    pub fn to(to: Pose, easing: Easing) -> Self {
        Self { from: None, to, easing }
    }

    pub fn from_to(from: Pose, to: Pose, easing: Easing) -> Self {
        Self {
            from: Some(from),
            to,
            easing,
        }
    }
}

/// インデックス比例の遅延
pub fn stagger_delay(index: usize, step_ms: u32, offset_ms: u32) -> u32 {
    offset_ms.saturating_add(step_ms.saturating_mul(index as u32))
}

/// アニメーション時間設定（ミリ秒）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionConfig {
    pub exit_duration_ms: u32,
    pub exit_stagger_ms: u32,
    pub line_exit_ms: u32,
    pub enter_card_ms: u32,
    pub enter_dot_ms: u32,
    pub enter_stagger_ms: u32,
    pub enter_dot_offset_ms: u32,
    pub modal_backdrop_ms: u32,
    pub modal_panel_ms: u32,
    pub modal_panel_delay_ms: u32,
    pub modal_close_panel_ms: u32,
    pub modal_close_backdrop_ms: u32,
    pub modal_close_delay_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            exit_duration_ms: 200,
            exit_stagger_ms: 20,
            line_exit_ms: 250,
            enter_card_ms: 50,
            enter_dot_ms: 70,
            enter_stagger_ms: 60,
            enter_dot_offset_ms: 100,
            modal_backdrop_ms: 300,
            modal_panel_ms: 400,
            modal_panel_delay_ms: 100,
            modal_close_panel_ms: 200,
            modal_close_backdrop_ms: 300,
            modal_close_delay_ms: 100,
        }
    }
}

/// 要素・ビューポートの基準辺
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// "<要素の辺> <ビューポートの辺>±offset" のトリガー位置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPoint {
    pub element: Edge,
    pub viewport: Edge,
    /// 正なら下方向
    pub offset_px: f64,
}

impl TriggerPoint {
    pub const fn new(element: Edge, viewport: Edge, offset_px: f64) -> Self {
        Self {
            element,
            viewport,
            offset_px,
        }
    }

    /// 要素の辺がトリガー線に達するまでの残り距離（0以下で到達済み）
    fn distance(&self, rect: &Rect, viewport_height: f64) -> f64 {
        let element_y = match self.element {
            Edge::Top => rect.top,
            Edge::Center => rect.top + rect.height / 2.0,
            Edge::Bottom => rect.top + rect.height,
        };
        let line_y = match self.viewport {
            Edge::Top => 0.0,
            Edge::Center => viewport_height / 2.0,
            Edge::Bottom => viewport_height,
        } + self.offset_px;
        element_y - line_y
    }

    /// トリガー線を越えたか
    pub fn crossed(&self, rect: &Rect, viewport_height: f64) -> bool {
        self.distance(rect, viewport_height) <= 0.0
    }
}

/// ビューポート相対の要素矩形（getBoundingClientRect の top / height）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

/// start→end 間のスクロール進捗（0.0〜1.0）
pub fn scrub_progress(rect: &Rect, viewport_height: f64, start: &TriggerPoint, end: &TriggerPoint) -> f64 {
    let to_start = start.distance(rect, viewport_height);
    let to_end = end.distance(rect, viewport_height);
    let span = to_end - to_start;

    if span.abs() < f64::EPSILON {
        return if to_end <= 0.0 { 1.0 } else { 0.0 };
    }
    (-to_start / span).clamp(0.0, 1.0)
}
