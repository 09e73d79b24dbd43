//! ギャラリーモーダル
//!
//! 1件のプロジェクトの画像列を表示する。フィルタのトランジションとは独立。
//! 開いている間は背景スクロールを止め、閉じたときに1回だけ戻す。

use crate::effects::{EffectHost, EffectSet, Target, Ticket, Timeline};
use crate::motion::{Easing, Motion, MotionConfig, Pose};
use crate::types::ProjectRecord;
use thiserror::Error;

/// ギャラリー操作のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("project '{0}' has no gallery images")]
    EmptyGallery(String),

    #[error("gallery modal is already in use")]
    Busy,
}

/// モーダルの段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// 閉じるきっかけ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Backdrop,
    Escape,
}

/// 表示状態。`is_open` なら `selected` は画像を持つプロジェクト
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    pub is_open: bool,
    pub selected: Option<ProjectRecord>,
}

/// モーダルを描画する側
pub trait ModalHost: EffectHost {
    /// 背景スクロールの固定・解除
    fn set_scroll_frozen(&mut self, frozen: bool);

    fn show(&mut self, state: &GalleryState);
}

#[derive(Debug)]
pub struct GalleryController {
    state: GalleryState,
    phase: ModalPhase,
    epoch: u64,
    effects: EffectSet,
    scroll_frozen: bool,
    timing: MotionConfig,
}

impl GalleryController {
    pub fn new(timing: MotionConfig) -> Self {
        Self {
            state: GalleryState::default(),
            phase: ModalPhase::Closed,
            epoch: 0,
            effects: EffectSet::new(),
            scroll_frozen: false,
            timing,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_scroll_frozen(&self) -> bool {
        self.scroll_frozen
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn open<H: ModalHost + ?Sized>(&mut self, project: &ProjectRecord, host: &mut H) -> Result<(), GalleryError> {
        if !project.has_gallery() {
            tracing::warn!(id = %project.id, "gallery open rejected: no images");
            return Err(GalleryError::EmptyGallery(project.id.clone()));
        }
        if self.phase != ModalPhase::Closed {
            tracing::warn!(id = %project.id, phase = ?self.phase, "gallery open rejected: busy");
            return Err(GalleryError::Busy);
        }

        self.epoch += 1;
        self.state = GalleryState {
            is_open: true,
            selected: Some(project.clone()),
        };
        host.show(&self.state);
        if !self.scroll_frozen {
            self.scroll_frozen = true;
            host.set_scroll_frozen(true);
        }
        self.phase = ModalPhase::Opening;
        tracing::debug!(id = %project.id, images = project.gallery.len(), "gallery opening");

        let effect = host.play(self.epoch, self.open_timeline());
        self.effects.track_effect(effect);
        Ok(())
    }

    /// 閉じる。閉じている・閉じかけなら何もしない
    pub fn close<H: ModalHost + ?Sized>(&mut self, reason: CloseReason, host: &mut H) {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing => {
                tracing::debug!(?reason, phase = ?self.phase, "gallery close ignored");
            }
            ModalPhase::Opening | ModalPhase::Open => {
                self.effects.cancel_all(host);
                self.epoch += 1;
                self.phase = ModalPhase::Closing;
                tracing::debug!(?reason, "gallery closing");

                let effect = host.play(self.epoch, self.close_timeline());
                self.effects.track_effect(effect);
            }
        }
    }

    /// キー入力（Escape で閉じる）
    pub fn on_key<H: ModalHost + ?Sized>(&mut self, key: &str, host: &mut H) {
        if key == "Escape" && self.state.is_open {
            self.close(CloseReason::Escape, host);
        }
    }

    pub fn on_effect_finished<H: ModalHost + ?Sized>(&mut self, ticket: Ticket, host: &mut H) {
        if ticket.epoch != self.epoch || !self.effects.finish(ticket.effect) {
            tracing::warn!(epoch = ticket.epoch, current = self.epoch, "ignoring stale gallery completion");
            return;
        }

        match self.phase {
            ModalPhase::Opening => {
                self.phase = ModalPhase::Open;
                tracing::debug!("gallery open");
            }
            ModalPhase::Closing => self.finish_close(host),
            phase => tracing::warn!(?phase, "gallery completion in unexpected phase"),
        }
    }

    /// 破棄時。アニメーションを待たずに閉じる
    pub fn unmount<H: ModalHost + ?Sized>(&mut self, host: &mut H) {
        self.effects.cancel_all(host);
        self.epoch += 1;
        if self.phase != ModalPhase::Closed {
            self.finish_close(host);
        }
    }

    fn finish_close<H: ModalHost + ?Sized>(&mut self, host: &mut H) {
        self.state = GalleryState::default();
        host.show(&self.state);
        if self.scroll_frozen {
            self.scroll_frozen = false;
            host.set_scroll_frozen(false);
        }
        self.phase = ModalPhase::Closed;
        tracing::debug!("gallery closed");
    }

    fn open_timeline(&self) -> Timeline {
        let t = &self.timing;
        let mut timeline = Timeline::new();
        timeline.push(
            Target::ModalBackdrop,
            Motion::from_to(Pose::faded(0.0, 1.0), Pose::IDENTITY, Easing::PowerOut),
            0,
            t.modal_backdrop_ms,
        );
        timeline.push(
            Target::ModalPanel,
            Motion::from_to(Pose::faded(50.0, 0.95), Pose::IDENTITY, Easing::PowerOut),
            t.modal_panel_delay_ms,
            t.modal_panel_ms,
        );
        timeline
    }

    fn close_timeline(&self) -> Timeline {
        let t = &self.timing;
        let mut timeline = Timeline::new();
        timeline.push(
            Target::ModalPanel,
            Motion::to(Pose::faded(30.0, 0.95), Easing::PowerIn),
            0,
            t.modal_close_panel_ms,
        );
        timeline.push(
            Target::ModalBackdrop,
            Motion::to(Pose::faded(0.0, 1.0), Easing::PowerIn),
            t.modal_close_delay_ms,
            t.modal_close_backdrop_ms,
        );
        timeline
    }
}

/// 画像番号 "01 / 08"
pub fn frame_label(index: usize, total: usize) -> String {
    format!("{:02} / {:02}", index + 1, total)
}

/// 画像の代替テキスト
pub fn frame_alt(project: &ProjectRecord, index: usize) -> String {
    format!("{} - Screenshot {}", project.heading(), index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_label() {
        assert_eq!(frame_label(0, 8), "01 / 08");
        assert_eq!(frame_label(9, 12), "10 / 12");
    }

    #[test]
    fn test_initial_state_closed() {
        let gallery = GalleryController::new(MotionConfig::default());
        assert_eq!(gallery.phase(), ModalPhase::Closed);
        assert_eq!(gallery.state(), &GalleryState::default());
        assert!(!gallery.is_scroll_frozen());
    }

    #[test]
    fn test_open_timeline_panel_delayed() {
        let gallery = GalleryController::new(MotionConfig::default());
        let timeline = gallery.open_timeline();
        assert_eq!(timeline.total_ms(), 500);
        assert_eq!(timeline.tracks[1].target, Target::ModalPanel);
        assert_eq!(timeline.tracks[1].delay_ms, 100);
    }

    #[test]
    fn test_error_display() {
        let err = GalleryError::EmptyGallery("API-01".into());
        assert_eq!(err.to_string(), "project 'API-01' has no gallery images");
    }
}
