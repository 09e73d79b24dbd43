//! DOM 操作のヘルパー
//!
//! `data-fx` セレクタでの要素取得、Web Animations API での再生、
//! スクロール連動の計算をまとめる。

use codestore::effects::{Target, Track};
use codestore::motion::{scrub_progress, Motion, Pose, Rect, TriggerPoint};
use js_sys::{Object, Promise};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Animation, Element, FillMode, HtmlElement, KeyframeAnimationOptions};

/// Web Animations のキーフレーム1つ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframe {
    pub opacity: f64,
    pub transform: String,
}

impl From<&Pose> for Keyframe {
    fn from(pose: &Pose) -> Self {
        Self {
            opacity: pose.opacity,
            transform: pose.transform(),
        }
    }
}

/// `from` が無い場合は終点のみ（始点は現在の見た目）
pub fn keyframes(motion: &Motion) -> Vec<Keyframe> {
    let mut frames = Vec::with_capacity(2);
    if let Some(from) = &motion.from {
        frames.push(Keyframe::from(from));
    }
    frames.push(Keyframe::from(&motion.to));
    frames
}

pub fn query(target: &Target) -> Option<Element> {
    web_sys::window()?
        .document()?
        .query_selector(&target.selector())
        .ok()
        .flatten()
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn rect(element: &Element) -> Rect {
    let bounds = element.get_bounding_client_rect();
    Rect {
        top: bounds.top(),
        height: bounds.height(),
    }
}

/// id で引いた要素のビューポート上端からの位置
pub fn section_top(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(rect(&element).top)
}

/// インラインスタイルに姿勢を書き込む
pub fn apply_pose(element: &Element, pose: &Pose) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    let _ = style.set_property("opacity", &pose.opacity.to_string());
    let _ = style.set_property("transform", &pose.transform());
}

/// 1トラックを再生。対象要素が無ければ None
pub fn animate(track: &Track) -> Option<Animation> {
    let element = query(&track.target)?;
    let frames = serde_wasm_bindgen::to_value(&keyframes(&track.motion)).ok()?;

    let options = KeyframeAnimationOptions::new();
    options.set_duration(&JsValue::from_f64(f64::from(track.duration_ms)));
    options.set_delay(f64::from(track.delay_ms));
    options.set_easing(track.motion.easing.css());
    // 遅延中も始点を保持する（スタッガー中のちらつき防止）
    options.set_fill(FillMode::Both);

    match element.animate_with_keyframe_animation_options(Some(frames.unchecked_ref::<Object>()), &options) {
        Ok(animation) => Some(animation),
        Err(err) => {
            tracing::warn!(fx = %track.target.key(), error = ?err, "animate failed");
            None
        }
    }
}

/// 現在の見た目をインラインスタイルに確定させてからアニメーションを外す
pub fn settle(animation: &Animation) {
    let _ = animation.commit_styles();
    animation.cancel();
}

/// Scrub 連動の現在値を反映
pub fn apply_scrub(target: &Target, trigger: &Target, start: &TriggerPoint, end: &TriggerPoint, motion: &Motion) {
    let (Some(element), Some(trigger)) = (query(target), query(trigger)) else {
        return;
    };
    let progress = scrub_progress(&rect(&trigger), viewport_height(), start, end);
    let from = motion.from.unwrap_or(Pose::IDENTITY);
    apply_pose(&element, &from.lerp(&motion.to, progress));
}

/// Trigger 連動の判定
pub fn crossed(trigger: &Target, start: &TriggerPoint) -> bool {
    query(trigger)
        .map(|element| start.crossed(&rect(&element), viewport_height()))
        .unwrap_or(false)
}

/// 背景スクロールの固定・解除
pub fn set_scroll_frozen(frozen: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if frozen {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        tracing::warn!(error = ?err, frozen, "failed to toggle body overflow");
    }
}

/// 次の描画フレームまで待つ
pub async fn next_frame() {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(&resolve);
        }
    });
    let _ = JsFuture::from(promise).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use codestore::motion::Easing;

    #[test]
    fn test_keyframes_without_from_has_only_end() {
        let frames = keyframes(&Motion::to(Pose::faded(15.0, 0.98), Easing::PowerIn));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].opacity, 0.0);
        assert_eq!(frames[0].transform, "translateY(15px) scale(0.98) scaleY(1)");
    }

    #[test]
    fn test_keyframes_with_from_starts_there() {
        let motion = Motion::from_to(Pose::faded(30.0, 0.95), Pose::IDENTITY, Easing::Power3Out);
        let frames = keyframes(&motion);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].opacity, 0.0);
        assert_eq!(frames[1], Keyframe::from(&Pose::IDENTITY));
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_fx(key: &str) -> Element {
        let document = web_sys::window().and_then(|w| w.document()).expect("document");
        let element = document.create_element("div").expect("create div");
        element.set_attribute("data-fx", key).expect("set data-fx");
        document.body().expect("body").append_child(&element).expect("append");
        element
    }

    #[wasm_bindgen_test]
    fn wasm_query_missing_target_is_none() {
        assert!(query(&Target::Card("NOPE-99".into())).is_none());
    }

    #[wasm_bindgen_test]
    fn wasm_apply_pose_writes_inline_style() {
        let element = mount_fx("card:POSE-01");
        let found = query(&Target::Card("POSE-01".into())).expect("card is in the document");
        apply_pose(&found, &Pose::faded(15.0, 0.98));

        let style = element.dyn_ref::<HtmlElement>().expect("html element").style();
        assert_eq!(style.get_property_value("opacity").expect("opacity"), "0");
        element.remove();
    }

    #[wasm_bindgen_test]
    fn wasm_scroll_freeze_toggles_body_overflow() {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()).expect("body");
        set_scroll_frozen(true);
        assert_eq!(body.style().get_property_value("overflow").expect("overflow"), "hidden");
        set_scroll_frozen(false);
        assert_eq!(body.style().get_property_value("overflow").expect("overflow"), "");
    }

    #[wasm_bindgen_test]
    async fn wasm_animation_settles_on_final_pose() {
        let element = mount_fx("section:settle");
        let mut timeline = codestore::Timeline::new();
        timeline.push(
            Target::Section("settle".into()),
            Motion::from_to(Pose::faded(40.0, 1.0), Pose::IDENTITY, codestore::motion::Easing::Linear),
            0,
            10,
        );

        let animation = animate(&timeline.tracks[0]).expect("animation starts");
        let finished = animation.finished().expect("finished promise");
        JsFuture::from(finished).await.expect("animation completes");
        settle(&animation);

        let style = element.dyn_ref::<HtmlElement>().expect("html element").style();
        assert_eq!(style.get_property_value("opacity").expect("opacity"), "1");
        element.remove();
    }
}
