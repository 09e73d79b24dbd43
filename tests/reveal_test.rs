//! スクロール・リビールテスト

mod support;

use codestore::effects::{ScrollBinding, Target};
use codestore::reveal::{default_sections, RevealBinder};
use support::{init_tracing, RecordingHost};

fn binding_for(host: &RecordingHost, section: &str) -> codestore::BindingId {
    host.bindings
        .iter()
        .find(|(_, (target, _))| *target == Target::Section(section.to_string()))
        .map(|(id, _)| *id)
        .expect("section must be bound")
}

/// 全セクションにトリガーが張られる
#[test]
fn test_attach_binds_every_section() {
    init_tracing();
    let mut binder = RevealBinder::new(default_sections());
    let mut host = RecordingHost::new();
    binder.attach(&mut host);

    assert_eq!(host.bindings.len(), 4);
    assert!(host
        .bindings
        .values()
        .all(|(_, binding)| matches!(binding, ScrollBinding::Trigger { .. })));
}

/// 1回目のトリガーで再生し、以後は発火しない
#[test]
fn test_reveal_fires_once() {
    init_tracing();
    let mut binder = RevealBinder::new(default_sections());
    let mut host = RecordingHost::new();
    binder.attach(&mut host);

    let about = binding_for(&host, "about");
    binder.on_trigger(about, &mut host);
    assert!(binder.is_revealed("about"));
    assert_eq!(host.played.len(), 1);
    assert_eq!(host.played[0].tracks[0].target, Target::Section("about".into()));
    assert!(!host.bindings.contains_key(&about));

    binder.on_trigger(about, &mut host);
    assert_eq!(host.played.len(), 1);

    for ticket in host.finish_all() {
        binder.on_effect_finished(ticket);
    }

    // 付け直しても発火済みのセクションには張らない
    binder.detach(&mut host);
    assert!(host.bindings.is_empty());
    binder.attach(&mut host);
    assert_eq!(host.bindings.len(), 3);
    assert_eq!(binder.active_bindings(), 3);
}

/// detach で再生中のアニメーションも止まる
#[test]
fn test_detach_cancels_running_reveal() {
    init_tracing();
    let mut binder = RevealBinder::new(default_sections());
    let mut host = RecordingHost::new();
    binder.attach(&mut host);

    let footer = binding_for(&host, "footer");
    binder.on_trigger(footer, &mut host);
    assert_eq!(host.playing.len(), 1);

    binder.detach(&mut host);
    assert!(host.playing.is_empty());
    assert!(host.bindings.is_empty());
    assert_eq!(binder.active_bindings(), 0);
}

/// 再生中に attach し直しても、完了通知で再生中の記録が消える
#[test]
fn test_reattach_keeps_running_reveal_completable() {
    init_tracing();
    let mut binder = RevealBinder::new(default_sections());
    let mut host = RecordingHost::new();
    binder.attach(&mut host);

    let about = binding_for(&host, "about");
    binder.on_trigger(about, &mut host);
    assert_eq!(binder.active_effects(), 1);

    binder.attach(&mut host);
    assert_eq!(binder.active_bindings(), 3);

    for ticket in host.finish_all() {
        binder.on_effect_finished(ticket);
    }
    assert_eq!(binder.active_effects(), 0);
    assert!(host.playing.is_empty());
}
