//! ギャラリーモーダル
//!
//! 表示状態は `GalleryController` が持ち、ここは描画と閉じる操作の受付のみ。
//! 背景とパネルは透明で描画し、開くアニメーションで表示する。

use crate::stage;
use codestore::effects::Target;
use codestore::gallery::{frame_alt, frame_label, CloseReason, GalleryState};
use leptos::prelude::*;

#[component]
pub fn GalleryModal(gallery: RwSignal<GalleryState>) -> impl IntoView {
    move || {
        let state = gallery.get();
        let project = state.selected.filter(|_| state.is_open)?;
        let total = project.gallery.len();
        let title = project.heading().to_string();

        let frames = project
            .gallery
            .iter()
            .enumerate()
            .map(|(index, src)| {
                view! {
                    <figure class="gallery-frame">
                        <img src=src.clone() alt=frame_alt(&project, index) loading="lazy" />
                        <figcaption class="frame-counter">{frame_label(index, total)}</figcaption>
                    </figure>
                }
            })
            .collect_view();

        Some(view! {
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                data-fx=Target::ModalBackdrop.key()
                style="opacity: 0"
                on:click=move |_| stage::close_gallery(CloseReason::Backdrop)
            >
                <div
                    class="modal-panel"
                    data-fx=Target::ModalPanel.key()
                    style="opacity: 0"
                    on:click=|ev| ev.stop_propagation()
                >
                    <header class="modal-header">
                        <h3 class="modal-title">{title}</h3>
                        <span class="image-count">{format!("{} images", total)}</span>
                        <button
                            class="modal-close"
                            aria-label="Close gallery"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                stage::close_gallery(CloseReason::Button);
                            }
                        >
                            "✕"
                        </button>
                    </header>

                    <div class="modal-body">{frames}</div>

                    <footer class="modal-footer">
                        <span class="hint">"Press ESC or click outside to close"</span>
                    </footer>
                </div>
            </div>
        })
    }
}
