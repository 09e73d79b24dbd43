//! ナビゲーション（アンカー移動・スクロールスパイ）

/// ナビ項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "work", label: "Products" },
    NavItem { id: "about", label: "About" },
];

/// アクティブ判定の基準線（ビューポート上端から）
pub const ACTIVE_THRESHOLD_PX: f64 = 150.0;

const SCROLLED_PX: f64 = 50.0;
const COLLAPSE_PX: f64 = 100.0;

/// 文書順のセクション上端から、基準線を越えた最後のセクションを返す
pub fn active_section<'a>(tops: &[(&'a str, f64)], threshold: f64) -> Option<&'a str> {
    tops.iter()
        .rev()
        .find(|(_, top)| *top <= threshold)
        .map(|(id, _)| *id)
}

/// ナビバーをコンパクト表示にするか
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_PX
}

/// 下方向スクロールでモバイルメニューを閉じるか
pub fn should_collapse_menu(prev_y: f64, scroll_y: f64) -> bool {
    scroll_y > prev_y && scroll_y > COLLAPSE_PX
}

pub fn anchor(id: &str) -> String {
    format!("#{}", id)
}
