//! UIコンポーネント

pub mod about_section;
pub mod footer;
pub mod gallery_modal;
pub mod navbar;
pub mod project_card;
pub mod work_section;
