pub mod contact;
pub mod markdown;
pub mod navigation;
pub mod page;
pub mod project_card;
pub mod resume;
pub mod theme_toggle;
