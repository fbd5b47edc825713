//! UI Components - business-specific widgets bound to `crate::app::Message`

pub mod name_entry;
pub mod name_list;
pub mod spin_panel;
pub mod winner_banner;
