//! Layout Components
//!
//! Header and notice panel around the dashboard page.

pub mod header;
pub mod notice_panel;
