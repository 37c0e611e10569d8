//! State - Dashboard Session State
//!
//! Plain data plus a pure reducer. The GUI wraps a [`DashboardState`] in a
//! GPUI entity; the headless session drives it directly.

pub mod dashboard_state;
pub mod i18n_state;
pub mod notice_state;

pub use dashboard_state::*;
pub use i18n_state::*;
pub use notice_state::*;
