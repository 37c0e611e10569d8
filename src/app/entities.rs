//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access. The
//! dashboard changes on every fetch completion; the locale almost never.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::filter::FilterState;
use crate::features::dashboard::controller::DashboardController;
use crate::i18n::Locale;
use crate::services::ServiceHub;
use crate::state::I18nState;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Dashboard session (filters, scope, loaded lists, notices)
    pub dashboard: Entity<DashboardController>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    pub fn init(hub: ServiceHub, filters: FilterState, cx: &mut App) -> Self {
        Self {
            dashboard: cx.new(|_| DashboardController::new(hub, filters)),
            i18n: cx.new(|_| I18nState::new(Locale::from_system())),
        }
    }
}
