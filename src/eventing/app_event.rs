//! AppEvent - Application Event Enum
//!
//! Everything that can change the dashboard: user intents from the UI and
//! fetch completions from the service layer.

use ahash::AHashMap;

use crate::domain::filter::FilterState;
use crate::domain::geography::{GeoEntity, GeoId};
use crate::domain::statistic::StatisticRecord;
use crate::error::Result;
use crate::eventing::effect::{MunicipalitiesKey, StatesKey};

/// State list plus the statistics of every state in it
#[derive(Debug, Clone, Default)]
pub struct StatesPayload {
    pub states: Vec<GeoEntity>,
    /// Records per state id. A state whose statistics failed maps to an empty list.
    pub stats: AHashMap<GeoId, Vec<StatisticRecord>>,
}

/// Municipalities of one state plus their statistics
#[derive(Debug, Clone, Default)]
pub struct MunicipalitiesPayload {
    pub municipalities: Vec<GeoEntity>,
    pub stats: Vec<StatisticRecord>,
}

/// Events consumed by the dashboard reducer
#[derive(Debug)]
pub enum AppEvent {
    // ==================== User intents ====================
    /// First load: regions and the national view
    Init,

    /// Drill into a state
    SelectState(GeoId),

    /// Back from a state to the national view
    GoBack,

    /// Replace the filters
    ChangeFilters(FilterState),

    /// Re-run the fetches of the current scope
    Refresh,

    /// Remove one notice
    DismissNotice(u64),

    /// Remove all notices
    ClearNotices,

    // ==================== Fetch completions ====================
    RegionsLoaded(Result<Vec<GeoEntity>>),

    StatesLoaded {
        key: StatesKey,
        result: Result<StatesPayload>,
    },

    MunicipalitiesLoaded {
        key: MunicipalitiesKey,
        result: Result<MunicipalitiesPayload>,
    },
}

impl AppEvent {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::Init => "init",
            AppEvent::SelectState(_) => "select-state",
            AppEvent::GoBack => "go-back",
            AppEvent::ChangeFilters(_) => "change-filters",
            AppEvent::Refresh => "refresh",
            AppEvent::DismissNotice(_) => "dismiss-notice",
            AppEvent::ClearNotices => "clear-notices",
            AppEvent::RegionsLoaded(_) => "regions-loaded",
            AppEvent::StatesLoaded { .. } => "states-loaded",
            AppEvent::MunicipalitiesLoaded { .. } => "municipalities-loaded",
        }
    }
}
