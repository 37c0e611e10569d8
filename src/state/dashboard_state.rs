//! DashboardState - Filters, Selection and Loaded Lists
//!
//! The whole dashboard session as one snapshot. [`DashboardState::reduce`]
//! is the only way to move between snapshots: it takes an [`AppEvent`] and
//! returns the next snapshot plus the [`Effect`]s to run. Nothing in here
//! performs I/O.
//!
//! ```text
//!                 SelectState(known id)
//!   National  ───────────────────────────▶  State(id)
//!      ▲                                        │
//!      └────────────────── GoBack ──────────────┘
//!
//!   ChangeFilters / Refresh: any scope, scope unchanged
//! ```

use ahash::AHashMap;

use crate::domain::aggregation::{EntityTotal, compute_total, grand_total, total_for_entity};
use crate::domain::filter::FilterState;
use crate::domain::geography::{GeoEntity, GeoId, find_by_id};
use crate::domain::statistic::StatisticRecord;
use crate::error::Error;
use crate::eventing::app_event::{AppEvent, MunicipalitiesPayload, StatesPayload};
use crate::eventing::effect::{Effect, MunicipalitiesKey, StatesKey};
use crate::state::notice_state::{NoticeKind, NoticeState, Resource};

/// Which entity list is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// The state list
    #[default]
    National,
    /// The municipalities of one state
    State(GeoId),
}

/// In-flight flags per list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loading {
    pub regions: bool,
    pub states: bool,
    pub municipalities: bool,
}

impl Loading {
    pub fn any(&self) -> bool {
        self.regions || self.states || self.municipalities
    }
}

/// Result of applying one event
#[derive(Debug)]
pub struct Transition {
    pub state: DashboardState,
    pub effects: Vec<Effect>,
}

/// Snapshot of the dashboard session
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    filters: FilterState,
    scope: Scope,
    regions: Vec<GeoEntity>,
    states: Vec<GeoEntity>,
    /// Statistics per state, valid for `states_key` only
    state_stats: AHashMap<GeoId, Vec<StatisticRecord>>,
    municipalities: Vec<GeoEntity>,
    /// Statistics of every municipality in the selected state, valid for
    /// `municipalities_key` only
    municipality_stats: Vec<StatisticRecord>,
    /// Key of the latest state-list load; completions with another key are stale
    states_key: Option<StatesKey>,
    /// Key of the latest municipality load
    municipalities_key: Option<MunicipalitiesKey>,
    loading: Loading,
    notices: NoticeState,
}

impl DashboardState {
    /// Fresh session with the given starting filters
    pub fn new(filters: FilterState) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    // ==================== Reducer ====================

    /// Apply one event, producing the next snapshot and the effects to run
    pub fn reduce(&self, event: AppEvent) -> Transition {
        let mut next = self.clone();
        let effects = next.apply(event);
        Transition {
            state: next,
            effects,
        }
    }

    fn apply(&mut self, event: AppEvent) -> Vec<Effect> {
        tracing::trace!("Applying {}", event.name());
        match event {
            AppEvent::Init => self.on_init(),
            AppEvent::SelectState(id) => self.on_select_state(id),
            AppEvent::GoBack => self.on_go_back(),
            AppEvent::ChangeFilters(filters) => self.on_change_filters(filters),
            AppEvent::Refresh => self.on_refresh(),
            AppEvent::DismissNotice(id) => {
                self.notices.dismiss(id);
                Vec::new()
            }
            AppEvent::ClearNotices => {
                self.notices.clear();
                Vec::new()
            }
            AppEvent::RegionsLoaded(result) => self.on_regions_loaded(result),
            AppEvent::StatesLoaded { key, result } => self.on_states_loaded(key, result),
            AppEvent::MunicipalitiesLoaded { key, result } => {
                self.on_municipalities_loaded(key, result)
            }
        }
    }

    fn on_init(&mut self) -> Vec<Effect> {
        self.loading.regions = true;
        vec![Effect::FetchRegions, self.begin_states_load()]
    }

    fn on_select_state(&mut self, id: GeoId) -> Vec<Effect> {
        if let Scope::State(current) = self.scope {
            tracing::debug!("Ignoring selection of {id}: already viewing state {current}");
            self.notices.push(NoticeKind::SelectionRejected);
            return Vec::new();
        }

        let Some(state) = find_by_id(&self.states, id) else {
            let err = Error::NotFoundSelection { id };
            tracing::warn!("{err}");
            self.notices.push(NoticeKind::UnknownSelection { id });
            return Vec::new();
        };

        let name = state.name.clone();
        tracing::info!("Drilling into state {id} ({name})");
        self.scope = Scope::State(id);
        self.municipalities.clear();
        self.notices.push(NoticeKind::StateSelected { name });
        vec![self.begin_municipalities_load(id)]
    }

    fn on_go_back(&mut self) -> Vec<Effect> {
        if self.scope == Scope::National {
            return Vec::new();
        }
        tracing::info!("Back to the national view");
        self.scope = Scope::National;
        self.municipalities.clear();
        self.municipality_stats.clear();
        self.municipalities_key = None;
        self.loading.municipalities = false;
        Vec::new()
    }

    fn on_change_filters(&mut self, filters: FilterState) -> Vec<Effect> {
        let old = std::mem::replace(&mut self.filters, filters);
        let year_changed = old.year != self.filters.year;
        let region_changed = old.region != self.filters.region;

        // The old state pick may lie outside the new region
        if region_changed && old.state == self.filters.state && self.filters.state.is_some() {
            tracing::debug!("Region changed, dropping state filter {:?}", self.filters.state);
            self.filters.state = None;
        }

        let mut effects = Vec::new();
        if year_changed || region_changed {
            effects.push(self.begin_states_load());
        }
        if year_changed {
            if let Scope::State(id) = self.scope {
                effects.push(self.begin_municipalities_load(id));
            }
        }

        tracing::debug!(
            "Filters changed (year: {year_changed}, region: {region_changed}), {} fetch(es)",
            effects.len()
        );
        effects
    }

    fn on_refresh(&mut self) -> Vec<Effect> {
        match self.scope {
            Scope::National => vec![self.begin_states_load()],
            Scope::State(id) => vec![self.begin_municipalities_load(id)],
        }
    }

    fn on_regions_loaded(&mut self, result: crate::error::Result<Vec<GeoEntity>>) -> Vec<Effect> {
        self.loading.regions = false;
        match result {
            Ok(regions) => {
                tracing::debug!("Loaded {} regions", regions.len());
                self.regions = regions;
            }
            Err(e) => self.load_failed(Resource::Regions, &e),
        }
        Vec::new()
    }

    fn on_states_loaded(
        &mut self,
        key: StatesKey,
        result: crate::error::Result<StatesPayload>,
    ) -> Vec<Effect> {
        if self.states_key != Some(key) {
            tracing::debug!("Discarding stale state list for {key:?}");
            return Vec::new();
        }

        self.loading.states = false;
        match result {
            Ok(payload) => {
                tracing::debug!(
                    "Loaded {} states for {key:?} ({} with statistics)",
                    payload.states.len(),
                    payload.stats.values().filter(|s| !s.is_empty()).count()
                );
                self.states = payload.states;
                self.state_stats = payload.stats;
            }
            Err(e) => self.load_failed(Resource::States, &e),
        }
        Vec::new()
    }

    fn on_municipalities_loaded(
        &mut self,
        key: MunicipalitiesKey,
        result: crate::error::Result<MunicipalitiesPayload>,
    ) -> Vec<Effect> {
        if self.scope != Scope::State(key.state) || self.municipalities_key != Some(key) {
            tracing::debug!("Discarding stale municipality list for {key:?}");
            return Vec::new();
        }

        self.loading.municipalities = false;
        match result {
            Ok(payload) => {
                tracing::debug!(
                    "Loaded {} municipalities and {} records for {key:?}",
                    payload.municipalities.len(),
                    payload.stats.len()
                );
                self.municipalities = payload.municipalities;
                self.municipality_stats = payload.stats;
            }
            Err(e) => self.load_failed(Resource::Municipalities, &e),
        }
        Vec::new()
    }

    /// Start a state-list load under the current filters
    ///
    /// Statistics of a different key are dropped right away so totals never
    /// mix periods or regions.
    fn begin_states_load(&mut self) -> Effect {
        let key = StatesKey::for_filters(&self.filters);
        if self.states_key != Some(key) {
            self.state_stats.clear();
        }
        self.states_key = Some(key);
        self.loading.states = true;
        Effect::FetchStates(key)
    }

    fn begin_municipalities_load(&mut self, state: GeoId) -> Effect {
        let key = MunicipalitiesKey {
            state,
            year: self.filters.year,
        };
        if self.municipalities_key != Some(key) {
            self.municipality_stats.clear();
        }
        self.municipalities_key = Some(key);
        self.loading.municipalities = true;
        Effect::FetchMunicipalities(key)
    }

    fn load_failed(&mut self, resource: Resource, err: &Error) {
        tracing::error!("Failed to load {resource:?}: {err}");
        self.notices.push(NoticeKind::LoadFailed {
            resource,
            detail: err.to_string(),
        });
    }

    // ==================== Selectors ====================

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn regions(&self) -> &[GeoEntity] {
        &self.regions
    }

    pub fn states(&self) -> &[GeoEntity] {
        &self.states
    }

    pub fn municipalities(&self) -> &[GeoEntity] {
        &self.municipalities
    }

    pub fn municipality_stats(&self) -> &[StatisticRecord] {
        &self.municipality_stats
    }

    /// Statistics held for one state (empty when unknown or failed)
    pub fn state_stats(&self, id: GeoId) -> &[StatisticRecord] {
        self.state_stats.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn states_key(&self) -> Option<StatesKey> {
        self.states_key
    }

    pub fn municipalities_key(&self) -> Option<MunicipalitiesKey> {
        self.municipalities_key
    }

    pub fn loading(&self) -> Loading {
        self.loading
    }

    pub fn notices(&self) -> &NoticeState {
        &self.notices
    }

    /// The state being viewed, if drilled in
    pub fn selected_state(&self) -> Option<&GeoEntity> {
        match self.scope {
            Scope::National => None,
            Scope::State(id) => find_by_id(&self.states, id),
        }
    }

    /// Rows of the results table for the current scope and filters
    pub fn rows(&self) -> Vec<EntityTotal> {
        let record_type = self.filters.record_type;
        let year = Some(self.filters.year);

        match self.scope {
            Scope::National => self
                .states
                .iter()
                .filter(|s| self.filters.state.is_none_or(|id| s.id == id))
                .map(|s| {
                    let total = compute_total(self.state_stats(s.id), record_type, year);
                    EntityTotal::new(s, total)
                })
                .collect(),
            Scope::State(_) => self
                .municipalities
                .iter()
                .map(|m| {
                    let total =
                        total_for_entity(&self.municipality_stats, m.id, record_type, year);
                    EntityTotal::new(m, total)
                })
                .collect(),
        }
    }

    /// Sum of all visible rows
    pub fn total(&self) -> u64 {
        grand_total(&self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::RecordType;
    use crate::state::notice_state::NoticeLevel;

    fn states() -> Vec<GeoEntity> {
        vec![GeoEntity::new(29, "Bahia"), GeoEntity::new(35, "São Paulo")]
    }

    fn states_payload(year: i32) -> StatesPayload {
        let mut stats = AHashMap::new();
        stats.insert(29, vec![StatisticRecord::new(year, 10, 2, 1).with_geo_id(29)]);
        stats.insert(35, vec![StatisticRecord::new(year, 5, 1, 0).with_geo_id(35)]);
        StatesPayload {
            states: states(),
            stats,
        }
    }

    /// Init and complete both initial loads for the default filters
    fn loaded() -> DashboardState {
        let t = DashboardState::default().reduce(AppEvent::Init);
        let key = t.state.states_key().expect("key");
        t.state
            .reduce(AppEvent::RegionsLoaded(Ok(vec![GeoEntity::new(2, "Nordeste")])))
            .state
            .reduce(AppEvent::StatesLoaded {
                key,
                result: Ok(states_payload(key.year)),
            })
            .state
    }

    #[test]
    fn test_init_fetches_regions_and_states() {
        let t = DashboardState::default().reduce(AppEvent::Init);
        assert_eq!(
            t.effects,
            vec![
                Effect::FetchRegions,
                Effect::FetchStates(StatesKey {
                    region: None,
                    year: 2025
                })
            ]
        );
        assert!(t.state.loading().regions);
        assert!(t.state.loading().states);
        assert_eq!(t.state.scope(), Scope::National);
    }

    #[test]
    fn test_national_rows_and_total() {
        let state = loaded();
        let rows = state.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total, 13);
        assert_eq!(rows[1].total, 6);
        assert_eq!(state.total(), 19);
        assert!(!state.loading().any());
    }

    #[test]
    fn test_select_known_state_fetches_municipalities_once() {
        let t = loaded().reduce(AppEvent::SelectState(35));
        assert_eq!(t.state.scope(), Scope::State(35));
        assert_eq!(
            t.effects,
            vec![Effect::FetchMunicipalities(MunicipalitiesKey {
                state: 35,
                year: 2025
            })]
        );
        assert_eq!(t.state.selected_state().map(|s| s.name.as_str()), Some("São Paulo"));
        let notice = t.state.notices().last().expect("notice");
        assert_eq!(notice.level(), NoticeLevel::Success);
    }

    #[test]
    fn test_select_unknown_state_is_rejected_with_notice() {
        let before = loaded();
        let t = before.reduce(AppEvent::SelectState(99));
        assert!(t.effects.is_empty());
        assert_eq!(t.state.scope(), Scope::National);
        assert_eq!(
            t.state.notices().last().map(|n| n.kind.clone()),
            Some(NoticeKind::UnknownSelection { id: 99 })
        );
    }

    #[test]
    fn test_select_while_in_state_is_rejected() {
        let in_state = loaded().reduce(AppEvent::SelectState(29)).state;
        let t = in_state.reduce(AppEvent::SelectState(35));
        assert!(t.effects.is_empty());
        assert_eq!(t.state.scope(), Scope::State(29));
    }

    #[test]
    fn test_go_back_clears_municipality_data() {
        let t = loaded().reduce(AppEvent::SelectState(29));
        let key = t.state.municipalities_key().expect("key");
        let with_munis = t
            .state
            .reduce(AppEvent::MunicipalitiesLoaded {
                key,
                result: Ok(MunicipalitiesPayload {
                    municipalities: vec![GeoEntity::new(2927408, "Salvador").with_parent(29)],
                    stats: vec![StatisticRecord::new(2025, 3, 1, 1).with_geo_id(2927408)],
                }),
            })
            .state;
        assert_eq!(with_munis.total(), 5);

        let back = with_munis.reduce(AppEvent::GoBack);
        assert!(back.effects.is_empty());
        assert_eq!(back.state.scope(), Scope::National);
        assert!(back.state.municipalities().is_empty());
        assert!(back.state.municipality_stats().is_empty());
        assert_eq!(back.state.municipalities_key(), None);
        assert_eq!(back.state.total(), 19);
    }

    #[test]
    fn test_go_back_from_national_is_noop() {
        let state = loaded();
        let t = state.reduce(AppEvent::GoBack);
        assert!(t.effects.is_empty());
        assert_eq!(t.state.scope(), Scope::National);
    }

    #[test]
    fn test_record_type_change_fetches_nothing() {
        let state = loaded();
        let filters = state.filters().clone().with_record_type(RecordType::Births);
        let t = state.reduce(AppEvent::ChangeFilters(filters));
        assert!(t.effects.is_empty());
        assert_eq!(t.state.total(), 15);
    }

    #[test]
    fn test_region_change_refetches_states_only() {
        let in_state = loaded().reduce(AppEvent::SelectState(29)).state;
        let filters = in_state.filters().clone().with_region(Some(2));
        let t = in_state.reduce(AppEvent::ChangeFilters(filters));
        assert_eq!(
            t.effects,
            vec![Effect::FetchStates(StatesKey {
                region: Some(2),
                year: 2025
            })]
        );
        assert_eq!(t.state.scope(), Scope::State(29));
    }

    #[test]
    fn test_year_change_in_state_refetches_both() {
        let in_state = loaded().reduce(AppEvent::SelectState(29)).state;
        let filters = in_state.filters().clone().with_year(2024);
        let t = in_state.reduce(AppEvent::ChangeFilters(filters));
        assert_eq!(
            t.effects,
            vec![
                Effect::FetchStates(StatesKey {
                    region: None,
                    year: 2024
                }),
                Effect::FetchMunicipalities(MunicipalitiesKey {
                    state: 29,
                    year: 2024
                }),
            ]
        );
    }

    #[test]
    fn test_year_change_discards_old_statistics_immediately() {
        let state = loaded();
        let filters = state.filters().clone().with_year(2024);
        let t = state.reduce(AppEvent::ChangeFilters(filters));
        // The state list stays, its 2025 statistics do not
        assert_eq!(t.state.states().len(), 2);
        assert!(t.state.state_stats(29).is_empty());
        assert_eq!(t.state.total(), 0);
    }

    #[test]
    fn test_late_response_for_previous_year_is_ignored() {
        let start = DashboardState::default();
        let to_2024 = start
            .reduce(AppEvent::ChangeFilters(FilterState::default().with_year(2024)))
            .state;
        let key_2024 = to_2024.states_key().expect("key");

        let to_2025 = to_2024
            .reduce(AppEvent::ChangeFilters(FilterState::default().with_year(2025)))
            .state;
        let key_2025 = to_2025.states_key().expect("key");
        assert_ne!(key_2024, key_2025);

        let after_2025 = to_2025
            .reduce(AppEvent::StatesLoaded {
                key: key_2025,
                result: Ok(states_payload(2025)),
            })
            .state;
        assert_eq!(after_2025.total(), 19);

        let mut late = states_payload(2024);
        late.stats
            .insert(29, vec![StatisticRecord::new(2024, 1000, 0, 0).with_geo_id(29)]);
        let after_late = after_2025
            .reduce(AppEvent::StatesLoaded {
                key: key_2024,
                result: Ok(late),
            })
            .state;

        assert_eq!(after_late.total(), 19);
        assert_eq!(after_late.state_stats(29)[0].year, 2025);
    }

    #[test]
    fn test_municipalities_after_go_back_are_ignored() {
        let t = loaded().reduce(AppEvent::SelectState(29));
        let key = t.state.municipalities_key().expect("key");
        let back = t.state.reduce(AppEvent::GoBack).state;
        let late = back
            .reduce(AppEvent::MunicipalitiesLoaded {
                key,
                result: Ok(MunicipalitiesPayload {
                    municipalities: vec![GeoEntity::new(1, "X")],
                    stats: Vec::new(),
                }),
            })
            .state;
        assert!(late.municipalities().is_empty());
        assert_eq!(late.scope(), Scope::National);
    }

    #[test]
    fn test_municipalities_for_previous_year_are_ignored() {
        let t = loaded().reduce(AppEvent::SelectState(29));
        let key_2025 = t.state.municipalities_key().expect("key");

        let filters = t.state.filters().clone().with_year(2024);
        let in_2024 = t.state.reduce(AppEvent::ChangeFilters(filters)).state;
        assert_ne!(in_2024.municipalities_key(), Some(key_2025));

        let late = in_2024
            .reduce(AppEvent::MunicipalitiesLoaded {
                key: key_2025,
                result: Ok(MunicipalitiesPayload {
                    municipalities: vec![GeoEntity::new(2927408, "Salvador").with_parent(29)],
                    stats: vec![StatisticRecord::new(2025, 3, 1, 1).with_geo_id(2927408)],
                }),
            })
            .state;
        assert_eq!(late.scope(), Scope::State(29));
        assert!(late.municipalities().is_empty());
        assert!(late.municipality_stats().is_empty());
        assert!(late.loading().municipalities);
    }

    #[test]
    fn test_state_list_for_previous_region_is_ignored() {
        let state = loaded();
        let all_regions = state.reduce(AppEvent::Refresh).state;
        let key_all = all_regions.states_key().expect("key");

        let filters = all_regions.filters().clone().with_region(Some(2));
        let northeast = all_regions.reduce(AppEvent::ChangeFilters(filters)).state;
        let key_northeast = northeast.states_key().expect("key");
        assert_eq!(key_northeast.region, Some(2));

        let late = northeast
            .reduce(AppEvent::StatesLoaded {
                key: key_all,
                result: Ok(states_payload(2025)),
            })
            .state;
        assert_eq!(late.states_key(), Some(key_northeast));
        assert!(late.loading().states);
        assert!(late.state_stats(35).is_empty());
        assert_eq!(late.total(), 0);
    }

    #[test]
    fn test_region_change_drops_state_filter() {
        let state = loaded();
        let with_uf = state
            .reduce(AppEvent::ChangeFilters(
                state.filters().clone().with_state(Some(35)),
            ))
            .state;
        let filters = with_uf.filters().clone().with_region(Some(2));
        let t = with_uf.reduce(AppEvent::ChangeFilters(filters));
        assert_eq!(t.state.filters().state, None);
        assert_eq!(t.state.filters().region, Some(2));
    }

    #[test]
    fn test_failed_state_list_keeps_previous_list() {
        let state = loaded();
        let t = state.reduce(AppEvent::Refresh);
        let key = t.state.states_key().expect("key");
        let failed = t
            .state
            .reduce(AppEvent::StatesLoaded {
                key,
                result: Err(Error::Status {
                    endpoint: "/ufs".to_string(),
                    status: 500,
                }),
            })
            .state;
        assert_eq!(failed.states().len(), 2);
        assert!(!failed.loading().states);
        assert_eq!(
            failed.notices().last().map(|n| n.level()),
            Some(NoticeLevel::Error)
        );
    }

    #[test]
    fn test_state_filter_restricts_national_rows() {
        let state = loaded();
        let filters = state.filters().clone().with_state(Some(35));
        let t = state.reduce(AppEvent::ChangeFilters(filters));
        assert!(t.effects.is_empty());
        let rows = t.state.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 35);
    }

    #[test]
    fn test_refresh_in_state_reuses_key() {
        let in_state = loaded().reduce(AppEvent::SelectState(35)).state;
        let t = in_state.reduce(AppEvent::Refresh);
        assert_eq!(
            t.effects,
            vec![Effect::FetchMunicipalities(MunicipalitiesKey {
                state: 35,
                year: 2025
            })]
        );
    }

    #[test]
    fn test_regions_failure_is_not_fatal() {
        let t = DashboardState::default().reduce(AppEvent::Init);
        let state = t
            .state
            .reduce(AppEvent::RegionsLoaded(Err(Error::Status {
                endpoint: "/regioes".to_string(),
                status: 502,
            })))
            .state;
        assert!(state.regions().is_empty());
        assert!(!state.loading().regions);
        assert_eq!(state.notices().len(), 1);
    }
}
