//! Effect - Fetches Requested by the Dashboard Reducer
//!
//! The reducer never performs I/O. It returns effects; the service layer runs
//! them and answers with an [`AppEvent`](super::app_event::AppEvent) carrying
//! the same key, so completions for a superseded scope/year can be dropped.

use crate::domain::filter::FilterState;
use crate::domain::geography::GeoId;
use crate::domain::statistic::Year;

/// Identifies one load of the state list and its statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatesKey {
    /// `None` = all regions
    pub region: Option<GeoId>,
    pub year: Year,
}

impl StatesKey {
    pub fn for_filters(filters: &FilterState) -> Self {
        Self {
            region: filters.region,
            year: filters.year,
        }
    }
}

/// Identifies one load of a state's municipalities and their statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MunicipalitiesKey {
    pub state: GeoId,
    pub year: Year,
}

/// A fetch the service layer should perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// `GET /regioes`
    FetchRegions,
    /// `GET /ufs[?regiao_id]`, then one `GET /ufs/{id}/{ano}/estatisticas` per state
    FetchStates(StatesKey),
    /// `GET /municipios` (filtered by state locally) and
    /// `GET /ufs/{id}/{ano}/municipios/estatisticas`
    FetchMunicipalities(MunicipalitiesKey),
}
