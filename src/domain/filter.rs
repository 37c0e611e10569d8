//! Filter - Record Type, Year, Region and State Filters

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_YEAR, YEAR_SPAN};

use super::geography::GeoId;
use super::statistic::Year;

/// Which counts a total is made of
///
/// Serialized with the API's Portuguese keys. Any other key decodes to
/// [`RecordType::Unrecognized`], which aggregates to zero instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecordType {
    #[default]
    #[serde(rename = "todos")]
    All,
    #[serde(rename = "nascimentos")]
    Births,
    #[serde(rename = "obitos")]
    Deaths,
    #[serde(rename = "casamentos")]
    Marriages,
    #[serde(other, rename = "desconhecido")]
    Unrecognized,
}

impl RecordType {
    /// Parse a filter key; unknown keys are kept as `Unrecognized`
    pub fn from_key(key: &str) -> Self {
        match key {
            "todos" => RecordType::All,
            "nascimentos" => RecordType::Births,
            "obitos" => RecordType::Deaths,
            "casamentos" => RecordType::Marriages,
            _ => RecordType::Unrecognized,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            RecordType::All => "todos",
            RecordType::Births => "nascimentos",
            RecordType::Deaths => "obitos",
            RecordType::Marriages => "casamentos",
            RecordType::Unrecognized => "desconhecido",
        }
    }

    /// Translation key for the label
    pub fn label_key(&self) -> &'static str {
        match self {
            RecordType::All => "record-all",
            RecordType::Births => "record-births",
            RecordType::Deaths => "record-deaths",
            RecordType::Marriages => "record-marriages",
            RecordType::Unrecognized => "record-unknown",
        }
    }

    /// Record types offered in the filter section
    pub fn selectable() -> &'static [RecordType] {
        &[
            RecordType::All,
            RecordType::Births,
            RecordType::Deaths,
            RecordType::Marriages,
        ]
    }
}

/// The user-controlled filters
///
/// Replaced wholesale on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub record_type: RecordType,
    pub year: Year,
    /// `None` = all regions
    pub region: Option<GeoId>,
    /// `None` = all states
    pub state: Option<GeoId>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            record_type: RecordType::All,
            year: DEFAULT_YEAR,
            region: None,
            state: None,
        }
    }
}

impl FilterState {
    pub fn with_record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn with_year(mut self, year: Year) -> Self {
        self.year = year;
        self
    }

    pub fn with_region(mut self, region: Option<GeoId>) -> Self {
        self.region = region;
        self
    }

    pub fn with_state(mut self, state: Option<GeoId>) -> Self {
        self.state = state;
        self
    }
}

/// Years offered in the year chooser, newest first
pub fn available_years() -> Vec<Year> {
    (0..YEAR_SPAN).map(|i| DEFAULT_YEAR - i).collect()
}
