//! Statistic - Yearly Birth / Death / Marriage Counts

use serde::{Deserialize, Serialize};

use super::geography::GeoId;

/// Calendar year of a statistic record
pub type Year = i32;

/// One yearly count record for a geographic entity
///
/// Counts are optional on the wire; an absent or `null` count is read as zero
/// by the aggregation functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticRecord {
    /// Entity the record belongs to. Only the per-municipality endpoint sends
    /// it (`cod_municipio`); state records are stamped after the fetch.
    #[serde(rename = "cod_municipio", default, skip_serializing_if = "Option::is_none")]
    pub geo_id: Option<GeoId>,
    #[serde(rename = "ano")]
    pub year: Year,
    #[serde(rename = "total_nascimento", default)]
    pub births: Option<u64>,
    #[serde(rename = "total_morte", default)]
    pub deaths: Option<u64>,
    #[serde(rename = "total_casamento", default)]
    pub marriages: Option<u64>,
}

impl StatisticRecord {
    pub fn new(year: Year, births: u64, deaths: u64, marriages: u64) -> Self {
        Self {
            geo_id: None,
            year,
            births: Some(births),
            deaths: Some(deaths),
            marriages: Some(marriages),
        }
    }

    /// Builder: attach the owning entity
    pub fn with_geo_id(mut self, geo_id: GeoId) -> Self {
        self.geo_id = Some(geo_id);
        self
    }

    pub fn births(&self) -> u64 {
        self.births.unwrap_or(0)
    }

    pub fn deaths(&self) -> u64 {
        self.deaths.unwrap_or(0)
    }

    pub fn marriages(&self) -> u64 {
        self.marriages.unwrap_or(0)
    }
}
