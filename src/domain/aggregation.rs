//! Aggregation - Totals per Record Type and Year
//!
//! Pure functions over borrowed records. Nothing here allocates state or
//! suspends, so the same inputs always give the same totals.

use serde::{Deserialize, Serialize};

use super::filter::RecordType;
use super::geography::{GeoEntity, GeoId};
use super::statistic::{StatisticRecord, Year};

/// Count a single record contributes under `record_type`
fn record_value(record: &StatisticRecord, record_type: RecordType) -> u64 {
    match record_type {
        RecordType::Births => record.births(),
        RecordType::Deaths => record.deaths(),
        RecordType::Marriages => record.marriages(),
        RecordType::All => record.births() + record.deaths() + record.marriages(),
        RecordType::Unrecognized => 0,
    }
}

/// Sum the counts selected by `record_type`
///
/// When `year` is given only records of that year count; otherwise the caller
/// has already scoped the records. Empty input sums to zero.
pub fn compute_total(
    records: &[StatisticRecord],
    record_type: RecordType,
    year: Option<Year>,
) -> u64 {
    records
        .iter()
        .filter(|r| year.is_none_or(|y| r.year == y))
        .map(|r| record_value(r, record_type))
        .sum()
}

/// Same as [`compute_total`], restricted to the records of one entity
///
/// Used for the municipality view, where a single response holds the records
/// of every municipality in the state.
pub fn total_for_entity(
    records: &[StatisticRecord],
    entity_id: GeoId,
    record_type: RecordType,
    year: Option<Year>,
) -> u64 {
    records
        .iter()
        .filter(|r| r.geo_id == Some(entity_id))
        .filter(|r| year.is_none_or(|y| r.year == y))
        .map(|r| record_value(r, record_type))
        .sum()
}

/// One row of the results table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTotal {
    pub id: GeoId,
    pub name: String,
    pub total: u64,
}

impl EntityTotal {
    pub fn new(entity: &GeoEntity, total: u64) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            total,
        }
    }
}

/// Total shown in the results header
pub fn grand_total(rows: &[EntityTotal]) -> u64 {
    rows.iter().map(|r| r.total).sum()
}
