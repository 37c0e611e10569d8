//! Effect Loader
//!
//! Runs one [`Effect`] against the API and turns the outcome into the
//! matching completion [`AppEvent`].
//!
//! ## Failure isolation
//!
//! A failed primary list (regions, states, municipalities) fails the whole
//! effect. A failed per-state statistics request only empties that state's
//! records; the other states keep theirs.

use ahash::AHashMap;
use futures::future::join_all;

use crate::domain::geography::GeoId;
use crate::domain::statistic::{StatisticRecord, Year};
use crate::error::Result;
use crate::eventing::app_event::{AppEvent, MunicipalitiesPayload, StatesPayload};
use crate::eventing::effect::{Effect, MunicipalitiesKey, StatesKey};
use crate::services::api_client::ApiClient;

/// Run an effect to completion
pub async fn run_effect(api: &ApiClient, effect: Effect) -> AppEvent {
    match effect {
        Effect::FetchRegions => AppEvent::RegionsLoaded(api.fetch_regions().await),
        Effect::FetchStates(key) => AppEvent::StatesLoaded {
            key,
            result: load_states(api, key).await,
        },
        Effect::FetchMunicipalities(key) => AppEvent::MunicipalitiesLoaded {
            key,
            result: load_municipalities(api, key).await,
        },
    }
}

async fn load_states(api: &ApiClient, key: StatesKey) -> Result<StatesPayload> {
    let states = api.fetch_states(key.region).await?;

    let stats = join_all(
        states
            .iter()
            .map(|s| state_statistics_or_empty(api, s.id, key.year)),
    )
    .await
    .into_iter()
    .collect::<AHashMap<_, _>>();

    Ok(StatesPayload { states, stats })
}

async fn state_statistics_or_empty(
    api: &ApiClient,
    state: GeoId,
    year: Year,
) -> (GeoId, Vec<StatisticRecord>) {
    match api.fetch_state_statistics(state, year).await {
        Ok(records) => (state, records),
        Err(e) => {
            tracing::warn!("Statistics for state {state} in {year} unavailable: {e}");
            (state, Vec::new())
        }
    }
}

async fn load_municipalities(
    api: &ApiClient,
    key: MunicipalitiesKey,
) -> Result<MunicipalitiesPayload> {
    let (municipalities, stats) = futures::join!(
        api.fetch_municipalities_of(key.state),
        api.fetch_municipality_statistics(key.state, key.year),
    );

    let municipalities = municipalities?;
    let stats = stats.unwrap_or_else(|e| {
        tracing::warn!(
            "Municipality statistics for state {} in {} unavailable: {e}",
            key.state,
            key.year
        );
        Vec::new()
    });

    Ok(MunicipalitiesPayload {
        municipalities,
        stats,
    })
}
