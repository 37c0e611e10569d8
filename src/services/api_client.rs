//! Statistics API Client
//!
//! Thin typed wrapper over the REST endpoints. Every call is a single GET
//! that decodes a JSON array; anything other than 2xx is an
//! [`Error::Status`].
//!
//! ```text
//! GET /regioes                                  -> [{id, nome}]
//! GET /ufs[?regiao_id=R]                        -> [{id, nome}]
//! GET /municipios                               -> [{id, nome, cod_uf}]
//! GET /ufs/{uf}/{ano}/estatisticas              -> [{ano, total_*}]
//! GET /ufs/{uf}/{ano}/municipios/estatisticas   -> [{cod_municipio, ano, total_*}]
//! ```

use std::time::Duration;

use serde::de::DeserializeOwned;
use snafu::ResultExt;

use crate::domain::config::ApiConfig;
use crate::domain::geography::{GeoEntity, GeoId, children_of};
use crate::domain::statistic::{StatisticRecord, Year};
use crate::error::{DecodeSnafu, HttpClientSnafu, Result, StatusSnafu, TransportSnafu};

/// Client for the vital statistics API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context(HttpClientSnafu)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{endpoint}", self.base_url);
        tracing::debug!("GET {url} {query:?}");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .context(TransportSnafu { endpoint })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {endpoint} answered {status}");
            return StatusSnafu {
                endpoint,
                status: status.as_u16(),
            }
            .fail();
        }

        response.json().await.context(DecodeSnafu { endpoint })
    }

    // ==================== Geography ====================

    pub async fn fetch_regions(&self) -> Result<Vec<GeoEntity>> {
        self.get_json("/regioes", &[]).await
    }

    /// States, optionally restricted to one region
    pub async fn fetch_states(&self, region: Option<GeoId>) -> Result<Vec<GeoEntity>> {
        let query: Vec<(&str, String)> = region
            .map(|r| vec![("regiao_id", r.to_string())])
            .unwrap_or_default();
        self.get_json("/ufs", &query).await
    }

    /// Every municipality in the country
    pub async fn fetch_municipalities(&self) -> Result<Vec<GeoEntity>> {
        self.get_json("/municipios", &[]).await
    }

    /// Municipalities of one state
    ///
    /// The API has no per-state listing, so this downloads all of them and
    /// keeps the ones whose `cod_uf` matches.
    pub async fn fetch_municipalities_of(&self, state: GeoId) -> Result<Vec<GeoEntity>> {
        let all = self.fetch_municipalities().await?;
        let total = all.len();
        let kept = children_of(all, state);
        tracing::debug!("Kept {} of {total} municipalities for state {state}", kept.len());
        Ok(kept)
    }

    // ==================== Statistics ====================

    /// Statistics of one state; each record is stamped with the state id
    pub async fn fetch_state_statistics(
        &self,
        state: GeoId,
        year: Year,
    ) -> Result<Vec<StatisticRecord>> {
        let endpoint = format!("/ufs/{state}/{year}/estatisticas");
        let records: Vec<StatisticRecord> = self.get_json(&endpoint, &[]).await?;
        Ok(records
            .into_iter()
            .map(|r| r.with_geo_id(state))
            .collect())
    }

    /// Statistics of every municipality of one state, keyed by `cod_municipio`
    pub async fn fetch_municipality_statistics(
        &self,
        state: GeoId,
        year: Year,
    ) -> Result<Vec<StatisticRecord>> {
        let endpoint = format!("/ufs/{state}/{year}/municipios/estatisticas");
        self.get_json(&endpoint, &[]).await
    }
}
