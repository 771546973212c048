//! Cached read-only proxy to the public regions API.

use std::time::Duration;

use moka::future::Cache;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use lostprop_core::config::GeographyConfig;
use lostprop_core::error::{AppError, ErrorKind};

/// One regency, district or village.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
}

/// HTTP client for regencies, districts and villages.
///
/// Lists are cached by upstream path, so repeated form loads do not hit
/// the upstream API until the TTL expires.
#[derive(Debug, Clone)]
pub struct RegionClient {
    http: reqwest::Client,
    base_url: String,
    province_id: String,
    cache: Cache<String, Vec<Region>>,
}

impl RegionClient {
    pub fn new(config: &GeographyConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build regions HTTP client",
                    e,
                )
            })?;
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(Duration::from_secs(config.cache_ttl_seconds))
            .build();

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            province_id: config.province_id.clone(),
            cache,
        })
    }

    /// Regencies and cities of the configured province.
    pub async fn cities(&self) -> Result<Vec<Region>, AppError> {
        self.fetch(format!("regencies/{}.json", self.province_id))
            .await
    }

    /// Districts of a regency.
    pub async fn districts(&self, city_id: &str) -> Result<Vec<Region>, AppError> {
        check_id(city_id)?;
        self.fetch(format!("districts/{city_id}.json")).await
    }

    /// Villages of a district.
    pub async fn villages(&self, district_id: &str) -> Result<Vec<Region>, AppError> {
        check_id(district_id)?;
        self.fetch(format!("villages/{district_id}.json")).await
    }

    async fn fetch(&self, path: String) -> Result<Vec<Region>, AppError> {
        if let Some(hit) = self.cache.get(&path).await {
            debug!(path = %path, "Region cache hit");
            return Ok(hit);
        }

        let url = format!("{}/{}", self.base_url, path);
        let regions = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| upstream_error(&url, e))?
            .json::<Vec<Region>>()
            .await
            .map_err(|e| upstream_error(&url, e))?;

        self.cache.insert(path, regions.clone()).await;
        Ok(regions)
    }
}

fn check_id(id: &str) -> Result<(), AppError> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::validation(format!("Kode wilayah tidak valid: '{id}'")));
    }
    Ok(())
}

fn upstream_error(url: &str, err: reqwest::Error) -> AppError {
    warn!(url = %url, error = %err, "Regions API request failed");
    AppError::with_source(
        ErrorKind::ExternalService,
        "Gagal memuat data wilayah",
        err,
    )
}
