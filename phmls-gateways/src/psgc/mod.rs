//! Client for the Philippine Standard Geographic Code reference API.
//!
//! Requests that fail with a timeout, rate limiting, a server error or
//! a transport error are retried with exponential backoff. Missing codes
//! (404) fail immediately. Once all attempts are exhausted the last
//! cached response is served, even if it has already expired.

use std::{thread, time::Duration};

use phmls_core::{
    entities::PsgcCode,
    gateways::geo::{Error, GeoRecord, GeoReferenceGateway},
};
use serde::de::DeserializeOwned;

mod cache;
mod model;
mod transport;

use self::{cache::ResponseCache, model::PsgcRecord};
pub use self::transport::{HttpResponse, HttpTransport, Transport};

pub const DEFAULT_BASE_URL: &str = "https://psgc.gitlab.io/api";

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct PsgcConfig {
    pub base_url        : String,
    pub timeout         : Duration,
    pub max_attempts    : u32,
    /// Doubled after every failed attempt.
    pub initial_backoff : Duration,
    pub cache_ttl       : Duration,
}

impl Default for PsgcConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(10),
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            cache_ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

pub struct PsgcClient<T = HttpTransport> {
    base_url: String,
    max_attempts: u32,
    initial_backoff: Duration,
    transport: T,
    cache: ResponseCache,
    sleep: fn(Duration),
}

impl PsgcClient<HttpTransport> {
    pub fn try_new(config: PsgcConfig) -> anyhow::Result<Self> {
        let transport = HttpTransport::try_new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T> PsgcClient<T>
where
    T: Transport,
{
    pub fn with_transport(config: PsgcConfig, transport: T) -> Self {
        let PsgcConfig {
            base_url,
            max_attempts,
            initial_backoff,
            cache_ttl,
            ..
        } = config;
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            max_attempts: max_attempts.max(1),
            initial_backoff,
            transport,
            cache: ResponseCache::new(cache_ttl),
            sleep: thread::sleep,
        }
    }

    fn fetch(&self, path: &str, what: &str) -> Result<String, Error> {
        let url = format!("{}/{path}", self.base_url);
        if let Some(body) = self.cache.fresh(&url) {
            log::debug!("Serving {url} from cache");
            return Ok(body);
        }
        let mut backoff = self.initial_backoff;
        let mut attempts = 0;
        let last_error = loop {
            attempts += 1;
            let error = match self.transport.get(&url) {
                Ok(response) if response.is_success() => {
                    self.cache.insert(url, response.body.clone());
                    return Ok(response.body);
                }
                Ok(response) if response.status == 404 => {
                    return Err(Error::NotFound(what.to_owned()));
                }
                Ok(response) if response.is_retryable() => {
                    format!("HTTP status {}", response.status)
                }
                Ok(response) => break format!("HTTP status {}", response.status),
                Err(err) => err.to_string(),
            };
            if attempts >= self.max_attempts {
                break error;
            }
            log::warn!(
                "Attempt {attempts} of {} to fetch {url} failed ({error}), retrying in {backoff:?}",
                self.max_attempts
            );
            (self.sleep)(backoff);
            backoff = backoff.saturating_mul(2);
        };
        if let Some(body) = self.cache.any(&url) {
            log::warn!("Serving expired cache entry for {url}: {last_error}");
            return Ok(body);
        }
        Err(Error::Unavailable(format!(
            "GET {url} failed after {attempts} attempt(s): {last_error}"
        )))
    }

    fn fetch_json<D>(&self, path: &str, what: &str) -> Result<D, Error>
    where
        D: DeserializeOwned,
    {
        let body = self.fetch(path, what)?;
        serde_json::from_str(&body).map_err(|err| {
            log::error!("Invalid response for {what}: {err}");
            Error::Unavailable(format!("Invalid response for {what}: {err}"))
        })
    }
}

impl<T> GeoReferenceGateway for PsgcClient<T>
where
    T: Transport,
{
    fn province(&self, code: &PsgcCode) -> Result<GeoRecord, Error> {
        let record: PsgcRecord =
            self.fetch_json(&format!("provinces/{code}/"), &format!("Province '{code}'"))?;
        Ok(record.into_province())
    }

    fn cities_of_province(&self, code: &PsgcCode) -> Result<Vec<GeoRecord>, Error> {
        let records: Vec<PsgcRecord> = self.fetch_json(
            &format!("provinces/{code}/cities-municipalities/"),
            &format!("Province '{code}'"),
        )?;
        Ok(records.into_iter().map(PsgcRecord::into_city).collect())
    }

    fn barangays_of_city(&self, code: &PsgcCode) -> Result<Vec<GeoRecord>, Error> {
        let records: Vec<PsgcRecord> = self.fetch_json(
            &format!("cities-municipalities/{code}/barangays/"),
            &format!("City '{code}'"),
        )?;
        Ok(records.into_iter().map(PsgcRecord::into_barangay).collect())
    }
}
