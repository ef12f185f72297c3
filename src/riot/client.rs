use std::sync::Arc;

use reqwest::Url;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::AppError;

use super::metrics::RequestMetrics;

/// Blocking Riot API client.
///
/// Holds the HTTP connection pool and the configuration every request needs.
/// Each endpoint performs exactly one GET, without retries.
#[derive(Debug)]
pub struct RiotClient {
    client: Client,
    /// Riot API Key
    key: String,
    base_url: Url,
    metrics: Arc<RequestMetrics>,
}

impl RiotClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a client on top of an already configured [`reqwest::blocking::Client`].
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            key: config.riot_api_key.clone(),
            base_url: config.base_url.clone(),
            metrics: RequestMetrics::new(),
        }
    }

    pub fn metrics(&self) -> Arc<RequestMetrics> {
        self.metrics.clone()
    }

    /// Build the URL of an endpoint.
    ///
    /// Every path segment is pushed as-is, so caller values cannot alter the
    /// route. The API key is always the last query parameter.
    pub(crate) fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
            .append_pair("api_key", &self.key);

        Ok(url)
    }

    /// Send a GET request and decode its JSON body.
    pub(crate) fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        self.metrics.inc();
        tracing::trace!("[RIOT::CLIENT] GET {}", url.path());

        let res = self.client.get(url).send()?;
        let status = res.status();

        if !status.is_success() {
            let message = res.text().unwrap_or_default();
            return Err(AppError::RiotApi {
                status: status.as_u16(),
                message,
            });
        }

        let body = res.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }
}
