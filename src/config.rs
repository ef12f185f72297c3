use std::env;

use reqwest::Url;

use crate::error::AppError;
use crate::riot::Region;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub region: Region,
    /// Base URL requests are sent to, derived from `region` unless overridden.
    pub base_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // A missing key is left for the Riot API to reject with 401/403.
        let riot_api_key = lookup("RIOT_API_KEY").unwrap_or_else(|| {
            tracing::warn!("⚠️ RIOT_API_KEY is not set, requests will be unauthorized");
            String::new()
        });

        let region = match lookup("RIOT_REGION") {
            Some(value) => value.parse()?,
            None => Region::default(),
        };

        let base_url = lookup("RIOT_API_BASE_URL").unwrap_or_else(|| region.base_url());
        let base_url = Url::parse(&base_url)
            .map_err(|e| AppError::Config(format!("invalid RIOT_API_BASE_URL {base_url}: {e}")))?;

        Ok(Self {
            riot_api_key,
            region,
            base_url,
        })
    }

    pub fn new(riot_api_key: impl Into<String>, region: Region) -> Result<Self, AppError> {
        let base_url = Url::parse(&region.base_url())
            .map_err(|e| AppError::Config(format!("invalid base url: {e}")))?;

        Ok(Self {
            riot_api_key: riot_api_key.into(),
            region,
            base_url,
        })
    }
}
