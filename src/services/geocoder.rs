// src/services/geocoder.rs
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const USER_AGENT: &str = "TravelGenie/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("reverse lookup request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("reverse lookup returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("reverse lookup reply carried no usable locality")]
    MissingLocality,
}

#[derive(Debug, Deserialize)]
struct ReverseReply {
    address: Option<Address>,
}

#[derive(Debug, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    county: Option<String>,
}

/// Best-effort reverse geocoding against a Nominatim endpoint.
#[derive(Clone)]
pub struct Geocoder {
    client: reqwest::Client,
    base_url: String,
}

impl Geocoder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("NOMINATIM_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Resolve coordinates to a locality name: city first, then town, then county.
    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<String, GeocodeError> {
        let url = format!(
            "{}/reverse?lat={lat}&lon={lon}&format=json",
            self.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status()));
        }
        let reply: ReverseReply = response.json().await?;
        let address = reply.address.ok_or(GeocodeError::MissingLocality)?;
        address
            .city
            .or(address.town)
            .or(address.county)
            .filter(|name| !name.trim().is_empty())
            .ok_or(GeocodeError::MissingLocality)
    }
}
