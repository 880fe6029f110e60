//! Reverse geocoding against a Nominatim instance.

use reqwest::{header::USER_AGENT, Client};
use serde::Deserialize;
use shared_types::LatLong;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("reverse geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Administrative area and country of a coordinate, when known.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Place {
    pub state: Option<String>,
    pub country: Option<String>,
}

#[allow(async_fn_in_trait)]
pub trait ReverseGeocoder {
    async fn reverse(&self, location: LatLong) -> Result<Place, GeocodeError>;
}

#[derive(Debug, Deserialize)]
struct NominatimReply {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    state: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl NominatimClient {
    pub fn new(client: Client, base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            user_agent: user_agent.into(),
        }
    }
}

impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, location: LatLong) -> Result<Place, GeocodeError> {
        // Nominatim answers 200 with `{"error": ...}` for points it cannot
        // resolve, so the body decides, not the status.
        let reply: NominatimReply = self
            .client
            .get(&self.base_url)
            .header(USER_AGENT, &self.user_agent)
            .query(&[
                ("format", "json".to_string()),
                ("lat", location.lat.to_string()),
                ("lon", location.long.to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(reply
            .address
            .map(|address| Place {
                state: address.state,
                country: address.country,
            })
            .unwrap_or_default())
    }
}
