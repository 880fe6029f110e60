//! Historical hourly temperatures from the Open-Meteo archive API.

use reqwest::Client;
use serde::Deserialize;
use shared_types::LatLong;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("temperature archive request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[allow(async_fn_in_trait)]
pub trait TemperatureHistory {
    /// Recorded 2 m temperature in °C at `hour` (0-23) of `date` (`YYYY-MM-DD`).
    async fn hourly_temperature(
        &self,
        location: LatLong,
        date: &str,
        hour: usize,
    ) -> Result<Option<f64>, ArchiveError>;
}

#[derive(Debug, Deserialize)]
struct ArchiveReply {
    hourly: Option<HourlySeries>,
}

#[derive(Debug, Deserialize)]
struct HourlySeries {
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
}

#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: Client,
    base_url: String,
}

impl ArchiveClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl TemperatureHistory for ArchiveClient {
    async fn hourly_temperature(
        &self,
        location: LatLong,
        date: &str,
        hour: usize,
    ) -> Result<Option<f64>, ArchiveError> {
        let reply: ArchiveReply = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", location.lat.to_string()),
                ("longitude", location.long.to_string()),
                ("start_date", date.to_string()),
                ("end_date", date.to_string()),
                ("hourly", "temperature_2m".to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(reply
            .hourly
            .and_then(|series| series.temperature_2m.get(hour).copied().flatten()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, routing::get, Json, Router};
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn day_of_temperatures() -> serde_json::Value {
        let mut temps: Vec<serde_json::Value> =
            (0..24).map(|h| serde_json::json!(15.0 + h as f64 / 2.0)).collect();
        temps[23] = serde_json::Value::Null;
        serde_json::json!({
            "latitude": -12.0,
            "longitude": -77.0,
            "hourly": { "time": [], "temperature_2m": temps }
        })
    }

    async fn archive_stub() -> ArchiveClient {
        let router = Router::new().route(
            "/archive",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("start_date"), params.get("end_date"));
                assert_eq!(params.get("hourly").map(String::as_str), Some("temperature_2m"));
                Json(day_of_temperatures())
            }),
        );
        let base = serve(router).await;
        ArchiveClient::new(Client::new(), format!("{base}/archive"))
    }

    #[tokio::test]
    async fn picks_the_requested_hour() {
        let client = archive_stub().await;
        let temp = client
            .hourly_temperature(LatLong::new(-12.05, -77.04), "2024-03-01", 14)
            .await
            .unwrap();
        assert_eq!(temp, Some(22.0));
    }

    #[tokio::test]
    async fn null_or_out_of_range_hours_are_missing() {
        let client = archive_stub().await;
        let location = LatLong::new(-12.05, -77.04);
        assert_eq!(client.hourly_temperature(location, "2024-03-01", 23).await.unwrap(), None);
        assert_eq!(client.hourly_temperature(location, "2024-03-01", 30).await.unwrap(), None);
    }

    #[tokio::test]
    async fn reply_without_series_is_missing() {
        let router = Router::new().route(
            "/archive",
            get(|| async { Json(serde_json::json!({ "error": true, "reason": "out of range" })) }),
        );
        let base = serve(router).await;
        let client = ArchiveClient::new(Client::new(), format!("{base}/archive"));

        let temp = client
            .hourly_temperature(LatLong::new(0.0, 0.0), "1900-01-01", 0)
            .await
            .unwrap();
        assert_eq!(temp, None);
    }
}
