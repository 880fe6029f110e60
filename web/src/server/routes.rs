use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::NaiveDateTime;
use http::StatusCode;
use serde_json::Value;
use shared_types::{ForecastResponse, LatLong};
use thiserror::Error;

use crate::forecast::api::API_PATH;

use super::{
    archive::{ArchiveClient, TemperatureHistory},
    config::ServerConfig,
    describe::{describe_forecast, ForecastModel, NoModel},
    geocoding::{NominatimClient, ReverseGeocoder},
};

const UNKNOWN_PLACE: &str = "Unknown";
const LOOKUP_FAILED: &str = "API error";
const NO_READING: &str = "N/A";

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Invalid latitude/longitude")]
    InvalidCoordinates,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[derive(Clone)]
pub struct ApiState {
    pub geocoder: NominatimClient,
    pub archive: ArchiveClient,
    pub model: Arc<dyn ForecastModel>,
}

impl ApiState {
    pub fn from_config(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            geocoder: NominatimClient::new(
                client.clone(),
                config.nominatim_url.clone(),
                config.user_agent.clone(),
            ),
            archive: ArchiveClient::new(client, config.archive_url.clone()),
            model: Arc::new(NoModel),
        })
    }
}

pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route(API_PATH, post(get_location_data))
        .with_state(state)
}

/// Decoded body of a forecast lookup. Date and time stay raw; a bad value
/// only costs the parts of the answer that depend on it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationQuery {
    pub location: LatLong,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl LocationQuery {
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)?;
        let fields = value
            .as_object()
            .filter(|fields| !fields.is_empty())
            .ok_or(ApiError::InvalidJson)?;

        let lat = coordinate(fields.get("latitude")).ok_or(ApiError::InvalidCoordinates)?;
        let long = coordinate(fields.get("longitude")).ok_or(ApiError::InvalidCoordinates)?;
        let text = |key: &str| {
            fields
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Ok(Self {
            location: LatLong::new(lat, long),
            date: text("date"),
            time: text("time"),
        })
    }

    fn moment(&self) -> Option<NaiveDateTime> {
        let (date, time) = (self.date.as_deref()?, self.time.as_deref()?);
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M").ok()
    }

    fn hour(&self) -> Option<usize> {
        self.time.as_deref()?.split(':').next()?.trim().parse().ok()
    }
}

// Accepts JSON numbers and numeric strings.
fn coordinate(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

pub async fn get_location_data(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<ForecastResponse>, ApiError> {
    let query = LocationQuery::from_body(&body)?;
    tracing::debug!(?query, "forecast lookup");

    let response =
        assemble_forecast(&state.geocoder, &state.archive, state.model.as_ref(), &query).await;
    Ok(Json(response))
}

/// Builds the full reply. Upstream failures degrade individual fields and
/// never fail the request.
pub async fn assemble_forecast<G, H>(
    geocoder: &G,
    history: &H,
    model: &dyn ForecastModel,
    query: &LocationQuery,
) -> ForecastResponse
where
    G: ReverseGeocoder,
    H: TemperatureHistory,
{
    let prediction = query
        .moment()
        .and_then(|at| model.predict(query.location, at));
    let description = describe_forecast(
        prediction.map(|p| p.temperature_c),
        prediction.and_then(|p| p.precipitation_mm),
    );

    let reading = async {
        let (Some(date), Some(hour)) = (query.date.as_deref(), query.hour()) else {
            return None;
        };
        history
            .hourly_temperature(query.location, date, hour)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "archive lookup failed");
                None
            })
    };
    let (place, reading) = tokio::join!(geocoder.reverse(query.location), reading);

    let (department, country) = match place {
        Ok(place) => (
            place.state.unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
            place.country.unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "reverse geocoding failed");
            (LOOKUP_FAILED.to_string(), LOOKUP_FAILED.to_string())
        }
    };

    ForecastResponse {
        department: Some(department),
        country: Some(country),
        model_prediction: Some(description),
        real_temperature: Some(
            reading
                .map(|t| format!("{t:.2}°C"))
                .unwrap_or_else(|| NO_READING.to_string()),
        ),
    }
}
