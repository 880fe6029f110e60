use shared_types::{ForecastRequest, ForecastResponse};
use thiserror::Error;

pub const API_PATH: &str = "/api/get_location_data";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend answered with a non-2xx status.
    #[error("HTTP error: {code} - {reason}")]
    Status { code: u16, reason: String },
    /// Network failure or a body that is not the expected JSON.
    #[error("Error connecting to the server: {0}")]
    Connection(String),
}

/// The one request/response call the widget makes.
#[allow(async_fn_in_trait)]
pub trait ForecastApi {
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpForecastApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpForecastApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), API_PATH),
        }
    }

    /// Client pointed at the origin the page was served from.
    pub fn same_origin() -> Self {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        Self::new(&origin)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ForecastApi for HttpForecastApi {
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, FetchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response
            .json::<ForecastResponse>()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))
    }
}
