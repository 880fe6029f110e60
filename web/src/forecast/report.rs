use shared_types::ForecastResponse;

use super::query::ForecastQuery;

pub const PLACE_PLACEHOLDER: &str = "N/A";
pub const TEXT_PLACEHOLDER: &str = "Not available";

/// Likely causes listed under every fetch error.
pub const TROUBLESHOOTING: [&str; 3] = [
    "The backend server is running",
    "The /api/get_location_data route exists",
    "There are no CORS errors",
];

/// Display-ready strings for a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub place: String,
    pub coordinates: String,
    pub moment: String,
    pub model_prediction: String,
    pub real_temperature: String,
}

impl ForecastReport {
    pub fn new(response: &ForecastResponse, query: &ForecastQuery) -> Self {
        Self {
            place: format!(
                "{}, {}",
                or_placeholder(&response.department, PLACE_PLACEHOLDER),
                or_placeholder(&response.country, PLACE_PLACEHOLDER)
            ),
            coordinates: format!(
                "Coordinates: Lat {:.4}, Lon {:.4}",
                query.location.lat, query.location.long
            ),
            moment: format!(
                "Date: {} - Time: {}",
                query.date.format("%-d/%-m/%Y"),
                query.time.format("%H:%M")
            ),
            model_prediction: or_placeholder(&response.model_prediction, TEXT_PLACEHOLDER),
            real_temperature: or_placeholder(&response.real_temperature, TEXT_PLACEHOLDER),
        }
    }
}

// Blank strings count as missing.
fn or_placeholder(field: &Option<String>, placeholder: &str) -> String {
    field
        .as_deref()
        .filter(|value| !value.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

/// What the results region currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultPanel {
    #[default]
    Idle,
    Loading,
    Success(ForecastReport),
    Error(String),
}
