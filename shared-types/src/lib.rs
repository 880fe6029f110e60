use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl LatLong {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// Body of `POST /api/get_location_data`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
}

/// Reply of `POST /api/get_location_data`. Every field may be missing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ForecastResponse {
    #[serde(rename = "departamento", default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(rename = "pais", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "prediccion_modelo", default, skip_serializing_if = "Option::is_none")]
    pub model_prediction: Option<String>,
    #[serde(rename = "temperatura_real", default, skip_serializing_if = "Option::is_none")]
    pub real_temperature: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_backend_field_names() {
        let json = r#"{"departamento":"Lima","pais":"Perú","prediccion_modelo":"Hot","temperatura_real":"24.10°C"}"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.department.as_deref(), Some("Lima"));
        assert_eq!(response.country.as_deref(), Some("Perú"));
        assert_eq!(response.model_prediction.as_deref(), Some("Hot"));
        assert_eq!(response.real_temperature.as_deref(), Some("24.10°C"));
    }

    #[test]
    fn response_tolerates_missing_and_unknown_fields() {
        let response: ForecastResponse =
            serde_json::from_str(r#"{"pais":"Perú","extra":1}"#).unwrap();
        assert_eq!(response.department, None);
        assert_eq!(response.country.as_deref(), Some("Perú"));
        assert_eq!(response.model_prediction, None);
    }

    #[test]
    fn request_serializes_flat_body() {
        let request = ForecastRequest {
            latitude: -12.05,
            longitude: -77.04,
            date: "2025-03-01".to_string(),
            time: "14:00".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "latitude": -12.05,
                "longitude": -77.04,
                "date": "2025-03-01",
                "time": "14:00"
            })
        );
    }
}
