use chrono::NaiveDateTime;
use shared_types::LatLong;

/// Output of a statistical forecast model for one place and hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOutput {
    pub temperature_c: f64,
    pub precipitation_mm: Option<f64>,
}

/// A model that can estimate conditions at a point in space and time.
pub trait ForecastModel: Send + Sync {
    fn predict(&self, location: LatLong, at: NaiveDateTime) -> Option<ModelOutput>;
}

/// Used when no trained model is deployed; every prediction is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModel;

impl ForecastModel for NoModel {
    fn predict(&self, _location: LatLong, _at: NaiveDateTime) -> Option<ModelOutput> {
        None
    }
}

fn temperature_class(temperature_c: Option<f64>) -> &'static str {
    match temperature_c {
        None => "Temperature not available",
        Some(t) if t < 5.0 => "Very cold",
        Some(t) if t < 12.0 => "Cold",
        Some(t) if t < 18.0 => "Cool / Mild",
        Some(t) if t < 24.0 => "Warm / Pleasant",
        Some(_) => "Hot",
    }
}

fn precipitation_class(precipitation_mm: Option<f64>) -> &'static str {
    match precipitation_mm {
        None => "",
        Some(p) if p <= 0.0 => "with clear skies.",
        Some(p) if p <= 1.0 => "with possible drizzle.",
        Some(p) if p <= 5.0 => "with a chance of rain.",
        Some(_) => "with heavy rain expected.",
    }
}

/// Plain-text forecast sentence returned as `prediccion_modelo`.
pub fn describe_forecast(temperature_c: Option<f64>, precipitation_mm: Option<f64>) -> String {
    let temperature = temperature_c
        .map(|t| format!("{t:.1}°C"))
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "The forecast is {} (approx. {}) {}",
        temperature_class(temperature_c),
        temperature,
        precipitation_class(precipitation_mm)
    )
    .trim_end()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_classes_follow_thresholds() {
        assert_eq!(temperature_class(Some(-3.0)), "Very cold");
        assert_eq!(temperature_class(Some(5.0)), "Cold");
        assert_eq!(temperature_class(Some(11.9)), "Cold");
        assert_eq!(temperature_class(Some(12.0)), "Cool / Mild");
        assert_eq!(temperature_class(Some(18.0)), "Warm / Pleasant");
        assert_eq!(temperature_class(Some(24.0)), "Hot");
    }

    #[test]
    fn precipitation_classes_follow_thresholds() {
        assert_eq!(precipitation_class(Some(0.0)), "with clear skies.");
        assert_eq!(precipitation_class(Some(0.4)), "with possible drizzle.");
        assert_eq!(precipitation_class(Some(1.0)), "with possible drizzle.");
        assert_eq!(precipitation_class(Some(4.2)), "with a chance of rain.");
        assert_eq!(precipitation_class(Some(6.5)), "with heavy rain expected.");
    }

    #[test]
    fn full_sentence() {
        assert_eq!(
            describe_forecast(Some(21.34), Some(2.0)),
            "The forecast is Warm / Pleasant (approx. 21.3°C) with a chance of rain."
        );
    }

    #[test]
    fn missing_data_sentence_has_no_trailing_space() {
        assert_eq!(
            describe_forecast(None, None),
            "The forecast is Temperature not available (approx. N/A)"
        );
    }

    #[test]
    fn no_model_never_predicts() {
        let at = chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(NoModel.predict(LatLong::new(0.0, 0.0), at), None);
    }
}
