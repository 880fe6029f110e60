use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use shared_types::{ForecastRequest, LatLong};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Hour used when a date is picked but the time field is left empty.
pub const DEFAULT_HOUR: u32 = 14;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter valid coordinates.")]
    InvalidCoordinates,
    #[error("Please select a date.")]
    MissingDate,
    #[error("Please enter a valid date.")]
    InvalidDate,
    #[error("Please enter a valid time.")]
    InvalidTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Latitude,
    Longitude,
    Date,
    Time,
}

/// Raw contents of the manual entry fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationForm {
    pub latitude: String,
    pub longitude: String,
    pub date: String,
    pub time: String,
}

impl LocationForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Latitude => &self.latitude,
            FormField::Longitude => &self.longitude,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Latitude => &mut self.latitude,
            FormField::Longitude => &mut self.longitude,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
        }
    }

    /// Writes a picked coordinate back into the latitude/longitude fields.
    pub fn fill_coordinates(&mut self, location: LatLong) {
        self.latitude = format!("{:.6}", location.lat);
        self.longitude = format!("{:.6}", location.long);
    }

    pub fn parse(&self) -> Result<ForecastQuery, ValidationError> {
        let lat = parse_coordinate(&self.latitude)?;
        let long = parse_coordinate(&self.longitude)?;

        let date = self.date.trim();
        if date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate)?;

        let time = match self.time.trim() {
            "" => default_time(),
            raw => {
                NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| ValidationError::InvalidTime)?
            }
        };

        Ok(ForecastQuery {
            location: LatLong::new(lat, long),
            date,
            time,
        })
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(ValidationError::InvalidCoordinates)
}

fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_HOUR, 0, 0).unwrap_or_default()
}

/// A location plus a fully resolved date and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastQuery {
    pub location: LatLong,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ForecastQuery {
    /// Query for "now", truncated to the start of the current hour.
    pub fn now(location: LatLong, now: NaiveDateTime) -> Self {
        let time = NaiveTime::from_hms_opt(now.hour(), 0, 0).unwrap_or_else(default_time);
        Self {
            location,
            date: now.date(),
            time,
        }
    }

    pub fn to_request(&self) -> ForecastRequest {
        ForecastRequest {
            latitude: self.location.lat,
            longitude: self.location.long,
            date: self.date.format(DATE_FORMAT).to_string(),
            time: self.time.format(TIME_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(lat: &str, lon: &str, date: &str, time: &str) -> LocationForm {
        LocationForm {
            latitude: lat.to_string(),
            longitude: lon.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn manual_form_builds_request() {
        let query = form("-12.05", "-77.04", "2025-03-01", "09:30").parse().unwrap();
        let request = query.to_request();
        assert_eq!(request.latitude, -12.05);
        assert_eq!(request.longitude, -77.04);
        assert_eq!(request.date, "2025-03-01");
        assert_eq!(request.time, "09:30");
    }

    #[test]
    fn empty_time_defaults_to_two_pm() {
        let query = form("1", "2", "2025-03-01", "").parse().unwrap();
        assert_eq!(query.to_request().time, "14:00");
    }

    #[test]
    fn non_numeric_coordinates_are_rejected() {
        for (lat, lon) in [("abc", "1"), ("1", ""), ("", ""), ("NaN", "1"), ("1", "inf")] {
            assert_eq!(
                form(lat, lon, "2025-03-01", "10:00").parse(),
                Err(ValidationError::InvalidCoordinates),
                "lat={lat:?} lon={lon:?}"
            );
        }
    }

    #[test]
    fn coordinates_are_checked_before_date() {
        assert_eq!(
            form("x", "1", "", "").parse(),
            Err(ValidationError::InvalidCoordinates)
        );
    }

    #[test]
    fn empty_date_is_rejected() {
        assert_eq!(
            form("1", "2", "  ", "10:00").parse(),
            Err(ValidationError::MissingDate)
        );
    }

    #[test]
    fn malformed_date_and_time_are_rejected() {
        assert_eq!(
            form("1", "2", "01/03/2025", "").parse(),
            Err(ValidationError::InvalidDate)
        );
        assert_eq!(
            form("1", "2", "2025-03-01", "25:00").parse(),
            Err(ValidationError::InvalidTime)
        );
    }

    #[test]
    fn now_query_rounds_down_to_the_hour() {
        let now = NaiveDate::from_ymd_opt(2025, 7, 4)
            .unwrap()
            .and_hms_opt(16, 47, 12)
            .unwrap();
        let request = ForecastQuery::now(LatLong::new(0.0, 0.0), now).to_request();
        assert_eq!(request.date, "2025-07-04");
        assert_eq!(request.time, "16:00");
    }

    #[test]
    fn filled_coordinates_use_six_decimals() {
        let mut form = LocationForm::default();
        form.fill_coordinates(LatLong::new(-12.05, -77.04));
        assert_eq!(form.latitude, "-12.050000");
        assert_eq!(form.longitude, "-77.040000");
    }

    #[test]
    fn fields_are_addressable() {
        let mut form = LocationForm::default();
        *form.field_mut(FormField::Time) = "08:15".to_string();
        assert_eq!(form.time, "08:15");
        assert_eq!(form.field(FormField::Time), "08:15");
        assert_eq!(form.field(FormField::Date), "");
    }

    #[test]
    fn new_form_starts_on_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(LocationForm::new(today).date, "2026-10-18");
    }
}
