use chrono::{NaiveDate, NaiveDateTime};
use shared_types::{ForecastResponse, LatLong};

use super::{
    api::{FetchError, ForecastApi},
    map_state::{MapState, CURRENT_LOCATION_LABEL, SELECTED_LOCATION_LABEL},
    query::{ForecastQuery, LocationForm, ValidationError},
    report::{ForecastReport, ResultPanel},
};

/// A query that has been handed to the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispatch {
    pub ticket: u64,
    pub query: ForecastQuery,
}

impl Dispatch {
    pub async fn send<A: ForecastApi>(&self, api: &A) -> Result<ForecastResponse, FetchError> {
        api.fetch_forecast(&self.query.to_request()).await
    }
}

/// State owned by the forecast page for its whole lifetime: the entry form,
/// the map, and the results region.
///
/// Every dispatch takes a new ticket and only the newest ticket may write the
/// results region, so a slow reply to an older query never overwrites a newer
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSession {
    pub form: LocationForm,
    map: MapState,
    panel: ResultPanel,
    issued: u64,
}

impl ForecastSession {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: LocationForm::new(today),
            map: MapState::default(),
            panel: ResultPanel::Idle,
            issued: 0,
        }
    }

    pub fn map(&self) -> &MapState {
        &self.map
    }

    pub fn panel(&self) -> &ResultPanel {
        &self.panel
    }

    /// Map click: fills the form and moves the marker, nothing is fetched.
    pub fn select_on_map(&mut self, location: LatLong) {
        self.form.fill_coordinates(location);
        self.map.set_location(location, SELECTED_LOCATION_LABEL);
    }

    /// Manual query from the entry form. Nothing changes when validation fails.
    pub fn submit_manual(&mut self) -> Result<Dispatch, ValidationError> {
        let query = self.form.parse()?;
        self.map.set_location(query.location, SELECTED_LOCATION_LABEL);
        Ok(self.begin(query))
    }

    /// Device position arrived: query for the current hour.
    pub fn located(&mut self, location: LatLong, now: NaiveDateTime) -> Dispatch {
        self.form.fill_coordinates(location);
        self.map.set_location(location, CURRENT_LOCATION_LABEL);
        self.begin(ForecastQuery::now(location, now))
    }

    /// "Use my location" pressed: shows the loading state while the browser
    /// looks up the position. Supersedes any reply still in flight.
    pub fn await_position(&mut self) -> u64 {
        self.issued += 1;
        self.panel = ResultPanel::Loading;
        self.issued
    }

    /// The position lookup for `ticket` failed. Clears the loading state
    /// unless another query has been issued since.
    pub fn position_failed(&mut self, ticket: u64) -> bool {
        if ticket != self.issued {
            return false;
        }
        self.panel = ResultPanel::Idle;
        true
    }

    fn begin(&mut self, query: ForecastQuery) -> Dispatch {
        self.issued += 1;
        self.panel = ResultPanel::Loading;
        Dispatch {
            ticket: self.issued,
            query,
        }
    }

    /// Applies a finished request. Returns `false` when a newer query has
    /// been issued since, in which case the outcome is dropped.
    pub fn complete(
        &mut self,
        dispatch: &Dispatch,
        outcome: Result<ForecastResponse, FetchError>,
    ) -> bool {
        if dispatch.ticket != self.issued {
            return false;
        }
        self.panel = match outcome {
            Ok(response) => ResultPanel::Success(ForecastReport::new(&response, &dispatch.query)),
            Err(e) => ResultPanel::Error(e.to_string()),
        };
        true
    }
}
