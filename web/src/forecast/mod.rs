//! Client-side forecast lookup: form parsing, map state, the backend call and
//! the results model. Nothing in here touches the DOM except the
//! `hydrate`-only geolocation binding.

pub mod api;
pub mod geolocation;
pub mod map_state;
pub mod query;
pub mod report;
pub mod session;

pub use api::{FetchError, ForecastApi, HttpForecastApi};
pub use session::{Dispatch, ForecastSession};
