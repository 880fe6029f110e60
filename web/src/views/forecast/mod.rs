pub mod forecast_map;
pub mod forecast_page;
pub mod forecast_results;
pub mod location_form;

pub use forecast_page::ForecastPage;
