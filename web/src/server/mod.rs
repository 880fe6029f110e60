//! Backend for `POST /api/get_location_data`: reverse geocoding, archived
//! temperatures and the forecast sentence.

pub mod archive;
pub mod config;
pub mod describe;
pub mod geocoding;
pub mod routes;

pub use config::ServerConfig;
pub use routes::{api_router, ApiState};
