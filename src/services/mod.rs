pub mod api_client;
pub mod location_service;

pub use api_client::{ApiClient, ApiError};
pub use location_service::{accept_locations, load_locations};
