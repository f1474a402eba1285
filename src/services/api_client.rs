// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO valida ni transforma datos, solo hace requests HTTP
// ============================================================================

use std::fmt;

use gloo_net::http::Request;
use serde_json::Value;

use crate::config::{locations_url_for, CONFIG};

/// Fallo de una llamada al backend
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, status_text: String },
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http {
                status,
                status_text,
            } => write!(f, "HTTP {}: {}", status, status_text),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    locations_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            locations_url: CONFIG.locations_url(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            locations_url: locations_url_for(base_url),
        }
    }

    pub fn locations_url(&self) -> &str {
        &self.locations_url
    }

    /// `GET /locations`: el cuerpo debe ser un array JSON.
    /// Cada elemento se devuelve sin validar.
    pub async fn get_locations(&self) -> Result<Vec<Value>, ApiError> {
        let url = self.locations_url();
        log::debug!("📡 GET {}", url);

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
