// ============================================================================
// FORMATO - Coordenadas y fechas para la UI
// ============================================================================

use chrono::{DateTime, Utc};

use super::constants::POPUP_COORDINATE_DECIMALS;

/// Coordenada con los decimales de los popups ("13.75000")
pub fn format_coordinate(value: f64) -> String {
    format!("{:.*}", POPUP_COORDINATE_DECIMALS, value)
}

/// Posición con hemisferio, p. ej. "13.7563° N, 100.5018° E"
pub fn format_position(latitude: f64, longitude: f64, decimals: usize) -> String {
    let lat_hemisphere = if latitude < 0.0 { 'S' } else { 'N' };
    let lng_hemisphere = if longitude < 0.0 { 'W' } else { 'E' };
    format!(
        "{:.*}° {}, {:.*}° {}",
        decimals,
        latitude.abs(),
        lat_hemisphere,
        decimals,
        longitude.abs(),
        lng_hemisphere
    )
}

/// Valor para un `<input type="datetime-local">` (minutos, UTC)
pub fn format_departure(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M").to_string()
}

pub fn current_departure() -> String {
    format_departure(Utc::now())
}
