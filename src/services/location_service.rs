// ============================================================================
// LOCATION SERVICE - Descarga + validación de waypoints
// ============================================================================

use serde_json::Value;

use super::api_client::{ApiClient, ApiError};
use crate::models::{validate_waypoints, Waypoint};

/// Descarga `/locations` y devuelve solo los waypoints válidos
pub async fn load_locations(client: &ApiClient) -> Result<Vec<Waypoint>, ApiError> {
    let records = client.get_locations().await?;
    Ok(accept_locations(records))
}

/// Valida la respuesta y registra los registros descartados
pub fn accept_locations(records: Vec<Value>) -> Vec<Waypoint> {
    let total = records.len();
    let validated = validate_waypoints(records);

    for (index, reason) in &validated.rejected {
        log::warn!("⚠️ Waypoint #{} descartado: {}", index, reason);
    }
    for id in &validated.duplicate_ids {
        log::warn!("⚠️ Id de waypoint duplicado: {}", id);
    }

    log::info!(
        "📍 {} de {} waypoints válidos",
        validated.waypoints.len(),
        total
    );
    validated.waypoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_valid_records_in_response_order() {
        let waypoints = accept_locations(vec![
            json!({"id": 2, "name": "B", "latitude": 9.50, "longitude": 102.83}),
            json!({"id": 1, "name": "A", "latitude": 13.75, "longitude": 100.50}),
            json!({"id": 3, "name": "bad"}),
        ]);
        let ids: Vec<String> = waypoints.iter().map(|w| w.id.to_string()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn empty_response_gives_empty_list() {
        assert!(accept_locations(Vec::new()).is_empty());
    }
}
