use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identificador de waypoint tal como lo envía el backend (número o texto)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum WaypointId {
    Number(i64),
    Text(String),
}

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaypointId::Number(n) => write!(f, "{}", n),
            WaypointId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Registro tal como llega de `GET /locations`, sin validar.
/// Los campos son `Value` para que un registro malo no invalide toda la lista.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawWaypoint {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

/// Waypoint validado: coordenadas finitas y dentro de rango
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Waypoint {
    pub id: WaypointId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    /// [lat, lng], el orden que espera Leaflet
    pub fn position(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

/// Motivo por el que un registro se descarta
#[derive(Debug, Clone, PartialEq)]
pub enum WaypointError {
    Malformed(String),
    MissingField(&'static str),
    InvalidField { field: &'static str, value: String },
    NonNumeric { field: &'static str, value: String },
    OutOfRange { field: &'static str, value: f64 },
}

impl fmt::Display for WaypointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaypointError::Malformed(msg) => write!(f, "malformed record: {}", msg),
            WaypointError::MissingField(field) => write!(f, "missing field `{}`", field),
            WaypointError::InvalidField { field, value } => {
                write!(f, "invalid `{}`: {}", field, value)
            }
            WaypointError::NonNumeric { field, value } => {
                write!(f, "`{}` is not numeric: {}", field, value)
            }
            WaypointError::OutOfRange { field, value } => {
                write!(f, "`{}` out of range: {}", field, value)
            }
        }
    }
}

impl std::error::Error for WaypointError {}

impl TryFrom<RawWaypoint> for Waypoint {
    type Error = WaypointError;

    fn try_from(raw: RawWaypoint) -> Result<Self, Self::Error> {
        let id = parse_id(raw.id)?;
        let name = match raw.name {
            Some(Value::String(name)) => name,
            Some(other) => {
                return Err(WaypointError::InvalidField {
                    field: "name",
                    value: other.to_string(),
                })
            }
            None => return Err(WaypointError::MissingField("name")),
        };
        let latitude = parse_coordinate("latitude", raw.latitude, 90.0)?;
        let longitude = parse_coordinate("longitude", raw.longitude, 180.0)?;

        Ok(Waypoint {
            id,
            name,
            latitude,
            longitude,
        })
    }
}

impl TryFrom<Value> for Waypoint {
    type Error = WaypointError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(WaypointError::Malformed(format!("expected object, got {}", value)));
        }
        let raw: RawWaypoint =
            serde_json::from_value(value).map_err(|e| WaypointError::Malformed(e.to_string()))?;
        Waypoint::try_from(raw)
    }
}

/// Mayor entero que un número JS representa sin pérdida (2^53 - 1).
/// Ids fuera de ese rango se guardan como texto para poder pasarlos al mapa.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

fn parse_id(value: Option<Value>) -> Result<WaypointId, WaypointError> {
    match value {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(n) if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n) => Ok(WaypointId::Number(n)),
            _ => Ok(WaypointId::Text(n.to_string())),
        },
        Some(Value::String(s)) => Ok(WaypointId::Text(s)),
        Some(other) => Err(WaypointError::InvalidField {
            field: "id",
            value: other.to_string(),
        }),
        None => Err(WaypointError::MissingField("id")),
    }
}

/// Acepta números JSON y cadenas numéricas ("13.75")
fn parse_coordinate(
    field: &'static str,
    value: Option<Value>,
    limit: f64,
) -> Result<f64, WaypointError> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| WaypointError::NonNumeric {
            field,
            value: n.to_string(),
        })?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| WaypointError::NonNumeric {
            field,
            value: s.clone(),
        })?,
        Some(other) => {
            return Err(WaypointError::NonNumeric {
                field,
                value: other.to_string(),
            })
        }
        None => return Err(WaypointError::MissingField(field)),
    };

    if !parsed.is_finite() || parsed.abs() > limit {
        return Err(WaypointError::OutOfRange {
            field,
            value: parsed,
        });
    }
    Ok(parsed)
}

/// Resultado de validar la respuesta completa
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedWaypoints {
    pub waypoints: Vec<Waypoint>,
    /// (índice en la respuesta, motivo)
    pub rejected: Vec<(usize, WaypointError)>,
    pub duplicate_ids: Vec<WaypointId>,
}

/// Valida cada registro por separado conservando el orden de los válidos
pub fn validate_waypoints(records: Vec<Value>) -> ValidatedWaypoints {
    let mut result = ValidatedWaypoints::default();
    let mut seen = HashSet::new();

    for (index, record) in records.into_iter().enumerate() {
        match Waypoint::try_from(record) {
            Ok(waypoint) => {
                if !seen.insert(waypoint.id.clone()) {
                    result.duplicate_ids.push(waypoint.id.clone());
                }
                result.waypoints.push(waypoint);
            }
            Err(e) => result.rejected.push((index, e)),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numeric_records() {
        let wp = Waypoint::try_from(json!({"id": 1, "name": "A", "latitude": 13.75, "longitude": 100.50}))
            .unwrap();
        assert_eq!(wp.id, WaypointId::Number(1));
        assert_eq!(wp.name, "A");
        assert_eq!(wp.position(), [13.75, 100.50]);
    }

    #[test]
    fn accepts_numeric_strings_and_text_ids() {
        let wp = Waypoint::try_from(json!({"id": "VTBS", "name": "VTBS", "latitude": " 13.69 ", "longitude": "100.75"}))
            .unwrap();
        assert_eq!(wp.id, WaypointId::Text("VTBS".to_string()));
        assert_eq!(wp.latitude, 13.69);
        assert_eq!(wp.longitude, 100.75);
    }

    #[test]
    fn rejects_missing_and_non_numeric_coordinates() {
        assert_eq!(
            Waypoint::try_from(json!({"id": 1, "name": "A", "longitude": 100.5})),
            Err(WaypointError::MissingField("latitude"))
        );
        assert_eq!(
            Waypoint::try_from(json!({"id": 1, "name": "A", "latitude": null, "longitude": 100.5})),
            Err(WaypointError::MissingField("latitude"))
        );
        assert_eq!(
            Waypoint::try_from(json!({"id": 1, "name": "A", "latitude": 13.7, "longitude": "east"})),
            Err(WaypointError::NonNumeric {
                field: "longitude",
                value: "east".to_string()
            })
        );
        assert!(matches!(
            Waypoint::try_from(json!({"id": 1, "name": "A", "latitude": true, "longitude": 1.0})),
            Err(WaypointError::NonNumeric { field: "latitude", .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(matches!(
            Waypoint::try_from(json!({"id": 1, "name": "A", "latitude": 91.0, "longitude": 0.0})),
            Err(WaypointError::OutOfRange { field: "latitude", .. })
        ));
        assert!(matches!(
            Waypoint::try_from(json!({"id": 1, "name": "A", "latitude": 0.0, "longitude": -180.5})),
            Err(WaypointError::OutOfRange { field: "longitude", .. })
        ));
        assert!(matches!(
            Waypoint::try_from(json!({"id": 1, "name": "A", "latitude": "inf", "longitude": 0.0})),
            Err(WaypointError::OutOfRange { field: "latitude", .. })
        ));
    }

    #[test]
    fn ids_beyond_js_safe_range_become_text() {
        let wp = Waypoint::try_from(json!({"id": 9007199254740993_i64, "name": "big", "latitude": 1.0, "longitude": 1.0}))
            .unwrap();
        assert_eq!(wp.id, WaypointId::Text("9007199254740993".to_string()));

        let wp = Waypoint::try_from(json!({"id": -9007199254740993_i64, "name": "neg", "latitude": 1.0, "longitude": 1.0}))
            .unwrap();
        assert_eq!(wp.id, WaypointId::Text("-9007199254740993".to_string()));

        let wp = Waypoint::try_from(json!({"id": MAX_SAFE_INTEGER, "name": "edge", "latitude": 1.0, "longitude": 1.0}))
            .unwrap();
        assert_eq!(wp.id, WaypointId::Number(MAX_SAFE_INTEGER));

        let wp = Waypoint::try_from(json!({"id": 2.5, "name": "float", "latitude": 1.0, "longitude": 1.0}))
            .unwrap();
        assert_eq!(wp.id, WaypointId::Text("2.5".to_string()));
    }

    #[test]
    fn rejects_non_objects_and_bad_ids() {
        assert!(matches!(
            Waypoint::try_from(json!([13.75, 100.5])),
            Err(WaypointError::Malformed(_))
        ));
        assert_eq!(
            Waypoint::try_from(json!({"name": "A", "latitude": 1.0, "longitude": 1.0})),
            Err(WaypointError::MissingField("id"))
        );
        assert!(matches!(
            Waypoint::try_from(json!({"id": {"x": 1}, "name": "A", "latitude": 1.0, "longitude": 1.0})),
            Err(WaypointError::InvalidField { field: "id", .. })
        ));
    }

    #[test]
    fn validation_skips_invalid_records_and_keeps_order() {
        let result = validate_waypoints(vec![
            json!({"id": 1, "name": "A", "latitude": 13.75, "longitude": 100.50}),
            json!({"id": 2, "name": "broken", "latitude": "n/a", "longitude": 100.0}),
            json!("not a record"),
            json!({"id": 3, "name": "C", "latitude": 9.50, "longitude": 102.83}),
        ]);

        let names: Vec<_> = result.waypoints.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        let rejected: Vec<_> = result.rejected.iter().map(|(i, _)| *i).collect();
        assert_eq!(rejected, vec![1, 2]);
        assert!(result.duplicate_ids.is_empty());
    }

    #[test]
    fn duplicate_ids_are_kept_but_reported() {
        let result = validate_waypoints(vec![
            json!({"id": 7, "name": "A", "latitude": 1.0, "longitude": 1.0}),
            json!({"id": 7, "name": "B", "latitude": 2.0, "longitude": 2.0}),
        ]);
        assert_eq!(result.waypoints.len(), 2);
        assert_eq!(result.duplicate_ids, vec![WaypointId::Number(7)]);
    }
}
