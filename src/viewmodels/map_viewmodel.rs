// ============================================================================
// MAP VIEWMODEL - Preparación de datos del mapa
// ============================================================================
// Deriva marcadores + polilínea a partir de los waypoints. Sin estado:
// cada cambio de la lista genera una escena completa nueva.
// ============================================================================

use serde::Serialize;

use crate::config::CONFIG;
use crate::maps::{MapError, MapRenderer};
use crate::models::{Waypoint, WaypointId};
use crate::utils::format_coordinate;

/// Contenido del popup de un marcador
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MarkerPopup {
    pub title: String,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub id: WaypointId,
    pub position: [f64; 2], // [lat, lng]
    pub popup: MarkerPopup,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapPolyline {
    pub vertices: Vec<[f64; 2]>,
    pub color: String,
}

/// Escena completa que se entrega al renderizador
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapScene {
    pub markers: Vec<MapMarker>,
    pub route: MapPolyline,
}

/// ViewModel del mapa - SOLO lógica de preparación
pub struct MapViewModel;

impl MapViewModel {
    /// Un marcador por waypoint y una polilínea en el orden de la lista
    pub fn build_scene(waypoints: &[Waypoint], route_color: &str) -> MapScene {
        let markers = waypoints
            .iter()
            .map(|wp| MapMarker {
                id: wp.id.clone(),
                position: wp.position(),
                popup: MarkerPopup {
                    title: wp.name.clone(),
                    latitude: format_coordinate(wp.latitude),
                    longitude: format_coordinate(wp.longitude),
                },
            })
            .collect();

        MapScene {
            markers,
            route: MapPolyline {
                vertices: waypoints.iter().map(Waypoint::position).collect(),
                color: route_color.to_string(),
            },
        }
    }

    /// Redibuja todo el mapa con la lista actual
    pub fn update_map<R: MapRenderer + ?Sized>(
        renderer: &mut R,
        waypoints: &[Waypoint],
    ) -> Result<(), MapError> {
        let scene = Self::build_scene(waypoints, &CONFIG.map_config.route_color);
        log::info!(
            "🗺️ ViewModel: {} marcadores, polilínea de {} vértices",
            scene.markers.len(),
            scene.route.vertices.len()
        );
        renderer.draw(&scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::models::validate_waypoints;
    use serde_json::json;

    /// Renderizador de pruebas: guarda las escenas recibidas
    #[derive(Default)]
    struct RecordingRenderer {
        ready: bool,
        scenes: Vec<MapScene>,
    }

    impl MapRenderer for RecordingRenderer {
        fn initialize(&mut self, _config: &MapConfig) -> Result<(), MapError> {
            self.ready = true;
            Ok(())
        }

        fn draw(&mut self, scene: &MapScene) -> Result<(), MapError> {
            if !self.ready {
                return Err(MapError::NotReady);
            }
            self.scenes.push(scene.clone());
            Ok(())
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    fn sample() -> Vec<Waypoint> {
        validate_waypoints(vec![
            json!({"id": 1, "name": "A", "latitude": 13.75, "longitude": 100.50}),
            json!({"id": 2, "name": "B", "latitude": 9.50, "longitude": 102.83}),
        ])
        .waypoints
    }

    #[test]
    fn two_waypoints_give_two_markers_and_ordered_route() {
        let scene = MapViewModel::build_scene(&sample(), "red");

        assert_eq!(scene.markers.len(), 2);
        assert_eq!(scene.route.vertices, vec![[13.75, 100.50], [9.50, 102.83]]);
        assert_eq!(scene.route.color, "red");

        let first = &scene.markers[0].popup;
        assert_eq!(first.title, "A");
        assert_eq!(first.latitude, "13.75000");
        assert_eq!(first.longitude, "100.50000");
        assert_eq!(scene.markers[1].popup.latitude, "9.50000");
        assert_eq!(scene.markers[1].popup.longitude, "102.83000");
    }

    #[test]
    fn markers_and_vertices_follow_list_order() {
        let waypoints: Vec<Waypoint> = (0..25)
            .map(|i| Waypoint {
                id: WaypointId::Number(i),
                name: format!("WP{}", i),
                latitude: 30.0 - i as f64,
                longitude: 90.0 + (i % 7) as f64,
            })
            .collect();
        let scene = MapViewModel::build_scene(&waypoints, "red");

        assert_eq!(scene.markers.len(), waypoints.len());
        assert_eq!(scene.route.vertices.len(), waypoints.len());
        for ((marker, vertex), wp) in scene.markers.iter().zip(&scene.route.vertices).zip(&waypoints) {
            assert_eq!(marker.id, wp.id);
            assert_eq!(marker.position, wp.position());
            assert_eq!(*vertex, wp.position());
        }
    }

    #[test]
    fn empty_list_gives_empty_scene() {
        let scene = MapViewModel::build_scene(&[], "red");
        assert!(scene.markers.is_empty());
        assert!(scene.route.vertices.is_empty());
    }

    #[test]
    fn single_waypoint_gives_degenerate_route() {
        let scene = MapViewModel::build_scene(&sample()[..1], "red");
        assert_eq!(scene.markers.len(), 1);
        assert_eq!(scene.route.vertices, vec![[13.75, 100.50]]);
    }

    #[test]
    fn update_requires_initialized_renderer() {
        let mut renderer = RecordingRenderer::default();
        assert_eq!(
            MapViewModel::update_map(&mut renderer, &sample()),
            Err(MapError::NotReady)
        );

        renderer.initialize(&MapConfig::default()).unwrap();
        MapViewModel::update_map(&mut renderer, &sample()).unwrap();
        MapViewModel::update_map(&mut renderer, &[]).unwrap();
        assert_eq!(renderer.scenes.len(), 2);
        assert_eq!(renderer.scenes[0].markers.len(), 2);
        assert!(renderer.scenes[1].markers.is_empty());
    }

    #[test]
    fn scene_serializes_for_the_bridge() {
        let scene = MapViewModel::build_scene(&sample()[..1], "red");
        let value = serde_json::to_value(&scene).unwrap();
        assert_eq!(
            value,
            json!({
                "markers": [{
                    "id": 1,
                    "position": [13.75, 100.5],
                    "popup": {"title": "A", "latitude": "13.75000", "longitude": "100.50000"}
                }],
                "route": {"vertices": [[13.75, 100.5]], "color": "red"}
            })
        );
    }

    #[test]
    fn large_ids_keep_every_marker_drawable() {
        let waypoints = validate_waypoints(vec![
            json!({"id": 1, "name": "A", "latitude": 13.75, "longitude": 100.50}),
            json!({"id": 9007199254740993_i64, "name": "B", "latitude": 9.50, "longitude": 102.83}),
        ])
        .waypoints;
        let scene = MapViewModel::build_scene(&waypoints, "red");
        assert_eq!(scene.markers.len(), 2);
        assert_eq!(scene.route.vertices.len(), 2);

        // Todo id numérico que llega a la escena cabe en un número JS
        for marker in &scene.markers {
            if let WaypointId::Number(n) = marker.id {
                assert!(n.abs() <= crate::models::waypoint::MAX_SAFE_INTEGER);
            }
        }
        let value = serde_json::to_value(&scene).unwrap();
        assert_eq!(value["markers"][1]["id"], json!("9007199254740993"));
    }
}
