use crate::config::MapConfig;
use crate::utils::leaflet_ffi::{init_leaflet_map, js_error_message, render_map_scene};
use crate::viewmodels::MapScene;

use super::{MapError, MapRenderer};

/// Renderizador web usando Leaflet (vía static/leaflet_bridge.js)
pub struct LeafletRenderer {
    container_id: String,
    is_ready: bool,
}

impl LeafletRenderer {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
            is_ready: false,
        }
    }
}

impl MapRenderer for LeafletRenderer {
    fn initialize(&mut self, config: &MapConfig) -> Result<(), MapError> {
        if self.is_ready {
            return Ok(());
        }
        log::info!(
            "🗺️ Inicializando Leaflet en #{} ({}, {}) zoom {}",
            self.container_id,
            config.center_lat,
            config.center_lng,
            config.zoom
        );

        let js_config = serde_wasm_bindgen::to_value(config)
            .map_err(|e| MapError::Serialization(e.to_string()))?;
        init_leaflet_map(&self.container_id, js_config)
            .map_err(|e| MapError::Js(js_error_message(&e)))?;

        self.is_ready = true;
        log::info!("✅ Mapa Leaflet inicializado");
        Ok(())
    }

    fn draw(&mut self, scene: &MapScene) -> Result<(), MapError> {
        if !self.is_ready {
            return Err(MapError::NotReady);
        }

        let js_scene = serde_wasm_bindgen::to_value(scene)
            .map_err(|e| MapError::Serialization(e.to_string()))?;
        render_map_scene(js_scene).map_err(|e| MapError::Js(js_error_message(&e)))
    }

    fn is_ready(&self) -> bool {
        self.is_ready
    }
}
