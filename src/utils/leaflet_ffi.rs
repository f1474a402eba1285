// ============================================================================
// LEAFLET FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones de static/leaflet_bridge.js - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Crea el mapa Leaflet en el contenedor. `config` es un `MapConfig` serializado.
    #[wasm_bindgen(js_name = initLeafletMap, catch)]
    pub fn init_leaflet_map(container_id: &str, config: JsValue) -> Result<(), JsValue>;

    /// Borra marcadores y polilínea anteriores y dibuja la escena completa.
    #[wasm_bindgen(js_name = renderMapScene, catch)]
    pub fn render_map_scene(scene: JsValue) -> Result<(), JsValue>;
}

/// Texto legible de una excepción JS
pub fn js_error_message(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(error, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", error))
}
