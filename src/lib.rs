// ============================================================================
// RAIM PREDICTION MAP - FRONTEND YEW (RUST/WASM)
// ============================================================================
// - Components: vistas Yew (sin lógica)
// - Hooks: conectan componentes con stores y services
// - Stores: estado tipado con reducers
// - ViewModels: derivación de la escena del mapa
// - Services: SOLO comunicación API + validación de respuesta
// - Maps: renderizador Leaflet detrás de un trait
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod maps;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;

/// Punto de entrada: panic hook, logging y montaje de la app
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level));
    log::info!("🚀 RAIM Prediction Map starting... (endpoint: {})", CONFIG.locations_url());

    yew::Renderer::<App>::new().render();
}
