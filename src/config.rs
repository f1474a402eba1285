// ============================================================================
// CONFIGURACIÓN - Valores fijados en tiempo de compilación
// ============================================================================
// build.rs reenvía las claves de .env como rustc-env; aquí se leen con
// option_env! y se aplican los valores por defecto.
// ============================================================================

use serde::Serialize;

use crate::utils::constants::LOCATIONS_PATH;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub log_level: log::Level,
    pub map_config: MapConfig,
}

/// Vista inicial del mapa y estilo de la ruta. Se envía tal cual al bridge JS.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: f64,
    pub zoom_control_position: String,
    pub tile_url: String,
    pub attribution: String,
    pub route_color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8080".to_string(),
            log_level: log::Level::Info,
            map_config: MapConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 9.503243879785233,
            center_lng: 102.83203125,
            zoom: 6.0,
            zoom_control_position: "bottomleft".to_string(),
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
            route_color: "red".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "BACKEND_URL" => option_env!("BACKEND_URL"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            "MAP_CENTER_LAT" => option_env!("MAP_CENTER_LAT"),
            "MAP_CENTER_LNG" => option_env!("MAP_CENTER_LNG"),
            "MAP_ZOOM" => option_env!("MAP_ZOOM"),
            "MAP_TILE_URL" => option_env!("MAP_TILE_URL"),
            "ROUTE_COLOR" => option_env!("ROUTE_COLOR"),
            _ => None,
        })
    }

    /// Construye la configuración a partir de una función de búsqueda.
    /// Valores ausentes o no parseables caen al valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let defaults = Self::default();
        let map_defaults = defaults.map_config.clone();

        let parse_f64 = |key: &str, fallback: f64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(fallback)
        };
        let string_or = |key: &str, fallback: String| {
            lookup(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        Self {
            backend_url: string_or("BACKEND_URL", defaults.backend_url)
                .trim_end_matches('/')
                .to_string(),
            log_level: lookup("LOG_LEVEL")
                .and_then(|v| v.trim().parse::<log::Level>().ok())
                .unwrap_or(defaults.log_level),
            map_config: MapConfig {
                center_lat: parse_f64("MAP_CENTER_LAT", map_defaults.center_lat),
                center_lng: parse_f64("MAP_CENTER_LNG", map_defaults.center_lng),
                zoom: parse_f64("MAP_ZOOM", map_defaults.zoom),
                zoom_control_position: map_defaults.zoom_control_position,
                tile_url: string_or("MAP_TILE_URL", map_defaults.tile_url),
                attribution: map_defaults.attribution,
                route_color: string_or("ROUTE_COLOR", map_defaults.route_color),
            },
        }
    }

    /// URL completa del endpoint de ubicaciones
    pub fn locations_url(&self) -> String {
        locations_url_for(&self.backend_url)
    }
}

/// `<base>/locations`, sin barra doble si la base termina en '/'
pub fn locations_url_for(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), LOCATIONS_PATH)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
