use crate::config::MapConfig;
use crate::viewmodels::MapScene;

/// Trait común para renderizadores de mapas
pub trait MapRenderer {
    /// Crear el mapa base: centro, zoom, tiles y control de zoom
    fn initialize(&mut self, config: &MapConfig) -> Result<(), MapError>;

    /// Reemplazar marcadores y polilínea por los de la escena
    fn draw(&mut self, scene: &MapScene) -> Result<(), MapError>;

    /// Verificar si el mapa está listo
    fn is_ready(&self) -> bool;
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NotReady,
    Serialization(String),
    Js(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::NotReady => write!(f, "Map is not ready"),
            MapError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            MapError::Js(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
