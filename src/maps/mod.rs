// Módulo de mapas: trait común + implementación Leaflet

pub mod leaflet;
pub mod traits;

pub use leaflet::LeafletRenderer;
pub use traits::{MapError, MapRenderer};
