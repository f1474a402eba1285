/// Ruta del endpoint de ubicaciones, relativa a `BACKEND_URL`
pub const LOCATIONS_PATH: &str = "/locations";

/// Id del contenedor DOM donde Leaflet monta el mapa
pub const MAP_CONTAINER_ID: &str = "map";

/// Texto del logo en la barra de navegación
pub const APP_TITLE: &str = "RAIM Prediction System | KMITL";

/// Imagen estática del sky plot (copiada por Trunk desde static/)
pub const SKYPLOT_IMAGE_URL: &str = "static/skyplot.svg";

/// Decimales mostrados en los popups de los marcadores
pub const POPUP_COORDINATE_DECIMALS: usize = 5;
