pub mod location_store;
pub mod panel_store;
pub mod route_form_store;

pub use location_store::{LoadStatus, LocationAction, LocationStore};
pub use panel_store::{PanelAction, PanelStore};
pub use route_form_store::{RouteFormAction, RouteFormStore};
