pub mod use_locations;
pub mod use_panels;
pub mod use_route_form;

pub use use_locations::{use_locations, UseLocationsHandle};
pub use use_panels::{use_panels, UsePanelsHandle};
pub use use_route_form::{use_route_form, UseRouteFormHandle};
