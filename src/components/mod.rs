pub mod app;
pub mod map;
pub mod navbar;
pub mod output_box;
pub mod route_request_box;
pub mod sky_plot;

pub use app::App;
pub use map::MapView;
pub use navbar::Navbar;
pub use output_box::OutputBox;
pub use route_request_box::RouteRequestBox;
pub use sky_plot::SkyPlot;
