pub mod panel;
pub mod waypoint;

pub use panel::Panel;
pub use waypoint::{validate_waypoints, RawWaypoint, ValidatedWaypoints, Waypoint, WaypointError, WaypointId};
