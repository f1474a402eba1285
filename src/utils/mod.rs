// Utils compartidos

pub mod constants;
pub mod format;
pub mod leaflet_ffi;

pub use constants::*;
pub use format::*;
