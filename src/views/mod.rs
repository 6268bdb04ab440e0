//! Page and dashboard components

mod audit;
mod dashboard;
mod landing;
mod not_found;
mod recommendations;

pub use audit::*;
pub use dashboard::*;
pub use landing::*;
pub use not_found::*;
pub use recommendations::*;
