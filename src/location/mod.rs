mod area;
mod error;
mod location;
pub mod presets;

pub use area::{Area, BoundingBox};
pub use error::LocationError;
pub use location::{Location, NamedLocation};
