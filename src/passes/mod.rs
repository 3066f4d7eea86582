mod error;
mod pass_finder;
mod timing;
mod types;

pub use error::PassError;
pub use pass_finder::{last_available_images, predict_all, LastImage};
pub use timing::{format_time_delta, reference_timing};
pub use types::{format_usd, SatellitePass};
