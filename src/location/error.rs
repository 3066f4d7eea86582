use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LocationError {
    #[error("Latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),
    #[error("Longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),
    #[error("min_{axis} must be less than max_{axis} ({min} >= {max})")]
    InvalidBounds {
        axis: &'static str,
        min: f64,
        max: f64,
    },
    #[error("Invalid coordinates '{0}', expected \"lat,lon\"")]
    InvalidCoordinates(String),
}
