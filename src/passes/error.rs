use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PassError {
    #[error("Invalid constellation {name}: revisit interval must be positive, got {revisit_hours}h")]
    InvalidConstellation { name: String, revisit_hours: f64 },
    #[error("Time arithmetic overflow for {0}")]
    TimeOverflow(String),
}
