use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather snapshot read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Weather snapshot parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid weather snapshot: {0}")]
    InvalidSnapshot(String),
}
