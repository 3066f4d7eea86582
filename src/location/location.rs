use serde::{Deserialize, Serialize};

use super::error::LocationError;

/// A validated geographic point. Fields are private so a constructed
/// `Location` can never hold out-of-range coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    name: String,
    latitude: f64,
    longitude: f64,
    elevation_m: f64,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation_m: f64,
    ) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
            elevation_m,
        })
    }

    pub fn brussels() -> Self {
        Self {
            name: "Brussels".into(),
            latitude: 50.8503,
            longitude: 4.3517,
            elevation_m: 100.0,
        }
    }

    /// Location at the given coordinates, named after them when no name is given.
    pub fn from_coordinates(
        latitude: f64,
        longitude: f64,
        name: Option<&str>,
    ) -> Result<Self, LocationError> {
        let name = name
            .map(String::from)
            .unwrap_or_else(|| format!("Location ({:.4}, {:.4})", latitude, longitude));
        Self::new(name, latitude, longitude, 0.0)
    }

    /// Parses a `"lat,lon"` pair as written in config files.
    pub fn parse(
        name: &str,
        coordinates: &str,
        elevation_m: Option<f64>,
    ) -> Result<Self, LocationError> {
        let invalid = || LocationError::InvalidCoordinates(coordinates.to_string());
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return Err(invalid());
        }
        let lat = parts[0].parse().map_err(|_| invalid())?;
        let lon = parts[1].parse().map_err(|_| invalid())?;
        Self::new(name, lat, lon, elevation_m.unwrap_or(0.0))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }
}

/// A user-defined location as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedLocation {
    pub name: String,
    pub coordinates: String,
    #[serde(default)]
    pub elevation_m: f64,
}

impl NamedLocation {
    pub fn to_location(&self) -> Result<Location, LocationError> {
        Location::parse(&self.name, &self.coordinates, Some(self.elevation_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_latitude() {
        assert_eq!(
            Location::new("x", 90.5, 0.0, 0.0),
            Err(LocationError::LatitudeOutOfRange(90.5))
        );
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert_eq!(
            Location::new("x", 0.0, -180.01, 0.0),
            Err(LocationError::LongitudeOutOfRange(-180.01))
        );
    }

    #[test]
    fn accepts_boundaries() {
        assert!(Location::new("pole", 90.0, 180.0, 0.0).is_ok());
        assert!(Location::new("pole", -90.0, -180.0, 0.0).is_ok());
    }

    #[test]
    fn default_name_from_coordinates() {
        let loc = Location::from_coordinates(48.8566, 2.3522, None).unwrap();
        assert_eq!(loc.name(), "Location (48.8566, 2.3522)");
        let named = Location::from_coordinates(48.8566, 2.3522, Some("Paris")).unwrap();
        assert_eq!(named.name(), "Paris");
    }

    #[test]
    fn parses_coordinate_string() {
        let loc = Location::parse("Home", " 50.8 , 4.3 ", Some(12.0)).unwrap();
        assert_eq!(loc.latitude(), 50.8);
        assert_eq!(loc.longitude(), 4.3);
        assert_eq!(loc.elevation_m(), 12.0);
    }

    #[test]
    fn rejects_malformed_coordinate_string() {
        assert!(matches!(
            Location::parse("Home", "50.8", None),
            Err(LocationError::InvalidCoordinates(_))
        ));
        assert!(matches!(
            Location::parse("Home", "north,east", None),
            Err(LocationError::InvalidCoordinates(_))
        ));
        assert_eq!(
            Location::parse("Home", "95,4", None),
            Err(LocationError::LatitudeOutOfRange(95.0))
        );
    }
}
