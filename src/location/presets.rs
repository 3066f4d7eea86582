use super::Location;

/// `(name, latitude, longitude, elevation_m)`
pub type Preset = (&'static str, f64, f64, f64);

pub const PRESETS: &[Preset] = &[
    // Europe
    ("brussels", 50.8503, 4.3517, 100.0),
    ("london", 51.5074, -0.1278, 11.0),
    ("paris", 48.8566, 2.3522, 35.0),
    ("amsterdam", 52.3676, 4.9041, -2.0),
    ("berlin", 52.5200, 13.4050, 34.0),
    ("rome", 41.9028, 12.4964, 21.0),
    ("madrid", 40.4168, -3.7038, 667.0),
    ("vienna", 48.2082, 16.3738, 171.0),
    ("prague", 50.0755, 14.4378, 235.0),
    ("stockholm", 59.3293, 18.0686, 28.0),
    ("oslo", 59.9139, 10.7522, 23.0),
    ("copenhagen", 55.6761, 12.5683, 14.0),
    ("helsinki", 60.1699, 24.9384, 26.0),
    ("dublin", 53.3498, -6.2603, 20.0),
    ("lisbon", 38.7223, -9.1393, 2.0),
    ("zurich", 47.3769, 8.5417, 408.0),
    ("geneva", 46.2044, 6.1432, 375.0),
    ("munich", 48.1351, 11.5820, 519.0),
    ("barcelona", 41.3851, 2.1734, 12.0),
    ("milan", 45.4642, 9.1900, 120.0),
    // North America
    ("new york", 40.7128, -74.0060, 10.0),
    ("los angeles", 34.0522, -118.2437, 71.0),
    ("san francisco", 37.7749, -122.4194, 16.0),
    ("chicago", 41.8781, -87.6298, 181.0),
    ("washington dc", 38.9072, -77.0369, 22.0),
    ("boston", 42.3601, -71.0589, 14.0),
    ("seattle", 47.6062, -122.3321, 56.0),
    ("denver", 39.7392, -104.9903, 1609.0),
    ("toronto", 43.6532, -79.3832, 76.0),
    ("vancouver", 49.2827, -123.1207, 0.0),
    ("montreal", 45.5017, -73.5673, 216.0),
    ("mexico city", 19.4326, -99.1332, 2240.0),
    // Asia
    ("tokyo", 35.6762, 139.6503, 40.0),
    ("beijing", 39.9042, 116.4074, 43.0),
    ("shanghai", 31.2304, 121.4737, 4.0),
    ("hong kong", 22.3193, 114.1694, 32.0),
    ("singapore", 1.3521, 103.8198, 15.0),
    ("seoul", 37.5665, 126.9780, 38.0),
    ("mumbai", 19.0760, 72.8777, 14.0),
    ("delhi", 28.7041, 77.1025, 216.0),
    ("bangalore", 12.9716, 77.5946, 920.0),
    ("bangkok", 13.7563, 100.5018, 1.0),
    ("dubai", 25.2048, 55.2708, 5.0),
    ("tel aviv", 32.0853, 34.7818, 5.0),
    // Oceania
    ("sydney", -33.8688, 151.2093, 58.0),
    ("melbourne", -37.8136, 144.9631, 31.0),
    ("auckland", -36.8485, 174.7633, 63.0),
    ("perth", -31.9505, 115.8605, 31.0),
    // South America
    ("sao paulo", -23.5505, -46.6333, 760.0),
    ("rio de janeiro", -22.9068, -43.1729, 11.0),
    ("buenos aires", -34.6037, -58.3816, 25.0),
    ("santiago", -33.4489, -70.6693, 520.0),
    ("bogota", 4.7110, -74.0721, 2640.0),
    ("lima", -12.0464, -77.0428, 154.0),
    // Africa
    ("cairo", 30.0444, 31.2357, 75.0),
    ("cape town", -33.9249, 18.4241, 0.0),
    ("johannesburg", -26.2041, 28.0473, 1753.0),
    ("nairobi", -1.2921, 36.8219, 1795.0),
    ("lagos", 6.5244, 3.3792, 41.0),
    ("casablanca", 33.5731, -7.5898, 27.0),
];

/// Presets grouped by region, in listing order.
pub const REGIONS: &[(&str, &[&str])] = &[
    (
        "Europe",
        &[
            "brussels", "london", "paris", "amsterdam", "berlin", "rome", "madrid", "vienna",
            "prague", "stockholm", "oslo", "copenhagen", "helsinki", "dublin", "lisbon",
            "zurich", "geneva", "munich", "barcelona", "milan",
        ],
    ),
    (
        "North America",
        &[
            "new york", "los angeles", "san francisco", "chicago", "washington dc", "boston",
            "seattle", "denver", "toronto", "vancouver", "montreal", "mexico city",
        ],
    ),
    (
        "Asia",
        &[
            "tokyo", "beijing", "shanghai", "hong kong", "singapore", "seoul", "mumbai", "delhi",
            "bangalore", "bangkok", "dubai", "tel aviv",
        ],
    ),
    ("Oceania", &["sydney", "melbourne", "auckland", "perth"]),
    (
        "South America",
        &["sao paulo", "rio de janeiro", "buenos aires", "santiago", "bogota", "lima"],
    ),
    (
        "Africa",
        &["cairo", "cape town", "johannesburg", "nairobi", "lagos", "casablanca"],
    ),
];

/// Looks a place up in the preset table. `None` means the caller should
/// ask for another name or explicit coordinates.
pub fn resolve(name: &str) -> Option<Location> {
    let normalized = name.trim().to_lowercase();
    let (_, lat, lon, elevation) = PRESETS.iter().find(|(n, ..)| *n == normalized)?;

    let trimmed = name.trim();
    let display = if trimmed.chars().any(char::is_uppercase) {
        trimmed.to_string()
    } else {
        title_case(trimmed)
    };

    match Location::new(display, *lat, *lon, *elevation) {
        Ok(location) => Some(location),
        Err(e) => {
            log::error!("Preset '{}' is invalid: {}", normalized, e);
            None
        }
    }
}

pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for c in s.chars() {
        if boundary {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        boundary = !c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_case_insensitively() {
        let loc = resolve("  LONDON ").unwrap();
        assert_eq!(loc.name(), "LONDON");
        assert_eq!(loc.latitude(), 51.5074);
        assert_eq!(loc.elevation_m(), 11.0);
    }

    #[test]
    fn lowercase_input_is_title_cased() {
        assert_eq!(resolve("new york").unwrap().name(), "New York");
        assert_eq!(resolve("washington dc").unwrap().name(), "Washington Dc");
    }

    #[test]
    fn unknown_place_is_none() {
        assert!(resolve("atlantis").is_none());
    }

    #[test]
    fn every_region_entry_is_a_preset() {
        let total: usize = REGIONS.iter().map(|(_, cities)| cities.len()).sum();
        assert_eq!(total, PRESETS.len());
        for (_, cities) in REGIONS {
            for city in *cities {
                assert!(resolve(city).is_some(), "{}", city);
            }
        }
    }
}
