use serde::Serialize;
use strum_macros::Display;

/// Satellite operators, public programmes and data platforms. Platforms
/// without an entry in the built-in catalog are reachable through
/// `Catalog::with_override`.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    #[strum(to_string = "Sentinel (ESA Copernicus)")]
    SentinelEsa,
    #[strum(to_string = "Landsat (USGS)")]
    LandsatUsgs,
    #[strum(to_string = "Maxar (WorldView, GeoEye)")]
    Maxar,
    #[strum(to_string = "Planet Labs (PlanetScope, SkySat)")]
    Planet,
    #[strum(to_string = "Airbus (Pleiades, SPOT)")]
    Airbus,
    #[strum(to_string = "BlackSky Global")]
    BlackSky,
    #[strum(to_string = "ICEYE (SAR)")]
    Iceye,
    #[strum(to_string = "Capella Space (SAR)")]
    Capella,
    #[strum(to_string = "Umbra (SAR)")]
    Umbra,
    #[strum(to_string = "CloudFerro (CREODIAS)")]
    CloudFerro,
    #[strum(to_string = "AWS (Open Data & Commercial)")]
    Aws,
    #[strum(to_string = "Google Earth Engine")]
    Google,
    #[strum(to_string = "Microsoft Planetary Computer")]
    Azure,
    #[strum(to_string = "UP42 Marketplace")]
    Up42,
}

impl Provider {
    /// Where imagery from this provider can be ordered or browsed.
    pub fn ordering_url(&self) -> Option<&'static str> {
        match self {
            Provider::SentinelEsa => Some("https://scihub.copernicus.eu/dhus/"),
            Provider::LandsatUsgs => Some("https://earthexplorer.usgs.gov/"),
            Provider::Maxar => Some("https://discover.maxar.com/"),
            Provider::Planet => Some("https://www.planet.com/explorer/"),
            Provider::Airbus => Some("https://www.intelligence-airbusds.com/geostore/"),
            Provider::BlackSky => Some("https://platform.blacksky.com/"),
            Provider::Iceye => Some("https://www.iceye.com/sar-data"),
            Provider::Capella => Some("https://console.capellaspace.com/"),
            Provider::CloudFerro => Some("https://creodias.eu/"),
            Provider::Aws => Some("https://registry.opendata.aws/"),
            Provider::Up42 => Some("https://console.up42.com/"),
            Provider::Umbra | Provider::Google | Provider::Azure => None,
        }
    }

    /// Short operator name used in tables.
    pub fn short_name(&self) -> &'static str {
        match self {
            Provider::SentinelEsa => "ESA",
            Provider::LandsatUsgs => "USGS",
            Provider::Maxar => "Maxar",
            Provider::Planet => "Planet",
            Provider::Airbus => "Airbus",
            Provider::BlackSky => "BlackSky",
            Provider::Iceye => "ICEYE",
            Provider::Capella => "Capella Space",
            Provider::Umbra => "Umbra",
            Provider::CloudFerro => "CloudFerro",
            Provider::Aws => "AWS",
            Provider::Google => "Google",
            Provider::Azure => "Microsoft",
            Provider::Up42 => "UP42",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_full_provider_name() {
        assert_eq!(Provider::SentinelEsa.to_string(), "Sentinel (ESA Copernicus)");
        assert_eq!(Provider::Iceye.to_string(), "ICEYE (SAR)");
    }

    #[test]
    fn platforms_without_storefront_have_no_url() {
        assert!(Provider::Umbra.ordering_url().is_none());
        assert!(Provider::Google.ordering_url().is_none());
        assert_eq!(
            Provider::LandsatUsgs.ordering_url(),
            Some("https://earthexplorer.usgs.gov/")
        );
    }
}
