use crate::constants::EARTH_RADIUS_KM;
use crate::models::distance::DistanceKm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point in decimal degrees. Ranges are not checked here; the dataset is
/// trusted to carry sensible values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinates { lat, lng }
    }

    /// Parse a raw `"lat,lon"` value, returning `None` for anything that is
    /// not exactly two finite numbers.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Same as [`Coordinates::parse`] for values that may be missing entirely.
    pub fn parse_opt(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    pub fn distance_km(&self, other: &Coordinates) -> DistanceKm {
        DistanceKm::from_raw(self.distance_to(other))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinates {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Location>().map(|location| location.coordinates)
    }
}

/// Parsed coordinates together with the dataset's own spelling of them
/// (`"1.30,103.80"` stays `"1.30,103.80"` rather than becoming `"1.3,103.8"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub coordinates: Coordinates,
    text: String,
}

impl Location {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    pub fn parse_opt(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }

    /// Normalized `"lat,lon"` text with surrounding whitespace removed.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Empty coordinate value".to_string());
        }

        let tokens: Vec<&str> = s.split(',').map(str::trim).collect();
        if tokens.len() != 2 {
            return Err(format!(
                "Invalid coordinate '{}': expected 'lat,lon', got {} part(s)",
                s,
                tokens.len()
            ));
        }

        let lat = parse_degrees(tokens[0])
            .ok_or_else(|| format!("Invalid latitude '{}' in coordinate '{}'", tokens[0], s))?;
        let lng = parse_degrees(tokens[1])
            .ok_or_else(|| format!("Invalid longitude '{}' in coordinate '{}'", tokens[1], s))?;

        Ok(Location {
            coordinates: Coordinates { lat, lng },
            text: format!("{},{}", tokens[0], tokens[1]),
        })
    }
}

fn parse_degrees(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let coords = Coordinates::parse("1.3521,103.8198").unwrap();
        assert_eq!(coords.lat, 1.3521);
        assert_eq!(coords.lng, 103.8198);

        let spaced = Coordinates::parse("  -33.86 , 151.21 ").unwrap();
        assert_eq!(spaced, Coordinates::new(-33.86, 151.21));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Coordinates::parse("").is_none());
        assert!(Coordinates::parse("   ").is_none());
        assert!(Coordinates::parse("1.35 103.82").is_none()); // no comma
        assert!(Coordinates::parse("1.35,abc").is_none());
        assert!(Coordinates::parse("1.35,").is_none());
        assert!(Coordinates::parse("1,2,3").is_none());
        assert!(Coordinates::parse("NaN,103.8").is_none());
        assert!(Coordinates::parse("1.35,inf").is_none());
        assert!(Coordinates::parse_opt(None).is_none());
    }

    #[test]
    fn test_parse_does_not_enforce_ranges() {
        let coords = Coordinates::parse("95.0,200.0").unwrap();
        assert_eq!(coords.lat, 95.0);
    }

    #[test]
    fn test_from_str_reports_reason() {
        let err = "1.35;103.82".parse::<Coordinates>().unwrap_err();
        assert!(err.contains("expected 'lat,lon'"), "{err}");

        let err = "x,103.82".parse::<Coordinates>().unwrap_err();
        assert!(err.contains("latitude"), "{err}");
    }

    #[test]
    fn test_distance_calculation() {
        let paris = Coordinates::new(48.8566, 2.3522);
        let london = Coordinates::new(51.5074, -0.1278);

        let distance = paris.distance_to(&london);
        // Paris to London is approximately 344 km
        assert!((distance - 344.0).abs() < 10.0);
    }

    #[test]
    fn test_distance_identical_points_is_zero() {
        let p = Coordinates::new(1.3521, 103.8198);
        assert_eq!(p.distance_to(&p), 0.0);
        assert_eq!(format!("{}", p.distance_km(&p)), "0.00 km");
    }

    #[test]
    fn test_distance_quarter_meridian() {
        let origin = Coordinates::new(0.0, 0.0);
        let quarter = Coordinates::new(0.0, 90.0);
        assert!((origin.distance_to(&quarter) - 10007.5).abs() < 0.5);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (Coordinates::new(1.35, 103.82), Coordinates::new(1.30, 103.80)),
            (Coordinates::new(-45.0, 170.0), Coordinates::new(60.0, -20.0)),
            (Coordinates::new(89.9, 0.0), Coordinates::new(-89.9, 179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.distance_to(&b), b.distance_to(&a));
        }
    }

    #[test]
    fn test_location_keeps_dataset_spelling() {
        let location = Location::parse(" 1.30 , 103.80 ").unwrap();
        assert_eq!(location.as_str(), "1.30,103.80");
        assert_eq!(location.to_string(), "1.30,103.80");
        assert_eq!(location.coordinates, Coordinates::new(1.3, 103.8));
        assert!(Location::parse_opt(Some("1.30")).is_none());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let p = Coordinates::new(1.35, 103.82);
        assert_eq!(p.to_string(), "1.35,103.82");
        assert_eq!(Coordinates::parse(&p.to_string()), Some(p));
    }
}
