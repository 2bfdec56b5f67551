//! Coordinates, great-circle distance and the page-address coordinate encoding.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl UserCoordinate {
    /// Returns `None` for anything outside valid degree ranges (or NaN).
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let valid = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng);
        valid.then_some(Self { lat, lng })
    }

    /// Rebuilds a coordinate from the `user_lat` / `user_lng` page parameters.
    /// Both must be present and valid.
    pub fn from_query_params(user_lat: &GeoQueryParam, user_lng: &GeoQueryParam) -> Option<Self> {
        Self::new(user_lat.0?, user_lng.0?)
    }

    pub fn to_query_params(&self) -> (GeoQueryParam, GeoQueryParam) {
        (GeoQueryParam(Some(self.lat)), GeoQueryParam(Some(self.lng)))
    }
}

/// Haversine distance in meters.
pub fn distance_meters(a: &UserCoordinate, b: &UserCoordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlng = (b.lng - a.lng).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    // rounding can push h a hair above 1 for antipodal points
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

pub fn format_distance_km(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}

/// Annotation shown in map popups and cards.
pub fn distance_label(meters: f64) -> String {
    format!("現在地から約 {}", format_distance_km(meters))
}

/// One coordinate half carried in the page address. Empty means absent.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoQueryParam(pub Option<f64>);

impl Display for GeoQueryParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => Ok(()),
        }
    }
}

// Never fails: a malformed value in the address is treated as absent.
impl FromStr for GeoQueryParam {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        Ok(GeoQueryParam(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coord(lat: f64, lng: f64) -> UserCoordinate {
        UserCoordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn tokyo_to_osaka_is_about_400_km() {
        let tokyo = coord(35.6812, 139.7671);
        let osaka = coord(34.7024, 135.4959);
        let d = distance_meters(&tokyo, &osaka);
        assert!((d - 403_000.0).abs() < 5_000.0, "got {d}");
        assert_eq!(format_distance_km(d), format!("{:.1} km", d / 1000.0));
    }

    #[test]
    fn distance_label_rounds_to_one_decimal() {
        assert_eq!(distance_label(1_234.0), "現在地から約 1.2 km");
        assert_eq!(distance_label(0.0), "現在地から約 0.0 km");
        assert_eq!(distance_label(12_960.0), "現在地から約 13.0 km");
    }

    #[test]
    fn coordinate_survives_page_address_round_trip() {
        let original = coord(35.681200, 139.767100);
        let (lat, lng) = original.to_query_params();
        let lat: GeoQueryParam = lat.to_string().parse().unwrap();
        let lng: GeoQueryParam = lng.to_string().parse().unwrap();
        assert_eq!(lat.to_string(), "35.6812");
        assert_eq!(lng.to_string(), "139.7671");
        assert_eq!(UserCoordinate::from_query_params(&lat, &lng), Some(coord(35.6812, 139.7671)));
    }

    #[test]
    fn missing_or_invalid_params_give_no_coordinate() {
        let empty: GeoQueryParam = "".parse().unwrap();
        let lat: GeoQueryParam = "35.0".parse().unwrap();
        assert_eq!(UserCoordinate::from_query_params(&lat, &empty), None);
        assert_eq!("abc".parse::<GeoQueryParam>().unwrap(), GeoQueryParam(None));

        let out_of_range: GeoQueryParam = "91".parse().unwrap();
        let lng: GeoQueryParam = "139".parse().unwrap();
        assert_eq!(UserCoordinate::from_query_params(&out_of_range, &lng), None);

        let nan: GeoQueryParam = "NaN".parse().unwrap();
        assert_eq!(nan, GeoQueryParam(None));
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0, lng1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lng2 in -180.0f64..=180.0,
        ) {
            let a = coord(lat1, lng1);
            let b = coord(lat2, lng2);
            let ab = distance_meters(&a, &b);
            let ba = distance_meters(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-6);
            prop_assert!(ab >= 0.0);
            prop_assert!(ab <= std::f64::consts::PI * EARTH_RADIUS_M + 1e-6);
        }

        #[test]
        fn distance_to_self_is_zero(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let a = coord(lat, lng);
            prop_assert_eq!(distance_meters(&a, &a), 0.0);
        }

        #[test]
        fn query_param_display_parses_back(lat in -90.0f64..=90.0) {
            let param = GeoQueryParam(Some(lat));
            let parsed: GeoQueryParam = param.to_string().parse().unwrap();
            prop_assert_eq!(parsed, param);
        }
    }
}
