use crate::coord::Coordinate;
use crate::core::constants::{DEFAULT_DECIMAL_PLACES, MAX_SEXAGESIMAL_PLACES};
use crate::error::GeoCoordError;
use crate::parse::parse_geodetic;
use geo_types::Point;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// Construction validates both values, so a `Geodetic` always holds a finite
/// latitude in [-90, 90] and a finite longitude in [-180, 180].
///
/// # Example
///
/// ```
/// use geocoord_rs::Geodetic;
///
/// # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
/// let g = Geodetic::new(51.5, -0.1)?;
/// assert_eq!(g.to_string(), "N51.50000 W0.10000");
/// assert_eq!(format!("{:.2}", g), "N51.50 W0.10");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geodetic {
    lat: f64,
    lon: f64,
}

impl Geodetic {
    /// Creates a position from decimal degrees.
    ///
    /// # Errors
    ///
    /// - [`GeoCoordError::InvalidLatitude`] if `lat` is not finite or outside [-90, 90]
    /// - [`GeoCoordError::InvalidLongitude`] if `lon` is not finite or outside [-180, 180]
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoCoordError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoCoordError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoCoordError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Builds a position from inverse projection output, folding longitude
    /// back into [-180, 180] and clamping latitude to the poles.
    pub(crate) fn from_projected(lat: f64, lon: f64) -> Self {
        let lon = if lon > 180.0 {
            lon - 360.0
        } else if lon < -180.0 {
            lon + 360.0
        } else {
            lon
        };
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lon: lon.clamp(-180.0, 180.0),
        }
    }

    /// Create a Geodetic from anything exposing x (longitude) and y (latitude).
    ///
    /// # Example
    /// ```
    /// use geocoord_rs::Geodetic;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
    /// // From tuple (lon, lat)
    /// let a = Geodetic::from_coord(&(-2.248, 53.481))?;
    /// // From Point
    /// let b = Geodetic::from_coord(&Point::new(-2.248, 53.481))?;
    /// assert_eq!(a, b);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_coord(coord: &impl Coordinate) -> Result<Self, GeoCoordError> {
        Self::new(coord.y(), coord.x())
    }

    /// Creates a position from whole degrees and decimal minutes.
    ///
    /// The sign of each degree value gives the hemisphere, including `-0.0`
    /// for positions just south of the equator or west of Greenwich.
    ///
    /// # Errors
    ///
    /// - [`GeoCoordError::InvalidComponent`] for a non-integral or out of range
    ///   degree value, or minutes outside [0, 60)
    /// - the range errors of [`Geodetic::new`] for the combined value
    pub fn from_dm(
        lat_deg: f64,
        lat_min: f64,
        lon_deg: f64,
        lon_min: f64,
    ) -> Result<Self, GeoCoordError> {
        check_degrees("latitude degrees", lat_deg, 90.0)?;
        check_fraction("latitude minutes", lat_min)?;
        check_degrees("longitude degrees", lon_deg, 180.0)?;
        check_fraction("longitude minutes", lon_min)?;

        Self::new(combine(lat_deg, lat_min), combine(lon_deg, lon_min))
    }

    /// Creates a position from whole degrees, whole minutes and decimal seconds.
    ///
    /// # Errors
    ///
    /// As [`Geodetic::from_dm`], plus [`GeoCoordError::InvalidComponent`] for
    /// non-integral minutes or seconds outside [0, 60).
    pub fn from_dms(
        lat_deg: f64,
        lat_min: f64,
        lat_sec: f64,
        lon_deg: f64,
        lon_min: f64,
        lon_sec: f64,
    ) -> Result<Self, GeoCoordError> {
        check_whole("latitude minutes", lat_min)?;
        check_fraction("latitude seconds", lat_sec)?;
        check_whole("longitude minutes", lon_min)?;
        check_fraction("longitude seconds", lon_sec)?;

        Self::from_dm(
            lat_deg,
            lat_min + lat_sec / 60.0,
            lon_deg,
            lon_min + lon_sec / 60.0,
        )
    }

    /// Latitude in decimal degrees, positive north.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees, positive east.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Formats as `N12.34567 W123.45678` with `places` fractional digits.
    pub fn to_decimal_string(&self, places: usize) -> String {
        format!(
            "{}{:.*} {}{:.*}",
            lat_hemisphere(self.lat),
            places,
            self.lat.abs(),
            lon_hemisphere(self.lon),
            places,
            self.lon.abs()
        )
    }

    /// Formats as degrees and decimal minutes, e.g. `N12 34.5' W123 45.6'`.
    ///
    /// `places` is capped at 9.
    pub fn to_dm_string(&self, places: usize) -> String {
        let places = places.min(MAX_SEXAGESIMAL_PLACES);
        let (lat_d, lat_m) = split_dm(self.lat, places);
        let (lon_d, lon_m) = split_dm(self.lon, places);
        format!(
            "{}{} {:.*}' {}{} {:.*}'",
            lat_hemisphere(self.lat),
            lat_d,
            places,
            lat_m,
            lon_hemisphere(self.lon),
            lon_d,
            places,
            lon_m
        )
    }

    /// Formats as degrees, minutes and decimal seconds, e.g. `N12 34 56.7" W123 45 6.7"`.
    ///
    /// `places` is capped at 9.
    pub fn to_dms_string(&self, places: usize) -> String {
        let places = places.min(MAX_SEXAGESIMAL_PLACES);
        let (lat_d, lat_m, lat_s) = split_dms(self.lat, places);
        let (lon_d, lon_m, lon_s) = split_dms(self.lon, places);
        format!(
            "{}{} {} {:.*}\" {}{} {} {:.*}\"",
            lat_hemisphere(self.lat),
            lat_d,
            lat_m,
            places,
            lat_s,
            lon_hemisphere(self.lon),
            lon_d,
            lon_m,
            places,
            lon_s
        )
    }
}

fn check_degrees(field: &'static str, value: f64, limit: f64) -> Result<(), GeoCoordError> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > limit {
        return Err(GeoCoordError::InvalidComponent { field, value });
    }
    Ok(())
}

fn check_whole(field: &'static str, value: f64) -> Result<(), GeoCoordError> {
    if value.fract() != 0.0 {
        return Err(GeoCoordError::InvalidComponent { field, value });
    }
    check_fraction(field, value)
}

fn check_fraction(field: &'static str, value: f64) -> Result<(), GeoCoordError> {
    if !(0.0..60.0).contains(&value) {
        return Err(GeoCoordError::InvalidComponent { field, value });
    }
    Ok(())
}

fn combine(degrees: f64, minutes: f64) -> f64 {
    let magnitude = degrees.abs() + minutes / 60.0;
    if degrees.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

fn lat_hemisphere(lat: f64) -> char {
    if lat < 0.0 { 'S' } else { 'N' }
}

fn lon_hemisphere(lon: f64) -> char {
    if lon < 0.0 { 'W' } else { 'E' }
}

// Rounds in integer units of the last printed digit so minutes and seconds
// carry instead of printing as 60. `places` is at most 9, so 180 degrees in
// those units stays below 2^53.
fn split_dm(value: f64, places: usize) -> (u64, f64) {
    let scale = 10u64.pow(places as u32);
    let units = (value.abs() * 60.0 * scale as f64).round() as u64;
    let per_degree = 60 * scale;
    let minutes = (units % per_degree) as f64 / scale as f64;
    (units / per_degree, minutes)
}

fn split_dms(value: f64, places: usize) -> (u64, u64, f64) {
    let scale = 10u64.pow(places as u32);
    let units = (value.abs() * 3600.0 * scale as f64).round() as u64;
    let per_minute = 60 * scale;
    let per_degree = 60 * per_minute;
    let rest = units % per_degree;
    let seconds = (rest % per_minute) as f64 / scale as f64;
    (units / per_degree, rest / per_minute, seconds)
}

impl fmt::Display for Geodetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = f.precision().unwrap_or(DEFAULT_DECIMAL_PLACES);
        f.write_str(&self.to_decimal_string(places))
    }
}

impl FromStr for Geodetic {
    type Err = GeoCoordError;

    /// Runs the full free-text chain; see [`parse_geodetic`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_geodetic(s).ok_or_else(|| GeoCoordError::UnrecognizedInput(s.to_string()))
    }
}

impl Coordinate for Geodetic {
    fn x(&self) -> f64 {
        self.lon
    }
    fn y(&self) -> f64 {
        self.lat
    }
}

impl From<Geodetic> for Point<f64> {
    fn from(g: Geodetic) -> Self {
        Point::new(g.lon, g.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_range() {
        assert!(Geodetic::new(90.0, 180.0).is_ok());
        assert!(Geodetic::new(-90.0, -180.0).is_ok());
        assert_eq!(
            Geodetic::new(90.1, 0.0),
            Err(GeoCoordError::InvalidLatitude(90.1))
        );
        assert_eq!(
            Geodetic::new(0.0, -180.5),
            Err(GeoCoordError::InvalidLongitude(-180.5))
        );
        assert!(matches!(
            Geodetic::new(f64::NAN, 0.0),
            Err(GeoCoordError::InvalidLatitude(_))
        ));
        assert!(matches!(
            Geodetic::new(0.0, f64::INFINITY),
            Err(GeoCoordError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn test_from_dm() -> Result<(), GeoCoordError> {
        let g = Geodetic::from_dm(30.0, 30.0, -60.0, 15.0)?;
        assert!((g.lat() - 30.5).abs() < 1e-12);
        assert!((g.lon() - (-60.25)).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_from_dm_negative_zero_degrees() -> Result<(), GeoCoordError> {
        let g = Geodetic::from_dm(-0.0, 30.0, -0.0, 6.0)?;
        assert!((g.lat() - (-0.5)).abs() < 1e-12);
        assert!((g.lon() - (-0.1)).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_from_dm_rejects_components() {
        assert_eq!(
            Geodetic::from_dm(30.5, 0.0, 0.0, 0.0),
            Err(GeoCoordError::InvalidComponent {
                field: "latitude degrees",
                value: 30.5
            })
        );
        assert_eq!(
            Geodetic::from_dm(30.0, 60.0, 0.0, 0.0),
            Err(GeoCoordError::InvalidComponent {
                field: "latitude minutes",
                value: 60.0
            })
        );
        assert_eq!(
            Geodetic::from_dm(30.0, 0.0, 181.0, 0.0),
            Err(GeoCoordError::InvalidComponent {
                field: "longitude degrees",
                value: 181.0
            })
        );
        assert!(matches!(
            Geodetic::from_dm(90.0, 30.0, 0.0, 0.0),
            Err(GeoCoordError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn test_from_dms() -> Result<(), GeoCoordError> {
        let g = Geodetic::from_dms(38.0, 53.0, 22.2, -77.0, 2.0, 7.08)?;
        assert!((g.lat() - 38.889_5).abs() < 1e-9);
        assert!((g.lon() - (-77.035_3)).abs() < 1e-9);

        assert_eq!(
            Geodetic::from_dms(38.0, 53.5, 0.0, 0.0, 0.0, 0.0),
            Err(GeoCoordError::InvalidComponent {
                field: "latitude minutes",
                value: 53.5
            })
        );
        assert_eq!(
            Geodetic::from_dms(38.0, 53.0, 0.0, 0.0, 0.0, 60.0),
            Err(GeoCoordError::InvalidComponent {
                field: "longitude seconds",
                value: 60.0
            })
        );
        Ok(())
    }

    #[test]
    fn test_decimal_string() -> Result<(), GeoCoordError> {
        let g = Geodetic::new(12.345_67, -123.456_78)?;
        assert_eq!(g.to_string(), "N12.34567 W123.45678");
        assert_eq!(g.to_decimal_string(1), "N12.3 W123.5");
        assert_eq!(format!("{:.0}", g), "N12 W123");

        let g = Geodetic::new(-0.5, 0.0)?;
        assert_eq!(g.to_string(), "S0.50000 E0.00000");
        Ok(())
    }

    #[test]
    fn test_dm_string() -> Result<(), GeoCoordError> {
        let g = Geodetic::new(12.575, -123.76)?;
        assert_eq!(g.to_dm_string(1), "N12 34.5' W123 45.6'");
        Ok(())
    }

    #[test]
    fn test_dm_string_carries_rounded_minutes() -> Result<(), GeoCoordError> {
        // 59.997' rounds up into the next degree
        let g = Geodetic::new(10.0 + 59.997 / 60.0, 0.0)?;
        assert_eq!(g.to_dm_string(1), "N11 0.0' E0 0.0'");
        Ok(())
    }

    #[test]
    fn test_dms_string() -> Result<(), GeoCoordError> {
        let g = Geodetic::from_dms(38.0, 53.0, 22.2, -77.0, 2.0, 7.1)?;
        assert_eq!(g.to_dms_string(1), "N38 53 22.2\" W77 2 7.1\"");

        let g = Geodetic::new(-(20.0 + 59.0 / 60.0 + 59.96 / 3600.0), 0.0)?;
        assert_eq!(g.to_dms_string(1), "S21 0 0.0\" E0 0 0.0\"");
        Ok(())
    }

    #[test]
    fn test_sexagesimal_places_are_capped() -> Result<(), GeoCoordError> {
        let g = Geodetic::new(10.0, 180.0)?;
        assert_eq!(g.to_dms_string(14), "N10 0 0.000000000\" E180 0 0.000000000\"");
        assert_eq!(g.to_dms_string(14), g.to_dms_string(9));
        assert_eq!(g.to_dm_string(20), "N10 0.000000000' E180 0.000000000'");
        assert_eq!(g.to_dm_string(usize::MAX), g.to_dm_string(9));

        let g = Geodetic::new(12.5, -123.75)?;
        assert_eq!(g.to_dm_string(16), "N12 30.000000000' W123 45.000000000'");
        Ok(())
    }

    #[test]
    fn test_point_interop() -> Result<(), GeoCoordError> {
        let g = Geodetic::new(53.481, -2.248)?;
        let pt: Point<f64> = g.into();
        assert_eq!(pt.x(), -2.248);
        assert_eq!(pt.y(), 53.481);
        assert_eq!(Geodetic::from_coord(&pt)?, g);
        Ok(())
    }

    #[test]
    fn test_from_projected_folds_longitude() {
        let g = Geodetic::from_projected(10.0, 181.0);
        assert!((g.lon() - (-179.0)).abs() < 1e-12);
        let g = Geodetic::from_projected(90.000_1, -180.5);
        assert_eq!(g.lat(), 90.0);
        assert!((g.lon() - 179.5).abs() < 1e-12);
    }

    #[test]
    fn test_serialize() -> Result<(), GeoCoordError> {
        let g = Geodetic::new(30.0, -60.0)?;
        let json =
            serde_json::to_string(&g).map_err(|e| GeoCoordError::SerializeError(e.to_string()))?;
        assert_eq!(json, r#"{"lat":30.0,"lon":-60.0}"#);
        Ok(())
    }
}
