//! Conversions between the three representations.
//!
//! UTM is the pivot: geodetic and MGRS positions only ever convert through it.

use crate::coord::{Geodetic, Mgrs, Utm};
use crate::core::band::utm_lat_band;
use crate::core::constants::{GRID_SQUARE_SIZE, MAX_MGRS_PRECISION};
use crate::core::grid_square::{decode_grid_square, grid_square_id};
use crate::core::projection;
use crate::error::GeoCoordError;

/// Projects a geodetic position to UTM.
///
/// # Example
/// ```
/// use geocoord_rs::{Geodetic, geodetic_to_utm};
///
/// # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
/// let utm = geodetic_to_utm(&Geodetic::new(30.0, -60.0)?)?;
/// assert_eq!(utm.to_string(), "21R 210590 3322576");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`GeoCoordError::UnsupportedLatitude`] outside [-80, 84).
pub fn geodetic_to_utm(g: &Geodetic) -> Result<Utm, GeoCoordError> {
    let band = utm_lat_band(g.lat())?;
    let pos = projection::forward(g.lat(), g.lon())?;
    Utm::new(pos.zone, band, pos.easting, pos.northing)
}

/// Inverse-projects a UTM position. Always succeeds for a valid [`Utm`].
pub fn utm_to_geodetic(u: &Utm) -> Geodetic {
    let (lat, lon) = projection::inverse(u.zone(), u.is_southern(), u.easting(), u.northing());
    Geodetic::from_projected(lat, lon)
}

/// Encodes a UTM position as MGRS with `precision` digits per axis (1-5).
///
/// Digits are truncated, never rounded, so the reference names the square
/// that contains the position.
///
/// # Errors
///
/// [`GeoCoordError::InvalidPrecision`] outside 1-5.
pub fn utm_to_mgrs(u: &Utm, precision: u8) -> Result<Mgrs, GeoCoordError> {
    if !(1..=MAX_MGRS_PRECISION).contains(&precision) {
        return Err(GeoCoordError::InvalidPrecision(precision));
    }

    let easting = u.easting().floor();
    let northing = u.northing().floor();
    let square = grid_square_id(easting, northing, u.zone());

    let digits = usize::from(precision);
    let e = format!("{:05}", (easting % GRID_SQUARE_SIZE) as u32);
    let n = format!("{:05}", (northing % GRID_SQUARE_SIZE) as u32);
    let square: String = square.iter().collect();

    Mgrs::new(u.zone(), u.lat_band(), &square, &e[..digits], &n[..digits])
}

/// Decodes an MGRS reference to the UTM position of its south-west corner.
///
/// # Example
/// ```
/// use geocoord_rs::{Mgrs, mgrs_to_utm};
///
/// # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
/// let utm = mgrs_to_utm(&"33UXP0400".parse::<Mgrs>()?)?;
/// assert_eq!(utm.easting(), 604_000.0);
/// assert_eq!(utm.northing(), 5_300_000.0);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeoCoordError::InvalidGridLetter`] when a square letter is outside the zone's cycle
/// - [`GeoCoordError::InvalidZoneLetter`] when the band has no minimum northing
/// - [`GeoCoordError::InvalidComponent`] when the column letter is not one
///   the zone's set uses, placing the easting outside the zone
pub fn mgrs_to_utm(m: &Mgrs) -> Result<Utm, GeoCoordError> {
    let (square_e, square_n) = decode_grid_square(m.grid_square(), m.zone(), m.lat_band())?;
    let easting = square_e + scale_digits("easting", m.easting())?;
    let northing = square_n + scale_digits("northing", m.northing())?;
    Utm::new(m.zone(), m.lat_band(), easting, northing)
}

// "04" is 4 km into the square: digits * 10^(5 - len)
fn scale_digits(field: &'static str, digits: &str) -> Result<f64, GeoCoordError> {
    if digits.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = digits.parse().map_err(|_| GeoCoordError::InvalidDigits {
        field,
        value: digits.to_string(),
    })?;
    Ok(value * GRID_SQUARE_SIZE / 10f64.powi(digits.len() as i32))
}

pub fn geodetic_to_mgrs(g: &Geodetic, precision: u8) -> Result<Mgrs, GeoCoordError> {
    utm_to_mgrs(&geodetic_to_utm(g)?, precision)
}

pub fn mgrs_to_geodetic(m: &Mgrs) -> Result<Geodetic, GeoCoordError> {
    Ok(utm_to_geodetic(&mgrs_to_utm(m)?))
}
