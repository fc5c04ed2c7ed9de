//! Transverse Mercator series on the WGS84 ellipsoid.
//!
//! Forward and inverse use the classic closed-form expansions (Snyder,
//! "Map Projections: A Working Manual", eqs. 8-9 to 8-25). Accuracy is
//! well under a centimetre inside a standard 6 degree zone.

use crate::core::constants::{
    E2, EP2, FALSE_EASTING, FALSE_NORTHING, MAX_UTM_LAT, MIN_UTM_LAT, UTM_K0, WGS84_A,
    ZONE_WIDTH_DEG,
};
use crate::error::GeoCoordError;

const E4: f64 = E2 * E2;
const E6: f64 = E4 * E2;

// Meridional arc coefficients
const M0: f64 = 1.0 - E2 / 4.0 - 3.0 * E4 / 64.0 - 5.0 * E6 / 256.0;
const M2: f64 = 3.0 * E2 / 8.0 + 3.0 * E4 / 32.0 + 45.0 * E6 / 1024.0;
const M4: f64 = 15.0 * E4 / 256.0 + 45.0 * E6 / 1024.0;
const M6: f64 = 35.0 * E6 / 3072.0;

/// Projected position inside a zone, before band and type validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZonePosition {
    pub zone: u8,
    pub easting: f64,
    pub northing: f64,
}

/// Returns the UTM zone number for a position, including the Norway and
/// Svalbard exceptions.
///
/// Longitude 180 falls in zone 60.
///
/// # Example
/// ```
/// use geocoord_rs::zone_number;
///
/// assert_eq!(zone_number(30.0, -60.0), 21);
/// assert_eq!(zone_number(60.0, 5.0), 32);  // south-west Norway
/// assert_eq!(zone_number(78.0, 15.0), 33); // Svalbard
/// ```
pub fn zone_number(lat: f64, lon: f64) -> u8 {
    let base = (((lon + 180.0) / ZONE_WIDTH_DEG).floor() as i32 + 1).clamp(1, 60) as u8;

    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        return 32;
    }

    if (72.0..84.0).contains(&lat) {
        if (0.0..9.0).contains(&lon) {
            return 31;
        } else if (9.0..21.0).contains(&lon) {
            return 33;
        } else if (21.0..33.0).contains(&lon) {
            return 35;
        } else if (33.0..42.0).contains(&lon) {
            return 37;
        }
    }

    base
}

/// Longitude of the central meridian of `zone` in degrees.
pub fn central_meridian(zone: u8) -> f64 {
    f64::from(zone) * ZONE_WIDTH_DEG - 183.0
}

fn meridional_arc(phi: f64) -> f64 {
    WGS84_A
        * (M0 * phi - M2 * (2.0 * phi).sin() + M4 * (4.0 * phi).sin() - M6 * (6.0 * phi).sin())
}

/// Projects a geodetic position onto its UTM zone.
///
/// Latitude is checked before any trigonometry runs, so an unsupported
/// position never produces NaN.
///
/// # Errors
///
/// - [`GeoCoordError::UnsupportedLatitude`] outside [-80, 84)
/// - [`GeoCoordError::InvalidLongitude`] outside [-180, 180]
pub fn forward(lat: f64, lon: f64) -> Result<ZonePosition, GeoCoordError> {
    if !(MIN_UTM_LAT..MAX_UTM_LAT).contains(&lat) {
        return Err(GeoCoordError::UnsupportedLatitude(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(GeoCoordError::InvalidLongitude(lon));
    }

    let zone = zone_number(lat, lon);
    let phi = lat.to_radians();
    let lambda = lon.to_radians();
    let lambda0 = central_meridian(zone).to_radians();

    let (sin_phi, cos_phi) = phi.sin_cos();
    let tan_phi = phi.tan();

    let n = WGS84_A / (1.0 - E2 * sin_phi * sin_phi).sqrt();
    let t = tan_phi * tan_phi;
    let c = EP2 * cos_phi * cos_phi;
    let a = cos_phi * (lambda - lambda0);
    let m = meridional_arc(phi);

    let easting = UTM_K0
        * n
        * (a
            + (1.0 - t + c) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * EP2) * a.powi(5) / 120.0)
        + FALSE_EASTING;

    let mut northing = UTM_K0
        * (m + n
            * tan_phi
            * (a * a / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * EP2) * a.powi(6) / 720.0));

    if lat < 0.0 {
        northing += FALSE_NORTHING;
    }

    Ok(ZonePosition {
        zone,
        easting,
        northing,
    })
}

/// Inverse projection: zone easting/northing back to `(lat, lon)` in degrees.
///
/// `southern` says whether the northing carries the false northing. The
/// result is not range-checked; callers normalise it.
pub fn inverse(zone: u8, southern: bool, easting: f64, northing: f64) -> (f64, f64) {
    let x = easting - FALSE_EASTING;
    let y = if southern {
        northing - FALSE_NORTHING
    } else {
        northing
    };

    let lambda0 = central_meridian(zone).to_radians();

    let sqrt_1_e2 = (1.0 - E2).sqrt();
    let e1 = (1.0 - sqrt_1_e2) / (1.0 + sqrt_1_e2);

    let m = y / UTM_K0;
    let mu = m / (WGS84_A * M0);

    // footpoint latitude
    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
        + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let tan_phi1 = phi1.tan();
    let w = 1.0 - E2 * sin_phi1 * sin_phi1;

    let n1 = WGS84_A / w.sqrt();
    let r1 = WGS84_A * (1.0 - E2) / w.powf(1.5);
    let t1 = tan_phi1 * tan_phi1;
    let c1 = EP2 * cos_phi1 * cos_phi1;
    let d = x / (n1 * UTM_K0);

    let lat = phi1
        - (n1 * tan_phi1 / r1)
            * (d * d / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * EP2) * d.powi(4) / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * EP2 - 3.0 * c1 * c1)
                    * d.powi(6)
                    / 720.0);

    let lon = lambda0
        + (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * EP2 + 24.0 * t1 * t1)
                * d.powi(5)
                / 120.0)
            / cos_phi1;

    (lat.to_degrees(), lon.to_degrees())
}
