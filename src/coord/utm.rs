use crate::core::band::{band_index, is_southern_band};
use crate::error::GeoCoordError;
use crate::parse::grammar::utm_captures;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Largest easting accepted (exclusive), in meters
const MAX_EASTING: f64 = 1_000_000.0;

/// Largest northing accepted (inclusive), in meters
const MAX_NORTHING: f64 = 10_000_000.0;

/// A Universal Transverse Mercator position.
///
/// `zone` is 1-60 and `lat_band` one of the 20 letters C-X without I and O.
/// Eastings lie in [0, 1 000 000) and northings in [0, 10 000 000];
/// southern band northings include the false northing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Utm {
    zone: u8,
    lat_band: char,
    easting: f64,
    northing: f64,
}

impl Utm {
    /// Creates a UTM position. The band letter is accepted in either case.
    ///
    /// # Example
    /// ```
    /// use geocoord_rs::Utm;
    ///
    /// # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
    /// let utm = Utm::new(33, 'u', 315_428.0, 5_741_457.0)?;
    /// assert_eq!(utm.lat_band(), 'U');
    /// assert_eq!(utm.to_string(), "33U 315428 5741457");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - [`GeoCoordError::InvalidZone`] outside 1-60
    /// - [`GeoCoordError::InvalidLatBand`] for a letter outside the band table
    /// - [`GeoCoordError::InvalidComponent`] for a non-finite or out of range easting/northing
    pub fn new(
        zone: u8,
        lat_band: char,
        easting: f64,
        northing: f64,
    ) -> Result<Self, GeoCoordError> {
        if !(1..=60).contains(&zone) {
            return Err(GeoCoordError::InvalidZone(zone));
        }
        if band_index(lat_band).is_none() {
            return Err(GeoCoordError::InvalidLatBand(lat_band));
        }
        if !(0.0..MAX_EASTING).contains(&easting) {
            return Err(GeoCoordError::InvalidComponent {
                field: "easting",
                value: easting,
            });
        }
        if !(0.0..=MAX_NORTHING).contains(&northing) {
            return Err(GeoCoordError::InvalidComponent {
                field: "northing",
                value: northing,
            });
        }

        Ok(Self {
            zone,
            lat_band: lat_band.to_ascii_uppercase(),
            easting,
            northing,
        })
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn lat_band(&self) -> char {
        self.lat_band
    }

    /// Easting in meters, including the 500 000 m false easting.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Northing in meters, including the false northing south of the equator.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// True when the band lies south of the equator (C-M).
    pub fn is_southern(&self) -> bool {
        is_southern_band(self.lat_band).unwrap_or(false)
    }
}

// Rounded fields are clamped so they keep their 6 and 7 digit width.
const MAX_PRINTED_EASTING: u64 = 999_999;
const MAX_PRINTED_NORTHING: u64 = 9_999_999;

impl fmt::Display for Utm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{} {:06} {:07}",
            self.zone,
            self.lat_band,
            (self.easting.round() as u64).min(MAX_PRINTED_EASTING),
            (self.northing.round() as u64).min(MAX_PRINTED_NORTHING)
        )
    }
}

impl FromStr for Utm {
    type Err = GeoCoordError;

    /// Parses `<zone><band> <6-digit easting> <7-digit northing>`; the
    /// separating spaces are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (zone, band, easting, northing) =
            utm_captures(s).ok_or_else(|| GeoCoordError::MalformedUtm(s.to_string()))?;
        Utm::new(zone, band, easting, northing)
    }
}
