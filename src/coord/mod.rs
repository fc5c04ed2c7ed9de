mod geodetic;
mod mgrs;
mod utm;

pub use geodetic::Geodetic;
pub use mgrs::Mgrs;
pub use utm::Utm;

use crate::convert::{
    geodetic_to_mgrs, geodetic_to_utm, mgrs_to_geodetic, mgrs_to_utm, utm_to_geodetic, utm_to_mgrs,
};
use crate::error::GeoCoordError;
use crate::parse::{parse_geodetic, parse_mgrs, parse_utm};
use geo_types::Point;
use std::fmt;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples (lon, lat), `geo_types::Point<f64>`
/// and [`Geodetic`]. This allows constructors to accept any of them.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// A position in any of the three supported representations.
///
/// Conversions between variants always pass through UTM.
#[derive(Debug, Clone, PartialEq)]
pub enum Position {
    Geodetic(Geodetic),
    Utm(Utm),
    Mgrs(Mgrs),
}

impl Position {
    /// Recognises an MGRS literal, then a UTM literal, then any of the
    /// latitude/longitude grammars.
    ///
    /// # Example
    /// ```
    /// use geocoord_rs::Position;
    ///
    /// # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
    /// assert!(matches!(Position::parse("33UXP0400")?, Position::Mgrs(_)));
    /// assert!(matches!(Position::parse("33U 315428 5741457")?, Position::Utm(_)));
    /// assert!(matches!(Position::parse("30N 60W")?, Position::Geodetic(_)));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// [`GeoCoordError::UnrecognizedInput`] when no grammar accepts the text.
    pub fn parse(text: &str) -> Result<Self, GeoCoordError> {
        if let Some(mgrs) = parse_mgrs(text) {
            return Ok(Position::Mgrs(mgrs));
        }
        if let Some(utm) = parse_utm(text) {
            return Ok(Position::Utm(utm));
        }
        parse_geodetic(text)
            .map(Position::Geodetic)
            .ok_or_else(|| GeoCoordError::UnrecognizedInput(text.to_string()))
    }

    pub fn to_geodetic(&self) -> Result<Geodetic, GeoCoordError> {
        match self {
            Position::Geodetic(g) => Ok(*g),
            Position::Utm(u) => Ok(utm_to_geodetic(u)),
            Position::Mgrs(m) => mgrs_to_geodetic(m),
        }
    }

    pub fn to_utm(&self) -> Result<Utm, GeoCoordError> {
        match self {
            Position::Geodetic(g) => geodetic_to_utm(g),
            Position::Utm(u) => Ok(*u),
            Position::Mgrs(m) => mgrs_to_utm(m),
        }
    }

    /// Converts to MGRS with `precision` digits per axis. An MGRS position
    /// is re-encoded, so its precision can change.
    pub fn to_mgrs(&self, precision: u8) -> Result<Mgrs, GeoCoordError> {
        match self {
            Position::Geodetic(g) => geodetic_to_mgrs(g, precision),
            Position::Utm(u) => utm_to_mgrs(u, precision),
            Position::Mgrs(m) => utm_to_mgrs(&mgrs_to_utm(m)?, precision),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Geodetic(g) => fmt::Display::fmt(g, f),
            Position::Utm(u) => fmt::Display::fmt(u, f),
            Position::Mgrs(m) => fmt::Display::fmt(m, f),
        }
    }
}

impl From<Geodetic> for Position {
    fn from(g: Geodetic) -> Self {
        Position::Geodetic(g)
    }
}

impl From<Utm> for Position {
    fn from(u: Utm) -> Self {
        Position::Utm(u)
    }
}

impl From<Mgrs> for Position {
    fn from(m: Mgrs) -> Self {
        Position::Mgrs(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (-60.0, 30.0);
        assert_eq!(tuple.x(), -60.0);
        assert_eq!(tuple.y(), 30.0);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(-60.0, 30.0);
        assert_eq!(Coordinate::x(&point), -60.0);
        assert_eq!(Coordinate::y(&point), 30.0);
    }

    #[test]
    fn test_parse_picks_variant() -> Result<(), GeoCoordError> {
        let mgrs = Position::parse("21RTP1059022575")?;
        assert!(matches!(mgrs, Position::Mgrs(_)));

        let utm = Position::parse("21R 210590 3322576")?;
        assert!(matches!(utm, Position::Utm(_)));

        let geo = Position::parse("30, -60")?;
        assert_eq!(geo, Position::Geodetic(Geodetic::new(30.0, -60.0)?));

        assert_eq!(
            Position::parse("not a place"),
            Err(GeoCoordError::UnrecognizedInput("not a place".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_variants_agree() -> Result<(), GeoCoordError> {
        let origin = Position::from(Geodetic::new(30.0, -60.0)?);
        let utm = origin.to_utm()?;
        assert_eq!(utm.to_string(), "21R 210590 3322576");

        let mgrs = origin.to_mgrs(5)?;
        assert_eq!(mgrs.to_compact_string(), "21RTP1059022575");

        let back = Position::from(mgrs).to_geodetic()?;
        assert!((back.lat() - 30.0).abs() < 1e-4);
        assert!((back.lon() - (-60.0)).abs() < 1e-4);
        Ok(())
    }

    #[test]
    fn test_mgrs_reencodes_at_new_precision() -> Result<(), GeoCoordError> {
        let fine = Position::Mgrs(Mgrs::new(21, 'R', "TP", "10590", "22575")?);
        let coarse = fine.to_mgrs(2)?;
        assert_eq!(coarse.to_string(), "21R TP 10 22");
        Ok(())
    }

    #[test]
    fn test_display_delegates() -> Result<(), GeoCoordError> {
        let g = Position::from(Geodetic::new(51.5, -0.1)?);
        assert_eq!(format!("{:.1}", g), "N51.5 W0.1");
        let u = Position::from(Utm::new(33, 'U', 315_428.0, 5_741_457.0)?);
        assert_eq!(u.to_string(), "33U 315428 5741457");
        Ok(())
    }
}
