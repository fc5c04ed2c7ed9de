//! # geocoord-rs
//!
//! Conversion between WGS84 latitude/longitude, UTM and MGRS, plus a parser
//! for loosely formatted coordinate text. There are currently four main
//! entry points.
//!
//! ### 1. Value types - `Geodetic`, `Utm`, `Mgrs`
//!
//! ```
//! use geocoord_rs::{Geodetic, Mgrs, Utm};
//!
//! # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
//! let g = Geodetic::new(38.8895, -77.0353)?;
//! println!("{}", g.to_dms_string(1));
//!
//! let utm: Utm = "33U 315428 5741457".parse()?;
//! let mgrs: Mgrs = "33UXP0400".parse()?;
//! assert_eq!(mgrs.precision(), 2);
//! println!("{} / {}", utm, mgrs);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Conversions - free functions through UTM
//!
//! ```
//! use geocoord_rs::{Geodetic, geodetic_to_mgrs, geodetic_to_utm, mgrs_to_geodetic};
//!
//! # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
//! let g = Geodetic::new(30.0, -60.0)?;
//! assert_eq!(geodetic_to_utm(&g)?.to_string(), "21R 210590 3322576");
//!
//! let mgrs = geodetic_to_mgrs(&g, 5)?;
//! assert_eq!(mgrs.to_string(), "21R TP 10590 22575");
//!
//! let back = mgrs_to_geodetic(&mgrs)?;
//! assert!((back.lat() - 30.0).abs() < 1e-4);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `parse_geodetic` - Text of Unknown Format
//!
//! ```
//! use geocoord_rs::{Position, parse_geodetic};
//!
//! # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
//! let texts = ["30N 60W", "38°53′22.2″N 77°2′7.1″W", "N12 34.5' W123 45.6'", "33UXP0400"];
//! for text in texts {
//!     assert!(parse_geodetic(text).is_some());
//! }
//!
//! // Or keep the representation the text was written in
//! let pos = Position::parse("33U 315428 5741457")?;
//! println!("{}", pos.to_mgrs(3)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### 4. `CsvConvert` - CSV File Conversion
//!
//! Add `lat`, `lon`, `utm` and `mgrs` columns to a CSV with a column of
//! coordinate text, optionally with a point geometry column:
//!
//! ```no_run
//! use geocoord_rs::{CsvConvert, CsvConvertConfig, GeometryFormat};
//!
//! let config = CsvConvertConfig::new("Position")
//!     .precision(4)
//!     .with_geometry(GeometryFormat::Wkt)
//!     .exclude(vec!["Notes".into()]);
//!
//! // Using trait method
//! "input.csv".to_converted_csv("output.csv", &config).unwrap();
//! ```
//!

pub mod convert;
pub mod coord;
pub mod core;
pub mod error;
pub mod io;
pub mod parse;

pub use self::core::{
    DEFAULT_DECIMAL_PLACES, DEFAULT_MGRS_PRECISION, FALSE_EASTING, FALSE_NORTHING, LAT_BANDS,
    MAX_MGRS_PRECISION, UTM_K0, WGS84_A, WGS84_INV_F, central_meridian, decode_grid_square,
    grid_square_id, utm_lat_band, zone_number,
};
pub use convert::{
    geodetic_to_mgrs, geodetic_to_utm, mgrs_to_geodetic, mgrs_to_utm, utm_to_geodetic, utm_to_mgrs,
};
pub use coord::{Coordinate, Geodetic, Mgrs, Position, Utm};
pub use error::GeoCoordError;
pub use io::{ConversionReport, CsvConvert, CsvConvertConfig, GeometryFormat, csv_to_converted_csv};
pub use parse::{parse_decimal, parse_dm, parse_dms, parse_geodetic, parse_mgrs, parse_utm};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeoCoordError> {
        let g = parse_geodetic("38°53′22.2″N 77°2′7.1″W")
            .ok_or_else(|| GeoCoordError::UnrecognizedInput("dms".to_string()))?;

        let utm = geodetic_to_utm(&g)?;
        assert_eq!(utm.zone(), 18);
        assert_eq!(utm.lat_band(), 'S');

        let mgrs = utm_to_mgrs(&utm, 5)?;
        assert_eq!(mgrs.grid_square(), ['U', 'J']);

        let back = mgrs_to_geodetic(&mgrs)?;
        assert!((back.lat() - g.lat()).abs() < 1e-4);
        assert!((back.lon() - g.lon()).abs() < 1e-4);
        Ok(())
    }

    #[test]
    fn test_reference_values() -> Result<(), GeoCoordError> {
        let utm = geodetic_to_utm(&Geodetic::new(30.0, -60.0)?)?;
        assert_eq!(utm.zone(), 21);
        assert!((utm.easting() - 210_590.346_7).abs() < 0.01);

        let utm = mgrs_to_utm(&Mgrs::new(33, 'U', "UB", "04", "04")?)?;
        assert_eq!((utm.easting(), utm.northing()), (304_000.0, 6_104_000.0));

        assert!(parse_mgrs("33UXP0400").is_some());
        assert!(parse_utm("33U 315428 5741457").is_some());

        for lat in [85.0, -85.0] {
            assert_eq!(
                geodetic_to_utm(&Geodetic::new(lat, 0.0)?),
                Err(GeoCoordError::UnsupportedLatitude(lat))
            );
        }
        Ok(())
    }

    #[test]
    fn test_utm_mgrs_roundtrip_is_within_a_metre() -> Result<(), GeoCoordError> {
        for zone in [1u8, 17, 31, 32, 33, 60] {
            for band in ['C', 'H', 'M', 'N', 'T', 'X'] {
                let min = crate::core::band_min_northing(band)?;
                for (easting, northing_offset) in
                    [(166_021.4, 12_345.6), (500_000.0, 99_999.9), (833_978.6, 50_000.0)]
                {
                    let utm = Utm::new(zone, band, easting, min + northing_offset)?;
                    let back = mgrs_to_utm(&utm_to_mgrs(&utm, 5)?)?;
                    assert!((back.easting() - utm.easting()).abs() < 1.0);
                    assert!((back.northing() - utm.northing()).abs() < 1.0);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_position_from_geo_types() -> Result<(), GeoCoordError> {
        let pt = point! { x: 151.0, y: -33.9 };
        let g = Geodetic::from_coord(&pt)?;
        let pos = Position::from(g);
        assert_eq!(pos.to_utm()?.zone(), 56);
        assert_eq!(pos.to_mgrs(1)?.to_string(), "56H LH 1 4");
        Ok(())
    }

    #[test]
    fn test_report_workflow() -> Result<(), GeoCoordError> {
        let report = ConversionReport::from_text("-33.9, 151", 5)?;
        assert_eq!(report.utm.as_deref(), Some("56H 315074 6247131"));
        assert!(report.to_json()?.contains("\"original\":\"-33.9, 151\""));
        Ok(())
    }
}
