use crate::convert::{geodetic_to_utm, utm_to_mgrs};
use crate::coord::Geodetic;
use crate::core::constants::MAX_MGRS_PRECISION;
use crate::error::GeoCoordError;
use crate::parse::parse_geodetic;
use serde::Serialize;

/// One input resolved into all three representations.
///
/// `utm` and `mgrs` are `None` for positions outside the UTM latitude range
/// and are left out of the JSON form.
///
/// # Example
/// ```
/// use geocoord_rs::ConversionReport;
///
/// # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
/// let report = ConversionReport::from_text("30N 60W", 5)?;
/// assert_eq!(report.utm.as_deref(), Some("21R 210590 3322576"));
/// assert_eq!(report.mgrs.as_deref(), Some("21R TP 10590 22575"));
/// println!("{}", report.to_json()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    pub original: String,
    pub geodetic: Geodetic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mgrs: Option<String>,
}

impl ConversionReport {
    /// Parses `text` with the full grammar chain and converts the result.
    ///
    /// # Errors
    ///
    /// - [`GeoCoordError::UnrecognizedInput`] if no grammar accepts the text
    /// - [`GeoCoordError::InvalidPrecision`] outside 1-5
    pub fn from_text(text: &str, precision: u8) -> Result<Self, GeoCoordError> {
        let geodetic =
            parse_geodetic(text).ok_or_else(|| GeoCoordError::UnrecognizedInput(text.to_string()))?;
        Self::from_geodetic(text, geodetic, precision)
    }

    /// Builds a report for an already resolved position.
    pub fn from_geodetic(
        original: &str,
        geodetic: Geodetic,
        precision: u8,
    ) -> Result<Self, GeoCoordError> {
        if !(1..=MAX_MGRS_PRECISION).contains(&precision) {
            return Err(GeoCoordError::InvalidPrecision(precision));
        }

        let (utm, mgrs) = match geodetic_to_utm(&geodetic) {
            Ok(utm) => {
                let mgrs = utm_to_mgrs(&utm, precision)?;
                (Some(utm.to_string()), Some(mgrs.to_string()))
            }
            Err(GeoCoordError::UnsupportedLatitude(_)) => (None, None),
            Err(e) => return Err(e),
        };

        Ok(Self {
            original: original.to_string(),
            geodetic,
            utm,
            mgrs,
        })
    }

    pub fn to_json(&self) -> Result<String, GeoCoordError> {
        serde_json::to_string(self).map_err(|e| GeoCoordError::SerializeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() -> Result<(), GeoCoordError> {
        let report = ConversionReport::from_text("33UXP0400", 5)?;
        assert_eq!(report.original, "33UXP0400");
        // 47.84N lies in band T; the reference's band letter only picks the row cycle
        assert_eq!(report.utm.as_deref(), Some("33T 604000 5300000"));
        assert_eq!(report.mgrs.as_deref(), Some("33T XP 04000 00000"));
        assert!((report.geodetic.lat() - 47.844_926).abs() < 1e-5);
        Ok(())
    }

    #[test]
    fn test_unrecognised_text() {
        assert_eq!(
            ConversionReport::from_text("nowhere", 5),
            Err(GeoCoordError::UnrecognizedInput("nowhere".to_string()))
        );
    }

    #[test]
    fn test_precision_checked() {
        assert_eq!(
            ConversionReport::from_text("30N 60W", 0),
            Err(GeoCoordError::InvalidPrecision(0))
        );
    }

    #[test]
    fn test_polar_position_has_no_grid() -> Result<(), GeoCoordError> {
        let report = ConversionReport::from_text("N85 E10", 5)?;
        assert_eq!(report.geodetic, Geodetic::new(85.0, 10.0)?);
        assert!(report.utm.is_none());
        assert!(report.mgrs.is_none());

        let json = report.to_json()?;
        assert!(!json.contains("utm"));
        assert!(!json.contains("mgrs"));
        Ok(())
    }

    #[test]
    fn test_json_shape() -> Result<(), GeoCoordError> {
        let report = ConversionReport::from_text("30, -60", 2)?;
        let value: serde_json::Value = serde_json::from_str(&report.to_json()?)
            .map_err(|e| GeoCoordError::SerializeError(e.to_string()))?;

        assert_eq!(value["original"], "30, -60");
        assert_eq!(value["geodetic"]["lat"], 30.0);
        assert_eq!(value["geodetic"]["lon"], -60.0);
        assert_eq!(value["utm"], "21R 210590 3322576");
        assert_eq!(value["mgrs"], "21R TP 10 22");
        Ok(())
    }
}
