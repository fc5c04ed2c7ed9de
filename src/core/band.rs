use crate::core::constants::{
    BAND_HEIGHT_DEG, BAND_MIN_NORTHING, FIRST_NORTHERN_BAND, LAT_BANDS, MAX_UTM_LAT, MIN_UTM_LAT,
};
use crate::error::GeoCoordError;

/// Returns the latitude band letter (C-X) containing `lat`.
///
/// Bands are 8 degrees tall starting at 80S. Band X is the exception and
/// extends to 84N.
///
/// # Example
/// ```
/// use geocoord_rs::utm_lat_band;
///
/// # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
/// assert_eq!(utm_lat_band(30.0)?, 'R');
/// assert_eq!(utm_lat_band(-0.5)?, 'M');
/// assert_eq!(utm_lat_band(83.9)?, 'X');
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`GeoCoordError::UnsupportedLatitude`] outside [-80, 84).
pub fn utm_lat_band(lat: f64) -> Result<char, GeoCoordError> {
    if !(MIN_UTM_LAT..MAX_UTM_LAT).contains(&lat) {
        return Err(GeoCoordError::UnsupportedLatitude(lat));
    }
    let idx = (((lat - MIN_UTM_LAT) / BAND_HEIGHT_DEG).floor() as usize).min(LAT_BANDS.len() - 1);
    Ok(LAT_BANDS[idx] as char)
}

/// Position of `band` in the south-to-north band table, case-insensitive.
pub fn band_index(band: char) -> Option<usize> {
    let upper = band.to_ascii_uppercase();
    LAT_BANDS.iter().position(|&b| b as char == upper)
}

/// True for bands C-M, whose northings carry the false northing.
pub fn is_southern_band(band: char) -> Option<bool> {
    band_index(band).map(|idx| idx < FIRST_NORTHERN_BAND)
}

/// Lowest northing any point of `band` can have.
///
/// # Errors
///
/// [`GeoCoordError::InvalidZoneLetter`] if `band` is not one of the 20 band letters.
pub fn band_min_northing(band: char) -> Result<f64, GeoCoordError> {
    band_index(band)
        .map(|idx| BAND_MIN_NORTHING[idx])
        .ok_or(GeoCoordError::InvalidZoneLetter(band))
}
