//! MGRS 100 km grid square letters.
//!
//! Zones are grouped into six letter sets (`zone mod 6`, with 0 mapped to
//! 6). Each set starts its column letters and row letters at a fixed origin
//! and walks the alphabet with I and O removed. Column letters use A-Z
//! (24 letters). Row letters use A-V (20 letters), so they repeat every
//! 2 000 000 m of northing.

use crate::core::band::band_min_northing;
use crate::core::constants::{
    COLUMN_LETTERS, GRID_SQUARE_SIZE, NUM_100K_SETS, ROW_CYCLE_M, ROW_LETTERS,
    SET_ORIGIN_COLUMN_LETTERS, SET_ORIGIN_ROW_LETTERS,
};
use crate::error::GeoCoordError;

/// Returns the 100k letter set (1-6) a zone belongs to.
pub fn set_for_zone(zone: u8) -> u8 {
    match zone % NUM_100K_SETS {
        0 => NUM_100K_SETS,
        set => set,
    }
}

fn origins(zone: u8) -> (u8, u8) {
    let idx = usize::from(set_for_zone(zone) - 1);
    (SET_ORIGIN_COLUMN_LETTERS[idx], SET_ORIGIN_ROW_LETTERS[idx])
}

fn position(alphabet: &[u8], letter: u8) -> usize {
    alphabet.iter().position(|&c| c == letter).unwrap_or(0)
}

/// Encodes a UTM easting/northing into its two grid square letters.
///
/// The first column of every zone (easting 100 000 - 199 999) carries the
/// set's origin column letter.
///
/// # Example
/// ```
/// use geocoord_rs::grid_square_id;
///
/// assert_eq!(grid_square_id(604_000.0, 5_300_000.0, 33), ['X', 'P']);
/// assert_eq!(grid_square_id(166_021.0, 0.0, 31), ['A', 'A']);
/// ```
pub fn grid_square_id(easting: f64, northing: f64, zone: u8) -> [char; 2] {
    let (col_origin, row_origin) = origins(zone);

    let col_index = (easting / GRID_SQUARE_SIZE).floor() as i64;
    let row_index = (northing / GRID_SQUARE_SIZE).floor() as i64;

    let col_start = position(COLUMN_LETTERS, col_origin) as i64;
    let row_start = position(ROW_LETTERS, row_origin) as i64;

    let col = (col_start + col_index - 1).rem_euclid(COLUMN_LETTERS.len() as i64) as usize;
    let row = (row_start + row_index).rem_euclid(ROW_LETTERS.len() as i64) as usize;

    [COLUMN_LETTERS[col] as char, ROW_LETTERS[row] as char]
}

/// Counts the steps from `origin` to `target` along `alphabet`, wrapping
/// back to its first letter at most once.
fn walk(alphabet: &[u8], origin: u8, target: char) -> Result<usize, GeoCoordError> {
    let target_byte = u8::try_from(target.to_ascii_uppercase())
        .map_err(|_| GeoCoordError::InvalidGridLetter(target))?;
    let mut idx = position(alphabet, origin);
    let mut steps = 0;
    let mut rewound = false;

    while alphabet[idx] != target_byte {
        idx += 1;
        steps += 1;
        if idx == alphabet.len() {
            if rewound {
                return Err(GeoCoordError::InvalidGridLetter(target));
            }
            idx = 0;
            rewound = true;
        }
    }

    Ok(steps)
}

/// Easting of the west edge of the grid square column `letter` in `zone`.
///
/// # Errors
///
/// [`GeoCoordError::InvalidGridLetter`] if the letter is not in the column cycle.
pub fn easting_from_letter(letter: char, zone: u8) -> Result<f64, GeoCoordError> {
    let (col_origin, _) = origins(zone);
    let steps = walk(COLUMN_LETTERS, col_origin, letter)?;
    Ok(GRID_SQUARE_SIZE * (steps as f64 + 1.0))
}

/// Northing of the south edge of row `letter` in `zone`, modulo 2 000 000 m.
///
/// # Errors
///
/// [`GeoCoordError::InvalidGridLetter`] if the letter is not in the row cycle.
pub fn northing_from_letter(letter: char, zone: u8) -> Result<f64, GeoCoordError> {
    let (_, row_origin) = origins(zone);
    let steps = walk(ROW_LETTERS, row_origin, letter)?;
    Ok(GRID_SQUARE_SIZE * steps as f64)
}

/// Lifts a row northing into the 2 000 000 m cycle that holds `band`.
///
/// # Errors
///
/// [`GeoCoordError::InvalidZoneLetter`] if `band` is not a latitude band.
pub fn disambiguate_northing(northing: f64, band: char) -> Result<f64, GeoCoordError> {
    let min = band_min_northing(band)?;
    let mut lifted = northing;
    while lifted < min {
        lifted += ROW_CYCLE_M;
    }
    Ok(lifted)
}

/// Decodes grid square letters to the south-west corner of the square.
///
/// # Example
/// ```
/// use geocoord_rs::decode_grid_square;
///
/// # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
/// let (easting, northing) = decode_grid_square(['U', 'B'], 33, 'U')?;
/// assert_eq!(easting, 300_000.0);
/// assert_eq!(northing, 6_100_000.0);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeoCoordError::InvalidGridLetter`] for a letter outside the zone's cycle
/// - [`GeoCoordError::InvalidZoneLetter`] for an unknown band
pub fn decode_grid_square(
    letters: [char; 2],
    zone: u8,
    band: char,
) -> Result<(f64, f64), GeoCoordError> {
    let easting = easting_from_letter(letters[0], zone)?;
    let northing = northing_from_letter(letters[1], zone)?;
    Ok((easting, disambiguate_northing(northing, band)?))
}
