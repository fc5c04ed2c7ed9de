use crate::core::band::band_index;
use crate::core::constants::{COLUMN_LETTERS, MAX_MGRS_PRECISION, ROW_LETTERS};
use crate::error::GeoCoordError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A Military Grid Reference System reference.
///
/// Easting and northing are kept as digit strings: their shared length is
/// the reference's precision, so `"04"`/`"00"` and `"04000"`/`"00000"` are
/// different references covering different areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mgrs {
    zone: u8,
    lat_band: char,
    grid_square: [char; 2],
    easting: String,
    northing: String,
}

impl Mgrs {
    /// Creates an MGRS reference from its parts. Letters are accepted in
    /// either case.
    ///
    /// # Example
    /// ```
    /// use geocoord_rs::Mgrs;
    ///
    /// # fn main() -> Result<(), geocoord_rs::GeoCoordError> {
    /// let m = Mgrs::new(33, 'U', "XP", "04", "00")?;
    /// assert_eq!(m.to_string(), "33U XP 04 00");
    /// assert_eq!(m.precision(), 2);
    /// assert_eq!(m.accuracy_m(), 1000.0);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - [`GeoCoordError::InvalidZone`] outside 1-60
    /// - [`GeoCoordError::InvalidLatBand`] for a letter outside C-X or I/O
    /// - [`GeoCoordError::InvalidGridSquare`] unless the id is a column letter
    ///   followed by a row letter
    /// - [`GeoCoordError::InvalidDigits`] for non-digit or over-long strings
    /// - [`GeoCoordError::PrecisionMismatch`] when the lengths differ
    pub fn new(
        zone: u8,
        lat_band: char,
        grid_square: &str,
        easting: &str,
        northing: &str,
    ) -> Result<Self, GeoCoordError> {
        if !(1..=60).contains(&zone) {
            return Err(GeoCoordError::InvalidZone(zone));
        }
        if band_index(lat_band).is_none() {
            return Err(GeoCoordError::InvalidLatBand(lat_band));
        }

        let grid_square = parse_grid_square(grid_square)?;
        check_digits("easting", easting)?;
        check_digits("northing", northing)?;

        if easting.len() != northing.len() {
            return Err(GeoCoordError::PrecisionMismatch {
                easting: easting.len(),
                northing: northing.len(),
            });
        }

        Ok(Self {
            zone,
            lat_band: lat_band.to_ascii_uppercase(),
            grid_square,
            easting: easting.to_string(),
            northing: northing.to_string(),
        })
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn lat_band(&self) -> char {
        self.lat_band
    }

    /// The two 100 km grid square letters, column first.
    pub fn grid_square(&self) -> [char; 2] {
        self.grid_square
    }

    pub fn easting(&self) -> &str {
        &self.easting
    }

    pub fn northing(&self) -> &str {
        &self.northing
    }

    /// Number of digits in each of easting and northing (0-5).
    pub fn precision(&self) -> usize {
        self.easting.len()
    }

    /// Side length in metres of the square this reference denotes.
    pub fn accuracy_m(&self) -> f64 {
        10f64.powi(5 - self.precision() as i32)
    }

    /// The reference with no separators, e.g. `33UXP0400`.
    pub fn to_compact_string(&self) -> String {
        format!(
            "{:02}{}{}{}{}{}",
            self.zone,
            self.lat_band,
            self.grid_square[0],
            self.grid_square[1],
            self.easting,
            self.northing
        )
    }
}

fn parse_grid_square(text: &str) -> Result<[char; 2], GeoCoordError> {
    let invalid = || GeoCoordError::InvalidGridSquare(text.to_string());
    let mut chars = text.chars().map(|c| c.to_ascii_uppercase());

    let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };

    let in_alphabet = |alphabet: &[u8], letter: char| {
        u8::try_from(letter).is_ok_and(|b| alphabet.contains(&b))
    };
    if !in_alphabet(COLUMN_LETTERS, col) || !in_alphabet(ROW_LETTERS, row) {
        return Err(invalid());
    }

    Ok([col, row])
}

fn check_digits(field: &'static str, digits: &str) -> Result<(), GeoCoordError> {
    if digits.len() > usize::from(MAX_MGRS_PRECISION) || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(GeoCoordError::InvalidDigits {
            field,
            value: digits.to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for Mgrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{} {}{}",
            self.zone, self.lat_band, self.grid_square[0], self.grid_square[1]
        )?;
        if !self.easting.is_empty() {
            write!(f, " {} {}", self.easting, self.northing)?;
        }
        Ok(())
    }
}

impl FromStr for Mgrs {
    type Err = GeoCoordError;

    /// Scans `<zone><band><square><easting><northing>` left to right.
    /// Whitespace may separate the grid zone, the square and the two digit
    /// halves, as in `33U XP 04 00`; letters may be lowercase.
    ///
    /// # Errors
    ///
    /// [`GeoCoordError::MalformedMgrs`] when the text does not have that
    /// shape; the errors of [`Mgrs::new`] when it does but a part is invalid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GeoCoordError::MalformedMgrs(s.to_string());

        let mut compact = String::new();
        let mut breaks = Vec::new();
        for group in s.split_whitespace() {
            if !compact.is_empty() {
                breaks.push(compact.len());
            }
            compact.push_str(&group.to_ascii_uppercase());
        }
        if !compact.is_ascii() {
            return Err(malformed());
        }
        let bytes = compact.as_bytes();

        let zone_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if !(1..=2).contains(&zone_len) {
            return Err(malformed());
        }
        let zone: u8 = compact[..zone_len].parse().map_err(|_| malformed())?;

        let rest = &compact[zone_len..];
        let band = rest.chars().next().ok_or_else(malformed)?;
        if band_index(band).is_none() {
            return Err(malformed());
        }

        let square = rest.get(1..3).ok_or_else(malformed)?;
        if !square.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(malformed());
        }

        let digits = &rest[3..];
        let half = digits.len() / 2;
        if digits.len() % 2 != 0
            || half > usize::from(MAX_MGRS_PRECISION)
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let square_end = zone_len + 3;
        let group_ends = [zone_len + 1, square_end, square_end + half];
        if breaks.iter().any(|b| !group_ends.contains(b)) {
            return Err(malformed());
        }

        Mgrs::new(zone, band, square, &digits[..half], &digits[half..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert_eq!(
            Mgrs::new(0, 'U', "XP", "04", "00"),
            Err(GeoCoordError::InvalidZone(0))
        );
        assert_eq!(
            Mgrs::new(33, 'O', "XP", "04", "00"),
            Err(GeoCoordError::InvalidLatBand('O'))
        );
        assert_eq!(
            Mgrs::new(33, 'U', "XW", "04", "00"),
            Err(GeoCoordError::InvalidGridSquare("XW".to_string()))
        );
        assert_eq!(
            Mgrs::new(33, 'U', "IP", "04", "00"),
            Err(GeoCoordError::InvalidGridSquare("IP".to_string()))
        );
        assert_eq!(
            Mgrs::new(33, 'U', "XPQ", "04", "00"),
            Err(GeoCoordError::InvalidGridSquare("XPQ".to_string()))
        );
        assert_eq!(
            Mgrs::new(33, 'U', "XP", "0a", "00"),
            Err(GeoCoordError::InvalidDigits {
                field: "easting",
                value: "0a".to_string()
            })
        );
        assert_eq!(
            Mgrs::new(33, 'U', "XP", "00", "000000"),
            Err(GeoCoordError::InvalidDigits {
                field: "northing",
                value: "000000".to_string()
            })
        );
        assert_eq!(
            Mgrs::new(33, 'U', "XP", "041", "00"),
            Err(GeoCoordError::PrecisionMismatch {
                easting: 3,
                northing: 2
            })
        );
    }

    #[test]
    fn test_lowercase_is_normalised() -> Result<(), GeoCoordError> {
        let m = Mgrs::new(33, 'u', "xp", "04", "00")?;
        assert_eq!(m.lat_band(), 'U');
        assert_eq!(m.grid_square(), ['X', 'P']);
        Ok(())
    }

    #[test]
    fn test_precision_and_accuracy() -> Result<(), GeoCoordError> {
        let m = Mgrs::new(18, 'S', "UJ", "23478", "06483")?;
        assert_eq!(m.precision(), 5);
        assert_eq!(m.accuracy_m(), 1.0);

        let bare = Mgrs::new(18, 'S', "UJ", "", "")?;
        assert_eq!(bare.precision(), 0);
        assert_eq!(bare.accuracy_m(), 100_000.0);
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), GeoCoordError> {
        let m = Mgrs::new(4, 'Q', "FJ", "12345", "67890")?;
        assert_eq!(m.to_string(), "04Q FJ 12345 67890");
        assert_eq!(m.to_compact_string(), "04QFJ1234567890");

        let bare = Mgrs::new(33, 'U', "XP", "", "")?;
        assert_eq!(bare.to_string(), "33U XP");
        Ok(())
    }

    #[test]
    fn test_from_str() -> Result<(), GeoCoordError> {
        let m: Mgrs = "33UXP0400".parse()?;
        assert_eq!(m.zone(), 33);
        assert_eq!(m.lat_band(), 'U');
        assert_eq!(m.grid_square(), ['X', 'P']);
        assert_eq!(m.easting(), "04");
        assert_eq!(m.northing(), "00");

        let spaced: Mgrs = "33u xp 04 00".parse()?;
        assert_eq!(spaced, m);

        let single_digit_zone: Mgrs = "4QFJ1234567890".parse()?;
        assert_eq!(single_digit_zone.zone(), 4);
        assert_eq!(single_digit_zone.easting(), "12345");

        let bare: Mgrs = "33UXP".parse()?;
        assert_eq!(bare.precision(), 0);
        Ok(())
    }

    #[test]
    fn test_from_str_spaces_only_between_groups() -> Result<(), GeoCoordError> {
        let m: Mgrs = "33UXP0400".parse()?;
        for text in ["33U XP0400", "33UXP 0400", "33UXP04 00", "  33U\tXP  04 00 ", "33U XP"] {
            let parsed: Mgrs = text.parse()?;
            assert_eq!(parsed.zone(), 33, "{:?}", text);
            if parsed.precision() > 0 {
                assert_eq!(parsed, m, "{:?}", text);
            }
        }

        for text in ["3 3UXP0400", "33 UXP0400", "33UX P0400", "33UXP0 400", "33UXP04 0 0"] {
            assert_eq!(
                text.parse::<Mgrs>(),
                Err(GeoCoordError::MalformedMgrs(text.to_string())),
                "{:?} should be malformed",
                text
            );
        }
        Ok(())
    }

    #[test]
    fn test_from_str_rejects_shape() {
        for text in [
            "",
            "UXP0400",
            "333UXP0400",
            "33AXP0400",
            "33IXP0400",
            "33UXP040",
            "33UX10400",
            "33UXP040O",
            "33UXP123456123456",
            "33UXP04é0",
        ] {
            assert!(
                matches!(text.parse::<Mgrs>(), Err(GeoCoordError::MalformedMgrs(_))),
                "{:?} should be malformed",
                text
            );
        }
    }

    #[test]
    fn test_from_str_semantic_errors() {
        assert_eq!(
            "61UXP0400".parse::<Mgrs>(),
            Err(GeoCoordError::InvalidZone(61))
        );
        assert_eq!(
            "33UXZ0400".parse::<Mgrs>(),
            Err(GeoCoordError::InvalidGridSquare("XZ".to_string()))
        );
    }

    #[test]
    fn test_display_parses_back() -> Result<(), GeoCoordError> {
        let m = Mgrs::new(1, 'C', "DM", "41025", "72753")?;
        assert_eq!(m.to_string().parse::<Mgrs>()?, m);
        assert_eq!(m.to_compact_string().parse::<Mgrs>()?, m);
        Ok(())
    }
}
