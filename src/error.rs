/// Error type for geocoord-rs operations.
///
/// The `Invalid*` variants up to `InvalidPrecision` are construction-time
/// validation failures; every one carries the value that was rejected.
#[derive(Debug, PartialEq)]
pub enum GeoCoordError {
    /// Latitude is not finite or outside [-90, 90].
    InvalidLatitude(f64),
    /// Longitude is not finite or outside [-180, 180].
    InvalidLongitude(f64),
    /// A degree, minute or second component is out of range or non-integral.
    InvalidComponent { field: &'static str, value: f64 },
    /// UTM zone outside 1-60.
    InvalidZone(u8),
    /// Latitude band letter outside C-X (I and O excluded).
    InvalidLatBand(char),
    /// 100 km grid square id is not two letters of the skip-I/O alphabet.
    InvalidGridSquare(String),
    /// An easting/northing value or digit string is malformed.
    InvalidDigits { field: &'static str, value: String },
    /// MGRS easting and northing digit strings differ in length.
    PrecisionMismatch { easting: usize, northing: usize },
    /// MGRS precision outside 1-5 digits.
    InvalidPrecision(u8),
    /// Latitude outside the UTM band range [-80, 84).
    UnsupportedLatitude(f64),
    /// Text is not an MGRS reference.
    MalformedMgrs(String),
    /// Text is not a UTM coordinate.
    MalformedUtm(String),
    /// A grid square letter never occurs in the zone's letter cycle.
    InvalidGridLetter(char),
    /// A latitude band letter has no minimum-northing entry.
    InvalidZoneLetter(char),
    /// No grammar recognised the coordinate text.
    UnrecognizedInput(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or writing error.
    CsvError(String),
    /// JSON serialization error.
    SerializeError(String),
}

impl std::fmt::Display for GeoCoordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoCoordError::InvalidLatitude(v) => write!(f, "Invalid latitude: {}", v),
            GeoCoordError::InvalidLongitude(v) => write!(f, "Invalid longitude: {}", v),
            GeoCoordError::InvalidComponent { field, value } => {
                write!(f, "Invalid {}: {}", field, value)
            }
            GeoCoordError::InvalidZone(z) => write!(f, "Invalid UTM zone: {}", z),
            GeoCoordError::InvalidLatBand(c) => write!(f, "Invalid latitude band: {}", c),
            GeoCoordError::InvalidGridSquare(s) => write!(f, "Invalid grid square: {}", s),
            GeoCoordError::InvalidDigits { field, value } => {
                write!(f, "Invalid {}: '{}'", field, value)
            }
            GeoCoordError::PrecisionMismatch { easting, northing } => write!(
                f,
                "Precision mismatch: easting has {} digits, northing has {}",
                easting, northing
            ),
            GeoCoordError::InvalidPrecision(p) => write!(f, "Invalid MGRS precision: {}", p),
            GeoCoordError::UnsupportedLatitude(v) => write!(
                f,
                "Unsupported latitude: {} (UTM covers 80S to 84N)",
                v
            ),
            GeoCoordError::MalformedMgrs(s) => write!(f, "Malformed MGRS: '{}'", s),
            GeoCoordError::MalformedUtm(s) => write!(f, "Malformed UTM: '{}'", s),
            GeoCoordError::InvalidGridLetter(c) => write!(f, "Invalid grid letter: {}", c),
            GeoCoordError::InvalidZoneLetter(c) => write!(f, "Invalid zone letter: {}", c),
            GeoCoordError::UnrecognizedInput(s) => {
                write!(f, "Could not convert input: '{}'", s)
            }
            GeoCoordError::IoError(msg) => write!(f, "IO error: {}", msg),
            GeoCoordError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            GeoCoordError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
        }
    }
}

impl std::error::Error for GeoCoordError {}
