/// WGS84 semi-major axis in meters
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 inverse flattening
pub const WGS84_INV_F: f64 = 298.257_223_563;

/// WGS84 flattening
pub const WGS84_F: f64 = 1.0 / WGS84_INV_F;

/// First eccentricity squared, 2f - f^2
pub const E2: f64 = 2.0 * WGS84_F - WGS84_F * WGS84_F;

/// Second eccentricity squared, e^2 / (1 - e^2)
pub const EP2: f64 = E2 / (1.0 - E2);

/// Scale factor on the central meridian
pub const UTM_K0: f64 = 0.9996;

/// Added to every easting so a zone never goes negative
pub const FALSE_EASTING: f64 = 500_000.0;

/// Added to southern hemisphere northings
pub const FALSE_NORTHING: f64 = 10_000_000.0;

/// Width of a UTM zone in degrees
pub const ZONE_WIDTH_DEG: f64 = 6.0;

/// Height of a latitude band in degrees
pub const BAND_HEIGHT_DEG: f64 = 8.0;

/// Southern edge of the UTM band table (inclusive)
pub const MIN_UTM_LAT: f64 = -80.0;

/// Northern edge of the UTM band table (exclusive)
pub const MAX_UTM_LAT: f64 = 84.0;

/// Latitude band letters, south to north
pub const LAT_BANDS: &[u8; 20] = b"CDEFGHJKLMNPQRSTUVWX";

/// Index into `LAT_BANDS` of the first northern hemisphere band ('N')
pub const FIRST_NORTHERN_BAND: usize = 10;

/// Side of an MGRS grid square in meters
pub const GRID_SQUARE_SIZE: f64 = 100_000.0;

/// Northing repeat period of the row letters in meters
pub const ROW_CYCLE_M: f64 = 2_000_000.0;

/// Number of 100k letter sets zones cycle through
pub const NUM_100K_SETS: u8 = 6;

/// Column letter at the origin of each 100k set
pub const SET_ORIGIN_COLUMN_LETTERS: &[u8; 6] = b"AJSAJS";

/// Row letter at the origin of each 100k set
pub const SET_ORIGIN_ROW_LETTERS: &[u8; 6] = b"AFAFAF";

/// Column letters, A-Z without I and O
pub const COLUMN_LETTERS: &[u8; 24] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Row letters, A-V without I and O
pub const ROW_LETTERS: &[u8; 20] = b"ABCDEFGHJKLMNPQRSTUV";

/// Minimum northing of each latitude band in meters, same order as `LAT_BANDS`
pub const BAND_MIN_NORTHING: [f64; 20] = [
    1_100_000.0,
    2_000_000.0,
    2_800_000.0,
    3_700_000.0,
    4_600_000.0,
    5_500_000.0,
    6_400_000.0,
    7_300_000.0,
    8_200_000.0,
    9_100_000.0,
    0.0,
    800_000.0,
    1_700_000.0,
    2_600_000.0,
    3_500_000.0,
    4_400_000.0,
    5_300_000.0,
    6_200_000.0,
    7_000_000.0,
    7_900_000.0,
];

/// Largest number of easting/northing digits in an MGRS reference (1 m)
pub const MAX_MGRS_PRECISION: u8 = 5;

/// MGRS digits used when none are requested
pub const DEFAULT_MGRS_PRECISION: u8 = 5;

/// Fractional digits of the decimal degree display
pub const DEFAULT_DECIMAL_PLACES: usize = 5;

/// Most fractional digits printed for minutes or seconds (about 30 µm of arc)
pub const MAX_SEXAGESIMAL_PLACES: usize = 9;
