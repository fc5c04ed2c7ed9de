pub mod band;
pub mod constants;
pub mod grid_square;
pub mod projection;

pub use band::{band_index, band_min_northing, is_southern_band, utm_lat_band};
pub use constants::{
    DEFAULT_DECIMAL_PLACES, DEFAULT_MGRS_PRECISION, FALSE_EASTING, FALSE_NORTHING, LAT_BANDS,
    MAX_MGRS_PRECISION, UTM_K0, WGS84_A, WGS84_INV_F,
};
pub use grid_square::{
    decode_grid_square, disambiguate_northing, easting_from_letter, grid_square_id,
    northing_from_letter, set_for_zone,
};
pub use projection::{ZonePosition, central_meridian, zone_number};
