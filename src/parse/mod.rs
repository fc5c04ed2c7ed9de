//! Free-text coordinate parsing.
//!
//! Every grammar is a pure `text -> Option<value>` function. Text that does
//! not match, or that matches but holds an out of range component, yields
//! `None`; [`parse_geodetic`] then moves on to the next grammar.

pub(crate) mod grammar;

use crate::convert::{mgrs_to_geodetic, utm_to_geodetic};
use crate::coord::{Geodetic, Mgrs, Utm};
use grammar::{LAT_DEGREES, LAT_MINUTES, LON_DEGREES, LON_MINUTES, number, sign};

/// Collapses whitespace runs to one space and trims both ends.
///
/// # Example
/// ```
/// use geocoord_rs::parse::normalize;
///
/// assert_eq!(normalize("  30N \t 60W "), "30N 60W");
/// ```
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses degrees, minutes and seconds, e.g. `38°53′22.2″N 77°2′7.1″W` or
/// `N38 53 22.2 W77 2 7.1`.
pub fn parse_dms(text: &str) -> Option<Geodetic> {
    let text = normalize(text);
    let caps = grammar::DMS.captures(&text)?;

    Geodetic::from_dms(
        sign(&caps, "a_h") * number(&caps, LAT_DEGREES)?,
        number(&caps, LAT_MINUTES)?,
        number(&caps, &["a_s"])?,
        sign(&caps, "o_h") * number(&caps, LON_DEGREES)?,
        number(&caps, LON_MINUTES)?,
        number(&caps, &["o_s"])?,
    )
    .ok()
}

/// Parses degrees and decimal minutes, e.g. `N12 34.5' W123 45.6'`.
pub fn parse_dm(text: &str) -> Option<Geodetic> {
    let text = normalize(text);
    let caps = grammar::DM.captures(&text)?;

    Geodetic::from_dm(
        sign(&caps, "a_h") * number(&caps, LAT_DEGREES)?,
        number(&caps, LAT_MINUTES)?,
        sign(&caps, "o_h") * number(&caps, LON_DEGREES)?,
        number(&caps, LON_MINUTES)?,
    )
    .ok()
}

/// Parses decimal degrees, e.g. `30N 60W`, `-33.9, 151` or `N51.5 W0.1`.
pub fn parse_decimal(text: &str) -> Option<Geodetic> {
    let text = normalize(text);
    let caps = grammar::DECIMAL.captures(&text)?;

    Geodetic::new(
        sign(&caps, "a_h") * number(&caps, &["lat"])?,
        sign(&caps, "o_h") * number(&caps, &["lon"])?,
    )
    .ok()
}

/// Parses an MGRS literal such as `33UXP0400`; see [`Mgrs`]'s `FromStr`.
pub fn parse_mgrs(text: &str) -> Option<Mgrs> {
    text.parse().ok()
}

/// Parses a UTM literal such as `33U 315428 5741457`.
pub fn parse_utm(text: &str) -> Option<Utm> {
    text.parse().ok()
}

/// Resolves coordinate text of unknown format to a geodetic position.
///
/// Grammars are tried in order: degrees-minutes-seconds, degrees-minutes,
/// decimal degrees, MGRS, UTM. The first that yields a valid position wins.
///
/// # Example
/// ```
/// use geocoord_rs::parse_geodetic;
///
/// let g = parse_geodetic("30N 60W").unwrap();
/// assert_eq!((g.lat(), g.lon()), (30.0, -60.0));
///
/// let g = parse_geodetic("33UXP0400").unwrap();
/// assert!((g.lat() - 47.8449).abs() < 1e-3);
///
/// assert!(parse_geodetic("somewhere nice").is_none());
/// ```
pub fn parse_geodetic(text: &str) -> Option<Geodetic> {
    parse_dms(text)
        .or_else(|| parse_dm(text))
        .or_else(|| parse_decimal(text))
        .or_else(|| parse_mgrs(text).and_then(|m| mgrs_to_geodetic(&m).ok()))
        .or_else(|| parse_utm(text).map(|u| utm_to_geodetic(&u)))
}
