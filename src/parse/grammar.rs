//! Compiled coordinate grammars.
//!
//! Each latitude/longitude grammar has two surface forms: hemisphere letters
//! after each magnitude (`38 53 22.2N 77 2 7.1W`), or a letter or sign
//! before it (`N38 53 22.2 W77 2 7.1`, `-33.9, 151`). The regex crate has
//! no lookahead, so a one-digit component must be followed by a unit mark
//! or a space to tell it apart from the first digit of a two-digit one.

use regex::{Captures, Regex};
use std::sync::LazyLock;

pub(crate) const LAT_DEGREES: &[&str] = &["a_d2", "a_d1"];
pub(crate) const LON_DEGREES: &[&str] = &["o_d3", "o_d12"];
pub(crate) const LAT_MINUTES: &[&str] = &["a_m2", "a_m1", "a_m"];
pub(crate) const LON_MINUTES: &[&str] = &["o_m2", "o_m1", "o_m"];

fn lat_degrees(p: &str) -> String {
    format!(r"(?:(?P<{p}_d2>[0-9]{{2}})[d°:]?\s?|(?P<{p}_d1>[0-9])(?:[d°:]\s?|\s))")
}

fn lon_degrees(p: &str) -> String {
    format!(r"(?:(?P<{p}_d3>[0-9]{{3}})[d°:]?\s?|(?P<{p}_d12>[0-9]{{1,2}})(?:[d°:]\s?|\s))")
}

fn whole_minutes(p: &str) -> String {
    format!(r"(?:(?P<{p}_m2>[0-5][0-9])['′:]?\s?|(?P<{p}_m1>[0-9])(?:['′:]\s?|\s))")
}

fn decimal_minutes(p: &str) -> String {
    format!(r"(?P<{p}_m>[0-5]?[0-9](?:\.[0-9]+)?)['′]?")
}

fn seconds(p: &str) -> String {
    format!(r#"(?P<{p}_s>[0-5]?[0-9](?:\.[0-9]+)?)["″]?"#)
}

const LAT_DECIMAL: &str = r"(?P<lat>90(?:\.0+)?|[0-8]?[0-9](?:\.[0-9]+)?)[d°]?";
const LON_DECIMAL: &str = r"(?P<lon>180(?:\.0+)?|(?:1[0-7][0-9]|0?[0-9]{1,2})(?:\.[0-9]+)?)[d°]?";

fn hemisphere_after(lat: &str, lon: &str) -> String {
    format!(r"(?i)^{lat}\s?(?P<a_h>[NS])\s?[,/]?\s?{lon}\s?(?P<o_h>[EW])$")
}

fn hemisphere_before(lat: &str, lon: &str) -> String {
    // lat and lon are split by a hemisphere mark, a comma or slash, or a space
    format!(
        r"(?i)^(?P<a_h>[NS+-])?\s?{lat}(?:\s?[,/]?\s?(?P<o_h>[EW+-])\s?|\s?[,/]\s?|\s){lon}$"
    )
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("coordinate grammar must compile")
}

/// A latitude/longitude grammar in both of its surface forms.
pub(crate) struct Grammar {
    after: Regex,
    before: Regex,
}

impl Grammar {
    fn new(lat: &str, lon: &str) -> Self {
        Self {
            after: compile(&hemisphere_after(lat, lon)),
            before: compile(&hemisphere_before(lat, lon)),
        }
    }

    /// Captures from the first form that matches, hemisphere-after first.
    pub(crate) fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.after.captures(text).or_else(|| self.before.captures(text))
    }
}

pub(crate) static DMS: LazyLock<Grammar> = LazyLock::new(|| {
    let lat = format!("{}{}{}", lat_degrees("a"), whole_minutes("a"), seconds("a"));
    let lon = format!("{}{}{}", lon_degrees("o"), whole_minutes("o"), seconds("o"));
    Grammar::new(&lat, &lon)
});

pub(crate) static DM: LazyLock<Grammar> = LazyLock::new(|| {
    let lat = format!("{}{}", lat_degrees("a"), decimal_minutes("a"));
    let lon = format!("{}{}", lon_degrees("o"), decimal_minutes("o"));
    Grammar::new(&lat, &lon)
});

pub(crate) static DECIMAL: LazyLock<Grammar> =
    LazyLock::new(|| Grammar::new(LAT_DECIMAL, LON_DECIMAL));

static UTM: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"(?i)^(?P<zone>[0-5][0-9]|60)\s?(?P<band>[C-HJ-NP-X])",
        r"\s?(?P<e>[0-9]{6})\s?(?P<n>[0-9]{7})$",
    ))
});

/// First named group in `names` that took part in the match, as a number.
pub(crate) fn number(caps: &Captures, names: &[&str]) -> Option<f64> {
    names
        .iter()
        .find_map(|name| caps.name(name))
        .and_then(|m| m.as_str().parse().ok())
}

/// `-1.0` when the hemisphere group holds S, W or a minus sign.
pub(crate) fn sign(caps: &Captures, name: &str) -> f64 {
    match caps.name(name).map(|m| m.as_str()) {
        Some("S" | "s" | "W" | "w" | "-") => -1.0,
        _ => 1.0,
    }
}

/// Splits a UTM literal into zone, band, easting and northing.
pub(crate) fn utm_captures(text: &str) -> Option<(u8, char, f64, f64)> {
    let text = super::normalize(text);
    let caps = UTM.captures(&text)?;

    let zone = caps.name("zone")?.as_str().parse().ok()?;
    let band = caps.name("band")?.as_str().chars().next()?;
    let easting = caps.name("e")?.as_str().parse().ok()?;
    let northing = caps.name("n")?.as_str().parse().ok()?;
    Some((zone, band, easting, northing))
}
