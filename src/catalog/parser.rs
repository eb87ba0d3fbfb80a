//! Line-level parsing of the comma-delimited catalog formats
//!
//! Star record fields (0-indexed): `0` = HIP id, `1..=3` = RA h/m/s,
//! `4` = declination sign flag (0 means negative), `5..=7` = dec d/m/s,
//! `8` = magnitude, `9` = parallax in mas (optional, 0 on absence or
//! parse failure), `12` = B-V index (optional; absent or unparsable
//! yields the neutral gray color). Failure of any required field
//! rejects the whole line; optional fields degrade instead of failing.
//!
//! Line-segment record fields: `0` = constellation short code,
//! `1` = start id, `2` = end id.

use std::str::FromStr;

use crate::color::{bv_to_rgb, Rgba};
use crate::errors::RecordError;
use crate::radec::{self, Declination, RightAscension};

use super::StarRecord;

fn required<'a>(
    fields: &[&'a str],
    index: usize,
    name: &'static str,
) -> Result<&'a str, RecordError> {
    fields
        .get(index)
        .map(|s| s.trim())
        .ok_or(RecordError::MissingField { index, name })
}

fn parse_required<T: FromStr>(
    fields: &[&str],
    index: usize,
    name: &'static str,
) -> Result<T, RecordError> {
    let raw = required(fields, index, name)?;
    raw.parse().map_err(|_| RecordError::InvalidField {
        index,
        name,
        value: raw.to_string(),
    })
}

/// Value of an optional trailing field, or the default when the field
/// is absent or does not parse.
fn optional_or<T: FromStr + Copy>(fields: &[&str], index: usize, default: T) -> T {
    fields
        .get(index)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse one star catalog line into a [`StarRecord`].
pub fn parse_star_line(line: &str) -> Result<StarRecord, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();

    let hip_id: u32 = parse_required(&fields, 0, "hip id")?;
    let ra = RightAscension::new(
        parse_required(&fields, 1, "ra hours")?,
        parse_required(&fields, 2, "ra minutes")?,
        parse_required(&fields, 3, "ra seconds")?,
    );
    let sign: i32 = parse_required(&fields, 4, "dec sign")?;
    let dec = Declination::new(
        sign == 0,
        parse_required(&fields, 5, "dec degrees")?,
        parse_required(&fields, 6, "dec minutes")?,
        parse_required(&fields, 7, "dec seconds")?,
    );
    let magnitude: f64 = parse_required(&fields, 8, "magnitude")?;

    let parallax_mas = optional_or(&fields, 9, 0.0);
    let color = fields
        .get(12)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .map(bv_to_rgb)
        .unwrap_or(Rgba::GRAY);

    Ok(StarRecord {
        hip_id,
        direction: radec::direction(ra, dec),
        color,
        magnitude,
        parallax_mas,
    })
}

/// Parse one line-segment catalog line into its constellation code and
/// endpoint ids. Id resolution against a star list happens separately
/// in [`link_lines`](super::link_lines).
pub fn parse_line_entry(line: &str) -> Result<(String, u32, u32), RecordError> {
    let fields: Vec<&str> = line.split(',').collect();

    let constellation = required(&fields, 0, "constellation")?.to_string();
    let start_id: u32 = parse_required(&fields, 1, "start id")?;
    let end_id: u32 = parse_required(&fields, 2, "end id")?;

    Ok((constellation, start_id, end_id))
}
