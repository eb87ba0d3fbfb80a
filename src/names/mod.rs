//! Constellation name and label-position table
//!
//! The name catalog ships as two parallel text files with one row per
//! constellation: a position file (`id, ra_hours, ra_minutes,
//! dec_degrees`) and a name file (`id, short, long, native`). Rows are
//! paired by index; ids are assigned 1-based from the row number. A
//! row malformed on either side is skipped.

use nalgebra::Vector3;

use crate::radec;

/// One constellation's names and label direction.
#[derive(Debug, Clone, PartialEq)]
pub struct NameRecord {
    /// 1-based row number in the catalog
    pub constellation_id: u32,
    /// IAU short code, e.g. "Ori"
    pub short_name: String,
    /// Full latin name, e.g. "Orion"
    pub long_name: String,
    /// Localized name
    pub native_name: String,
    /// Unit direction of the label position
    pub direction: Vector3<f64>,
}

fn parse_position_line(line: &str) -> Option<Vector3<f64>> {
    let fields: Vec<&str> = line.split(',').collect();
    let hours: f64 = fields.get(1)?.trim().parse().ok()?;
    let minutes: f64 = fields.get(2)?.trim().parse().ok()?;
    let dec_degrees: f64 = fields.get(3)?.trim().parse().ok()?;
    let ra_degrees = 15.0 * hours + minutes / 60.0;
    Some(radec::direction_from_degrees(ra_degrees, dec_degrees))
}

fn parse_name_line(line: &str) -> Option<(String, String, String)> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 4 {
        return None;
    }
    Some((
        fields[1].to_string(),
        fields[2].to_string(),
        fields[3].to_string(),
    ))
}

/// Build the name table by zipping the position and name files row by
/// row. Rows where either side fails to parse are dropped.
pub fn parse_name_catalog(position_text: &str, name_text: &str) -> Vec<NameRecord> {
    position_text
        .lines()
        .zip(name_text.lines())
        .enumerate()
        .filter_map(|(row, (position_line, name_line))| {
            let direction = parse_position_line(position_line)?;
            let (short_name, long_name, native_name) = parse_name_line(name_line)?;
            Some(NameRecord {
                constellation_id: row as u32 + 1,
                short_name,
                long_name,
                native_name,
                direction,
            })
        })
        .collect()
}
