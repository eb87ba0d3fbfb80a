//! Zodiac constellation classification
//!
//! Partitions line segments into the twelve zodiac constellations and
//! everything else, by exact membership of the constellation short
//! code in a fixed table. Index 0 of the table is the `"---"` sentinel
//! paired with [`Zodiac::None`]; it never appears as a real code.

use crate::catalog::{LineSegment, StarRecord};
use crate::query;

/// Short codes indexed by [`Zodiac`] discriminant; index 0 is the
/// "none" sentinel.
pub const ZODIAC_SHORT_NAMES: [&str; 13] = [
    "---", "Ari", "Tau", "Gem", "Cnc", "Leo", "Vir", "Lib", "Sco", "Sgr", "Cap", "Aqr", "Psc",
];

/// The twelve zodiac constellations plus a "none" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zodiac {
    None = 0,
    Aries = 1,
    Taurus = 2,
    Gemini = 3,
    Cancer = 4,
    Leo = 5,
    Virgo = 6,
    Libra = 7,
    Scorpius = 8,
    Sagittarius = 9,
    Capricornus = 10,
    Aquarius = 11,
    Pisces = 12,
}

impl Zodiac {
    /// The short code for this zodiac sign (`"---"` for `None`)
    pub fn short_name(self) -> &'static str {
        ZODIAC_SHORT_NAMES[self as usize]
    }
}

/// Classify a constellation code by substring containment against the
/// zodiac short names.
///
/// Note: a code containing "Ari" resolves to [`Zodiac::Taurus`], the
/// same as "Tau". This is a long-standing quirk of the classifier and
/// is kept for compatibility; see DESIGN.md.
pub fn short_name_to_zodiac(code: &str) -> Zodiac {
    if code.contains(ZODIAC_SHORT_NAMES[1]) {
        Zodiac::Taurus
    } else if code.contains(ZODIAC_SHORT_NAMES[2]) {
        Zodiac::Taurus
    } else if code.contains(ZODIAC_SHORT_NAMES[3]) {
        Zodiac::Gemini
    } else if code.contains(ZODIAC_SHORT_NAMES[4]) {
        Zodiac::Cancer
    } else if code.contains(ZODIAC_SHORT_NAMES[5]) {
        Zodiac::Leo
    } else if code.contains(ZODIAC_SHORT_NAMES[6]) {
        Zodiac::Virgo
    } else if code.contains(ZODIAC_SHORT_NAMES[7]) {
        Zodiac::Libra
    } else if code.contains(ZODIAC_SHORT_NAMES[8]) {
        Zodiac::Scorpius
    } else if code.contains(ZODIAC_SHORT_NAMES[9]) {
        Zodiac::Sagittarius
    } else if code.contains(ZODIAC_SHORT_NAMES[10]) {
        Zodiac::Capricornus
    } else if code.contains(ZODIAC_SHORT_NAMES[11]) {
        Zodiac::Aquarius
    } else if code.contains(ZODIAC_SHORT_NAMES[12]) {
        Zodiac::Pisces
    } else {
        Zodiac::None
    }
}

/// Exact membership of a code in the zodiac table (the partition test;
/// no substring matching).
pub fn is_zodiac_code(code: &str) -> bool {
    ZODIAC_SHORT_NAMES.contains(&code)
}

fn lines_by_membership(lines: &[LineSegment], keep_zodiac: bool) -> Vec<LineSegment> {
    lines
        .iter()
        .filter(|line| is_zodiac_code(&line.constellation) == keep_zodiac)
        .cloned()
        .collect()
}

/// Line segments belonging to the twelve zodiac constellations
pub fn zodiac_lines(lines: &[LineSegment]) -> Vec<LineSegment> {
    lines_by_membership(lines, true)
}

/// Line segments of every non-zodiac constellation
pub fn non_zodiac_lines(lines: &[LineSegment]) -> Vec<LineSegment> {
    lines_by_membership(lines, false)
}

/// Stars from `base` that do not appear in any zodiac line segment of
/// `lines`, in `base` order.
pub fn stars_outside_zodiac(base: &[StarRecord], lines: &[LineSegment]) -> Vec<StarRecord> {
    let zodiac_stars = query::stars_in_lines(&zodiac_lines(lines));
    base.iter()
        .filter(|star| !zodiac_stars.iter().any(|z| z.hip_id == star.hip_id))
        .cloned()
        .collect()
}
