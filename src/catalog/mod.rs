//! Hipparcos star and constellation-line catalogs
//!
//! Loads the comma-delimited star catalog, optionally merges a denser
//! secondary catalog, and resolves the constellation line-segment
//! catalog against the merged star list. The resulting [`Catalog`] is
//! immutable and safe to share across threads; every query over it is
//! a pure function.
//!
//! Loading never fails as a whole: each malformed or unresolvable line
//! is dropped and recorded in the [`LoadReport`], and a catalog that
//! ends up empty is a valid outcome.
//!
//! # Example
//!
//! ```
//! use asterism::catalog::Catalog;
//!
//! let stars = "27989,5,55,10.3,1,7,24,25.4,0.42,7.63,,,1.85\n\
//!              25336,5,25,7.9,1,6,20,59,1.64,12.92,,,-0.13\n";
//! let lines = "Ori,27989,25336\n";
//!
//! let catalog = Catalog::load(stars, None, lines);
//! assert_eq!(catalog.stars().len(), 2);
//! assert_eq!(catalog.lines().len(), 1);
//! assert!(catalog.report().is_clean());
//! ```

mod parser;

pub use parser::{parse_line_entry, parse_star_line};

use std::fmt;

use nalgebra::Vector3;

use crate::color::Rgba;
use crate::errors::RecordError;

/// One star from the Hipparcos catalog.
///
/// `direction` is the unit vector produced by the two chained axis
/// rotations in [`radec`](crate::radec); it is never re-normalized
/// after construction. `parallax_mas` of 0 means unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRecord {
    /// Hipparcos identifier, positive and unique within a catalog
    pub hip_id: u32,
    /// Unit direction from the observer in the equatorial frame
    pub direction: Vector3<f64>,
    /// Apparent color, alpha always 1
    pub color: Rgba,
    /// Apparent magnitude, lower is brighter
    pub magnitude: f64,
    /// Parallax in milliarcseconds, 0 when unknown
    pub parallax_mas: f64,
}

/// One constellation line segment with both endpoints resolved.
///
/// The endpoints are full [`StarRecord`] copies taken at construction
/// time, so a segment is a snapshot: changing any star list afterwards
/// never affects it.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    /// Constellation short code, e.g. "Ori"
    pub constellation: String,
    pub start: StarRecord,
    pub end: StarRecord,
}

/// Advisory record of every line dropped during a load.
///
/// Line numbers are 0-based within their source text. The report is
/// diagnostic only; it never affects which records were loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Rejected lines from the primary star catalog
    pub star_failures: Vec<(usize, RecordError)>,
    /// Rejected lines from the secondary (append) star catalog
    pub append_failures: Vec<(usize, RecordError)>,
    /// Rejected or unresolved lines from the line-segment catalog
    pub line_failures: Vec<(usize, RecordError)>,
}

impl LoadReport {
    /// True when every line of every input parsed and resolved
    pub fn is_clean(&self) -> bool {
        self.star_failures.is_empty()
            && self.append_failures.is_empty()
            && self.line_failures.is_empty()
    }

    /// Total number of dropped lines across all inputs
    pub fn dropped(&self) -> usize {
        self.star_failures.len() + self.append_failures.len() + self.line_failures.len()
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} dropped ({} star, {} append, {} line)",
            self.dropped(),
            self.star_failures.len(),
            self.append_failures.len(),
            self.line_failures.len()
        )
    }
}

/// Parse a star catalog text line by line.
///
/// Returns the successfully parsed records in file order together with
/// the per-line failures. Blank lines are ignored.
pub fn parse_star_catalog(text: &str) -> (Vec<StarRecord>, Vec<(usize, RecordError)>) {
    let mut stars = Vec::new();
    let mut failures = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parser::parse_star_line(line) {
            Ok(star) => stars.push(star),
            Err(err) => failures.push((line_no, err)),
        }
    }
    (stars, failures)
}

/// Merge a sparse high-precision star list into a denser one.
///
/// The secondary list is the base. Each primary record, in order,
/// replaces the secondary record carrying the same id in place
/// (keeping the secondary's position) or is appended. The inputs are
/// untouched; the combined list is newly allocated.
pub fn merge(primary: &[StarRecord], secondary: &[StarRecord]) -> Vec<StarRecord> {
    let mut combined = secondary.to_vec();
    for star in primary {
        match combined.iter_mut().find(|s| s.hip_id == star.hip_id) {
            Some(slot) => *slot = star.clone(),
            None => combined.push(star.clone()),
        }
    }
    combined
}

/// Resolve a line-segment catalog text against a star list.
///
/// Each parsed entry must find both endpoint ids in `stars`; otherwise
/// the segment is dropped and the failure names the constellation code
/// and the missing id. Blank lines are ignored.
pub fn link_lines(text: &str, stars: &[StarRecord]) -> (Vec<LineSegment>, Vec<(usize, RecordError)>) {
    let mut lines = Vec::new();
    let mut failures = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match resolve_entry(line, stars) {
            Ok(segment) => lines.push(segment),
            Err(err) => failures.push((line_no, err)),
        }
    }
    (lines, failures)
}

fn resolve_entry(line: &str, stars: &[StarRecord]) -> Result<LineSegment, RecordError> {
    let (constellation, start_id, end_id) = parser::parse_line_entry(line)?;
    let start = find_star(stars, start_id, &constellation)?;
    let end = find_star(stars, end_id, &constellation)?;
    Ok(LineSegment {
        constellation,
        start,
        end,
    })
}

fn find_star(
    stars: &[StarRecord],
    hip_id: u32,
    constellation: &str,
) -> Result<StarRecord, RecordError> {
    stars
        .iter()
        .find(|s| s.hip_id == hip_id)
        .cloned()
        .ok_or_else(|| RecordError::UnresolvedStar {
            constellation: constellation.to_string(),
            hip_id,
        })
}

/// The immutable combined star and line-segment catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    stars: Vec<StarRecord>,
    lines: Vec<LineSegment>,
    report: LoadReport,
}

impl Catalog {
    /// Build a catalog in the fixed order: parse the primary star
    /// text, merge the optional secondary text beneath it, then link
    /// the line-segment text against the combined star list.
    pub fn load(star_text: &str, append_text: Option<&str>, line_text: &str) -> Catalog {
        let (primary, star_failures) = parse_star_catalog(star_text);

        let mut report = LoadReport {
            star_failures,
            ..LoadReport::default()
        };

        let stars = match append_text {
            Some(text) => {
                let (secondary, append_failures) = parse_star_catalog(text);
                report.append_failures = append_failures;
                if secondary.is_empty() {
                    primary
                } else {
                    merge(&primary, &secondary)
                }
            }
            None => primary,
        };

        let (lines, line_failures) = link_lines(line_text, &stars);
        report.line_failures = line_failures;

        Catalog {
            stars,
            lines,
            report,
        }
    }

    /// All stars in merged order
    pub fn stars(&self) -> &[StarRecord] {
        &self.stars
    }

    /// All resolved line segments in file order
    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    /// Diagnostics accumulated during the load
    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn star(hip_id: u32, magnitude: f64) -> StarRecord {
        StarRecord {
            hip_id,
            direction: Vector3::new(0.0, 0.0, 1.0),
            color: Rgba::GRAY,
            magnitude,
            parallax_mas: 0.0,
        }
    }

    #[test]
    fn test_parse_catalog_skips_bad_lines() {
        let text = "10,1,2,3,1,4,5,6,7.5\nnot a star\n20,2,3,4,0,5,6,7,8.5\n";
        let (stars, failures) = parse_star_catalog(text);
        assert_eq!(stars.len(), 2);
        assert_eq!(stars[0].hip_id, 10);
        assert_eq!(stars[1].hip_id, 20);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, 1);
    }

    #[test]
    fn test_parse_fully_malformed_catalog_is_empty_not_fatal() {
        let (stars, failures) = parse_star_catalog("junk\nmore junk\n");
        assert!(stars.is_empty());
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn test_merge_with_empty_secondary_is_identity() {
        let primary = vec![star(1, 5.0), star(2, 6.0)];
        assert_eq!(merge(&primary, &[]), primary);
    }

    #[test]
    fn test_merge_disjoint_appends() {
        let primary = vec![star(1, 5.0), star(2, 6.0)];
        let secondary = vec![star(3, 7.0)];
        let combined = merge(&primary, &secondary);
        assert_eq!(combined.len(), 3);
        // Secondary is the base; primary records append after it
        assert_eq!(combined[0].hip_id, 3);
        assert_eq!(combined[1].hip_id, 1);
        assert_eq!(combined[2].hip_id, 2);
    }

    #[test]
    fn test_merge_override_keeps_position_replaces_fields() {
        let secondary = vec![star(9, 1.0), star(1, 5.0), star(8, 2.0)];
        let primary = vec![star(1, 3.0)];
        let combined = merge(&primary, &secondary);
        assert_eq!(combined.len(), 3);
        assert_eq!(combined[1].hip_id, 1);
        assert_eq!(combined[1].magnitude, 3.0);
    }

    #[test]
    fn test_merge_self_is_identity() {
        let list = vec![star(1, 5.0), star(2, 6.0)];
        assert_eq!(merge(&list, &list), list);
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let primary = vec![star(1, 3.0)];
        let secondary = vec![star(1, 5.0)];
        let _ = merge(&primary, &secondary);
        assert_eq!(secondary[0].magnitude, 5.0);
    }

    #[test]
    fn test_link_lines_resolves_endpoints() {
        let stars = vec![star(10, 1.0), star(20, 2.0)];
        let (lines, failures) = link_lines("Ori,10,20\n", &stars);
        assert_eq!(failures.len(), 0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].constellation, "Ori");
        assert_eq!(lines[0].start.hip_id, 10);
        assert_eq!(lines[0].end.hip_id, 20);
    }

    #[test]
    fn test_link_lines_drops_unresolved() {
        let stars = vec![star(10, 1.0), star(20, 2.0)];
        let (lines, failures) = link_lines("Ori,10,99\n", &stars);
        assert!(lines.is_empty());
        assert_eq!(
            failures[0].1,
            RecordError::UnresolvedStar {
                constellation: "Ori".to_string(),
                hip_id: 99
            }
        );
    }

    #[test]
    fn test_segments_are_snapshots() {
        let stars = vec![star(10, 1.0), star(20, 2.0)];
        let (lines, _) = link_lines("Ori,10,20\n", &stars);
        // Dropping the star list leaves the segment's endpoint copies intact
        drop(stars);
        assert_eq!(lines[0].start.magnitude, 1.0);
    }

    #[test]
    fn test_load_order_stars_merge_lines() {
        // The line catalog references a star that only exists in the
        // secondary text, so linking must happen after the merge
        let primary = "1,0,0,0,1,10,0,0,2.0\n";
        let secondary = "2,6,0,0,1,20,0,0,4.0\n";
        let catalog = Catalog::load(primary, Some(secondary), "Tau,1,2\n");
        assert_eq!(catalog.stars().len(), 2);
        assert_eq!(catalog.lines().len(), 1);
        assert!(catalog.report().is_clean());
    }

    #[test]
    fn test_load_report_display() {
        let catalog = Catalog::load("junk\n", None, "Ori,1,2\n");
        assert_eq!(catalog.report().dropped(), 2);
        let text = catalog.report().to_string();
        assert!(text.contains("2 dropped"));
    }
}
