//! Queries over loaded catalogs
//!
//! Pure functions over star and line-segment slices: star extraction
//! from line sets, centroid computation, angular field-of-view
//! filtering, and id lookup. None of these mutate their inputs or keep
//! state, so they need no locking under concurrent readers.

use std::collections::HashSet;

use nalgebra::Vector3;

use crate::catalog::{LineSegment, StarRecord};

/// Angle between two directions in radians
fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let dot = a.normalize().dot(&b.normalize()).clamp(-1.0, 1.0);
    dot.acos()
}

/// The distinct stars appearing in a line set, deduplicated by id.
///
/// First-seen order: each segment contributes its start endpoint before
/// its end endpoint, segments in input order.
pub fn stars_in_lines(lines: &[LineSegment]) -> Vec<StarRecord> {
    let mut seen = HashSet::new();
    let mut stars = Vec::new();
    for line in lines {
        if seen.insert(line.start.hip_id) {
            stars.push(line.start.clone());
        }
        if seen.insert(line.end.hip_id) {
            stars.push(line.end.clone());
        }
    }
    stars
}

/// Mean of the stars' direction vectors.
///
/// The result is NOT re-normalized; callers that need a unit vector
/// must normalize it themselves. An empty input divides by zero and
/// yields non-finite components by design.
pub fn centroid(stars: &[StarRecord]) -> Vector3<f64> {
    let sum = stars
        .iter()
        .fold(Vector3::zeros(), |acc, star| acc + star.direction);
    sum / stars.len() as f64
}

/// Stars whose direction lies strictly within `max_angle_degrees` of
/// `center`. The boundary is excluded.
pub fn stars_within_angle(
    stars: &[StarRecord],
    center: &Vector3<f64>,
    max_angle_degrees: f64,
) -> Vec<StarRecord> {
    stars
        .iter()
        .filter(|star| angle_between(&star.direction, center).to_degrees() < max_angle_degrees)
        .cloned()
        .collect()
}

/// First star carrying `hip_id`, if any. Linear scan.
pub fn find_by_id(stars: &[StarRecord], hip_id: u32) -> Option<&StarRecord> {
    stars.iter().find(|star| star.hip_id == hip_id)
}

/// Line segments of one constellation, matched by exact short code
pub fn lines_for_constellation(lines: &[LineSegment], code: &str) -> Vec<LineSegment> {
    lines
        .iter()
        .filter(|line| line.constellation == code)
        .cloned()
        .collect()
}

/// The distinct stars of one constellation's line figure
pub fn constellation_stars(lines: &[LineSegment], code: &str) -> Vec<StarRecord> {
    stars_in_lines(&lines_for_constellation(lines, code))
}

/// Centroid of one constellation's line figure (see [`centroid`] for
/// the degenerate empty case)
pub fn constellation_centroid(lines: &[LineSegment], code: &str) -> Vector3<f64> {
    centroid(&constellation_stars(lines, code))
}
