//! Sexagesimal equatorial coordinates and direction vectors
//!
//! Converts catalog right ascension (hours/minutes/seconds) and
//! declination (sign flag plus degrees/minutes/seconds) into a unit
//! direction vector by composing two axis rotations: the declination
//! rotation about the +X ("right") axis is applied first, then the
//! right-ascension rotation about the +Y ("up") axis, both applied to
//! the +Z ("forward") unit vector.
//!
//! The axis choice, composition order, and sign convention are fixed:
//! line linking relies on two independently parsed copies of the same
//! coordinates producing bitwise-identical vectors.

use nalgebra::{UnitQuaternion, Vector3};

/// Right ascension in sexagesimal hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightAscension {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl RightAscension {
    pub fn new(hours: f64, minutes: f64, seconds: f64) -> Self {
        RightAscension {
            hours,
            minutes,
            seconds,
        }
    }

    /// Angle in degrees: 15°/hour (360° over 24 hours)
    pub fn to_degrees(self) -> f64 {
        15.0 * (self.hours + self.minutes / 60.0 + self.seconds / 3600.0)
    }
}

/// Declination in sexagesimal degrees with an explicit sign flag.
///
/// Catalog records carry the sign as a separate field where zero means
/// negative, so the magnitude fields are always nonnegative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Declination {
    pub negative: bool,
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Declination {
    pub fn new(negative: bool, degrees: f64, minutes: f64, seconds: f64) -> Self {
        Declination {
            negative,
            degrees,
            minutes,
            seconds,
        }
    }

    /// Signed angle in degrees
    pub fn to_degrees(self) -> f64 {
        let magnitude = self.degrees + self.minutes / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Unit direction for a right ascension and declination given in degrees.
///
/// `R_y(ra) · R_x(dec) · ẑ` — the declination rotation is intrinsic
/// (applied first). The result is a unit vector by construction and is
/// not re-normalized.
pub fn direction_from_degrees(ra_degrees: f64, dec_degrees: f64) -> Vector3<f64> {
    let ra_rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), ra_degrees.to_radians());
    let dec_rotation =
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), dec_degrees.to_radians());
    ra_rotation * (dec_rotation * *Vector3::z_axis())
}

/// Unit direction for sexagesimal catalog coordinates.
pub fn direction(ra: RightAscension, dec: Declination) -> Vector3<f64> {
    direction_from_degrees(ra.to_degrees(), dec.to_degrees())
}
