//! Star colors from the B-V photometric index
//!
//! Derives an apparent RGB color for a star from its B-V color index:
//! B-V → correlated blackbody temperature (Ballesteros 2012) →
//! Planckian-locus chromaticity (Kim et al. 2002 cubic fits) →
//! CIE RGB. The fit is only defined for temperatures in
//! [1667 K, 25000 K]; outside that range the chromaticity collapses to
//! the origin and the resulting color is black, not an error.
//!
//! # Example
//!
//! ```
//! use asterism::color::bv_to_rgb;
//!
//! // Betelgeuse, B-V = 1.85: a distinctly red star
//! let c = bv_to_rgb(1.85);
//! assert!(c.r > c.b);
//! assert_eq!(c.a, 1.0);
//! ```

/// An RGB color with alpha, all channels linear f64.
///
/// Channels produced by [`bv_to_rgb`] are linear CIE RGB and are not
/// clamped to [0, 1]; alpha is always 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Neutral gray used for stars with no usable B-V field
    pub const GRAY: Rgba = Rgba {
        r: 0.5,
        g: 0.5,
        b: 0.5,
        a: 1.0,
    };

    /// Opaque black, the degenerate output for out-of-range temperatures
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }
}

/// Correlated color temperature in Kelvin from a B-V index
/// (Ballesteros 2012).
pub fn bv_to_temperature(bv: f64) -> f64 {
    4600.0 * (1.0 / (0.92 * bv + 1.7) + 1.0 / (0.92 * bv + 0.62))
}

/// Planckian-locus chromaticity x for a temperature in Kelvin.
///
/// Cubic-in-1/T fits over [1667, 4000] and (4000, 25000]; zero outside.
fn chromaticity_x(t: f64) -> f64 {
    if (1667.0..=4000.0).contains(&t) {
        -0.2661239e9 / t.powi(3) - 0.2343580e6 / t.powi(2) + 0.8776956e3 / t + 0.179910
    } else if t > 4000.0 && t <= 25000.0 {
        -3.0258469e9 / t.powi(3) + 2.1070379e6 / t.powi(2) + 0.2226347e3 / t + 0.240390
    } else {
        0.0
    }
}

/// Planckian-locus chromaticity y as a cubic in x, branched on
/// temperature; zero outside [1667, 25000].
fn chromaticity_y(t: f64, x: f64) -> f64 {
    if (1667.0..=2222.0).contains(&t) {
        -1.1063814 * x.powi(3) - 1.34811020 * x.powi(2) + 2.18555832 * x - 0.20219683
    } else if t > 2222.0 && t <= 4000.0 {
        -0.9549476 * x.powi(3) - 1.37418593 * x.powi(2) + 2.09137015 * x - 0.16748867
    } else if t > 4000.0 && t <= 25000.0 {
        3.0817580 * x.powi(3) - 5.87338670 * x.powi(2) + 3.75112997 * x - 0.37001483
    } else {
        0.0
    }
}

/// Convert a B-V color index to an apparent RGB color.
///
/// Pure function, safe to call concurrently. Any real input produces
/// some color; temperatures outside [1667 K, 25000 K] produce
/// [`Rgba::BLACK`] rather than an error.
pub fn bv_to_rgb(bv: f64) -> Rgba {
    let t = bv_to_temperature(bv);

    let x = chromaticity_x(t);
    let y = chromaticity_y(t, x);

    // xyY → XYZ with Y fixed at 1; y == 0 collapses everything to black
    let (cap_x, cap_y, cap_z) = if y == 0.0 {
        (0.0, 0.0, 0.0)
    } else {
        (x / y, 1.0, (1.0 - x - y) / y)
    };

    // XYZ → linear RGB with CIE RGB primaries
    Rgba {
        r: 0.41847 * cap_x - 0.15866 * cap_y - 0.082835 * cap_z,
        g: -0.091169 * cap_x + 0.25243 * cap_y + 0.015708 * cap_z,
        b: 0.00092090 * cap_x - 0.0025498 * cap_y + 0.17860 * cap_z,
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_temperature_solar() {
        // The Sun has B-V ≈ 0.656 → roughly 5700 K
        let t = bv_to_temperature(0.656);
        assert!(t > 5500.0 && t < 6000.0, "solar temperature {t}");
    }

    #[test]
    fn test_temperature_decreases_with_bv() {
        assert!(bv_to_temperature(-0.3) > bv_to_temperature(0.0));
        assert!(bv_to_temperature(0.0) > bv_to_temperature(1.0));
        assert!(bv_to_temperature(1.0) > bv_to_temperature(2.0));
    }

    #[test]
    fn test_stellar_range_channels_nonnegative() {
        // Typical stellar B-V range: every channel finite and >= 0,
        // alpha exactly 1
        let mut bv = -0.4;
        while bv <= 2.0 {
            let c = bv_to_rgb(bv);
            assert!(c.r.is_finite() && c.r >= 0.0, "r={} at bv={bv}", c.r);
            assert!(c.g.is_finite() && c.g >= 0.0, "g={} at bv={bv}", c.g);
            assert!(c.b.is_finite() && c.b >= 0.0, "b={} at bv={bv}", c.b);
            assert_eq!(c.a, 1.0);
            bv += 0.05;
        }
    }

    #[test]
    fn test_hot_star_out_of_range_is_black() {
        // B-V = -0.6 gives a temperature well above 25000 K
        assert!(bv_to_temperature(-0.6) > 25000.0);
        assert_eq!(bv_to_rgb(-0.6), Rgba::BLACK);
    }

    #[test]
    fn test_cool_star_out_of_range_is_black() {
        // B-V = 20 gives a temperature below 1667 K
        assert!(bv_to_temperature(20.0) < 1667.0);
        assert_eq!(bv_to_rgb(20.0), Rgba::BLACK);
    }

    #[test]
    fn test_red_giant_redder_than_blue_dwarf() {
        let red = bv_to_rgb(1.85); // Betelgeuse
        let blue = bv_to_rgb(-0.03); // Vega
        assert!(red.r / red.b > blue.r / blue.b);
    }

    #[test]
    fn test_chromaticity_near_white_point() {
        // ~6500 K sits near the daylight white point (x ≈ 0.31, y ≈ 0.32)
        let x = chromaticity_x(6500.0);
        let y = chromaticity_y(6500.0, x);
        assert_relative_eq!(x, 0.3135, epsilon = 5e-3);
        assert_relative_eq!(y, 0.3237, epsilon = 5e-3);
    }

    #[test]
    fn test_branch_boundary_continuity() {
        // The two x branches meet near T = 4000 K
        let below = chromaticity_x(3999.9);
        let above = chromaticity_x(4000.1);
        assert_relative_eq!(below, above, epsilon = 1e-3);
    }

    #[test]
    fn test_gray_constant() {
        assert_eq!(Rgba::GRAY, Rgba::new(0.5, 0.5, 0.5, 1.0));
    }
}
