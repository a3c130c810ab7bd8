/// Floating point type of every model quantity.
pub type Real = f64;

/// Two pi, the angular period of one bearing wavelength.
pub const TWO_PI: Real = 2.0 * std::f64::consts::PI;

/// Absolute and relative slack for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol.abs` or within `tol.rel` of the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Check that `v` lies in the half-open range `[lo, hi)`.
pub fn in_half_open(v: Real, lo: Real, hi: Real) -> bool {
    v >= lo && v < hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn half_open_excludes_upper_bound() {
        assert!(in_half_open(0.0, 0.0, 1.0));
        assert!(in_half_open(0.999, 0.0, 1.0));
        assert!(!in_half_open(1.0, 0.0, 1.0));
        assert!(!in_half_open(Real::NAN, 0.0, 1.0));
    }
}
