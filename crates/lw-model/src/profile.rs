//! Film-thickness profile of the wavy surface.

use lw_core::numeric::{Real, TWO_PI};

/// Film thickness at position `z` (fraction of one wavelength).
///
/// `h = 1 + phi * sin(2*pi*z)`. Total over all reals; positive whenever
/// `|phi| < 1`.
pub fn h(phi: Real, z: Real) -> Real {
    1.0 + phi * (TWO_PI * z).sin()
}

/// Range `(min, max)` that `h(phi, z)` sweeps over one wavelength.
pub fn profile_bounds(phi: Real) -> (Real, Real) {
    let a = phi.abs();
    (1.0 - a, 1.0 + a)
}
