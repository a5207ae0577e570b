//! # Elliptic Kepler equation solver
//!
//! Numerical solution of Kepler's Equation `E − e·sin(E) = M` for the
//! eccentric anomaly `E`, restricted to elliptic motion (`0 <= e < 1`).
//!
//! Instead of iterating Newton's method to convergence, the solver combines
//! a closed-form starter with a single high-order correction:
//!
//! 1. the mean anomaly is reduced to `[−π, π)` and, exploiting the odd
//!    symmetry of the equation, the core only ever solves for `M ∈ [0, π)`;
//! 2. the starter comes from the quasi-direct method of Markley (1995),
//!    Celest. Mech. Dyn. Astron. 63, p.101–111;
//! 3. one pass of the Danby–Burkardt (1983) scheme with quintic convergence
//!    refines the starter.
//!
//! The result is a fixed, small, predictable cost per call: no loop, no
//! convergence counter, bounded time. For extreme eccentricities the number
//! of refinement passes can be raised through [`solve_kepler_with`].

use crate::constants::{DPI, PISQ};
use std::f64::consts::PI;

/// Additive epsilon on the first derivative, avoids division by zero at the
/// singular point (ecc, E) = (1, 0).
const ADDZERO: f64 = 1.0e-19;

/// Return the principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Reduce an angle by mod 2π to the interval `[−π, π)`.
pub(crate) fn center_angle(x: f64) -> f64 {
    let mut x = x - (x / DPI).floor() * DPI;
    if x >= PI {
        x -= DPI;
    }
    if x < -PI {
        x += DPI;
    }
    x
}

/// Evaluate `sin(x)` and `cos(x)` simultaneously from a single tangent
/// evaluation, via the half-angle substitution `t = tan(x/2)`.
///
/// If `scale` is non-negative, both results are multiplied by it; passing the
/// eccentricity yields `e·sin(x)` and `e·cos(x)` in one call. Pass a negative
/// value (conventionally `-1.0`) for the plain, unscaled pair.
pub(crate) fn sincos(x: f64, scale: f64) -> (f64, f64) {
    let tx = (0.5 * x).tan();
    let den = 1.0 / (1.0 + tx * tx);

    let mut sx = 2.0 * tx * den;
    let mut cx = (1.0 - tx * tx) * den;

    if scale >= 0.0 {
        sx *= scale;
        cx *= scale;
    }
    (sx, cx)
}

/// Single pass of the Danby–Burkardt (1983) iteration with quintic
/// convergence, applied to the guess `x` for mean anomaly `ma ∈ [0, π)`.
fn refine(ecc: f64, ma: f64, x: f64) -> f64 {
    let (esinx, ecosx) = sincos(x, ecc);

    // Kepler equation and scaled derivatives up to 4th order
    let f0 = ma - x + esinx;
    let f1 = 1.0 - ecosx + ADDZERO;
    let f2 = esinx / 2.0;
    let f3 = ecosx / 6.0;
    let f4 = -esinx / 24.0;

    // Newton-Raphson, quadratic convergence
    let mut dx = f0 / f1;
    // Halley, cubic convergence
    dx = f0 / (f1 + f2 * dx);
    // Danby-Burkardt, quartic convergence
    dx = f0 / (f1 + f2 * dx + f3 * dx * dx);
    // Danby-Burkardt, quintic convergence
    dx = f0 / (f1 + f2 * dx + f3 * dx * dx + f4 * dx * dx * dx);

    x + dx
}

/// Quasi-direct solution method of Markley (1995), for `ma ∈ [0, π)`.
///
/// Builds the cubic-Pade starter of eq.(15) and corrects it with `passes`
/// rounds of [`refine`].
fn markley(ecc: f64, ma: f64, passes: usize) -> f64 {
    let tmp = 1.0 / (PISQ - 6.0);
    let ad = 3.0 * PISQ * tmp;
    let ak = 1.6 * PI * tmp;
    let a = ad + ak * (PI - ma) / (1.0 + ecc); // eq.(20)
    let d = 3.0 * (1.0 - ecc) + a * ecc; // eq.(5)
    let q = 2.0 * a * d * (1.0 - ecc) - ma * ma; // eq.(9)
    let r = 3.0 * a * d * (d - 1.0 + ecc) * ma + ma * ma * ma; // eq.(10)
    let mut w = (r.abs() + (q * q * q + r * r).sqrt()).cbrt(); // eq.(14)
    w *= w;

    let starter = if w > 0.0 {
        (2.0 * r * w / (w * w + q * w + q * q) + ma) / d // eq.(15)
    } else {
        0.0
    };

    let mut x = starter;
    for _ in 0..passes {
        x = refine(ecc, ma, x);
    }
    x
}

/// Solve Kepler's Equation `E − ecc·sin(E) = ma` for the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `ecc`: eccentricity, `0 <= ecc < 1`. Values outside this range are not
///   rejected but produce physically meaningless output; callers validate.
/// * `ma`: mean anomaly in radians, any finite real number.
///
/// Return
/// ------
/// * The eccentric anomaly `E` in `[0, 2π)` satisfying
///   `E − ecc·sin(E) ≈ ma (mod 2π)`.
pub fn solve_kepler(ecc: f64, ma: f64) -> f64 {
    solve_kepler_with(ecc, ma, 1)
}

/// Same as [`solve_kepler`] but with a configurable number of
/// Danby–Burkardt refinement passes.
///
/// One pass reproduces the fixed-cost default; more passes buy accuracy for
/// extreme eccentricities, zero passes returns the raw Markley starter.
pub fn solve_kepler_with(ecc: f64, ma: f64, passes: usize) -> f64 {
    let mr = center_angle(ma);

    // odd symmetry: E(e, -M) = -E(e, M)
    if mr < 0.0 {
        principal_angle(DPI - markley(ecc, -mr, passes))
    } else {
        markley(ecc, mr, passes)
    }
}
