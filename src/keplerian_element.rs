//! # Keplerian orbital elements
//!
//! This module defines the [`KeplerianElements`] struct, the **classical
//! orbital element representation** used by the conversion routines.
//!
//! ## What are Keplerian elements?
//!
//! The six Keplerian elements are:
//!
//! 1. **a** – Semi-major axis (AU)
//! 2. **e** – Eccentricity (unitless)
//! 3. **i** – Inclination (radians)
//! 4. **Ω** – Longitude of ascending node (radians)
//! 5. **ω** – Argument of periapsis (radians)
//! 6. **M** – Mean anomaly (radians)
//!
//! Under the two-body approximation these parameters fully describe a bound
//! elliptic orbit. Only the elliptic domain is supported here:
//! `0 <= e < 1` and `a > 0`; parabolic and hyperbolic states are rejected by
//! the conversions.
//!
//! ## Units
//!
//! - Lengths: **AU**
//! - Angles: **radians**, normalized to `[0, 2π)` on output
//! - Velocities: **AU/day** (through the Gaussian gravitational constant)
//!
//! ## Degeneracies
//!
//! Classical Keplerian elements are singular for circular orbits (`e → 0`,
//! periapsis direction undefined) and equatorial orbits (`i → 0`, node
//! undefined). The extraction routine avoids the coordinate-singular
//! decomposition by working with the combined argument of latitude, but the
//! individual angles it reports for exactly degenerate geometries follow the
//! `atan2(0, ...)` convention of the formulas.

use std::fmt;

use crate::cartesian::CartesianState;
use crate::constants::{Au, GAUSS_GRAV_SQUARED, Radian};
use crate::orbconv_errors::OrbconvError;
use crate::two_body::state_from_elements;

/// Keplerian orbital elements (osculating, two-body, elliptic).
///
/// Units
/// -----
/// * `semi_major_axis`: Astronomical Units (AU), `> 0`.
/// * `eccentricity`: unitless, in `[0, 1)`.
/// * `inclination`: radians.
/// * `ascending_node_longitude`: radians (Ω).
/// * `periapsis_argument`: radians (ω).
/// * `mean_anomaly`: radians (M).
///
/// All angles produced by the conversions lie in `[0, 2π)`.
#[derive(Debug, PartialEq, Clone)]
pub struct KeplerianElements {
    pub semi_major_axis: Au,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub mean_anomaly: Radian,
}

impl KeplerianElements {
    /// All-zero element set, the defined value for the central body of a
    /// conversion.
    pub fn zeros() -> Self {
        KeplerianElements {
            semi_major_axis: 0.0,
            eccentricity: 0.0,
            inclination: 0.0,
            ascending_node_longitude: 0.0,
            periapsis_argument: 0.0,
            mean_anomaly: 0.0,
        }
    }

    /// Reconstruct the Cartesian state of this orbit for the gravitational
    /// parameter `mu` (AU³/day²).
    ///
    /// See [`state_from_elements`] for the algorithm and failure modes.
    pub fn to_cartesian(&self, mu: f64) -> Result<CartesianState, OrbconvError> {
        state_from_elements(self, mu)
    }

    /// Convenience wrapper of [`KeplerianElements::to_cartesian`] for an
    /// orbit around a central mass of `mass` solar masses (test body of
    /// negligible mass).
    pub fn to_cartesian_around(&self, mass: f64) -> Result<CartesianState, OrbconvError> {
        self.to_cartesian(GAUSS_GRAV_SQUARED * mass)
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keplerian elements:")?;
        writeln!(f, "  semi-major axis (AU): {}", self.semi_major_axis)?;
        writeln!(f, "  eccentricity: {}", self.eccentricity)?;
        writeln!(f, "  inclination (rad): {}", self.inclination)?;
        writeln!(
            f,
            "  longitude of ascending node (rad): {}",
            self.ascending_node_longitude
        )?;
        writeln!(
            f,
            "  argument of periapsis (rad): {}",
            self.periapsis_argument
        )?;
        writeln!(f, "  mean anomaly (rad): {}", self.mean_anomaly)
    }
}
