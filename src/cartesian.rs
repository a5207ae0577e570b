//! Cartesian position/velocity state vectors.

use nalgebra::Vector3;

use crate::constants::GAUSS_GRAV_SQUARED;
use crate::keplerian_element::KeplerianElements;
use crate::orb_elem::elements_from_state;
use crate::orbconv_errors::OrbconvError;

/// Position and velocity of one body in a Cartesian frame.
///
/// The frame itself (barycentric, heliocentric, ...) is implied by context
/// and not stored; the conversion routines only care about which state they
/// read or write.
///
/// Units
/// -----
/// * `position`: AU.
/// * `velocity`: AU/day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartesianState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl CartesianState {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        CartesianState { position, velocity }
    }

    /// All-zero state, the defined value for the central body of a
    /// conversion.
    pub fn zeros() -> Self {
        CartesianState {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
        }
    }

    /// Extract the Keplerian elements of this state for the gravitational
    /// parameter `mu` (AU³/day²).
    ///
    /// See [`elements_from_state`] for the algorithm and failure modes.
    pub fn to_elements(&self, mu: f64) -> Result<KeplerianElements, OrbconvError> {
        elements_from_state(self, mu)
    }

    /// Convenience wrapper of [`CartesianState::to_elements`] for an orbit
    /// around a central mass of `mass` solar masses (test body of
    /// negligible mass).
    pub fn to_elements_around(&self, mass: f64) -> Result<KeplerianElements, OrbconvError> {
        self.to_elements(GAUSS_GRAV_SQUARED * mass)
    }
}
