//! Reconstruction of a Cartesian state from Keplerian orbital elements.
//!
//! The orbital-plane coordinates are built from the eccentric anomaly
//! (obtained by solving Kepler's equation) and mapped to the inertial frame
//! through the first two columns of the standard orbital-frame rotation,
//! written out as six scalar terms exactly in the order the classical
//! formulation evaluates them.

use nalgebra::Vector3;

use crate::cartesian::CartesianState;
use crate::kepler::{sincos, solve_kepler};
use crate::keplerian_element::KeplerianElements;
use crate::orbconv_errors::OrbconvError;

/// Compute the Cartesian state of a body from its orbital elements.
///
/// Arguments
/// ---------
/// * `elements`: elliptic Keplerian elements (`sma > 0`, `0 <= ecc < 1`).
/// * `mu`: gravitational mass parameter `G(M + m)` in AU³/day², usually
///   `GAUSS_GRAV_SQUARED * (m_center + m_body)`.
///
/// Return
/// ------
/// * The position (AU) and velocity (AU/day) relative to the central body,
///   or [`OrbconvError::InvalidElements`] when the elements fall outside
///   the supported elliptic domain.
pub fn state_from_elements(
    elements: &KeplerianElements,
    mu: f64,
) -> Result<CartesianState, OrbconvError> {
    let sma = elements.semi_major_axis;
    let ecc = elements.eccentricity;

    if sma <= 0.0 {
        return Err(OrbconvError::InvalidElements(format!(
            "semi-major axis a = {sma} must be positive"
        )));
    }
    if !(0.0..1.0).contains(&ecc) {
        return Err(OrbconvError::InvalidElements(format!(
            "eccentricity e = {ecc} outside the elliptic domain [0, 1)"
        )));
    }

    let (sininc, cosinc) = sincos(elements.inclination, -1.0);
    let (sinaph, cosaph) = sincos(elements.periapsis_argument, -1.0);
    let (sinlan, coslan) = sincos(elements.ascending_node_longitude, -1.0);

    // first two columns of the orbital-frame to inertial-frame rotation
    let s11 = coslan * cosaph - sinlan * sinaph * cosinc;
    let s21 = sinlan * cosaph + coslan * sinaph * cosinc;
    let s31 = sinaph * sininc;
    let s12 = -coslan * sinaph - sinlan * cosaph * cosinc;
    let s22 = -sinlan * sinaph + coslan * cosaph * cosinc;
    let s32 = cosaph * sininc;

    // eccentric anomaly via solution of Kepler's Equation
    let ecc_anomaly = solve_kepler(ecc, elements.mean_anomaly);
    let (sin_e, cos_e) = sincos(ecc_anomaly, -1.0);

    let tmpe = (1.0 - ecc * ecc).sqrt();

    // Cartesian coordinates
    let q1 = sma * (cos_e - ecc);
    let q2 = sma * tmpe * sin_e;
    let position = Vector3::new(
        s11 * q1 + s12 * q2,
        s21 * q1 + s22 * q2,
        s31 * q1 + s32 * q2,
    );

    // Cartesian velocities
    let q1 = mu.sqrt() / ((1.0 - ecc * cos_e) * sma.sqrt());
    let q2 = q1 * tmpe * cos_e;
    let q1 = -q1 * sin_e;
    let velocity = Vector3::new(
        s11 * q1 + s12 * q2,
        s21 * q1 + s22 * q2,
        s31 * q1 + s32 * q2,
    );

    Ok(CartesianState { position, velocity })
}
