//! Extraction of Keplerian orbital elements from a Cartesian state.
//!
//! The formulation works directly on the position and the velocity rescaled
//! by `1/√μ`, so the two-body problem is solved with a unit mass parameter.
//! Inclination, node and the combined argument of latitude come straight
//! from the angular momentum vector; eccentricity and the anomalies come
//! from the `e·cos E` / `e·sin E` pair, which stays well conditioned for
//! near-circular orbits. The periapsis argument is recovered as
//! `u − v` (argument of latitude minus true anomaly) instead of through a
//! coordinate-singular decomposition of the eccentricity vector.

use crate::cartesian::CartesianState;
use crate::kepler::principal_angle;
use crate::keplerian_element::KeplerianElements;
use crate::orbconv_errors::OrbconvError;

/// Compute the six Keplerian elements of a bound elliptic orbit.
///
/// Arguments
/// ---------
/// * `state`: Cartesian position (AU) and velocity (AU/day) relative to the
///   central body.
/// * `mu`: gravitational mass parameter `G(M + m)` in AU³/day², usually
///   `GAUSS_GRAV_SQUARED * (m_center + m_body)`.
///
/// Return
/// ------
/// * The orbital elements with all angles normalized to `[0, 2π)`, or
///   [`OrbconvError::InvalidGeometry`] when the state is not a bound
///   elliptic orbit (non-positive `1/a`, or derived eccentricity outside
///   `[0, 1)`).
pub fn elements_from_state(
    state: &CartesianState,
    mu: f64,
) -> Result<KeplerianElements, OrbconvError> {
    // absolute value of position vector
    let pabs = state.position.norm();

    // normalised velocity: nvel = vel / sqrt(mu)
    let nvel = state.velocity / mu.sqrt();

    // specific angular momentum: angm = r x v
    let angm = state.position.cross(&nvel);
    let angm_abs = angm.norm();

    // inclination
    let inclination = angm.x.hypot(angm.y).atan2(angm.z);

    // longitude of ascending node
    let node = angm.x.atan2(-angm.y);

    // argument of latitude: u = v + w = true anomaly + argument of pericenter
    let arg_latitude = (state.position.z * angm_abs)
        .atan2(state.position.y * angm.x - state.position.x * angm.y);

    // semi-major axis: 1 / a = 2 / |r| - |v|^2
    let inv_sma = 2.0 / pabs - nvel.norm_squared();
    if inv_sma <= 0.0 {
        return Err(OrbconvError::InvalidGeometry(format!(
            "inverse semi-major axis 1/a = {inv_sma} is not positive"
        )));
    }

    // components of eccentric anomaly
    let ecos_e = 1.0 - pabs * inv_sma;
    let esin_e = state.position.dot(&nvel) * inv_sma.sqrt();
    let ecc_anomaly = esin_e.atan2(ecos_e);

    // eccentricity, restricted to 0 <= e < 1
    let eccentricity = esin_e.hypot(ecos_e);
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(OrbconvError::InvalidGeometry(format!(
            "eccentricity e = {eccentricity} outside the elliptic domain [0, 1)"
        )));
    }

    // mean anomaly via Kepler's equation: M = E - e sin(E)
    let mean_anomaly = ecc_anomaly - esin_e;

    // true anomaly
    let e2 = eccentricity * eccentricity;
    let true_anomaly = ((1.0 - e2).sqrt() * esin_e).atan2(ecos_e - e2);

    Ok(KeplerianElements {
        semi_major_axis: 1.0 / inv_sma,
        eccentricity,
        inclination: principal_angle(inclination),
        ascending_node_longitude: principal_angle(node),
        periapsis_argument: principal_angle(arg_latitude - true_anomaly),
        mean_anomaly: principal_angle(mean_anomaly),
    })
}
