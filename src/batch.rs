//! # Batch conversion of a body collection
//!
//! Applies [`elements_from_state`] or [`state_from_elements`] across an
//! ordered collection of bodies relative to a designated central body.
//!
//! The collection's indices are stable identifiers: the converter never
//! resizes or reorders it, it only writes the designated output field of
//! each body. The central body's own output is defined as all-zero and is
//! written explicitly before the loop.
//!
//! Per-body failures are governed by an explicit [`FailurePolicy`]. The
//! default aborts the batch on the first failing body; [`FailurePolicy::Skip`]
//! leaves the failing body's output at its prior value and reports the
//! failures instead of discarding them.

use crate::cartesian::CartesianState;
use crate::constants::{GAUSS_GRAV_SQUARED, SolarMass};
use crate::keplerian_element::KeplerianElements;
use crate::orb_elem::elements_from_state;
use crate::orbconv_errors::OrbconvError;
use crate::two_body::state_from_elements;

/// One celestial object of a system snapshot.
///
/// Carries one Cartesian slot per supported frame plus the Keplerian
/// elements; a conversion reads one representation and writes another,
/// leaving the remaining fields untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Mass in units of solar mass.
    pub mass: SolarMass,
    /// Cartesian state relative to the system barycenter.
    pub barycentric: CartesianState,
    /// Cartesian state relative to the central body.
    pub heliocentric: CartesianState,
    /// Keplerian orbital elements.
    pub elements: KeplerianElements,
}

impl Body {
    /// A body with the given mass and every representation zeroed.
    pub fn with_mass(mass: SolarMass) -> Self {
        Body {
            mass,
            barycentric: CartesianState::zeros(),
            heliocentric: CartesianState::zeros(),
            elements: KeplerianElements::zeros(),
        }
    }

    /// Cartesian state slot for the given frame.
    pub fn state(&self, frame: Frame) -> &CartesianState {
        match frame {
            Frame::Barycentric => &self.barycentric,
            Frame::Heliocentric => &self.heliocentric,
        }
    }

    /// Mutable Cartesian state slot for the given frame.
    pub fn state_mut(&mut self, frame: Frame) -> &mut CartesianState {
        match frame {
            Frame::Barycentric => &mut self.barycentric,
            Frame::Heliocentric => &mut self.heliocentric,
        }
    }
}

/// Which Cartesian slot of a [`Body`] a conversion reads or writes.
///
/// The conversions themselves are frame-agnostic; the caller is responsible
/// for having recentered the states into the frame it names here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Barycentric,
    Heliocentric,
}

/// Direction of a batch conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Cartesian state to Keplerian elements.
    StateToElements,
    /// Keplerian elements to Cartesian state.
    ElementsToState,
}

/// Policy applied when a single body fails to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failing body and return its error.
    #[default]
    Abort,
    /// Leave the failing body's output at its prior value and keep
    /// converting the remaining bodies.
    Skip,
}

/// Convert every body of the collection relative to `bodies[center]`.
///
/// The central body's output field is set to the all-zero value; every other
/// body is converted with the mass parameter
/// `mu = GAUSS_GRAV_SQUARED * (m_center + m_i)`.
///
/// Arguments
/// ---------
/// * `bodies`: caller-owned system snapshot, mutated in place.
/// * `center`: index of the central body, must be `< bodies.len()`.
/// * `frame`: which Cartesian slot the conversion reads (`StateToElements`)
///   or writes (`ElementsToState`).
/// * `direction`: conversion direction.
/// * `policy`: what to do when a single body fails.
///
/// Return
/// ------
/// * `Ok(skipped)` with the `(index, error)` pairs left unconverted under
///   [`FailurePolicy::Skip`] (empty when everything converted).
/// * `Err` with [`OrbconvError::InvalidIndex`] for an out-of-range center,
///   or the first per-body error under [`FailurePolicy::Abort`].
pub fn convert(
    bodies: &mut [Body],
    center: usize,
    frame: Frame,
    direction: Direction,
    policy: FailurePolicy,
) -> Result<Vec<(usize, OrbconvError)>, OrbconvError> {
    if center >= bodies.len() {
        return Err(OrbconvError::InvalidIndex {
            center,
            len: bodies.len(),
        });
    }

    // the central object's output is defined as all-zero
    match direction {
        Direction::StateToElements => bodies[center].elements = KeplerianElements::zeros(),
        Direction::ElementsToState => *bodies[center].state_mut(frame) = CartesianState::zeros(),
    }

    let center_mass = bodies[center].mass;
    let mut skipped = Vec::new();

    for (i, body) in bodies.iter_mut().enumerate() {
        if i == center {
            continue;
        }

        // mass parameter G(M+m), with G = k^2
        let mu = GAUSS_GRAV_SQUARED * (center_mass + body.mass);

        let outcome = match direction {
            Direction::StateToElements => {
                elements_from_state(body.state(frame), mu).map(|elem| body.elements = elem)
            }
            Direction::ElementsToState => {
                state_from_elements(&body.elements, mu).map(|coo| *body.state_mut(frame) = coo)
            }
        };

        if let Err(err) = outcome {
            match policy {
                FailurePolicy::Abort => return Err(err),
                FailurePolicy::Skip => skipped.push((i, err)),
            }
        }
    }

    Ok(skipped)
}

#[cfg(test)]
mod batch_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    fn planet(mass: f64, sma: f64, ecc: f64, inc: f64) -> Body {
        Body {
            elements: KeplerianElements {
                semi_major_axis: sma,
                eccentricity: ecc,
                inclination: inc,
                ascending_node_longitude: 0.8,
                periapsis_argument: 2.1,
                mean_anomaly: 4.4,
            },
            ..Body::with_mass(mass)
        }
    }

    fn sample_system() -> Vec<Body> {
        vec![
            Body::with_mass(1.0),
            planet(1.66e-7, 0.387, 0.2056, 0.122),
            planet(3.0e-6, 1.0, 0.0167, 9.0e-5),
            planet(9.5e-4, 5.2, 0.0484, 0.023),
        ]
    }

    #[test]
    fn test_center_output_is_zeroed() {
        let mut bodies = sample_system();
        bodies[0].heliocentric = CartesianState::new(
            Vector3::new(0.1, 0.2, 0.3),
            Vector3::new(0.4, 0.5, 0.6),
        );

        convert(
            &mut bodies,
            0,
            Frame::Heliocentric,
            Direction::ElementsToState,
            FailurePolicy::Abort,
        )
        .unwrap();

        assert_eq!(bodies[0].heliocentric, CartesianState::zeros());

        convert(
            &mut bodies,
            0,
            Frame::Heliocentric,
            Direction::StateToElements,
            FailurePolicy::Abort,
        )
        .unwrap();

        assert_eq!(bodies[0].elements, KeplerianElements::zeros());
    }

    #[test]
    fn test_round_trip_over_system() {
        let mut bodies = sample_system();
        let reference = bodies.clone();

        let skipped = convert(
            &mut bodies,
            0,
            Frame::Heliocentric,
            Direction::ElementsToState,
            FailurePolicy::Abort,
        )
        .unwrap();
        assert!(skipped.is_empty());

        let skipped = convert(
            &mut bodies,
            0,
            Frame::Heliocentric,
            Direction::StateToElements,
            FailurePolicy::Abort,
        )
        .unwrap();
        assert!(skipped.is_empty());

        for (body, orig) in bodies.iter().zip(&reference).skip(1) {
            assert_abs_diff_eq!(
                body.elements.semi_major_axis,
                orig.elements.semi_major_axis,
                epsilon = 1e-10
            );
            assert_abs_diff_eq!(
                body.elements.eccentricity,
                orig.elements.eccentricity,
                epsilon = 1e-10
            );
            assert_abs_diff_eq!(
                body.elements.mean_anomaly,
                orig.elements.mean_anomaly,
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn test_untouched_fields_are_preserved() {
        let mut bodies = sample_system();
        bodies[2].barycentric = CartesianState::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
        );
        let before = bodies[2].barycentric;

        convert(
            &mut bodies,
            0,
            Frame::Heliocentric,
            Direction::ElementsToState,
            FailurePolicy::Abort,
        )
        .unwrap();

        // only the heliocentric slot may change
        assert_eq!(bodies[2].barycentric, before);
    }

    #[test]
    fn test_invalid_center_index() {
        let mut bodies = sample_system();
        let err = convert(
            &mut bodies,
            4,
            Frame::Heliocentric,
            Direction::ElementsToState,
            FailurePolicy::Abort,
        )
        .unwrap_err();

        assert_eq!(err, OrbconvError::InvalidIndex { center: 4, len: 4 });
    }

    #[test]
    fn test_skip_policy_reports_failures_and_converts_rest() {
        let mut bodies = sample_system();
        // a parabolic interloper that cannot be expressed as elliptic elements
        bodies[2].elements.eccentricity = 1.0;
        let stale = bodies[2].heliocentric;

        let skipped = convert(
            &mut bodies,
            0,
            Frame::Heliocentric,
            Direction::ElementsToState,
            FailurePolicy::Skip,
        )
        .unwrap();

        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].0, 2);
        assert!(matches!(skipped[0].1, OrbconvError::InvalidElements(_)));

        // the failing body keeps its stale output, the others converted
        assert_eq!(bodies[2].heliocentric, stale);
        assert_ne!(bodies[1].heliocentric, CartesianState::zeros());
        assert_ne!(bodies[3].heliocentric, CartesianState::zeros());
    }

    #[test]
    fn test_abort_policy_returns_first_error() {
        let mut bodies = sample_system();
        bodies[1].elements.semi_major_axis = -2.0;

        let err = convert(
            &mut bodies,
            0,
            Frame::Heliocentric,
            Direction::ElementsToState,
            FailurePolicy::Abort,
        )
        .unwrap_err();

        assert!(matches!(err, OrbconvError::InvalidElements(_)));
    }

    #[test]
    fn test_barycentric_slot_selection() {
        let mut bodies = sample_system();
        for body in bodies.iter_mut() {
            body.barycentric = CartesianState::zeros();
        }

        convert(
            &mut bodies,
            0,
            Frame::Barycentric,
            Direction::ElementsToState,
            FailurePolicy::Abort,
        )
        .unwrap();

        // writes land in the barycentric slot, heliocentric stays zeroed
        assert_ne!(bodies[1].barycentric, CartesianState::zeros());
        assert_eq!(bodies[1].heliocentric, CartesianState::zeros());
    }
}
