//! # orbconv
//!
//! Conversions between the two standard representations of the state of
//! gravitationally bound bodies: **Cartesian position/velocity vectors** and
//! **Keplerian orbital elements**, restricted to elliptic motion.
//!
//! ## Overview
//!
//! - [`kepler`] – fixed-cost solver for the elliptic Kepler equation
//!   (Markley starter + Danby–Burkardt quintic refinement)
//! - [`orb_elem`] – Cartesian state → orbital elements
//! - [`two_body`] – orbital elements → Cartesian state
//! - [`batch`] – either conversion applied across a body collection
//!   relative to a designated central body
//! - [`constants`] – Gaussian gravitational constant and unit aliases
//!
//! ## Units
//!
//! Lengths in AU, velocities in AU/day, masses in solar masses, angles in
//! radians. The Gaussian gravitational constant squared
//! ([`constants::GAUSS_GRAV_SQUARED`]) turns masses into mass parameters
//! `mu = k²(M + m)` in these units.
//!
//! ## Example
//!
//! ```rust
//! use orbconv::constants::GAUSS_GRAV_SQUARED;
//! use orbconv::keplerian_element::KeplerianElements;
//!
//! let elem = KeplerianElements {
//!     semi_major_axis: 1.0,
//!     eccentricity: 0.0167,
//!     inclination: 0.4091,
//!     ascending_node_longitude: 0.0,
//!     periapsis_argument: 1.7966,
//!     mean_anomaly: 0.0,
//! };
//!
//! let state = elem.to_cartesian(GAUSS_GRAV_SQUARED).unwrap();
//! let back = state.to_elements(GAUSS_GRAV_SQUARED).unwrap();
//! assert!((back.semi_major_axis - 1.0).abs() < 1e-10);
//! ```

pub mod batch;
pub mod cartesian;
pub mod constants;
pub mod kepler;
pub mod keplerian_element;
pub mod orb_elem;
pub mod orbconv_errors;
pub mod two_body;
