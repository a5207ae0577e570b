//! # Constants and type definitions for orbconv
//!
//! This module centralizes the **physical constants** and **common type
//! definitions** used throughout the `orbconv` library.
//!
//! ## Overview
//!
//! - Trigonometric constants used by the Kepler solver
//! - The Gaussian gravitational constant and its square, which scale masses
//!   (in solar masses) to standard gravitational parameters in AU/day units
//! - Unit type aliases used across the crate
//!
//! These definitions are shared by the element extraction, the two-body
//! reconstruction and the batch converter.

// -------------------------------------------------------------------------------------------------
// Physical constants
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// π², appears in the fitting constants of the Markley starter
pub const PISQ: f64 = std::f64::consts::PI * std::f64::consts::PI;

/// Gaussian gravitational constant k to full accuracy as given by the
/// IAU 1976 definition
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², standard gravitational parameter of one solar mass,
/// dimensions AU³·M☉⁻¹·day⁻²
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type Au = f64;
/// Velocity in astronomical units per day
pub type AuPerDay = f64;
/// Mass in units of solar mass
pub type SolarMass = f64;
