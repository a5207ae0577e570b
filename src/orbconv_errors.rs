use thiserror::Error;

/// Errors produced by the coordinate conversion routines.
///
/// The Kepler solver itself has no failure path: it always returns a numeric
/// value, so callers must validate the eccentricity beforehand. The two
/// conversion directions and the batch driver report their domain violations
/// through this enum.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbconvError {
    /// The Cartesian state does not describe a bound elliptic orbit
    /// (non-positive inverse semi-major axis or derived eccentricity
    /// outside `[0, 1)`).
    #[error("invalid orbital geometry: {0}")]
    InvalidGeometry(String),

    /// The supplied orbital elements lie outside the supported elliptic
    /// domain (`sma <= 0` or `ecc` outside `[0, 1)`).
    #[error("invalid orbital elements: {0}")]
    InvalidElements(String),

    /// The central body index does not address the body collection.
    #[error("central body index {center} out of range for {len} bodies")]
    InvalidIndex { center: usize, len: usize },
}
