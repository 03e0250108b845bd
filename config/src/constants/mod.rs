//! Numeric tolerances shared across the mathematics workspace.
//!
//! Each public item documents its purpose and provides a minimal usage example
//! so that downstream crates compare floating-point values with one set of
//! thresholds instead of scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Default epsilon for single-precision comparisons.
///
/// Two `f32` values closer than this (scaled by their magnitude, see the
/// `numeric` module of the `mathematics` crate) are considered equal, and a
/// value inside `(-EPSILON_F, EPSILON_F)` is considered zero.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_F;
/// let value = 1.0e-6_f32;
/// assert!(value.abs() < EPSILON_F);
/// ```
pub const EPSILON_F: f32 = 1.0e-5;

/// Square of [`EPSILON_F`].
///
/// Used when a squared magnitude is compared against zero. Squared lengths
/// shrink quadratically, so the linear epsilon would be far too coarse.
///
/// # Examples
/// ```
/// use config::constants::{EPSILON_F, EPSILON_F_SQUARED};
/// assert!((EPSILON_F * EPSILON_F - EPSILON_F_SQUARED).abs() < 1.0e-15);
/// ```
pub const EPSILON_F_SQUARED: f32 = 1.0e-10;

// =============================================================================
// TOLERANCE CONFIGURATION
// =============================================================================

/// Validated epsilon pair used by callers that need a precision other than
/// the defaults.
///
/// # Examples
/// ```
/// use config::constants::Tolerance;
/// let tolerance = Tolerance::default();
/// assert!(tolerance.epsilon() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f32,
    epsilon_squared: f32,
}

impl Tolerance {
    /// Builds a tolerance, rejecting zero, negative and non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::Tolerance;
    /// let tolerance = Tolerance::new(1.0e-3).expect("valid tolerance");
    /// assert_eq!(tolerance.epsilon(), 1.0e-3);
    /// assert!(Tolerance::new(0.0).is_err());
    /// ```
    pub fn new(epsilon: f32) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::InvalidTolerance(epsilon));
        }
        Ok(Self {
            epsilon,
            epsilon_squared: epsilon * epsilon,
        })
    }

    /// Linear epsilon, for comparing values and lengths.
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Squared epsilon, for comparing squared lengths.
    pub fn epsilon_squared(&self) -> f32 {
        self.epsilon_squared
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: EPSILON_F,
            epsilon_squared: EPSILON_F_SQUARED,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when an epsilon is zero, negative, NaN or infinite.
    InvalidTolerance(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
