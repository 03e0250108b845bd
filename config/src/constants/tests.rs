//! Tests for the tolerance constants and `Tolerance` builder.

use super::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive_and_small() {
    assert!(EPSILON_F > 0.0, "EPSILON_F must be positive");
    assert!(EPSILON_F < 1.0e-3, "EPSILON_F should be small for precision");
}

#[test]
fn test_epsilon_squared_is_smaller_than_epsilon() {
    assert!(EPSILON_F_SQUARED > 0.0);
    assert!(EPSILON_F_SQUARED < EPSILON_F);
}

// =============================================================================
// TOLERANCE TESTS
// =============================================================================

#[test]
fn default_tolerance_matches_constants() {
    let tolerance = Tolerance::default();
    assert_eq!(tolerance.epsilon(), EPSILON_F);
    assert_eq!(tolerance.epsilon_squared(), EPSILON_F_SQUARED);
}

#[test]
fn new_squares_the_epsilon() {
    let tolerance = Tolerance::new(0.5).unwrap();
    assert_eq!(tolerance.epsilon(), 0.5);
    assert_eq!(tolerance.epsilon_squared(), 0.25);
}

#[test]
fn new_validates_inputs() {
    assert_eq!(
        Tolerance::new(0.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        Tolerance::new(-1.0e-4).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0e-4)
    );
    assert!(Tolerance::new(f32::NAN).is_err());
    assert!(Tolerance::new(f32::INFINITY).is_err());
}

#[test]
fn error_display_names_the_value() {
    let message = ConfigError::InvalidTolerance(-2.0).to_string();
    assert!(message.contains("-2"));
    assert!(message.contains("positive"));
}
