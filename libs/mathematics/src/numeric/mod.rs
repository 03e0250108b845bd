//! Scalar tolerance predicates.
//!
//! Comparisons of `f32` values against zero or against each other within an
//! epsilon. The default epsilon comes from [`config::constants::EPSILON_F`];
//! every predicate has a `_with` variant taking a custom epsilon. A zero or
//! negative epsilon is accepted: nothing is then zero, and only values that
//! compare equal with `==` are equal. Use [`Tolerance::new`] to validate a
//! user-supplied epsilon up front.

pub use config::constants::{Tolerance, EPSILON_F, EPSILON_F_SQUARED};

/// Returns `true` if `value` lies strictly inside `(-EPSILON_F, EPSILON_F)`.
///
/// # Examples
/// ```
/// use mathematics::numeric::is_zero;
/// assert!(is_zero(1.0e-7));
/// assert!(!is_zero(1.0e-3));
/// ```
#[inline]
pub fn is_zero(value: f32) -> bool {
    is_zero_with(value, EPSILON_F)
}

/// Returns `true` if `value` lies strictly inside `(-epsilon, epsilon)`.
///
/// The interval is empty for `epsilon <= 0.0`, so the result is `false`.
///
/// # Examples
/// ```
/// use mathematics::numeric::{is_zero_with, EPSILON_F_SQUARED};
/// assert!(is_zero_with(1.0e-11, EPSILON_F_SQUARED));
/// assert!(!is_zero_with(1.0e-9, EPSILON_F_SQUARED));
/// ```
#[inline]
pub fn is_zero_with(value: f32, epsilon: f32) -> bool {
    -epsilon < value && value < epsilon
}

/// Returns `true` if `a` and `b` are equal within the default epsilon.
///
/// See [`are_equal_with`] for how the tolerance scales with magnitude.
#[inline]
pub fn are_equal(a: f32, b: f32) -> bool {
    are_equal_with(a, b, EPSILON_F)
}

/// Returns `true` if `a` and `b` are equal within `epsilon`.
///
/// The tolerance grows with the operands: the difference must be below
/// `epsilon * (|a| + |b| + 1)`. Values that compare equal with `==` are always
/// equal here, which makes two identical infinities equal. With
/// `epsilon <= 0.0` that exact comparison is the only way to be equal.
///
/// # Examples
/// ```
/// use mathematics::numeric::are_equal_with;
/// assert!(are_equal_with(1000.0, 1000.5, 1.0e-3));
/// assert!(!are_equal_with(1.0, 1.5, 1.0e-3));
/// assert!(are_equal_with(f32::INFINITY, f32::INFINITY, 1.0e-3));
/// ```
#[inline]
pub fn are_equal_with(a: f32, b: f32, epsilon: f32) -> bool {
    if a == b {
        return true;
    }
    let scaled = epsilon * (a.abs() + b.abs() + 1.0);
    let delta = a - b;
    -scaled < delta && delta < scaled
}

/// Returns `0.0` if `value` is numerically zero, otherwise `value` unchanged.
///
/// # Examples
/// ```
/// use mathematics::numeric::clamp_to_zero;
/// assert_eq!(clamp_to_zero(-1.0e-7), 0.0);
/// assert_eq!(clamp_to_zero(0.5), 0.5);
/// ```
#[inline]
pub fn clamp_to_zero(value: f32) -> f32 {
    clamp_to_zero_with(value, EPSILON_F)
}

/// Returns `0.0` if `value` is zero within `epsilon`, otherwise `value`.
#[inline]
pub fn clamp_to_zero_with(value: f32, epsilon: f32) -> f32 {
    if is_zero_with(value, epsilon) {
        0.0
    } else {
        value
    }
}

/// Constrains `value` to `[min, max]`.
///
/// NaN passes through unchanged. Unlike [`f32::clamp`] this does not panic
/// when `min > max`; `min` is checked first.
///
/// # Examples
/// ```
/// use mathematics::numeric::clamp;
/// assert_eq!(clamp(1.5, -1.0, 1.0), 1.0);
/// assert_eq!(clamp(-3.0, -1.0, 1.0), -1.0);
/// assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
