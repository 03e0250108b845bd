//! 2D single-precision vector.
//!
//! [`Vector2F`] is a plain `Copy` aggregate of two `f32` components laid out
//! as X then Y. Equality through `==` is exact; tolerance-based comparison is
//! the separate [`Vector2F::are_numerically_equal`].
//!
//! Operations that divide by the vector's own length either fail explicitly
//! ([`Vector2F::normalize`], [`Vector2F::set_length`]) or report failure with a
//! boolean ([`Vector2F::try_normalize`]). [`Vector2F::project_to`] does not
//! guard its divisor and propagates NaN/∞ for a zero target.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::str::FromStr;

use glam::DVec2;
use log::debug;
use serde::{Deserialize, Serialize};

use super::format::{split_pair, NumberFormat};
use super::vector_f::VectorF;
use crate::error::{MathError, MathResult};
use crate::numeric::{self, Tolerance, EPSILON_F_SQUARED};

/// A 2D vector with `f32` components.
///
/// # Examples
/// ```
/// use mathematics::Vector2F;
///
/// let v = Vector2F::new(1.0, 2.0) + Vector2F::new(3.0, 4.0);
/// assert_eq!(v, Vector2F::new(4.0, 6.0));
/// assert_eq!(v.to_string(), "(4; 6)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Vector2F {
    /// The X component.
    pub x: f32,
    /// The Y component.
    pub y: f32,
}

// =============================================================================
// CONSTANTS & CONSTRUCTION
// =============================================================================

impl Vector2F {
    /// `(0, 0)`.
    pub const ZERO: Vector2F = Vector2F { x: 0.0, y: 0.0 };
    /// `(1, 1)`.
    pub const ONE: Vector2F = Vector2F { x: 1.0, y: 1.0 };
    /// `(1, 0)`.
    pub const UNIT_X: Vector2F = Vector2F { x: 1.0, y: 0.0 };
    /// `(0, 1)`.
    pub const UNIT_Y: Vector2F = Vector2F { x: 0.0, y: 1.0 };

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `value`.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }

    /// Creates a vector from the first two elements of `components`.
    ///
    /// Extra elements are ignored.
    ///
    /// # Examples
    /// ```
    /// use mathematics::{MathError, Vector2F};
    ///
    /// assert_eq!(Vector2F::from_slice(&[1.0, 2.0, 3.0])?, Vector2F::new(1.0, 2.0));
    /// assert_eq!(
    ///     Vector2F::from_slice(&[1.0]),
    ///     Err(MathError::InsufficientComponents { len: 1 })
    /// );
    /// # Ok::<(), MathError>(())
    /// ```
    pub fn from_slice(components: &[f32]) -> MathResult<Self> {
        match components {
            [x, y, ..] => Ok(Self::new(*x, *y)),
            _ => Err(MathError::InsufficientComponents {
                len: components.len(),
            }),
        }
    }
}

// =============================================================================
// COMPONENT ACCESS & DERIVED PROPERTIES
// =============================================================================

impl Vector2F {
    /// Returns the component at `index` (0 for X, 1 for Y).
    pub fn component(&self, index: usize) -> MathResult<f32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(MathError::IndexOutOfRange { index }),
        }
    }

    /// Sets the component at `index` (0 for X, 1 for Y).
    pub fn set_component(&mut self, index: usize, value: f32) -> MathResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(MathError::IndexOutOfRange { index }),
        }
        Ok(())
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Squared length, `x² + y²`.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Rescales the vector to `length`, keeping its direction.
    ///
    /// Fails with [`MathError::DegenerateVector`] if the current length is
    /// numerically zero under the linear epsilon.
    ///
    /// # Examples
    /// ```
    /// use mathematics::Vector2F;
    ///
    /// let mut v = Vector2F::new(3.0, 4.0);
    /// v.set_length(10.0)?;
    /// assert_eq!(v, Vector2F::new(6.0, 8.0));
    ///
    /// let mut zero = Vector2F::ZERO;
    /// assert!(zero.set_length(1.0).is_err());
    /// # Ok::<(), mathematics::MathError>(())
    /// ```
    pub fn set_length(&mut self, length: f32) -> MathResult<()> {
        let current = self.length();
        if numeric::is_zero(current) {
            debug!("cannot rescale degenerate vector {self} to length {length}");
            return Err(MathError::DegenerateVector);
        }
        let scale = length / current;
        self.x *= scale;
        self.y *= scale;
        Ok(())
    }

    /// Returns `true` if the squared length is zero within the squared default
    /// epsilon.
    #[inline]
    pub fn is_numerically_zero(&self) -> bool {
        numeric::is_zero_with(self.length_squared(), EPSILON_F_SQUARED)
    }

    /// Like [`Vector2F::is_numerically_zero`], against `tolerance`'s squared
    /// epsilon.
    #[inline]
    pub fn is_numerically_zero_with(&self, tolerance: Tolerance) -> bool {
        numeric::is_zero_with(self.length_squared(), tolerance.epsilon_squared())
    }

    /// Returns `true` if the squared length is numerically equal to 1.
    #[inline]
    pub fn is_numerically_normalized(&self) -> bool {
        numeric::are_equal(self.length_squared(), 1.0)
    }

    /// The larger component. X wins ties.
    #[inline]
    pub fn largest_component(&self) -> f32 {
        if self.x >= self.y {
            self.x
        } else {
            self.y
        }
    }

    /// Index of the larger component. X (index 0) wins ties.
    #[inline]
    pub fn index_of_largest_component(&self) -> usize {
        if self.x >= self.y {
            0
        } else {
            1
        }
    }

    /// The smaller component. X wins ties.
    #[inline]
    pub fn smallest_component(&self) -> f32 {
        if self.x <= self.y {
            self.x
        } else {
            self.y
        }
    }

    /// Index of the smaller component. X (index 0) wins ties.
    #[inline]
    pub fn index_of_smallest_component(&self) -> usize {
        if self.x <= self.y {
            0
        } else {
            1
        }
    }

    /// Returns a normalized copy. See [`Vector2F::normalize`].
    pub fn normalized(self) -> MathResult<Self> {
        let mut v = self;
        v.normalize()?;
        Ok(v)
    }

    /// Returns the vector rotated by 90° counter-clockwise, `(-y, x)`,
    /// normalized.
    ///
    /// # Examples
    /// ```
    /// use mathematics::Vector2F;
    ///
    /// assert_eq!(Vector2F::new(2.0, 0.0).orthonormal()?, Vector2F::UNIT_Y);
    /// # Ok::<(), mathematics::MathError>(())
    /// ```
    pub fn orthonormal(self) -> MathResult<Self> {
        Self::new(-self.y, self.x).normalized()
    }
}

// =============================================================================
// MUTATING OPERATIONS
// =============================================================================

impl Vector2F {
    /// Scales the vector to unit length.
    ///
    /// Fails with [`MathError::DivideByZero`] if the length is numerically
    /// zero under the linear epsilon. Use [`Vector2F::try_normalize`] for a
    /// non-failing path.
    pub fn normalize(&mut self) -> MathResult<()> {
        let length = self.length();
        if numeric::is_zero(length) {
            debug!("cannot normalize degenerate vector {self}");
            return Err(MathError::DivideByZero);
        }
        let scale = 1.0 / length;
        self.x *= scale;
        self.y *= scale;
        Ok(())
    }

    /// Scales the vector to unit length if its squared length is not zero
    /// within the squared epsilon.
    ///
    /// Returns `false` and leaves the vector untouched otherwise.
    ///
    /// # Examples
    /// ```
    /// use mathematics::Vector2F;
    ///
    /// let mut v = Vector2F::ZERO;
    /// assert!(!v.try_normalize());
    /// assert_eq!(v, Vector2F::ZERO);
    /// ```
    pub fn try_normalize(&mut self) -> bool {
        let length_squared = self.length_squared();
        if numeric::is_zero_with(length_squared, EPSILON_F_SQUARED) {
            return false;
        }
        let scale = 1.0 / length_squared.sqrt();
        self.x *= scale;
        self.y *= scale;
        true
    }

    /// Replaces each component with its absolute value.
    pub fn absolute(&mut self) {
        *self = self.abs();
    }

    /// Clamps each component to `[min, max]`.
    pub fn clamp(&mut self, min: f32, max: f32) {
        *self = self.clamped(min, max);
    }

    /// Sets components that are numerically zero to exactly zero.
    pub fn clamp_to_zero(&mut self) {
        *self = self.clamped_to_zero();
    }

    /// Sets components within `epsilon` of zero to exactly zero.
    pub fn clamp_to_zero_with(&mut self, epsilon: f32) {
        *self = self.clamped_to_zero_with(epsilon);
    }

    /// Replaces the vector with its projection onto `target`.
    ///
    /// A zero `target` produces NaN or infinite components.
    pub fn project_to(&mut self, target: Vector2F) {
        *self = self.projected_to(target);
    }
}

// =============================================================================
// PURE OPERATIONS
// =============================================================================

impl Vector2F {
    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise clamp to `[min, max]`.
    #[inline]
    pub fn clamped(self, min: f32, max: f32) -> Self {
        Self::new(
            numeric::clamp(self.x, min, max),
            numeric::clamp(self.y, min, max),
        )
    }

    /// Copy with numerically zero components set to exactly zero.
    #[inline]
    pub fn clamped_to_zero(self) -> Self {
        Self::new(
            numeric::clamp_to_zero(self.x),
            numeric::clamp_to_zero(self.y),
        )
    }

    /// Copy with components within `epsilon` of zero set to exactly zero.
    #[inline]
    pub fn clamped_to_zero_with(self, epsilon: f32) -> Self {
        Self::new(
            numeric::clamp_to_zero_with(self.x, epsilon),
            numeric::clamp_to_zero_with(self.y, epsilon),
        )
    }

    /// Projection onto `target`: `(self · target / |target|²) * target`.
    ///
    /// # Examples
    /// ```
    /// use mathematics::Vector2F;
    ///
    /// let p = Vector2F::new(3.0, 4.0).projected_to(Vector2F::new(2.0, 0.0));
    /// assert_eq!(p, Vector2F::new(3.0, 0.0));
    /// assert!(Vector2F::ONE.projected_to(Vector2F::ZERO).is_nan());
    /// ```
    #[inline]
    pub fn projected_to(self, target: Vector2F) -> Self {
        self.dot(target) / target.length_squared() * target
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Vector2F) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    ///
    /// Fails with [`MathError::InvalidArgument`] if either vector is
    /// numerically zero. The cosine is clamped to `[-1, 1]` so rounding
    /// never produces NaN.
    ///
    /// # Examples
    /// ```
    /// use mathematics::Vector2F;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let angle = Vector2F::angle_between(Vector2F::UNIT_X, Vector2F::UNIT_Y)?;
    /// assert!((angle - FRAC_PI_2).abs() < 1.0e-6);
    /// # Ok::<(), mathematics::MathError>(())
    /// ```
    pub fn angle_between(a: Vector2F, b: Vector2F) -> MathResult<f32> {
        let (mut a, mut b) = (a, b);
        if !a.try_normalize() || !b.try_normalize() {
            debug!("angle requested between {a} and {b} with a zero-length operand");
            return Err(MathError::InvalidArgument(
                "vectors must not have 0 length".to_owned(),
            ));
        }
        let cos = numeric::clamp(a.dot(b), -1.0, 1.0);
        Ok(cos.acos())
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Vector2F) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Vector2F) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// `true` if every component of `self` is greater than in `other`.
    #[inline]
    pub fn all_gt(self, other: Vector2F) -> bool {
        self.x > other.x && self.y > other.y
    }

    /// `true` if every component of `self` is greater than or equal to
    /// `other`'s.
    #[inline]
    pub fn all_ge(self, other: Vector2F) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    /// `true` if every component of `self` is less than in `other`.
    #[inline]
    pub fn all_lt(self, other: Vector2F) -> bool {
        self.x < other.x && self.y < other.y
    }

    /// `true` if every component of `self` is less than or equal to
    /// `other`'s.
    #[inline]
    pub fn all_le(self, other: Vector2F) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// Component-wise equality within the default epsilon.
    ///
    /// # Examples
    /// ```
    /// use mathematics::Vector2F;
    ///
    /// let a = Vector2F::new(1.0, 2.0);
    /// let b = Vector2F::new(1.000001, 2.0);
    /// assert_ne!(a, b);
    /// assert!(Vector2F::are_numerically_equal(a, b));
    /// ```
    pub fn are_numerically_equal(a: Vector2F, b: Vector2F) -> bool {
        numeric::are_equal(a.x, b.x) && numeric::are_equal(a.y, b.y)
    }

    /// Component-wise equality within `epsilon`.
    pub fn are_numerically_equal_with(a: Vector2F, b: Vector2F, epsilon: f32) -> bool {
        numeric::are_equal_with(a.x, b.x, epsilon) && numeric::are_equal_with(a.y, b.y, epsilon)
    }
}

// =============================================================================
// CONVERSION & TEXT
// =============================================================================

impl Vector2F {
    /// Components as `[x, y]`.
    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Components as a list, X then Y.
    pub fn to_vec(self) -> Vec<f32> {
        vec![self.x, self.y]
    }

    /// Widens to the double-precision vector type.
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Widens to a variable-length vector of two components.
    pub fn to_vector_f(self) -> VectorF {
        VectorF::from(self.to_vec())
    }

    /// Renders `(X; Y)` using `format`'s decimal separator.
    pub fn to_string_with(&self, format: &NumberFormat) -> String {
        format!(
            "({}; {})",
            format.format_component(self.x),
            format.format_component(self.y)
        )
    }

    /// Parses `(X; Y)` with the invariant number format.
    ///
    /// # Examples
    /// ```
    /// use mathematics::Vector2F;
    ///
    /// assert_eq!(Vector2F::parse("(1.5; -2)")?, Vector2F::new(1.5, -2.0));
    /// assert!(Vector2F::parse("1.5, -2").is_err());
    /// # Ok::<(), mathematics::MathError>(())
    /// ```
    pub fn parse(text: &str) -> MathResult<Self> {
        Self::parse_with(text, &NumberFormat::INVARIANT)
    }

    /// Parses `(X; Y)` with the given number format.
    pub fn parse_with(text: &str, format: &NumberFormat) -> MathResult<Self> {
        let (x, y) = split_pair(text)?;
        let parsed = format
            .parse_component(x)
            .and_then(|x| format.parse_component(y).map(|y| Self::new(x, y)));
        if let Err(e) = &parsed {
            debug!("rejected vector text {text:?}: {e}");
        }
        parsed
    }
}

impl fmt::Display for Vector2F {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(
                f,
                "({:.*}; {:.*})",
                precision, self.x, precision, self.y
            ),
            None => write!(f, "({}; {})", self.x, self.y),
        }
    }
}

impl FromStr for Vector2F {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[f32; 2]> for Vector2F {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<&[f32]> for Vector2F {
    type Error = MathError;

    fn try_from(components: &[f32]) -> Result<Self, Self::Error> {
        Self::from_slice(components)
    }
}

impl TryFrom<&Vec<f32>> for Vector2F {
    type Error = MathError;

    fn try_from(components: &Vec<f32>) -> Result<Self, Self::Error> {
        Self::from_slice(components)
    }
}

impl From<Vector2F> for [f32; 2] {
    fn from(v: Vector2F) -> Self {
        v.to_array()
    }
}

impl From<Vector2F> for Vec<f32> {
    fn from(v: Vector2F) -> Self {
        v.to_vec()
    }
}

impl From<Vector2F> for DVec2 {
    fn from(v: Vector2F) -> Self {
        v.to_dvec2()
    }
}

impl From<Vector2F> for VectorF {
    fn from(v: Vector2F) -> Self {
        v.to_vector_f()
    }
}

// =============================================================================
// INDEXING
// =============================================================================

impl Index<usize> for Vector2F {
    type Output = f32;

    #[allow(clippy::panic)]
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", MathError::IndexOutOfRange { index }),
        }
    }
}

impl IndexMut<usize> for Vector2F {
    #[allow(clippy::panic)]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("{}", MathError::IndexOutOfRange { index }),
        }
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl Neg for Vector2F {
    type Output = Vector2F;

    fn neg(self) -> Vector2F {
        Vector2F::new(-self.x, -self.y)
    }
}

impl Add for Vector2F {
    type Output = Vector2F;

    fn add(self, rhs: Vector2F) -> Vector2F {
        Vector2F::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2F {
    type Output = Vector2F;

    fn sub(self, rhs: Vector2F) -> Vector2F {
        Vector2F::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2F {
    type Output = Vector2F;

    fn mul(self, scalar: f32) -> Vector2F {
        Vector2F::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2F> for f32 {
    type Output = Vector2F;

    fn mul(self, v: Vector2F) -> Vector2F {
        v * self
    }
}

/// Component-wise product.
impl Mul for Vector2F {
    type Output = Vector2F;

    fn mul(self, rhs: Vector2F) -> Vector2F {
        Vector2F::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<f32> for Vector2F {
    type Output = Vector2F;

    fn div(self, scalar: f32) -> Vector2F {
        self * (1.0 / scalar)
    }
}

/// Component-wise quotient.
impl Div for Vector2F {
    type Output = Vector2F;

    fn div(self, rhs: Vector2F) -> Vector2F {
        Vector2F::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl AddAssign for Vector2F {
    fn add_assign(&mut self, rhs: Vector2F) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2F {
    fn sub_assign(&mut self, rhs: Vector2F) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector2F {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl DivAssign<f32> for Vector2F {
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}
