//! # Error Types
//!
//! Error types for vector and scalar operations.
//!
//! ## Error Policy
//!
//! - Usage errors (bad index, too few components) are reported immediately
//! - Mathematical degeneracies (zero-length vectors) are explicit errors on
//!   the operations that cannot define a result
//! - `Vector2F::try_normalize` and `Vector2F::project_to` are the deliberate
//!   non-failing paths

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the mathematics crate.
///
/// ## Example
///
/// ```rust
/// use mathematics::{MathError, Vector2F};
///
/// match Vector2F::ZERO.normalized() {
///     Ok(v) => println!("direction: {v}"),
///     Err(MathError::DivideByZero) => eprintln!("zero vector has no direction"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A component index other than 0 or 1 was used.
    #[error("The index is out of range. Allowed values are 0 and 1, got {index}.")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },

    /// A sequence with fewer than two elements was used to build a vector.
    #[error("Expected at least 2 components, got {len}.")]
    InsufficientComponents {
        /// Number of elements in the sequence.
        len: usize,
    },

    /// The length of a zero vector was changed.
    #[error("Cannot change length of a vector with length 0.")]
    DegenerateVector,

    /// A zero vector was normalized.
    #[error("Cannot normalize a vector with length 0.")]
    DivideByZero,

    /// An argument does not satisfy the operation's precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Text could not be parsed into a vector.
    #[error("Format error: {0}")]
    Format(String),

    /// A tolerance configuration value was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mathematics operations.
///
/// ## Example
///
/// ```rust
/// use mathematics::{MathResult, Vector2F};
///
/// fn direction(from: Vector2F, to: Vector2F) -> MathResult<Vector2F> {
///     (to - from).normalized()
/// }
///
/// assert!(direction(Vector2F::ONE, Vector2F::ONE).is_err());
/// ```
pub type MathResult<T> = Result<T, MathError>;

// =============================================================================
// TESTS
// =============================================================================
