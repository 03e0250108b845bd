//! Numeric value types for the geometry toolkit.
//!
//! This crate provides the single-precision vector types that transforms,
//! physics and rendering code compose on top of, together with the scalar
//! tolerance helpers those types are built from.
//!
//! ## Modules
//!
//! - [`numeric`]: zero and equality predicates under a default or custom epsilon
//! - [`algebra`]: [`Vector2F`], [`VectorF`] and locale-style [`NumberFormat`]
//! - [`error`]: the [`MathError`] taxonomy
//!
//! ## Example
//!
//! ```rust
//! use mathematics::Vector2F;
//!
//! let mut v = Vector2F::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! v.normalize()?;
//! assert!(v.is_numerically_normalized());
//! # Ok::<(), mathematics::MathError>(())
//! ```

pub mod algebra;
pub mod error;
pub mod numeric;

pub use algebra::{NumberFormat, Vector2F, VectorF};
pub use error::{MathError, MathResult};
