//! Vector value types.
//!
//! [`Vector2F`] is the workhorse 2D vector. [`VectorF`] is the variable-length
//! vector used as a widening target, and [`NumberFormat`] controls how
//! components are rendered and parsed as text.

pub mod format;
pub mod vector2f;
pub mod vector_f;

pub use format::NumberFormat;
pub use vector2f::Vector2F;
pub use vector_f::VectorF;
