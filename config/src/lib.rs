//! # Config Crate
//!
//! Centralized numeric tolerances for the mathematics workspace.
//! Every floating-point threshold is defined here so that vector and scalar
//! routines agree on what "numerically zero" and "numerically equal" mean.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{Tolerance, EPSILON_F};
//!
//! // Use EPSILON_F for single-precision comparisons
//! let value: f32 = 0.000001; // 1e-6, smaller than EPSILON_F (1e-5)
//! let is_zero = value.abs() < EPSILON_F;
//! assert!(is_zero);
//!
//! // Build a looser tolerance for noisy input
//! let loose = Tolerance::new(1.0e-3).unwrap();
//! assert!(loose.epsilon() > EPSILON_F);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All tolerances defined once, used everywhere
//! - **Dependency-Free**: Plain constants and a validated value type

pub mod constants;
