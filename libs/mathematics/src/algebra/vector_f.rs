//! Variable-length single-precision vector.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// A vector with any number of `f32` components.
///
/// Fixed-size vectors widen into this type without loss.
///
/// # Examples
/// ```
/// use mathematics::{Vector2F, VectorF};
///
/// let v: VectorF = Vector2F::new(1.0, 2.0).into();
/// assert_eq!(v.len(), 2);
/// assert_eq!(v[1], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorF {
    components: Vec<f32>,
}

impl VectorF {
    /// Creates a vector of `len` zero components.
    pub fn new(len: usize) -> Self {
        Self {
            components: vec![0.0; len],
        }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the vector has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components in order.
    pub fn as_slice(&self) -> &[f32] {
        &self.components
    }

    /// Consumes the vector and returns its components.
    pub fn into_vec(self) -> Vec<f32> {
        self.components
    }
}

impl From<Vec<f32>> for VectorF {
    fn from(components: Vec<f32>) -> Self {
        Self { components }
    }
}

impl Index<usize> for VectorF {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.components[index]
    }
}

impl IndexMut<usize> for VectorF {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.components[index]
    }
}
