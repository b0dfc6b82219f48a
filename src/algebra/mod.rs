//! Sparse and dense linear algebra used to evaluate candidate solutions.
//!
//! Problem data is held in [`CscMatrix`] form.  The residual computations in
//! the validator go through the [`VectorMath`], [`MatrixVectorMultiply`] and
//! [`SymMatrixVectorMultiply`] traits.

mod csc;
mod error_types;
mod floats;
mod math_traits;
mod vecmath;

pub use csc::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
