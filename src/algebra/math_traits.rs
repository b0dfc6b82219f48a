use super::FloatT;

// All residual and cost computations go through these traits,
// which are implemented generically for floats of type FloatT.

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// Infinity norm
    fn norm_inf(&self) -> Self::T;

    /// Infinity norm of the elementwise product with `v`
    fn norm_inf_hadamard(&self, v: &Self) -> Self::T;

    /// Euclidean distance to `y`
    fn dist(&self, y: &Self) -> Self::T;

    /// True if every element is finite
    fn is_finite(&self) -> bool;

    /// BLAS-like shift and scale in place, non-allocating.  Produces `self = a*x+b*self`
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;
}

/// Matrix-vector products on [`CscMatrix`](crate::algebra::CscMatrix)
/// and its transposed / symmetric views.

pub trait MatrixVectorMultiply {
    type T: FloatT;

    /// BLAS-like general matrix-vector multiply.  Produces `y = a*self*x + b*y`
    fn gemv(&self, y: &mut [Self::T], x: &[Self::T], a: Self::T, b: Self::T);
}

pub trait SymMatrixVectorMultiply {
    type T: FloatT;

    /// BLAS-like symmetric matrix-vector multiply.  Produces `y = a*self*x + b*y`.
    /// The matrix source data should be triu.
    fn symv(&self, y: &mut [Self::T], x: &[Self::T], a: Self::T, b: Self::T);
}
