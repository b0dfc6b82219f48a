#![allow(non_snake_case)]

use crate::algebra::*;
use std::iter::zip;

impl<T: FloatT> MatrixVectorMultiply for CscMatrix<T> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        _csc_axpby_N(self, y, x, a, b);
    }
}

impl<T: FloatT> MatrixVectorMultiply for Adjoint<'_, CscMatrix<T>> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        _csc_axpby_T(self.src, y, x, a, b);
    }
}

impl<T: FloatT> SymMatrixVectorMultiply for Symmetric<'_, CscMatrix<T>> {
    type T = T;

    fn symv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        _csc_symv(self.src, y, x, a, b);
    }
}

fn _scale_or_reset<T: FloatT>(y: &mut [T], b: T) {
    if b == T::zero() {
        y.fill(T::zero());
    } else if b != T::one() {
        y.iter_mut().for_each(|v| *v *= b);
    }
}

// y = a*A*x + b*y
fn _csc_axpby_N<T: FloatT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    assert_eq!(x.len(), A.n);
    assert_eq!(y.len(), A.m);

    _scale_or_reset(y, b);
    if a == T::zero() {
        return;
    }

    for (col, &xcol) in x.iter().enumerate() {
        let rng = A.colptr[col]..A.colptr[col + 1];
        for (&row, &Aij) in zip(&A.rowval[rng.clone()], &A.nzval[rng]) {
            y[row] += a * Aij * xcol;
        }
    }
}

// y = a*A'*x + b*y
fn _csc_axpby_T<T: FloatT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    assert_eq!(x.len(), A.m);
    assert_eq!(y.len(), A.n);

    _scale_or_reset(y, b);
    if a == T::zero() {
        return;
    }

    for (col, ycol) in y.iter_mut().enumerate() {
        let rng = A.colptr[col]..A.colptr[col + 1];
        let acc = zip(&A.rowval[rng.clone()], &A.nzval[rng])
            .fold(T::zero(), |acc, (&row, &Aij)| acc + Aij * x[row]);
        *ycol += a * acc;
    }
}

// y = a*A*x + b*y, with A symmetric and only its upper triangle stored
fn _csc_symv<T: FloatT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    assert_eq!(A.m, A.n);
    assert_eq!(x.len(), A.n);
    assert_eq!(y.len(), A.n);

    _scale_or_reset(y, b);

    for (col, &xcol) in x.iter().enumerate() {
        let rng = A.colptr[col]..A.colptr[col + 1];
        for (&row, &Aij) in zip(&A.rowval[rng.clone()], &A.nzval[rng]) {
            y[row] += a * Aij * xcol;
            if row != col {
                //don't double up on the diagonal
                y[col] += a * Aij * x[row];
            }
        }
    }
}
