#![allow(non_snake_case)]

use crate::algebra::*;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A block of consecutive constraint rows in `Ax + s = b`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstraintBlock {
    /// `k` rows with `s = 0`, i.e. `Ax = b`
    Equality(usize),
    /// `k` rows with `s ≥ 0`, i.e. `Ax ≤ b`
    Inequality(usize),
}

impl ConstraintBlock {
    pub fn nvars(&self) -> usize {
        match *self {
            ConstraintBlock::Equality(k) | ConstraintBlock::Inequality(k) => k,
        }
    }
}

/// Kind of an individual constraint row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Equality,
    Inequality,
}

#[derive(Error, Debug)]
/// Error type returned when constructing a [`QpProblem`]
pub enum ProblemError {
    #[error("Bad sparse matrix format: {0}")]
    BadFormat(#[from] SparseFormatError),
    #[error("Incompatible dimensions for {0}")]
    IncompatibleDimension(&'static str),
    #[error("P must be upper triangular")]
    NotUpperTriangular,
    #[error("Constraint blocks cover {covered} rows but A has {rows}")]
    BadConstraintBlocks { covered: usize, rows: usize },
    #[error("Non-finite entry in {0}")]
    NonFinite(&'static str),
}

/// Quadratic program in the form
///
/// ```text
/// minimize    ½ xᵀPx + qᵀx
/// subject to  Ax + s = b,   s ∈ K
/// ```
///
/// where `K` is described by an ordered list of [`ConstraintBlock`]s.
/// Only the upper triangle of the symmetric matrix `P` is stored.
///
/// Once constructed the problem is read-only and can be shared between
/// adapters running on different threads.
#[derive(Debug, Clone)]
pub struct QpProblem<T = f64> {
    P: CscMatrix<T>,
    q: Vec<T>,
    A: CscMatrix<T>,
    b: Vec<T>,
    constraints: Vec<ConstraintBlock>,
}

impl<T> QpProblem<T>
where
    T: FloatT,
{
    pub fn new(
        P: CscMatrix<T>,
        q: Vec<T>,
        A: CscMatrix<T>,
        b: Vec<T>,
        constraints: Vec<ConstraintBlock>,
    ) -> Result<Self, ProblemError> {
        P.check_format()?;
        A.check_format()?;

        let n = q.len();
        let m = b.len();

        if P.m != n || P.n != n {
            return Err(ProblemError::IncompatibleDimension("P"));
        }
        if A.m != m || A.n != n {
            return Err(ProblemError::IncompatibleDimension("A"));
        }
        if !P.is_triu() {
            return Err(ProblemError::NotUpperTriangular);
        }

        let covered: usize = constraints.iter().map(|c| c.nvars()).sum();
        if covered != m {
            return Err(ProblemError::BadConstraintBlocks { covered, rows: m });
        }

        if !P.nzval.is_finite() {
            return Err(ProblemError::NonFinite("P"));
        }
        if !q.is_finite() {
            return Err(ProblemError::NonFinite("q"));
        }
        if !A.nzval.is_finite() {
            return Err(ProblemError::NonFinite("A"));
        }
        if !b.is_finite() {
            return Err(ProblemError::NonFinite("b"));
        }

        Ok(Self {
            P,
            q,
            A,
            b,
            constraints,
        })
    }

    /// number of variables
    pub fn n(&self) -> usize {
        self.q.len()
    }

    /// number of constraint rows
    pub fn m(&self) -> usize {
        self.b.len()
    }

    pub fn P(&self) -> &CscMatrix<T> {
        &self.P
    }

    pub fn q(&self) -> &[T] {
        &self.q
    }

    pub fn A(&self) -> &CscMatrix<T> {
        &self.A
    }

    pub fn b(&self) -> &[T] {
        &self.b
    }

    pub fn constraints(&self) -> &[ConstraintBlock] {
        &self.constraints
    }

    /// kind of each constraint row, in row order
    pub fn row_kinds(&self) -> impl Iterator<Item = RowKind> + '_ {
        self.constraints.iter().flat_map(|c| {
            let kind = match c {
                ConstraintBlock::Equality(_) => RowKind::Equality,
                ConstraintBlock::Inequality(_) => RowKind::Inequality,
            };
            std::iter::repeat(kind).take(c.nvars())
        })
    }

    /// ½ xᵀPx + qᵀx
    pub fn objective(&self, x: &[T]) -> T {
        let mut Px = vec![T::zero(); self.n()];
        self.P.sym().symv(&mut Px, x, T::one(), T::zero());
        (T::one() / (2.).as_T()) * x.dot(&Px) + self.q.dot(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> (CscMatrix<f64>, Vec<f64>, CscMatrix<f64>, Vec<f64>) {
        let P = CscMatrix::from_dense(2, 2, &[2., 1., 0., 4.]);
        let q = vec![1., -1.];
        let A = CscMatrix::from_dense(3, 2, &[1., 1., -1., 0., 0., -1.]);
        let b = vec![1., 0., 0.];
        (P, q, A, b)
    }

    #[test]
    fn test_problem_new() {
        let (P, q, A, b) = data();
        let cones = vec![ConstraintBlock::Equality(1), ConstraintBlock::Inequality(2)];
        let problem = QpProblem::new(P, q, A, b, cones).unwrap();

        assert_eq!((problem.n(), problem.m()), (2, 3));
        let kinds: Vec<_> = problem.row_kinds().collect();
        assert_eq!(
            kinds,
            [RowKind::Equality, RowKind::Inequality, RowKind::Inequality]
        );

        // ½(2 + 2·1 + 4) + (1 - 1) = 4
        assert_eq!(problem.objective(&[1., 1.]), 4.);
    }

    #[test]
    fn test_problem_bad_data() {
        let (P, q, A, b) = data();

        let err = QpProblem::new(
            P.clone(),
            q.clone(),
            A.clone(),
            b.clone(),
            vec![ConstraintBlock::Inequality(2)],
        );
        assert!(matches!(
            err,
            Err(ProblemError::BadConstraintBlocks { covered: 2, rows: 3 })
        ));

        let full = CscMatrix::from_dense(2, 2, &[2., 1., 1., 4.]);
        let err = QpProblem::new(
            full,
            q.clone(),
            A.clone(),
            b.clone(),
            vec![ConstraintBlock::Inequality(3)],
        );
        assert!(matches!(err, Err(ProblemError::NotUpperTriangular)));

        let err = QpProblem::new(
            P.clone(),
            q.clone(),
            A.clone(),
            vec![1., f64::INFINITY, 0.],
            vec![ConstraintBlock::Inequality(3)],
        );
        assert!(matches!(err, Err(ProblemError::NonFinite("b"))));

        let mut badP = P.clone();
        badP.nzval[0] = f64::NAN;
        let err = QpProblem::new(
            badP,
            q.clone(),
            A.clone(),
            b.clone(),
            vec![ConstraintBlock::Inequality(3)],
        );
        assert!(matches!(err, Err(ProblemError::NonFinite("P"))));

        let mut badA = A.clone();
        badA.nzval[1] = f64::NEG_INFINITY;
        let err = QpProblem::new(
            P.clone(),
            q.clone(),
            badA,
            b.clone(),
            vec![ConstraintBlock::Inequality(3)],
        );
        assert!(matches!(err, Err(ProblemError::NonFinite("A"))));

        let err = QpProblem::new(P, vec![1.], A, b, vec![ConstraintBlock::Inequality(3)]);
        assert!(matches!(err, Err(ProblemError::IncompatibleDimension("P"))));
    }
}
