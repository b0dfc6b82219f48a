#![allow(non_snake_case)]

use crate::algebra::{FloatT, SparseFormatError};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// This is the layout used by every engine behind the benchmark adapters,
/// so problem data is held in it directly.
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```
/// use qpbench::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  );
///
/// assert!(A.check_format().is_ok());
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// This field should have length `n+1`. The last entry corresponds
    /// to the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

/// Transposed view of a [`CscMatrix`]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}

/// Symmetric view of a [`CscMatrix`] holding only its upper triangle
pub struct Symmetric<'a, M> {
    pub src: &'a M,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.  Row ordering and row bounds are not checked here; use
    /// [`check_format`](CscMatrix::check_format) for that.
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// allocate space for a sparse matrix with `nnz` elements
    ///
    /// To make an m x n matrix of zeros, use
    /// ```
    /// use qpbench::algebra::CscMatrix;
    /// let A : CscMatrix<f64> = CscMatrix::spalloc(3, 4, 0);
    /// assert_eq!(A.nnz(), 0);
    /// ```
    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        let mut colptr = vec![0; n + 1];
        colptr[n] = nnz;
        CscMatrix::new(m, n, colptr, vec![0; nnz], vec![T::zero(); nnz])
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        CscMatrix::new(
            n,
            n,
            (0usize..=n).collect(),
            (0usize..n).collect(),
            vec![T::one(); n],
        )
    }

    /// Build from a dense row-major array.  Exact zeros are not stored.
    ///
    /// # Panics
    /// Panics if `data.len() != m * n`.
    pub fn from_dense(m: usize, n: usize, data: &[T]) -> Self {
        assert_eq!(data.len(), m * n);

        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        colptr.push(0);
        for col in 0..n {
            for row in 0..m {
                let v = data[row * n + col];
                if v != T::zero() {
                    rowval.push(row);
                    nzval.push(v);
                }
            }
            colptr.push(rowval.len());
        }
        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// transpose
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// symmetric view
    pub fn sym(&self) -> Symmetric<'_, Self> {
        debug_assert!(self.is_triu());
        Symmetric { src: self }
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.len() != self.n + 1 || self.colptr[self.n] != self.rowval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        for col in 0..self.n {
            let rows = &self.rowval[self.colptr[col]..self.colptr[col + 1]];
            if rows.windows(2).any(|r| r[0] >= r[1]) {
                return Err(SparseFormatError::BadRowOrdering);
            }
        }

        if self.rowval.iter().any(|&r| r >= self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        Ok(())
    }

    /// True if the matrix has no structural entries below the diagonal
    pub fn is_triu(&self) -> bool {
        (0..self.n).all(|col| {
            self.rowval[self.colptr[col]..self.colptr[col + 1]]
                .iter()
                .all(|&row| row <= col)
        })
    }
}

#[test]
fn test_check_format() {
    let A = CscMatrix::<f64>::identity(3);
    assert!(A.check_format().is_ok());

    // row index out of bounds
    let mut B = A.clone();
    B.rowval[2] = 3;
    assert_eq!(B.check_format(), Err(SparseFormatError::BadRowval));

    // rows out of order within a column
    let C = CscMatrix {
        m: 2,
        n: 1,
        colptr: vec![0, 2],
        rowval: vec![1, 0],
        nzval: vec![1., 2.],
    };
    assert_eq!(C.check_format(), Err(SparseFormatError::BadRowOrdering));

    // truncated colptr
    let D = CscMatrix {
        m: 2,
        n: 2,
        colptr: vec![0, 1],
        rowval: vec![0],
        nzval: vec![1.],
    };
    assert_eq!(D.check_format(), Err(SparseFormatError::IncompatibleDimension));
}

#[test]
fn test_from_dense_and_triu() {
    // [1 2]
    // [0 3]
    let A = CscMatrix::from_dense(2, 2, &[1., 2., 0., 3.]);
    assert_eq!(A.colptr, vec![0, 1, 3]);
    assert_eq!(A.rowval, vec![0, 0, 1]);
    assert_eq!(A.nzval, vec![1., 2., 3.]);
    assert!(A.is_triu());

    let B = CscMatrix::from_dense(2, 2, &[1., 0., 4., 3.]);
    assert!(!B.is_triu());
}
