#![allow(non_snake_case)]
#![allow(clippy::type_complexity)]
use qpbench::{algebra::*, bench::*};

// a collection of tests to ensure that data of
// incompatible dimension won't be accepted

fn api_dim_check_data() -> (
    CscMatrix<f64>,
    Vec<f64>,
    CscMatrix<f64>,
    Vec<f64>,
    Vec<ConstraintBlock>,
) {
    let P = CscMatrix::<f64>::spalloc(4, 4, 0);
    let q = vec![0.; 4];
    let A = CscMatrix::<f64>::spalloc(6, 4, 0);
    let b = vec![0.; 6];
    let cones = vec![
        ConstraintBlock::Equality(1),
        ConstraintBlock::Inequality(2),
        ConstraintBlock::Inequality(3),
    ];
    (P, q, A, b, cones)
}

#[test]
fn api_dim_check_working() {
    // This example should work because dimensions are
    // all compatible.  All following checks vary one
    // of these sizes to test dimension checks

    let (P, q, A, b, cones) = api_dim_check_data();
    let problem = QpProblem::new(P, q, A, b, cones).unwrap();
    assert_eq!((problem.n(), problem.m()), (4, 6));
}

#[test]
fn api_dim_check_bad_P() {
    let (_P, q, A, b, cones) = api_dim_check_data();
    let P = CscMatrix::<f64>::spalloc(3, 3, 0);

    assert!(matches!(
        QpProblem::new(P, q, A, b, cones),
        Err(ProblemError::IncompatibleDimension("P"))
    ));
}

#[test]
fn api_dim_check_bad_A_rows() {
    let (P, q, _A, b, cones) = api_dim_check_data();
    let A = CscMatrix::<f64>::spalloc(5, 4, 0);

    assert!(matches!(
        QpProblem::new(P, q, A, b, cones),
        Err(ProblemError::IncompatibleDimension("A"))
    ));
}

#[test]
fn api_dim_check_bad_A_cols() {
    let (P, q, _A, b, cones) = api_dim_check_data();
    let A = CscMatrix::<f64>::spalloc(6, 3, 0);

    assert!(matches!(
        QpProblem::new(P, q, A, b, cones),
        Err(ProblemError::IncompatibleDimension("A"))
    ));
}

#[test]
fn api_dim_check_bad_cones() {
    let (P, q, A, b, _cones) = api_dim_check_data();
    let cones = vec![
        ConstraintBlock::Equality(1),
        ConstraintBlock::Inequality(2),
        ConstraintBlock::Inequality(4),
    ];

    assert!(matches!(
        QpProblem::new(P, q, A, b, cones),
        Err(ProblemError::BadConstraintBlocks { covered: 7, rows: 6 })
    ));
}

#[test]
fn api_dim_check_bad_format() {
    let (P, q, mut A, b, cones) = api_dim_check_data();

    // colptr is no longer monotone
    A.colptr[1] = 2;
    A.colptr[2] = 1;
    A.colptr[4] = 2;
    A.rowval = vec![0, 1];
    A.nzval = vec![1., 1.];

    assert!(matches!(
        QpProblem::new(P, q, A, b, cones),
        Err(ProblemError::BadFormat(SparseFormatError::BadColptr))
    ));
}
