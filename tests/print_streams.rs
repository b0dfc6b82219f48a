#![allow(non_snake_case)]

use qpbench::{algebra::*, bench::*, io::ConfigurablePrintTarget};

// rows x ≤ -1 and x ≥ 1 make this primal infeasible, so the
// validator always writes a diagnostic after the solver log
fn test_print_solver() -> (ClarabelAdapter<f64>, QpProblem<f64>) {
    let problem = QpProblem::new(
        CscMatrix::identity(1),
        vec![0.],
        CscMatrix::from_dense(2, 1, &[1., -1.]),
        vec![-1., -1.],
        vec![ConstraintBlock::Inequality(2)],
    )
    .unwrap();
    let settings = BenchSettingsBuilder::default().verbose(true).build().unwrap();
    (ClarabelAdapter::with_settings(settings), problem)
}

#[test]
fn test_print_to_stdout() {
    let (mut solver, problem) = test_print_solver();
    solver.print_to_stdout();
    solver.solve(&problem);
}

#[test]
fn test_print_to_buffer() {
    let (mut solver, problem) = test_print_solver();
    solver.print_to_buffer();
    solver.solve(&problem);
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("Clarabel.rs"));
    assert!(result.contains("Terminated with status"));
    assert!(result.contains("Solution from CLARABEL failed validation"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let (mut solver, problem) = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    solver.print_to_file(file.into_file());
    solver.solve(&problem);

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("Terminated with status"));
    assert!(result.contains("failed validation"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let (mut solver, problem) = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    solver.print_to_stream(stream);
    solver.solve(&problem);

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("Terminated with status"));
    assert!(result.contains("failed validation"));
}

#[test]
fn test_print_to_sink() {
    let (mut solver, problem) = test_print_solver();
    solver.print_to_sink();
    assert_eq!(solver.solve(&problem).status(), Status::SolverError);
    assert!(solver.get_print_buffer().is_err());
}
