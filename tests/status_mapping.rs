use clarabel::solver::SolverStatus;
use qpbench::bench::*;

#[test]
fn test_clarabel_table() {
    let table = [
        (SolverStatus::Solved, Status::Optimal),
        (SolverStatus::AlmostSolved, Status::OptimalInaccurate),
        (SolverStatus::PrimalInfeasible, Status::PrimalInfeasible),
        (
            SolverStatus::AlmostPrimalInfeasible,
            Status::PrimalInfeasibleInaccurate,
        ),
        (SolverStatus::DualInfeasible, Status::DualInfeasible),
        (
            SolverStatus::AlmostDualInfeasible,
            Status::DualInfeasibleInaccurate,
        ),
        (SolverStatus::MaxIterations, Status::MaxIterReached),
        (SolverStatus::MaxTime, Status::TimeLimit),
        (SolverStatus::NumericalError, Status::SolverError),
        (SolverStatus::InsufficientProgress, Status::SolverError),
    ];
    for (native, status) in table {
        assert_eq!(ClarabelStatusMap::map(&native), status);
    }
}

#[test]
fn test_ecos_table() {
    let table = [
        ("optimal", Status::Optimal),
        ("optimal_inaccurate", Status::OptimalInaccurate),
        ("infeasible", Status::PrimalInfeasible),
        ("infeasible_inaccurate", Status::PrimalInfeasibleInaccurate),
        ("unbounded_inaccurate", Status::DualInfeasibleInaccurate),
    ];
    for (native, status) in table {
        assert_eq!(EcosStatusMap::map(native), status);
    }
}

#[test]
fn test_unknown_symbols_are_errors() {
    for native in ["unbounded", "solver_error", "user_limit", "Optimal", " optimal"] {
        assert_eq!(EcosStatusMap::map(native), Status::SolverError);
    }
}

#[test]
fn test_status_names_round_trip() {
    for status in Status::ALL {
        let name = status.to_string();
        assert_eq!(name.parse::<Status>().unwrap(), status);
    }
    assert!("infeasible".parse::<Status>().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_status_serde_names() {
    let json = serde_json::to_string(&Status::OptimalInaccurate).unwrap();
    assert_eq!(json, "\"optimal_inaccurate\"");
    let status: Status = serde_json::from_str("\"time_limit\"").unwrap();
    assert_eq!(status, Status::TimeLimit);
}
