use super::Status;
use clarabel::solver::SolverStatus;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt::Debug;

/// Translation of an engine's native status vocabulary into [`Status`].
///
/// Each engine has exactly one fixed table.  Symbols outside the table are
/// reported as [`Status::SolverError`].
pub trait StatusMap {
    /// The engine's native status type
    type Native: ?Sized + Debug;

    fn map(native: &Self::Native) -> Status;
}

/// Status table for the `clarabel` crate
pub struct ClarabelStatusMap;

impl StatusMap for ClarabelStatusMap {
    type Native = SolverStatus;

    fn map(native: &SolverStatus) -> Status {
        match native {
            SolverStatus::Solved => Status::Optimal,
            SolverStatus::AlmostSolved => Status::OptimalInaccurate,
            SolverStatus::PrimalInfeasible => Status::PrimalInfeasible,
            SolverStatus::AlmostPrimalInfeasible => Status::PrimalInfeasibleInaccurate,
            SolverStatus::DualInfeasible => Status::DualInfeasible,
            SolverStatus::AlmostDualInfeasible => Status::DualInfeasibleInaccurate,
            SolverStatus::MaxIterations => Status::MaxIterReached,
            SolverStatus::MaxTime => Status::TimeLimit,
            _ => Status::SolverError,
        }
    }
}

lazy_static! {
    static ref ECOS_STATUS: HashMap<&'static str, Status> = {
        let mut m = HashMap::new();
        m.insert("optimal", Status::Optimal);
        m.insert("optimal_inaccurate", Status::OptimalInaccurate);
        m.insert("infeasible", Status::PrimalInfeasible);
        m.insert("infeasible_inaccurate", Status::PrimalInfeasibleInaccurate);
        m.insert("unbounded_inaccurate", Status::DualInfeasibleInaccurate);
        m
    };
}

/// Status table for ECOS as reported through a cvxpy-style modelling layer.
///
/// Plain `"unbounded"` is deliberately absent and maps to
/// [`Status::SolverError`].
pub struct EcosStatusMap;

impl StatusMap for EcosStatusMap {
    type Native = str;

    fn map(native: &str) -> Status {
        ECOS_STATUS
            .get(native)
            .copied()
            .unwrap_or(Status::SolverError)
    }
}

#[test]
fn test_clarabel_status_map() {
    assert_eq!(ClarabelStatusMap::map(&SolverStatus::Solved), Status::Optimal);
    assert_eq!(
        ClarabelStatusMap::map(&SolverStatus::AlmostDualInfeasible),
        Status::DualInfeasibleInaccurate
    );
    assert_eq!(ClarabelStatusMap::map(&SolverStatus::MaxTime), Status::TimeLimit);
    assert_eq!(
        ClarabelStatusMap::map(&SolverStatus::NumericalError),
        Status::SolverError
    );
    assert_eq!(ClarabelStatusMap::map(&SolverStatus::Unsolved), Status::SolverError);
}

#[test]
fn test_ecos_status_map() {
    assert_eq!(EcosStatusMap::map("optimal"), Status::Optimal);
    assert_eq!(
        EcosStatusMap::map("infeasible_inaccurate"),
        Status::PrimalInfeasibleInaccurate
    );
    assert_eq!(EcosStatusMap::map("unbounded"), Status::SolverError);
    assert_eq!(EcosStatusMap::map("OPTIMAL"), Status::SolverError);
    assert_eq!(EcosStatusMap::map(""), Status::SolverError);
}
