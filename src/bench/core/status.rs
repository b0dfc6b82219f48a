use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Canonical outcome of a benchmarked solve.
///
/// Every engine's native status vocabulary is translated into this enum
/// by a [`StatusMap`](crate::bench::StatusMap).
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// Solution found and verified
    Optimal,
    /// Solution found to reduced accuracy
    OptimalInaccurate,
    /// Problem is primal infeasible
    PrimalInfeasible,
    /// Problem is primal infeasible to reduced accuracy
    PrimalInfeasibleInaccurate,
    /// Problem is dual infeasible (unbounded)
    DualInfeasible,
    /// Problem is dual infeasible to reduced accuracy
    DualInfeasibleInaccurate,
    /// Iteration limit reached
    MaxIterReached,
    /// Time limit exceeded
    TimeLimit,
    /// Solver failed, or its claimed solution did not validate
    SolverError,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown status name \"{0}\"")]
/// Error type returned when parsing a [`Status`] from its name
pub struct StatusParseError(pub String);

impl Status {
    pub const ALL: [Status; 9] = [
        Status::Optimal,
        Status::OptimalInaccurate,
        Status::PrimalInfeasible,
        Status::PrimalInfeasibleInaccurate,
        Status::DualInfeasible,
        Status::DualInfeasibleInaccurate,
        Status::MaxIterReached,
        Status::TimeLimit,
        Status::SolverError,
    ];

    /// canonical snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Optimal => "optimal",
            Status::OptimalInaccurate => "optimal_inaccurate",
            Status::PrimalInfeasible => "primal_infeasible",
            Status::PrimalInfeasibleInaccurate => "primal_infeasible_inaccurate",
            Status::DualInfeasible => "dual_infeasible",
            Status::DualInfeasibleInaccurate => "dual_infeasible_inaccurate",
            Status::MaxIterReached => "max_iter_reached",
            Status::TimeLimit => "time_limit",
            Status::SolverError => "solver_error",
        }
    }

    /// True only for statuses whose records carry a verified solution
    pub fn has_solution(&self) -> bool {
        matches!(self, Status::Optimal)
    }

    pub fn is_optimal(&self) -> bool {
        matches!(self, Status::Optimal | Status::OptimalInaccurate)
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            Status::PrimalInfeasible
                | Status::PrimalInfeasibleInaccurate
                | Status::DualInfeasible
                | Status::DualInfeasibleInaccurate
        )
    }

    pub fn is_inaccurate(&self) -> bool {
        matches!(
            self,
            Status::OptimalInaccurate
                | Status::PrimalInfeasibleInaccurate
                | Status::DualInfeasibleInaccurate
        )
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, Status::SolverError)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Status {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| StatusParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>(), Ok(status));
            assert_eq!(status.to_string(), status.as_str());
        }
        assert_eq!(
            "Solved".parse::<Status>(),
            Err(StatusParseError("Solved".to_string()))
        );
    }

    #[test]
    fn test_status_predicates() {
        assert!(Status::Optimal.has_solution());
        assert!(!Status::OptimalInaccurate.has_solution());
        assert!(Status::OptimalInaccurate.is_optimal());
        assert!(Status::OptimalInaccurate.is_inaccurate());
        assert!(Status::DualInfeasible.is_infeasible());
        assert!(!Status::DualInfeasible.is_inaccurate());
        assert!(!Status::TimeLimit.is_infeasible());
        assert!(Status::SolverError.is_errored());
        assert!(!Status::MaxIterReached.is_errored());
    }
}
