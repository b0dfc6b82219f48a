use super::{QpProblem, StatusMap};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by a solver [`Engine`]
pub enum EngineError {
    /// The engine could not accept the problem data
    #[error("Bad problem data: {0}")]
    BadProblem(String),
    /// The engine raised an error during the solve
    #[error("Solver failure: {0}")]
    SolverFailure(String),
    /// The problem uses features the engine does not support
    #[error("Unsupported problem: {0}")]
    Unsupported(String),
    /// The engine panicked
    #[error("Solver panicked: {0}")]
    Panicked(String),
}

/// Timing and iteration data reported by an engine after a solve
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineInfo {
    /// seconds
    pub setup_time: Option<f64>,
    /// seconds
    pub solve_time: Option<f64>,
    pub iterations: Option<u32>,
}

impl EngineInfo {
    /// setup + solve time, if the engine reported both
    pub fn run_time(&self) -> Option<f64> {
        Some(self.setup_time? + self.solve_time?)
    }
}

/// Primal and dual variables recovered from an engine, in the
/// sign conventions of [`QpProblem`]
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSolution<T> {
    pub x: Option<Vec<T>>,
    pub y: Option<Vec<T>>,
}

impl<T> Default for CandidateSolution<T> {
    fn default() -> Self {
        Self { x: None, y: None }
    }
}

/// Boundary between an adapter and the solver it wraps.
///
/// An engine owns the construction of its native problem from a
/// [`QpProblem`], runs a single blocking solve and exposes its native
/// status for translation through its [`StatusMap`].
pub trait Engine<T> {
    type Map: StatusMap;

    /// Build and solve the native problem, returning the objective value.
    fn solve(&mut self, problem: &QpProblem<T>, verbose: bool) -> Result<T, EngineError>;

    /// native status of the most recent solve
    fn status(&self) -> &<Self::Map as StatusMap>::Native;

    fn info(&self) -> EngineInfo;

    /// Solver log captured during the most recent verbose solve.
    ///
    /// Engines that print their own progress should capture it here
    /// rather than on stdout, so that it follows the adapter's print target.
    fn take_log(&mut self) -> Option<String> {
        None
    }

    /// Recover `(x, y)` from the engine's internal representation.
    ///
    /// `y` must follow the `Px + q + Aᵀy = 0`, `y ≥ 0` on inequality rows
    /// convention.
    fn revert(&self, problem: &QpProblem<T>) -> CandidateSolution<T>;
}

impl<T, E> Engine<T> for Box<E>
where
    E: Engine<T> + ?Sized,
{
    type Map = E::Map;

    fn solve(&mut self, problem: &QpProblem<T>, verbose: bool) -> Result<T, EngineError> {
        (**self).solve(problem, verbose)
    }

    fn status(&self) -> &<Self::Map as StatusMap>::Native {
        (**self).status()
    }

    fn info(&self) -> EngineInfo {
        (**self).info()
    }

    fn take_log(&mut self) -> Option<String> {
        (**self).take_log()
    }

    fn revert(&self, problem: &QpProblem<T>) -> CandidateSolution<T> {
        (**self).revert(problem)
    }
}

#[test]
fn test_engine_info_run_time() {
    let info = EngineInfo {
        setup_time: Some(0.25),
        solve_time: Some(0.5),
        iterations: Some(3),
    };
    assert_eq!(info.run_time(), Some(0.75));

    let info = EngineInfo {
        solve_time: None,
        ..info
    };
    assert_eq!(info.run_time(), None);
}
