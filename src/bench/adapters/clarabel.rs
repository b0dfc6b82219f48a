#![allow(non_snake_case)]

use crate::algebra::{CscMatrix, FloatT};
use crate::bench::*;
use crate::timers::*;
use ::clarabel::algebra as cl;
use ::clarabel::io::ConfigurablePrintTarget as _;
use ::clarabel::solver::{
    DefaultSettingsBuilder, DefaultSolver, IPSolver, SolverStatus, SupportedConeT,
};

/// Adapter for the interior point solver of the `clarabel` crate
pub type ClarabelAdapter<T> = Adapter<T, ClarabelEngine<T>>;

/// [`Engine`] driving a `clarabel` [`DefaultSolver`]
///
/// The problem maps onto Clarabel's standard form directly: equality blocks
/// become zero cones and inequality blocks nonnegative cones, so `y` is
/// Clarabel's `z` without any sign change.
///
/// In verbose mode the solver log is captured in a buffer and handed to the
/// adapter through [`Engine::take_log`].
pub struct ClarabelEngine<T>
where
    T: FloatT + cl::FloatT,
{
    solver: Option<DefaultSolver<T>>,
    info: EngineInfo,
    log: Option<String>,
}

impl<T> ClarabelEngine<T>
where
    T: FloatT + cl::FloatT,
{
    pub fn new() -> Self {
        Self {
            solver: None,
            info: EngineInfo::default(),
            log: None,
        }
    }
}

impl<T> Default for ClarabelEngine<T>
where
    T: FloatT + cl::FloatT,
{
    fn default() -> Self {
        Self::new()
    }
}

fn to_clarabel_csc<T>(M: &CscMatrix<T>) -> cl::CscMatrix<T>
where
    T: FloatT + cl::FloatT,
{
    cl::CscMatrix {
        m: M.m,
        n: M.n,
        colptr: M.colptr.clone(),
        rowval: M.rowval.clone(),
        nzval: M.nzval.clone(),
    }
}

fn to_clarabel_cones<T>(constraints: &[ConstraintBlock]) -> Vec<SupportedConeT<T>>
where
    T: FloatT + cl::FloatT,
{
    constraints
        .iter()
        .filter(|c| c.nvars() > 0)
        .map(|c| match *c {
            ConstraintBlock::Equality(k) => SupportedConeT::ZeroConeT(k),
            ConstraintBlock::Inequality(k) => SupportedConeT::NonnegativeConeT(k),
        })
        .collect()
}

impl<T> Engine<T> for ClarabelEngine<T>
where
    T: FloatT + cl::FloatT,
{
    type Map = ClarabelStatusMap;

    fn solve(&mut self, problem: &QpProblem<T>, verbose: bool) -> Result<T, EngineError> {
        self.solver = None;
        self.info = EngineInfo::default();
        self.log = None;

        let mut timers = Timers::default();

        let P = to_clarabel_csc(problem.P());
        let A = to_clarabel_csc(problem.A());
        let cones = to_clarabel_cones(problem.constraints());

        let settings = DefaultSettingsBuilder::<T>::default()
            .verbose(verbose)
            .build()
            .map_err(|e| EngineError::SolverFailure(e.to_string()))?;

        let solver;
        timeit! {timers => "setup"; {
            solver = DefaultSolver::new(&P, problem.q(), &A, problem.b(), &cones, settings);
        }}
        let mut solver = solver.map_err(|e| EngineError::BadProblem(e.to_string()))?;
        if verbose {
            solver.print_to_buffer();
        }

        timeit! {timers => "solve"; {
            solver.solve();
        }}

        if verbose {
            self.log = solver.get_print_buffer().ok();
        }

        self.info = EngineInfo {
            setup_time: Some(timers.elapsed("setup").as_secs_f64()),
            solve_time: Some(timers.elapsed("solve").as_secs_f64()),
            iterations: Some(solver.solution.iterations),
        };
        let obj_val = solver.solution.obj_val;
        self.solver = Some(solver);

        Ok(obj_val)
    }

    fn status(&self) -> &SolverStatus {
        match self.solver {
            Some(ref solver) => &solver.solution.status,
            None => &SolverStatus::Unsolved,
        }
    }

    fn info(&self) -> EngineInfo {
        self.info
    }

    fn take_log(&mut self) -> Option<String> {
        self.log.take()
    }

    fn revert(&self, _problem: &QpProblem<T>) -> CandidateSolution<T> {
        match self.solver {
            Some(ref solver) => CandidateSolution {
                x: Some(solver.solution.x.clone()),
                y: Some(solver.solution.z.clone()),
            },
            None => CandidateSolution::default(),
        }
    }
}

impl<T> Adapter<T, ClarabelEngine<T>>
where
    T: FloatT + cl::FloatT,
{
    pub const NAME: &'static str = "CLARABEL";

    pub fn with_settings(settings: BenchSettings) -> Self {
        Adapter::new(Self::NAME, ClarabelEngine::new(), settings)
    }
}

#[test]
fn test_cone_conversion() {
    let cones = to_clarabel_cones::<f64>(&[
        ConstraintBlock::Equality(2),
        ConstraintBlock::Inequality(0),
        ConstraintBlock::Inequality(3),
    ]);
    assert_eq!(cones.len(), 2);
    assert!(matches!(cones[0], SupportedConeT::ZeroConeT(2)));
    assert!(matches!(cones[1], SupportedConeT::NonnegativeConeT(3)));
}
