use super::*;
use crate::algebra::FloatT;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::timers::*;
use enum_dispatch::*;
use std::any::Any;
use std::fs::File;
use std::io::Write;
use std::marker::PhantomData;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Uniform interface over every benchmarked solver.
///
/// `solve` never panics and never returns an error: every failure of the
/// underlying engine is reported through the returned [`Results`].
///
/// An engine panic is caught, but the process panic hook still runs, so
/// the default hook prints the panic message to stderr whether or not the
/// adapter is verbose.  Harnesses that need a silent stderr should install
/// their own hook with [`std::panic::set_hook`].
#[enum_dispatch]
pub trait BenchSolver<T>
where
    T: FloatT,
{
    /// short upper-case solver name, e.g. `"CLARABEL"`
    fn name(&self) -> &'static str;

    fn settings(&self) -> &BenchSettings;

    /// Solve `problem`, validate the claimed solution and package the outcome.
    fn solve(&mut self, problem: &QpProblem<T>) -> Results<T>;
}

/// Generic adapter wrapping a solver [`Engine`].
///
/// A single invocation of [`solve`](BenchSolver::solve) moves through
/// `invoked -> solved | errored -> validated -> finalized`.
pub struct Adapter<T, E> {
    name: &'static str,
    engine: E,
    settings: BenchSettings,
    stream: PrintTarget,
    phantom: PhantomData<T>,
}

impl<T, E> Adapter<T, E>
where
    T: FloatT,
    E: Engine<T>,
{
    pub fn new(name: &'static str, engine: E, settings: BenchSettings) -> Self {
        Self {
            name,
            engine,
            settings,
            stream: PrintTarget::default(),
            phantom: PhantomData,
        }
    }

    // diagnostics are best effort.  A failed write is ignored.
    fn report(&mut self, args: std::fmt::Arguments) {
        if self.settings.is_verbose() {
            let _ = self.stream.write_fmt(args);
            let _ = self.stream.write_all(b"\n");
        }
    }
}

impl<T, E> BenchSolver<T> for Adapter<T, E>
where
    T: FloatT,
    E: Engine<T>,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn settings(&self) -> &BenchSettings {
        &self.settings
    }

    fn solve(&mut self, problem: &QpProblem<T>) -> Results<T> {
        let name = self.name;
        let verbose = self.settings.is_verbose();
        let mut timers = Timers::default();

        // invoked
        let outcome;
        timeit! {timers => "solve"; {
            outcome = catch_unwind(AssertUnwindSafe(|| self.engine.solve(problem, verbose)));
        }}

        if verbose {
            let log = catch_unwind(AssertUnwindSafe(|| self.engine.take_log()));
            if let Ok(Some(log)) = log {
                let _ = self.stream.write_all(log.as_bytes());
            }
        }

        // errored
        let obj_val = match outcome {
            Ok(Ok(obj_val)) => obj_val,
            Ok(Err(e)) => {
                self.report(format_args!("Error in {} solution: {}", name, e));
                return Results::solver_error();
            }
            Err(payload) => {
                let e = EngineError::Panicked(panic_message(payload.as_ref()));
                self.report(format_args!("Error in {} solution: {}", name, e));
                return Results::solver_error();
            }
        };

        // solved
        let mut status = <E::Map as StatusMap>::map(self.engine.status());
        let info = self.engine.info();
        let run_time = info
            .run_time()
            .unwrap_or_else(|| timers.elapsed("solve").as_secs_f64());

        let solution;
        timeit! {timers => "revert"; {
            solution = catch_unwind(AssertUnwindSafe(|| self.engine.revert(problem)))
                .unwrap_or_default();
        }}
        let CandidateSolution { x, y } = solution;

        // validated
        let needs_validation = match self.settings.validation_policy {
            ValidationPolicy::Always => true,
            ValidationPolicy::SolutionPresent => status.is_optimal(),
        };
        if needs_validation {
            let tier = self.settings.precision_tier();
            let check;
            timeit! {timers => "validate"; {
                check = check_optimality(problem, x.as_deref(), y.as_deref(), tier);
            }}
            if let Err(failure) = check {
                status = Status::SolverError;
                self.report(format_args!(
                    "Solution from {} failed validation: {}",
                    name, failure
                ));
            }
        }

        // a record without a solution carries an error status
        if x.is_none() || y.is_none() {
            status = Status::SolverError;
        }

        // finalized.  The time limit overrides everything else, including
        // a missing solution.
        if self.settings.time_limit_exceeded(run_time) {
            status = Status::TimeLimit;
        }

        if verbose {
            let _ = timers.print(&mut self.stream);
        }

        Results::new(
            status,
            Some(obj_val),
            x,
            y,
            Some(run_time),
            info.iterations,
        )
    }
}

impl<T, E> ConfigurablePrintTarget for Adapter<T, E> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }

    fn print_to_file(&mut self, file: File) {
        self.stream.print_to_file(file)
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }

    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }

    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }

    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
