use super::Status;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Normalized outcome of one adapter invocation.
///
/// Either the engine completed (objective and timing populated, `x` and `y`
/// present whenever the status is neither [`Status::SolverError`] nor
/// [`Status::TimeLimit`]) or it failed and every field other than `status`
/// is `None`.  An exceeded time limit overrides every other outcome, so a
/// `TimeLimit` record may carry no solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Results<T = f64> {
    status: Status,
    obj_val: Option<T>,
    x: Option<Vec<T>>,
    y: Option<Vec<T>>,
    run_time: Option<f64>,
    niter: Option<u32>,
}

impl<T> Results<T> {
    pub(crate) fn new(
        status: Status,
        obj_val: Option<T>,
        x: Option<Vec<T>>,
        y: Option<Vec<T>>,
        run_time: Option<f64>,
        niter: Option<u32>,
    ) -> Self {
        Self {
            status,
            obj_val,
            x,
            y,
            run_time,
            niter,
        }
    }

    /// record for an engine call that raised or panicked
    pub(crate) fn solver_error() -> Self {
        Self::new(Status::SolverError, None, None, None, None, None)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// primal solution
    pub fn x(&self) -> Option<&[T]> {
        self.x.as_deref()
    }

    /// dual solution, one entry per constraint row
    pub fn y(&self) -> Option<&[T]> {
        self.y.as_deref()
    }

    /// seconds
    pub fn run_time(&self) -> Option<f64> {
        self.run_time
    }

    pub fn niter(&self) -> Option<u32> {
        self.niter
    }
}

impl<T: Copy> Results<T> {
    /// objective value reported by the engine
    pub fn obj_val(&self) -> Option<T> {
        self.obj_val
    }
}
