//! Concrete solver adapters.

use crate::algebra::FloatT;
use crate::bench::{BenchSettings, BenchSolver, QpProblem, Results};
use enum_dispatch::*;

mod clarabel;
mod ecos;
pub use self::clarabel::*;
pub use self::ecos::*;

/// All supported adapters, dispatched statically through [`BenchSolver`]
#[enum_dispatch(BenchSolver<T>)]
pub enum SolverAdapter<T>
where
    T: FloatT + ::clarabel::algebra::FloatT,
{
    Clarabel(ClarabelAdapter<T>),
    Ecos(EcosAdapter<T>),
}
