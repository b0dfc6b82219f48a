//! Benchmark adapters for convex QP solvers.
//!
//! Each solver is wrapped in an [`Adapter`] that maps its native status onto
//! [`Status`], re-verifies any claimed solution with
//! [`is_qp_solution_optimal`] and enforces the configured time limit.
//! Adapters are used through the [`BenchSolver`] trait, or collected in a
//! [`SolverAdapter`] enum.

pub mod core;
pub mod adapters;

//partially flatten top level pieces
pub use self::core::*;
pub use self::adapters::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        mod json;
        pub use json::*;
    }
}
