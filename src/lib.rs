//! __qpbench__ is an adapter layer for benchmarking convex quadratic program
//! (QP) solvers.  Every solver is wrapped behind one contract so that a
//! benchmark harness can run them interchangeably and compare their results
//! fairly.  Problems are posed in the form
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & \frac{1}{2}x^T P x + q^T x\\\\\[2ex\]
//!  \text{subject to} & Ax + s = b \\\\\[1ex\]
//!         & s \in \mathcal{K}
//!  \end{array}
//! $$
//!
//! where $\mathcal{K}$ is a product of zero cones (equality rows) and
//! nonnegative cones (inequality rows).
//!
//! For every solve an adapter
//!
//! * maps the solver's native status onto a canonical [`Status`](bench::Status),
//! * re-verifies any returned solution against the KKT conditions of the
//!   original problem, without trusting the solver's own report,
//! * enforces a caller supplied time limit, and
//! * packages the outcome into an immutable [`Results`](bench::Results) record.
//!
//! ```no_run
//! # #![allow(non_snake_case)]
//! use qpbench::algebra::CscMatrix;
//! use qpbench::bench::*;
//!
//! // minimize x² subject to x ≥ 1
//! let problem = QpProblem::new(
//!     CscMatrix::from_dense(1, 1, &[2.]),
//!     vec![0.],
//!     CscMatrix::from_dense(1, 1, &[-1.]),
//!     vec![-1.],
//!     vec![ConstraintBlock::Inequality(1)],
//! )
//! .unwrap();
//!
//! let mut solver = ClarabelAdapter::with_settings(BenchSettings::default());
//! let results = solver.solve(&problem);
//! assert_eq!(results.status(), Status::Optimal);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod bench;
pub mod io;
pub mod timers;
