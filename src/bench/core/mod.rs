// package together the solver-independent pieces and re-export
// in a flattened structure :
// : status taxonomy and per-engine status tables
// : problem data and candidate solution validation
// : settings and result records
// : engine boundary and the generic adapter

mod adapter;
mod engine;
mod problem;
mod results;
mod settings;
mod status;
mod statusmap;
mod validation;

pub use adapter::*;
pub use engine::*;
pub use problem::*;
pub use results::*;
pub use settings::*;
pub use status::*;
pub use statusmap::*;
pub use validation::*;
