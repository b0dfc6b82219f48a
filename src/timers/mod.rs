//! Wall-clock timing for adapter invocations.

#[allow(clippy::module_inception)]
mod timers;
pub use timers::*;
pub(crate) use timers::timeit;
