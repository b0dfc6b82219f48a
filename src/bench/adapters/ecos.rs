use crate::algebra::FloatT;
use crate::bench::*;

/// Boxed ECOS engine supplied by the harness.
///
/// ECOS is reached through a modelling layer that reports cvxpy-style
/// status strings, translated by [`EcosStatusMap`].
pub type EcosEngine<T> = Box<dyn Engine<T, Map = EcosStatusMap> + Send>;

/// Adapter for ECOS
pub type EcosAdapter<T> = Adapter<T, EcosEngine<T>>;

impl<T> Adapter<T, EcosEngine<T>>
where
    T: FloatT,
{
    pub const NAME: &'static str = "ECOS";

    pub fn with_engine(engine: EcosEngine<T>, settings: BenchSettings) -> Self {
        Adapter::new(Self::NAME, engine, settings)
    }
}
