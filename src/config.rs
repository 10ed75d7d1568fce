use crate::Topology;

/// Parameters of a simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Length of the sequence produced by [`crate::Simulator::run`].
    pub generations: usize,
    pub topology: Topology,
    /// Largest height or width a grid may grow to under [`Topology::AutoGrow`].
    pub max_side: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generations: Self::DEFAULT_GENERATIONS,
            topology: Topology::default(),
            max_side: Self::MAX_SIDE,
        }
    }
}

impl Config {
    pub const DEFAULT_GENERATIONS: usize = 100;
    pub const MAX_SIDE: usize = 1 << 16;

    pub fn with_generations(self, generations: usize) -> Self {
        Self {
            generations,
            ..self
        }
    }

    pub fn with_topology(self, topology: Topology) -> Self {
        Self { topology, ..self }
    }

    pub fn with_max_side(self, max_side: usize) -> Self {
        Self { max_side, ..self }
    }
}
