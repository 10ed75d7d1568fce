use crate::{step, Config, Grid, SimulationError};
use tracing::{debug, info};

/// Produces sequences of generations with a fixed [`Config`].
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    config: Config,
}

impl Simulator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Computes `generation_count` generations, the first one being `start`.
    ///
    /// All generations are computed before returning. `generation_count == 0`
    /// yields an empty sequence, `1` yields `[start]` without any step.
    pub fn simulate(
        &self,
        start: Grid,
        generation_count: usize,
    ) -> Result<Vec<Grid>, SimulationError> {
        let mut generations = Vec::with_capacity(generation_count);
        if generation_count == 0 {
            return Ok(generations);
        }
        info!(
            "simulating {} generations from {}x{} grid ({:?})",
            generation_count,
            start.height(),
            start.width(),
            self.config.topology
        );

        generations.push(start);
        for generation in 1..generation_count {
            let next = step::advance(
                &generations[generation - 1],
                self.config.topology,
                self.config.max_side,
            )
            .map_err(|source| SimulationError { generation, source })?;
            debug!(
                "generation {}: {}x{}, population {}",
                generation,
                next.height(),
                next.width(),
                next.population()
            );
            generations.push(next);
        }
        Ok(generations)
    }

    /// [`Self::simulate`] with the configured number of generations.
    pub fn run(&self, start: Grid) -> Result<Vec<Grid>, SimulationError> {
        self.simulate(start, self.config.generations)
    }

    /// Smallest `p` in `1..=max_generations` such that generation `p` equals
    /// `start`, or `None` if there is no such `p`.
    ///
    /// Grids of different dimensions are never equal, so a pattern that made
    /// the grid grow is not reported as periodic.
    pub fn period(
        &self,
        start: &Grid,
        max_generations: usize,
    ) -> Result<Option<usize>, SimulationError> {
        let mut current = start.clone();
        for generation in 1..=max_generations {
            current = step::advance(&current, self.config.topology, self.config.max_side)
                .map_err(|source| SimulationError { generation, source })?;
            if current == *start {
                return Ok(Some(generation));
            }
        }
        Ok(None)
    }
}

/// Runs [`Simulator::simulate`] with the default [`Config`].
pub fn simulate(start: Grid, generation_count: usize) -> Result<Vec<Grid>, SimulationError> {
    Simulator::default().simulate(start, generation_count)
}
