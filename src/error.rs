use thiserror::Error;

/// All kinds of errors produced by the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Rows of the pattern have different lengths.
    #[error("Row {row} has {found} cells, expected {expected}.")]
    MalformedInput {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The pattern has no rows or no columns.
    #[error("Pattern has no rows or no columns.")]
    EmptyPattern,
    /// Fill rate of a random soup must be within `[0, 1]`.
    #[error("Fill rate {0} is outside of [0, 1].")]
    InvalidFillRate(f64),
    /// Growing the grid would exceed the configured side limit.
    #[error("Grid of {height}x{width} cells exceeds the side limit of {max_side}.")]
    GridTooLarge {
        height: usize,
        width: usize,
        max_side: usize,
    },
    #[error("Failed to read pattern: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a simulation run together with the index of the generation
/// that could not be produced.
#[derive(Debug, Error)]
#[error("Generation {generation} failed: {source}")]
pub struct SimulationError {
    pub generation: usize,
    #[source]
    pub source: Error,
}
