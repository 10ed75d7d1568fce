#![warn(clippy::all, clippy::cargo)]

mod config;
mod error;
mod grid;
pub mod loader;
mod neighbors;
pub mod patterns;
pub mod plaintext;
mod simulator;
pub mod step;
mod topology;

pub use config::Config;
pub use error::{Error, Result, SimulationError};
pub use grid::{Cell, Grid};
pub use neighbors::{count_live_neighbors, MOORE_NEIGHBORHOOD};
pub use simulator::{simulate, Simulator};
pub use step::{step, step_with_growth};
pub use topology::Topology;
