mod config;
mod simulation;

pub use config::SimulationConfig;
pub use simulation::{RunSummary, Simulation, StopReason};
