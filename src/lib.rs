//! Conway's Game of Life on an unbounded integer plane.
//!
//! The live population is a sparse set of [`Coordinate`]s owned by a
//! [`World`]. Each [`World::tick`] evaluates only live cells and their
//! neighbors, counting against a frozen snapshot of the previous generation.

// Domain layer - coordinates, rule, generation engine
pub mod domain;

// Application layer - simulation driver and its configuration
pub mod application;

// Boundary - seed parsing and random soups
pub mod input;

pub use application::{RunSummary, Simulation, SimulationConfig, StopReason};
pub use domain::{
    Cell, Coordinate, Pattern, Strategy, World, live_neighbor_count, neighbors_of, presets,
};
pub use input::SeedError;
