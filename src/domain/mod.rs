mod cell;
mod coord;
mod patterns;
mod strategy;
mod world;

pub use cell::Cell;
pub use coord::{Coordinate, NEIGHBOR_OFFSETS, live_neighbor_count, neighbors_of};
pub use patterns::{Pattern, presets};
pub use strategy::Strategy;
pub use world::World;
