use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::domain::World;

use super::SimulationConfig;

/// Why [`Simulation::run`] stopped before the requested number of steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// No live cells remain
    Extinct,
    /// The last generation equals the one before it
    Stable,
}

/// Result of a [`Simulation::run`] call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u64,
    pub stopped: Option<StopReason>,
}

/// Simulation drives a world generation by generation.
/// Keeps a bounded history of earlier snapshots so it can rewind.
#[derive(Debug)]
pub struct Simulation {
    world: World,
    config: SimulationConfig,
    generation: u64,
    history: VecDeque<World>,
    last_step_duration: Duration,
}

impl Simulation {
    pub fn new(world: World, config: SimulationConfig) -> Self {
        Self {
            world,
            config,
            generation: 0,
            history: VecDeque::new(),
            last_step_duration: Duration::ZERO,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Snapshots currently available to [`rewind`](Self::rewind)
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Wall time spent computing the most recent generation
    pub fn last_step_duration(&self) -> Duration {
        self.last_step_duration
    }

    /// Advance one generation. Returns true if the new generation differs
    /// from the previous one.
    pub fn step(&mut self) -> bool {
        let strategy = self.config.strategy_for(self.world.population());

        let start = Instant::now();
        let next = self.world.next_generation(strategy);
        self.last_step_duration = start.elapsed();

        let changed = next != self.world;
        let previous = std::mem::replace(&mut self.world, next);
        self.remember(previous);
        self.generation += 1;

        tracing::debug!(
            generation = self.generation,
            population = self.world.population(),
            strategy = strategy.name(),
            elapsed_us = self.last_step_duration.as_micros() as u64,
            "generation computed"
        );
        changed
    }

    fn remember(&mut self, snapshot: World) {
        if self.config.history_limit == 0 {
            return;
        }
        if self.history.len() == self.config.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(snapshot);
    }

    /// Step up to `steps` times, stopping early on extinction or a still
    /// life.
    pub fn run(&mut self, steps: u64) -> RunSummary {
        let mut taken = 0;
        while taken < steps {
            if self.world.is_empty() {
                return self.stop(taken, StopReason::Extinct);
            }
            let changed = self.step();
            taken += 1;
            if self.world.is_empty() {
                return self.stop(taken, StopReason::Extinct);
            }
            if !changed {
                return self.stop(taken, StopReason::Stable);
            }
        }
        RunSummary { steps: taken, stopped: None }
    }

    fn stop(&self, steps: u64, reason: StopReason) -> RunSummary {
        tracing::info!(generation = self.generation, ?reason, "simulation stopped early");
        RunSummary {
            steps,
            stopped: Some(reason),
        }
    }

    /// Restore the previous generation. Returns false if no snapshot is kept.
    pub fn rewind(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.world = previous;
                self.generation -= 1;
                true
            }
            None => false,
        }
    }

    /// Replace the world and start counting from generation 0 again
    pub fn reset(&mut self, world: World) {
        self.world = world;
        self.generation = 0;
        self.history.clear();
    }
}
