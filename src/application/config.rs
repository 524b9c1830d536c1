use crate::domain::Strategy;

/// Tunables for a [`Simulation`](super::Simulation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Strategy used below the parallel threshold
    pub strategy: Strategy,
    /// Population at which evaluation switches to `Strategy::Parallel`.
    /// `None` always uses `strategy`.
    pub parallel_threshold: Option<usize>,
    /// Snapshots kept for rewind; 0 disables history
    pub history_limit: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Serial,
            parallel_threshold: Some(4096),
            history_limit: 64,
        }
    }
}

impl SimulationConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: Option<usize>) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Strategy to use for a generation of the given population
    pub fn strategy_for(&self, population: usize) -> Strategy {
        match self.parallel_threshold {
            Some(threshold) if population >= threshold => Strategy::Parallel,
            _ => self.strategy,
        }
    }
}
