use super::{Cell, Coordinate, Strategy, live_neighbor_count, neighbors_of};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// World owns the set of live coordinates on the unbounded plane.
/// Generations are computed from an immutable snapshot and installed whole.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct World {
    live: FxHashSet<Coordinate>,
}

impl World {
    /// Create a world whose live set is exactly `seed`, deduplicated
    pub fn new(seed: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            live: seed.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Read-only snapshot of the live set
    pub fn live_cells(&self) -> &FxHashSet<Coordinate> {
        &self.live
    }

    pub fn is_alive(&self, c: Coordinate) -> bool {
        self.live.contains(&c)
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Mark `c` live. For seeding only; generations never go through here.
    /// Returns false if it was already live.
    pub fn insert(&mut self, c: Coordinate) -> bool {
        self.live.insert(c)
    }

    /// Inclusive (min, max) corners of the live population
    pub fn bounding_box(&self) -> Option<(Coordinate, Coordinate)> {
        let mut cells = self.live.iter();
        let first = *cells.next()?;
        Some(cells.fold((first, first), |(min, max), c| {
            (
                Coordinate::new(min.x.min(c.x), min.y.min(c.y)),
                Coordinate::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }

    /// Every coordinate that can be live next generation: the live cells plus
    /// their neighbors. Anything else has no live neighbor and stays dead.
    pub fn candidates(&self) -> FxHashSet<Coordinate> {
        let mut candidates = FxHashSet::default();
        candidates.reserve(self.live.len() * 9);
        for &c in &self.live {
            candidates.insert(c);
            candidates.extend(neighbors_of(c));
        }
        candidates
    }

    /// Decide one candidate against this (pre-transition) snapshot
    fn survives(&self, c: Coordinate) -> bool {
        let current = Cell::from_alive(self.live.contains(&c));
        current.evolve(live_neighbor_count(&self.live, c)).is_alive()
    }

    /// Pure transition: the next generation as a new world. `self` is the
    /// snapshot every count is taken against and is left untouched.
    pub fn next_generation(&self, strategy: Strategy) -> World {
        let candidates = self.candidates();
        tracing::trace!(
            population = self.live.len(),
            candidates = candidates.len(),
            strategy = strategy.name(),
            "evaluating generation"
        );

        let live = match strategy {
            Strategy::Serial => candidates
                .into_iter()
                .filter(|&c| self.survives(c))
                .collect(),
            Strategy::Parallel => candidates
                .into_par_iter()
                .filter(|&c| self.survives(c))
                .collect(),
        };

        World { live }
    }

    /// Advance one generation in place (serial)
    pub fn tick(&mut self) {
        self.tick_with(Strategy::Serial);
    }

    /// Advance one generation in place with the given strategy. The live
    /// set is replaced only once every candidate has been decided.
    pub fn tick_with(&mut self, strategy: Strategy) {
        *self = self.next_generation(strategy);
    }
}

impl FromIterator<Coordinate> for World {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<Coordinate> for World {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.live.extend(iter);
    }
}
