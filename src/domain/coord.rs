//! Coordinates on the unbounded plane and Moore-neighborhood adjacency.
//!
//! Adjacency is pure arithmetic on coordinate values. Whether a neighbor is
//! alive is a hash-set membership query, never a scan of the population.

use std::collections::HashSet;
use std::fmt;
use std::hash::BuildHasher;
use std::ops::{Add, Sub};

/// Offsets of the Moore neighborhood: N, NE, E, SE, S, SW, W, NW.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// A cell position on the plane. Two coordinates are the same cell iff both
/// components match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Largest per-axis distance to `other`
    pub fn chebyshev_distance(self, other: Coordinate) -> u64 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }

    /// True if `other` is one of the 8 Moore neighbors (a coordinate is not
    /// adjacent to itself)
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.chebyshev_distance(other) == 1
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

// Wrapping so that neighbors of cells at the i64 edge stay total.
impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

/// The 8 Moore-neighborhood coordinates of `c`. Callers must not depend on
/// the order.
///
/// Components wrap at the `i64` limits, so `(i64::MAX, y)` and `(i64::MIN, y)`
/// are neighbors.
pub fn neighbors_of(c: Coordinate) -> [Coordinate; 8] {
    NEIGHBOR_OFFSETS.map(|(dx, dy)| c + Coordinate::new(dx, dy))
}

/// How many of `c`'s neighbors are in `live`. One O(1) lookup per neighbor.
pub fn live_neighbor_count<S: BuildHasher>(live: &HashSet<Coordinate, S>, c: Coordinate) -> u8 {
    neighbors_of(c)
        .iter()
        .filter(|n| live.contains(*n))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn set(cells: &[(i64, i64)]) -> FxHashSet<Coordinate> {
        cells.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_neighbors_are_distinct_and_adjacent() {
        let c = Coordinate::new(3, -7);
        let neighbors = neighbors_of(c);
        let unique: FxHashSet<_> = neighbors.iter().copied().collect();

        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&c));
        for n in neighbors {
            assert_eq!(n.chebyshev_distance(c), 1);
            assert!(neighbors_of(n).contains(&c));
        }
    }

    #[test]
    fn test_each_direction_counts_once() {
        // Mirrors the eight single-neighbor cases: N, NE, E, SE, S, SW, W, NW
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let live = set(&[(0, 0), (dx, dy)]);
            assert_eq!(live_neighbor_count(&live, Coordinate::ORIGIN), 1, "offset ({dx},{dy})");
        }
    }

    #[test]
    fn test_count_ignores_self_and_distant_cells() {
        let live = set(&[(0, 0), (2, 0), (0, -2), (5, 5)]);
        assert_eq!(live_neighbor_count(&live, Coordinate::ORIGIN), 0);
    }

    #[test]
    fn test_count_full_neighborhood() {
        let live: FxHashSet<_> = neighbors_of(Coordinate::ORIGIN).into_iter().collect();
        assert_eq!(live_neighbor_count(&live, Coordinate::ORIGIN), 8);
    }

    #[test]
    fn test_count_dead_coordinate() {
        // A dead coordinate still has a well-defined count
        let live = set(&[(-1, 0), (0, 0), (1, 0)]);
        assert_eq!(live_neighbor_count(&live, Coordinate::new(0, 1)), 3);
        assert_eq!(live_neighbor_count(&live, Coordinate::new(0, 2)), 0);
    }

    #[test]
    fn test_neighbors_wrap_at_edges() {
        let corner = Coordinate::new(i64::MAX, i64::MIN);
        let neighbors = neighbors_of(corner);
        let unique: FxHashSet<_> = neighbors.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        assert!(neighbors.contains(&Coordinate::new(i64::MIN, i64::MIN)));
        assert!(neighbors.contains(&Coordinate::new(i64::MAX, i64::MAX)));
    }

    #[test]
    fn test_adjacency() {
        let c = Coordinate::new(10, 10);
        assert!(c.is_adjacent(Coordinate::new(11, 9)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coordinate::new(12, 10)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(-4, 17).to_string(), "-4,17");
    }
}
