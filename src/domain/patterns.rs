use super::{Coordinate, World};

/// A named seed shape. Cells are offsets from the pattern's top-left corner,
/// with y growing downward as the tables below are written.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<Coordinate>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: &[(i64, i64)]) -> Self {
        let cells = cells.iter().copied().map(Coordinate::from).collect();
        Self { name, description, cells }
    }

    pub fn width(&self) -> i64 {
        self.cells.iter().map(|c| c.x).max().map_or(0, |x| x + 1)
    }

    pub fn height(&self) -> i64 {
        self.cells.iter().map(|c| c.y).max().map_or(0, |y| y + 1)
    }

    /// The pattern's live cells translated so its corner sits at `origin`
    pub fn at(&self, origin: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().map(move |&c| origin + c)
    }

    /// A fresh world holding only this pattern, anchored at the origin
    pub fn world(&self) -> World {
        self.at(Coordinate::ORIGIN).collect()
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::Pattern;

    /// 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", &[(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    pub fn beehive() -> Pattern {
        Pattern::new(
            "Beehive",
            "Still life",
            &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", &[(0, 1), (1, 1), (2, 1)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
        )
    }

    /// Period 3, the largest of the common oscillators
    pub fn pulsar() -> Pattern {
        // One quadrant, mirrored across both axes of the 13x13 box
        let quadrant = [
            (2, 0), (3, 0), (4, 0),
            (0, 2), (5, 2),
            (0, 3), (5, 3),
            (0, 4), (5, 4),
            (2, 5), (3, 5), (4, 5),
        ];
        let cells: Vec<(i64, i64)> = quadrant
            .iter()
            .flat_map(|&(x, y)| [(x, y), (12 - x, y), (x, 12 - y), (12 - x, 12 - y)])
            .collect();
        Pattern::new("Pulsar", "Oscillator (period 3)", &cells)
    }

    /// Moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        )
    }

    /// Lightweight spaceship
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight spaceship (period 4)",
            &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
        )
    }

    /// Stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah, stabilizes at gen 1103",
            &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
        )
    }

    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah, stabilizes at gen 5206",
            &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
        )
    }

    /// Gosper glider gun, emits a glider every 30 generations
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Gun (period 30)",
            &[
                (0, 4), (0, 5), (1, 4), (1, 5),
                (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
                (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
                (16, 6), (17, 5),
                (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1),
                (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
                (34, 2), (34, 3), (35, 2), (35, 3),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            beehive(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            glider(),
            lwss(),
            r_pentomino(),
            acorn(),
            glider_gun(),
        ]
    }

    /// Case-insensitive lookup by display name
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let glider = presets::glider();
        assert_eq!((glider.width(), glider.height()), (3, 3));
        let pulsar = presets::pulsar();
        assert_eq!((pulsar.width(), pulsar.height()), (13, 13));
        assert_eq!(pulsar.world().population(), 48);
    }

    #[test]
    fn test_at_translates() {
        let cells: Vec<_> = presets::blinker().at(Coordinate::new(-10, 5)).collect();
        assert_eq!(
            cells,
            vec![Coordinate::new(-10, 6), Coordinate::new(-9, 6), Coordinate::new(-8, 6)]
        );
    }

    #[test]
    fn test_no_duplicate_cells() {
        for pattern in presets::all_patterns() {
            assert_eq!(pattern.world().population(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("lwss").map(|p| p.name), Some("LWSS"));
        assert!(presets::by_name("unknown").is_none());
    }
}
