//! Strategy enum for selecting how candidates are evaluated.
//!
//! Both strategies read the same frozen snapshot and produce identical
//! generations; they differ only in how the work is scheduled.

/// How a generation's candidates are evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One candidate after another on the calling thread
    #[default]
    Serial,
    /// Candidates spread over the rayon global pool
    Parallel,
}

impl Strategy {
    /// Get all available strategies
    pub fn all() -> Vec<Strategy> {
        vec![Strategy::Serial, Strategy::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Serial => "Hash-set lookups, single thread",
            Strategy::Parallel => "Hash-set lookups, rayon work stealing",
        }
    }
}
