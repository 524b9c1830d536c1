use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::Coordinate;

/// Random fill of the `width` x `height` rectangle anchored at the origin.
/// Each cell is live with probability `density`, clamped to [0, 1].
pub fn random_soup<R: Rng>(
    rng: &mut R,
    width: u32,
    height: u32,
    density: f64,
) -> Vec<Coordinate> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    (0..height)
        .flat_map(|y| (0..width).map(move |x| Coordinate::new(x.into(), y.into())))
        .filter(|_| rng.random_bool(density))
        .collect()
}

/// Reproducible soup from a fixed seed
pub fn random_soup_seeded(seed: u64, width: u32, height: u32, density: f64) -> Vec<Coordinate> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_soup(&mut rng, width, height, density)
}
