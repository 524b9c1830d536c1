//! Performance benchmark comparing serial and parallel generation steps

use std::time::Instant;

use sparse_life::input::random_soup_seeded;
use sparse_life::{Coordinate, Strategy, World, presets};
use tracing_subscriber::EnvFilter;

const SOUP_DENSITY: f64 = 0.35;

/// Average milliseconds per generation
fn benchmark(world: &World, strategy: Strategy, iterations: u32) -> f64 {
    let mut world = world.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        world.tick_with(strategy);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Sparse Life Benchmark ===\n");

    let sizes = [32, 64, 128, 256, 512, 1024];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Soup", "Population", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<60}", "");

    for size in sizes {
        let world = World::new(random_soup_seeded(u64::from(size), size, size, SOUP_DENSITY));
        let serial_ms = benchmark(&world, Strategy::Serial, iterations);
        let parallel_ms = benchmark(&world, Strategy::Parallel, iterations);

        println!(
            "{:>10} {:>12} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            world.population(),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Glider gun, 300 generations ===\n");

    let mut world: World = presets::glider_gun().at(Coordinate::ORIGIN).collect();
    let start = Instant::now();
    for _ in 0..300 {
        world.tick();
    }
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;
    println!("Final population: {}", world.population());
    println!("Total:            {:.2} ms ({:.3} ms/gen)", elapsed, elapsed / 300.0);
}
