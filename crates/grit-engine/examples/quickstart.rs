//! Grit quickstart — a complete, minimal simulation from scratch.
//!
//! Demonstrates:
//!   1. Building a `SimConfig` (stock rules, custom grid size)
//!   2. Painting materials with the circular brush
//!   3. Stepping with an injected, seeded RNG
//!   4. Reading cells back for display
//!
//! Run with:
//!   cargo run --example quickstart

use grit_core::Material;
use grit_engine::{Engine, SimConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const ROWS: usize = 16;
const COLS: usize = 40;
const TICKS: usize = 60;

fn render(engine: &Engine) -> String {
    let mut out = String::with_capacity((COLS + 1) * ROWS);
    for row in 0..ROWS {
        for col in 0..COLS {
            out.push(match engine.cell_at(row, col).material {
                Material::Empty => ' ',
                Material::Sand => '~',
                Material::Water => 'o',
                Material::Rock => '#',
                Material::Fire => '*',
            });
        }
        out.push('\n');
    }
    out
}

fn main() {
    let mut engine = Engine::new(SimConfig::standard(ROWS, COLS)).expect("valid config");

    // A rock shelf, a heap of sand above it, a pool of water to the
    // side, and a flame underneath the shelf's edge.
    for col in 8..28 {
        engine.paint(11.0, col as f64, 0.5, Material::Rock);
    }
    engine.paint(2.0, 14.0, 3.0, Material::Sand);
    engine.paint(4.0, 32.0, 2.5, Material::Water);
    engine.paint(13.0, 26.0, 1.0, Material::Fire);

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..TICKS {
        engine.step(&mut rng);
    }

    println!("{}", render(&engine));
    let census = engine.census();
    let metrics = engine.last_metrics();
    println!(
        "tick {}: {} sand, {} water, {} rock, {} fire ({} claims, {} us)",
        engine.current_tick(),
        census.count(Material::Sand),
        census.count(Material::Water),
        census.count(Material::Rock),
        census.count(Material::Fire),
        metrics.cells_claimed,
        metrics.total_us,
    );
}
