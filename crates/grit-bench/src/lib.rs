//! Benchmark profiles and utilities for the Grit falling-sand engine.
//!
//! Provides pre-built scenes for benchmarking and examples:
//!
//! - [`reference_scene`]: 100x100 grid (10K cells), all four materials
//!   active
//! - [`stress_scene`]: 316x316 grid (~100K cells) for stress testing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use grit_core::Material;
use grit_engine::{Engine, SimConfig};

/// Build a reference benchmark scene: 100x100 grid (10K cells).
///
/// A rock shelf across the middle, a large sand heap and water pool
/// above it, and a row of flames below — enough contested movement to
/// exercise every rule each tick.
pub fn reference_scene() -> Engine {
    scene(100, 100)
}

/// Build a stress scene: 316x316 grid (~100K cells).
pub fn stress_scene() -> Engine {
    scene(316, 316)
}

fn scene(rows: usize, cols: usize) -> Engine {
    let mut engine = Engine::new(SimConfig::standard(rows, cols)).expect("valid bench config");
    let shelf_row = (rows / 2) as f64;
    for col in (cols / 8)..(cols - cols / 8) {
        engine.paint(shelf_row, col as f64, 0.5, Material::Rock);
    }
    engine.paint(
        rows as f64 * 0.15,
        cols as f64 * 0.35,
        rows as f64 * 0.1,
        Material::Sand,
    );
    engine.paint(
        rows as f64 * 0.2,
        cols as f64 * 0.7,
        rows as f64 * 0.08,
        Material::Water,
    );
    for col in (cols / 3)..(2 * cols / 3) {
        engine.paint(shelf_row + 2.0, col as f64, 0.5, Material::Fire);
    }
    engine
}
