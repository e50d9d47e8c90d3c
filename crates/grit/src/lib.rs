//! Grit: a falling-sand cellular automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Grit sub-crates. For most users, adding `grit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use grit::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // A 32×32 world with the stock material rules.
//! let mut engine = Engine::new(SimConfig::standard(32, 32)).unwrap();
//!
//! // Drop a heap of sand and advance one tick with a seeded RNG.
//! engine.paint(4.0, 16.0, 3.0, Material::Sand);
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let metrics = engine.step(&mut rng);
//!
//! assert_eq!(engine.current_tick(), TickId(1));
//! assert!(metrics.cells_claimed > 0, "the heap is falling");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `grit-core` | `Material`, `Cell`, temperature constants, `TickId` |
//! | [`space`] | `grit-space` | `Direction`, `NeighborTopology`, sentinel |
//! | [`grid`] | `grit-grid` | Double-buffered `Grid`, `MaterialCensus` |
//! | [`rules`] | `grit-rules` | The `Rule` trait, `RuleContext`, material rules |
//! | [`engine`] | `grit-engine` | `Engine`, `SimConfig`, `StepMetrics` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`grit-core`).
///
/// Contains [`types::Material`], [`types::Cell`], the temperature
/// domain constants, and [`types::TickId`].
pub use grit_core as types;

/// Neighbor topology (`grit-space`).
///
/// The precomputed Moore-neighborhood table
/// ([`space::NeighborTopology`]) and the fixed [`space::Direction`]
/// ordering.
pub use grit_space as space;

/// Double-buffered cell storage (`grit-grid`).
///
/// [`grid::Grid`] with its tick lifecycle (`step_begin` → rule writes
/// → `commit`) and the out-of-tick [`grid::Grid::paint`] brush.
pub use grit_grid as grid;

/// Material transition rules (`grit-rules`).
///
/// The [`rules::Rule`] trait is the extension point for new
/// materials; [`rules::standard_rules`] builds the stock set.
pub use grit_rules as rules;

/// The tick engine (`grit-engine`).
///
/// [`engine::Engine`] sweeps the grid once per step, bottom row to
/// top, guaranteeing at most one write per cell per tick.
pub use grit_engine as engine;

/// Common imports for typical Grit usage.
///
/// ```rust
/// use grit::prelude::*;
/// ```
pub mod prelude {
    pub use grit_core::{Cell, Material, TickId, AMBIENT_TEMPERATURE, MAX_TEMPERATURE};
    pub use grit_engine::{ConfigError, Engine, SimConfig, StepMetrics};
    pub use grit_grid::{Grid, GridError, MaterialCensus};
    pub use grit_rules::{standard_rules, Rule, RuleContext};
    pub use grit_space::{Direction, NeighborTopology, SpaceError};
}
