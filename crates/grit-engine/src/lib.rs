//! Tick scheduler and public surface of the Grit falling-sand engine.
//!
//! [`Engine`] owns the double-buffered grid, the precomputed neighbor
//! topology, and the material → rule dispatch table, and advances the
//! simulation one tick per [`Engine::step`] call: claims are reset,
//! the grid is swept bottom row to top (left to right within a row)
//! dispatching each occupied cell to its material's rule, and the
//! buffers are swapped.
//!
//! The engine is single-threaded and synchronous: `step()` runs to
//! completion, `paint()` and `step()` must be called from one logical
//! thread of control, and all randomness flows through the RNG the
//! caller injects — two engines stepped with equal seeds and equal
//! paint history stay bit-identical.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod metrics;

pub use config::{ConfigError, SimConfig};
pub use engine::Engine;
pub use metrics::StepMetrics;
