//! Core types for the Grit falling-sand engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental value types shared by every other Grit crate: the
//! [`Material`] variants, the per-cell simulation state ([`Cell`]),
//! the temperature domain constants, and the [`TickId`] counter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cell;
mod id;
mod material;

pub use cell::{Cell, AMBIENT_TEMPERATURE, MAX_TEMPERATURE};
pub use id::TickId;
pub use material::Material;
