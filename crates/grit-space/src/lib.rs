//! Grid topology for Grit simulations.
//!
//! This crate defines the [`NeighborTopology`] — a table of the 8
//! Moore-neighborhood indices of every cell, precomputed once per grid
//! geometry — together with the fixed [`Direction`] ordering used by
//! every transition rule.
//!
//! Cells outside the grid are represented by the [`NO_NEIGHBOR`]
//! sentinel and surfaced as `None` from lookups; rules treat a missing
//! neighbor as blocked, never as an error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod direction;
mod error;
mod topology;

pub use direction::Direction;
pub use error::SpaceError;
pub use topology::{NeighborTopology, NO_NEIGHBOR};
