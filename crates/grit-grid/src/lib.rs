//! Double-buffered cell storage for Grit simulations.
//!
//! [`Grid`] owns two equally-sized cell buffers that alternate between
//! "current" (readable) and "next" (writable) roles. The lifecycle per
//! tick is:
//!
//! 1. [`Grid::step_begin`] — seed the next buffer with the current
//!    cells, `claimed` cleared (the default no-op outcome)
//! 2. Rules write moves into the next buffer via [`Grid::split`]
//! 3. [`Grid::commit`] — swap the buffers (ownership transfer)
//!
//! [`Grid::paint`] is the out-of-tick mutation path: it stamps a
//! material directly onto the CURRENT buffer, visible immediately.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod census;
mod error;
mod grid;

pub use census::MaterialCensus;
pub use error::GridError;
pub use grid::Grid;
