//! Test fixtures for Grit development.
//!
//! ASCII scenario helpers shared by the rule and engine test suites:
//! grids are written as rows of legend characters and compared the
//! same way, keeping movement tests readable as before/after pictures.

#![forbid(unsafe_code)]

mod fixtures;

pub use fixtures::{char_for, grid_from_rows, material_for, render_rows};
