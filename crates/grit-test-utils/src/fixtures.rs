//! ASCII grid scenarios.
//!
//! Legend: `.` empty, `S` sand, `W` water, `R` rock, `F` fire. All
//! cells start at ambient temperature with zero velocity; tests that
//! need heat or momentum adjust cells after construction.

use grit_core::{Cell, Material, AMBIENT_TEMPERATURE};
use grit_grid::Grid;
use grit_space::NeighborTopology;

/// Material for a legend character.
///
/// # Panics
///
/// Panics on an unknown character — a fixture typo, not a runtime
/// condition.
pub fn material_for(ch: char) -> Material {
    match ch {
        '.' => Material::Empty,
        'S' => Material::Sand,
        'W' => Material::Water,
        'R' => Material::Rock,
        'F' => Material::Fire,
        other => panic!("unknown grid legend character {other:?}"),
    }
}

/// Legend character for a material.
pub fn char_for(material: Material) -> char {
    match material {
        Material::Empty => '.',
        Material::Sand => 'S',
        Material::Water => 'W',
        Material::Rock => 'R',
        Material::Fire => 'F',
    }
}

/// Build a grid and matching topology from ASCII rows.
///
/// # Panics
///
/// Panics if `rows` is empty, rows have unequal lengths, or a
/// character is not in the legend.
pub fn grid_from_rows(rows: &[&str]) -> (Grid, NeighborTopology) {
    assert!(!rows.is_empty(), "fixture needs at least one row");
    let cols = rows[0].chars().count();
    let mut grid = Grid::new(rows.len(), cols, AMBIENT_TEMPERATURE).expect("valid fixture dims");
    let topology = NeighborTopology::new(rows.len(), cols).expect("valid fixture dims");
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(
            row.chars().count(),
            cols,
            "fixture row {r} has a different length"
        );
        for (c, ch) in row.chars().enumerate() {
            grid.set_cell(r, c, Cell::new(material_for(ch), AMBIENT_TEMPERATURE));
        }
    }
    (grid, topology)
}

/// Render the current buffer back to ASCII rows for comparison.
pub fn render_rows(grid: &Grid) -> Vec<String> {
    (0..grid.rows())
        .map(|r| {
            (0..grid.cols())
                .map(|c| char_for(grid.cell(r, c).expect("in bounds").material))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_scenario() {
        let rows = ["S.W", "RF.", "..."];
        let (grid, topology) = grid_from_rows(&rows);
        assert_eq!(topology.cell_count(), 9);
        assert_eq!(render_rows(&grid), rows);
    }

    #[test]
    #[should_panic(expected = "different length")]
    fn ragged_rows_are_rejected() {
        grid_from_rows(&["..", "..."]);
    }

    #[test]
    #[should_panic(expected = "unknown grid legend")]
    fn unknown_characters_are_rejected() {
        grid_from_rows(&["X"]);
    }
}
