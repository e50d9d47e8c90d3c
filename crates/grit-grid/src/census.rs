//! Material population counts.

use grit_core::Material;

/// Per-material cell counts for one grid buffer.
///
/// Computed by [`Grid::census`](crate::Grid::census). The counts
/// always sum to the grid's cell count; conservation tests compare
/// censuses across ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaterialCensus {
    counts: [usize; Material::ALL.len()],
}

impl MaterialCensus {
    /// Count cells of `material` from an iterator of materials.
    pub fn from_materials<I: IntoIterator<Item = Material>>(materials: I) -> Self {
        let mut census = Self::default();
        for m in materials {
            census.counts[m as usize] += 1;
        }
        census
    }

    /// Number of cells holding `material`.
    pub fn count(&self, material: Material) -> usize {
        self.counts[material as usize]
    }

    /// Total cells counted (always the grid's cell count).
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_total() {
        let census = MaterialCensus::from_materials([
            Material::Sand,
            Material::Sand,
            Material::Water,
            Material::Empty,
        ]);
        assert_eq!(census.count(Material::Sand), 2);
        assert_eq!(census.count(Material::Water), 1);
        assert_eq!(census.count(Material::Empty), 1);
        assert_eq!(census.count(Material::Fire), 0);
        assert_eq!(census.total(), 4);
    }
}
