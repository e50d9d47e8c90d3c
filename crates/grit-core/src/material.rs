//! The [`Material`] variants and their classification helpers.

use std::fmt;

/// The material occupying a grid cell.
///
/// Each non-empty material has exactly one transition rule registered
/// with the engine; `Empty` is never processed on its own behalf, only
/// moved into by other materials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Material {
    /// Unoccupied space. Movement target for every other material.
    Empty,
    /// Granular solid. Falls, slides diagonally, sinks through water.
    Sand,
    /// Liquid. Falls, slides, spreads horizontally under pressure,
    /// evaporates above its boil temperature.
    Water,
    /// Rigid solid. Immobile while supported, falls when undermined,
    /// melts to fire above its melt temperature.
    Rock,
    /// Combustion. Radiates heat, ignites or consumes neighbors,
    /// rises by buoyancy, self-extinguishes stochastically.
    Fire,
}

impl Material {
    /// All materials in declaration order. Stable across releases;
    /// census tables index by position in this array.
    pub const ALL: [Material; 5] = [
        Material::Empty,
        Material::Sand,
        Material::Water,
        Material::Rock,
        Material::Fire,
    ];

    /// `true` for [`Material::Empty`].
    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }

    /// Materials that provide structural support to rock resting on
    /// them: rock itself and sand.
    pub fn is_supportive(self) -> bool {
        matches!(self, Material::Rock | Material::Sand)
    }

    /// Materials whose movement uses the velocity components
    /// (fall acceleration and sideways momentum).
    pub fn is_granular(self) -> bool {
        matches!(self, Material::Sand | Material::Water)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Material::Empty => "empty",
            Material::Sand => "sand",
            Material::Water => "water",
            Material::Rock => "rock",
            Material::Fire => "fire",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_variant_once() {
        assert_eq!(Material::ALL.len(), 5);
        for (i, a) in Material::ALL.iter().enumerate() {
            for (j, b) in Material::ALL.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn supportive_materials() {
        assert!(Material::Rock.is_supportive());
        assert!(Material::Sand.is_supportive());
        assert!(!Material::Water.is_supportive());
        assert!(!Material::Fire.is_supportive());
        assert!(!Material::Empty.is_supportive());
    }

    #[test]
    fn granular_materials() {
        assert!(Material::Sand.is_granular());
        assert!(Material::Water.is_granular());
        assert!(!Material::Rock.is_granular());
    }

    #[test]
    fn display_names() {
        assert_eq!(Material::Sand.to_string(), "sand");
        assert_eq!(Material::Empty.to_string(), "empty");
    }
}
