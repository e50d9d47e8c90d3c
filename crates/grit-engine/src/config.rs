//! Simulation configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use grit_core::{Material, AMBIENT_TEMPERATURE};
use grit_grid::GridError;
use grit_rules::{standard_rules, Rule};
use grit_space::{NeighborTopology, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`] or engine
/// construction.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Topology construction failed.
    Space(SpaceError),
    /// Grid buffer construction failed.
    Grid(GridError),
    /// No rules registered.
    NoRules,
    /// A rule is registered for `Material::Empty`, which is never
    /// processed.
    RuleForEmpty,
    /// Two rules are registered for the same material.
    RuleConflict {
        /// The doubly-claimed material.
        material: Material,
    },
    /// tick_rate_hz is NaN, infinite, zero, or negative.
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
    /// Brush radius bounds are non-finite, negative, or inverted.
    InvalidBrushRadius {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::NoRules => write!(f, "no rules registered"),
            Self::RuleForEmpty => {
                write!(f, "a rule is registered for the empty material")
            }
            Self::RuleConflict { material } => {
                write!(f, "more than one rule registered for {material}")
            }
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::InvalidBrushRadius { min, max } => {
                write!(
                    f,
                    "brush radius bounds must satisfy 0 <= min <= max, got [{min}, {max}]"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing an [`Engine`](crate::Engine).
///
/// Grid geometry, the rule set, and the host-facing tunables (tick
/// rate for frame pacing, initial temperature, brush radius bounds)
/// are all fixed at construction. Pause/run state, the selected
/// material, and the live brush radius belong to the host, not the
/// engine.
pub struct SimConfig {
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
    /// Transition rules, at most one per material.
    pub rules: Vec<Box<dyn Rule>>,
    /// Target tick rate in Hz. Held for the host's frame pacing; the
    /// engine never sleeps.
    pub tick_rate_hz: f64,
    /// Temperature of freshly constructed and freshly painted cells.
    pub initial_temperature: u16,
    /// Smallest accepted brush radius.
    pub brush_radius_min: f64,
    /// Largest accepted brush radius.
    pub brush_radius_max: f64,
}

impl SimConfig {
    /// A `rows × cols` configuration with the stock rule set and
    /// ambient defaults.
    pub fn standard(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            rules: standard_rules(),
            tick_rate_hz: 60.0,
            initial_temperature: AMBIENT_TEMPERATURE,
            brush_radius_min: 0.5,
            brush_radius_max: 32.0,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Geometry must be constructible (matches the grid and
        //    topology constructors).
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Grid(GridError::EmptyGrid));
        }
        let max = NeighborTopology::MAX_CELLS;
        match self.rows.checked_mul(self.cols) {
            Some(n) if n <= max => {}
            _ => {
                return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                    name: "rows * cols",
                    value: self.rows,
                    max,
                }));
            }
        }
        // 2. At least one rule; at most one per material; none for
        //    Empty.
        if self.rules.is_empty() {
            return Err(ConfigError::NoRules);
        }
        let mut seen: Vec<Material> = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let material = rule.material();
            if material.is_empty() {
                return Err(ConfigError::RuleForEmpty);
            }
            if seen.contains(&material) {
                return Err(ConfigError::RuleConflict { material });
            }
            seen.push(material);
        }
        // 3. tick_rate_hz must be finite and positive, and its
        //    reciprocal finite (rejects subnormals where 1.0/hz = inf,
        //    which would panic in Duration::from_secs_f64).
        if !self.tick_rate_hz.is_finite()
            || self.tick_rate_hz <= 0.0
            || !(1.0 / self.tick_rate_hz).is_finite()
        {
            return Err(ConfigError::InvalidTickRate {
                value: self.tick_rate_hz,
            });
        }
        // 4. Brush bounds: 0 <= min <= max, both finite.
        if !self.brush_radius_min.is_finite()
            || !self.brush_radius_max.is_finite()
            || self.brush_radius_min < 0.0
            || self.brush_radius_min > self.brush_radius_max
        {
            return Err(ConfigError::InvalidBrushRadius {
                min: self.brush_radius_min,
                max: self.brush_radius_max,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for SimConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimConfig")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tick_rate_hz", &self.tick_rate_hz)
            .field("initial_temperature", &self.initial_temperature)
            .field("brush_radius_min", &self.brush_radius_min)
            .field("brush_radius_max", &self.brush_radius_max)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grit_rules::SandRule;

    #[test]
    fn standard_config_validates() {
        assert!(SimConfig::standard(16, 16).validate().is_ok());
    }

    #[test]
    fn zero_dimension_fails() {
        let cfg = SimConfig::standard(0, 16);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Grid(GridError::EmptyGrid))
        );
    }

    #[test]
    fn oversized_grid_fails() {
        let cfg = SimConfig::standard(1 << 16, 1 << 16);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Grid(GridError::DimensionTooLarge { .. }))
        ));
    }

    #[test]
    fn empty_rule_set_fails() {
        let mut cfg = SimConfig::standard(8, 8);
        cfg.rules.clear();
        assert_eq!(cfg.validate(), Err(ConfigError::NoRules));
    }

    #[test]
    fn duplicate_rule_fails() {
        let mut cfg = SimConfig::standard(8, 8);
        cfg.rules
            .push(Box::new(SandRule::builder().build().unwrap()));
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::RuleConflict {
                material: Material::Sand
            })
        );
    }

    #[test]
    fn rule_for_empty_fails() {
        struct EmptyRule;
        impl Rule for EmptyRule {
            fn name(&self) -> &str {
                "empty"
            }
            fn material(&self) -> Material {
                Material::Empty
            }
            fn step(&self, _ctx: &mut grit_rules::RuleContext<'_>) {}
        }

        let mut cfg = SimConfig::standard(8, 8);
        cfg.rules.push(Box::new(EmptyRule));
        assert_eq!(cfg.validate(), Err(ConfigError::RuleForEmpty));
    }

    #[test]
    fn invalid_tick_rate_fails() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::from_bits(1)] {
            let mut cfg = SimConfig::standard(8, 8);
            cfg.tick_rate_hz = bad;
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidTickRate { .. })),
                "tick_rate_hz = {bad} should be rejected"
            );
        }
    }

    #[test]
    fn inverted_brush_bounds_fail() {
        let mut cfg = SimConfig::standard(8, 8);
        cfg.brush_radius_min = 10.0;
        cfg.brush_radius_max = 1.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidBrushRadius { .. })
        ));
    }

    #[test]
    fn negative_brush_minimum_fails() {
        let mut cfg = SimConfig::standard(8, 8);
        cfg.brush_radius_min = -1.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidBrushRadius { .. })
        ));
    }

    #[test]
    fn debug_lists_rule_names() {
        let cfg = SimConfig::standard(8, 8);
        let repr = format!("{cfg:?}");
        assert!(repr.contains("sand"));
        assert!(repr.contains("fire"));
    }
}
