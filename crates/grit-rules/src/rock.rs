//! Rock: immobile while supported, falls when undermined, melts.

use crate::context::RuleContext;
use crate::rule::Rule;
use grit_core::{Cell, Material};
use grit_space::Direction;

/// Transition rule for [`Material::Rock`].
///
/// A rock cell is supported when any of its three lower neighbors
/// holds rock or sand; supported rock never moves, even over an empty
/// cell. Unsupported rock falls straight down into empty space. Rock
/// above the melt temperature turns to fire regardless of support.
///
/// Constructed via [`RockRule::builder`].
#[derive(Debug)]
pub struct RockRule {
    melt_temperature: u16,
}

/// Builder for [`RockRule`].
pub struct RockRuleBuilder {
    melt_temperature: u16,
}

impl RockRule {
    /// Create a builder with the default tuning.
    pub fn builder() -> RockRuleBuilder {
        RockRuleBuilder {
            melt_temperature: 700,
        }
    }
}

impl RockRuleBuilder {
    /// Temperature above which rock melts to fire (default 700).
    pub fn melt_temperature(mut self, melt_temperature: u16) -> Self {
        self.melt_temperature = melt_temperature;
        self
    }

    /// Build the rule.
    ///
    /// Infallible today — every `u16` threshold is meaningful (a value
    /// above the temperature ceiling simply disables melting) — but
    /// returns `Result` for uniformity with the other rule builders.
    pub fn build(self) -> Result<RockRule, String> {
        Ok(RockRule {
            melt_temperature: self.melt_temperature,
        })
    }
}

impl Rule for RockRule {
    fn name(&self) -> &str {
        "rock"
    }

    fn material(&self) -> Material {
        Material::Rock
    }

    fn step(&self, ctx: &mut RuleContext<'_>) {
        let cell = ctx.cell();
        let idx = ctx.index();

        if cell.temperature > self.melt_temperature {
            ctx.write_next(idx, Cell::new(Material::Fire, cell.temperature));
            return;
        }

        let supported = [
            Direction::BottomLeft,
            Direction::Bottom,
            Direction::BottomRight,
        ]
        .into_iter()
        .any(|dir| {
            ctx.neighbor(dir)
                .is_some_and(|n| ctx.material_at(n).is_supportive())
        });
        if supported {
            return;
        }

        if let Some(below) = ctx.neighbor(Direction::Bottom) {
            if ctx.is_open(below) {
                ctx.swap_into(below, cell);
            }
        }
    }
}
