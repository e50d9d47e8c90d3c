//! Fire: radiates heat, transforms neighbors, rises, burns out.

use crate::context::RuleContext;
use crate::rule::Rule;
use grit_core::{Cell, Material};
use grit_space::Direction;

/// Transition rule for [`Material::Fire`].
///
/// Each tick a fire cell may self-extinguish; otherwise it is doused
/// by any adjacent water, or radiates heat into every valid neighbor
/// and applies the temperature-driven transitions: hot sand may be
/// consumed, hot rock ignites. Finally it may drift one cell upward
/// into empty space (buoyancy).
///
/// The per-neighbor heat increment is `heat_output / heat_radius`,
/// fixed at build time.
///
/// Constructed via [`FireRule::builder`].
#[derive(Debug)]
pub struct FireRule {
    extinguish_probability: f64,
    heat_increment: u16,
    sand_burn_temperature: u16,
    sand_burn_probability: f64,
    rock_ignite_temperature: u16,
    buoyancy_probability: f64,
}

/// Builder for [`FireRule`].
pub struct FireRuleBuilder {
    extinguish_probability: f64,
    heat_output: f64,
    heat_radius: f64,
    sand_burn_temperature: u16,
    sand_burn_probability: f64,
    rock_ignite_temperature: u16,
    buoyancy_probability: f64,
}

impl FireRule {
    /// Create a builder with the default tuning.
    pub fn builder() -> FireRuleBuilder {
        FireRuleBuilder {
            extinguish_probability: 0.05,
            heat_output: 120.0,
            heat_radius: 4.0,
            sand_burn_temperature: 400,
            sand_burn_probability: 0.1,
            rock_ignite_temperature: 600,
            buoyancy_probability: 0.25,
        }
    }
}

impl FireRuleBuilder {
    /// Per-tick probability of burning out to empty (default 0.05).
    /// Must be in `[0, 1]`.
    pub fn extinguish_probability(mut self, extinguish_probability: f64) -> Self {
        self.extinguish_probability = extinguish_probability;
        self
    }

    /// Total heat radiated per tick, in degrees (default 120).
    /// Must be finite and non-negative.
    pub fn heat_output(mut self, heat_output: f64) -> Self {
        self.heat_output = heat_output;
        self
    }

    /// Divisor scaling heat over distance (default 4). Each neighbor
    /// receives `heat_output / heat_radius` degrees per tick. Must be
    /// finite and positive.
    pub fn heat_radius(mut self, heat_radius: f64) -> Self {
        self.heat_radius = heat_radius;
        self
    }

    /// Temperature above which adjacent sand can be consumed
    /// (default 400).
    pub fn sand_burn_temperature(mut self, sand_burn_temperature: u16) -> Self {
        self.sand_burn_temperature = sand_burn_temperature;
        self
    }

    /// Probability of consuming a hot-enough sand neighbor per tick
    /// (default 0.1). Must be in `[0, 1]`.
    pub fn sand_burn_probability(mut self, sand_burn_probability: f64) -> Self {
        self.sand_burn_probability = sand_burn_probability;
        self
    }

    /// Temperature above which adjacent rock ignites (default 600).
    pub fn rock_ignite_temperature(mut self, rock_ignite_temperature: u16) -> Self {
        self.rock_ignite_temperature = rock_ignite_temperature;
        self
    }

    /// Per-tick probability of drifting into an empty cell directly
    /// above (default 0.25). Must be in `[0, 1]`.
    pub fn buoyancy_probability(mut self, buoyancy_probability: f64) -> Self {
        self.buoyancy_probability = buoyancy_probability;
        self
    }

    /// Build the rule, validating all tuning parameters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any probability is outside `[0, 1]`, if
    /// `heat_output` is negative or non-finite, or if `heat_radius`
    /// is not finite and positive.
    pub fn build(self) -> Result<FireRule, String> {
        for (name, value) in [
            ("extinguish_probability", self.extinguish_probability),
            ("sand_burn_probability", self.sand_burn_probability),
            ("buoyancy_probability", self.buoyancy_probability),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(format!(
                    "{name} is a probability and must be in [0, 1], got {value}"
                ));
            }
        }
        if !self.heat_output.is_finite() || self.heat_output < 0.0 {
            return Err(format!(
                "heat_output must be finite and >= 0, got {}",
                self.heat_output
            ));
        }
        if !self.heat_radius.is_finite() || self.heat_radius <= 0.0 {
            return Err(format!(
                "heat_radius must be finite and > 0, got {}",
                self.heat_radius
            ));
        }
        let heat_increment = (self.heat_output / self.heat_radius)
            .round()
            .min(f64::from(u16::MAX)) as u16;
        Ok(FireRule {
            extinguish_probability: self.extinguish_probability,
            heat_increment,
            sand_burn_temperature: self.sand_burn_temperature,
            sand_burn_probability: self.sand_burn_probability,
            rock_ignite_temperature: self.rock_ignite_temperature,
            buoyancy_probability: self.buoyancy_probability,
        })
    }
}

impl Rule for FireRule {
    fn name(&self) -> &str {
        "fire"
    }

    fn material(&self) -> Material {
        Material::Fire
    }

    fn step(&self, ctx: &mut RuleContext<'_>) {
        let cell = ctx.cell();
        let idx = ctx.index();

        if ctx.chance(self.extinguish_probability) {
            ctx.write_next(idx, Cell::empty(cell.temperature));
            return;
        }

        // Any adjacent water douses the fire outright.
        for dir in Direction::ALL {
            if let Some(n) = ctx.neighbor(dir) {
                if ctx.material_at(n) == Material::Water {
                    ctx.write_next(idx, Cell::empty(cell.temperature));
                    return;
                }
            }
        }

        // Radiate, then apply temperature transitions against the
        // accumulated next-buffer heat so clustered fires compound.
        for dir in Direction::ALL {
            let Some(n) = ctx.neighbor(dir) else { continue };
            ctx.heat_neighbor(n, self.heat_increment);
            if ctx.next_claimed(n) {
                continue;
            }
            let heated = ctx.next_temperature(n);
            match ctx.material_at(n) {
                Material::Sand
                    if heated > self.sand_burn_temperature
                        && ctx.chance(self.sand_burn_probability) =>
                {
                    ctx.write_next(n, Cell::empty(heated));
                }
                Material::Rock if heated > self.rock_ignite_temperature => {
                    ctx.write_next(n, Cell::new(Material::Fire, heated));
                }
                _ => {}
            }
        }

        // Buoyancy: drift upward into empty space.
        if ctx.chance(self.buoyancy_probability) {
            if let Some(up) = ctx.neighbor(Direction::Top) {
                if ctx.is_open(up) {
                    ctx.swap_into(up, cell);
                }
            }
        }
    }
}
