//! Granular sand: falls, sinks through water, slides diagonally.

use crate::context::RuleContext;
use crate::rule::Rule;
use grit_core::{Cell, Material};
use grit_space::Direction;

/// Transition rule for [`Material::Sand`].
///
/// Movement priority per tick: straight down into empty space, down
/// through water (sand is denser), then down a free diagonal — chosen
/// by the configurable tie-break bias when both are free. A fully
/// blocked cell stays put and bleeds momentum through the damping
/// factor.
///
/// Constructed via [`SandRule::builder`].
#[derive(Debug)]
pub struct SandRule {
    gravity: f32,
    terminal_velocity: f32,
    sideways_velocity: f32,
    damping: f32,
    diagonal_bias: f64,
}

/// Builder for [`SandRule`].
pub struct SandRuleBuilder {
    gravity: f32,
    terminal_velocity: f32,
    sideways_velocity: f32,
    damping: f32,
    diagonal_bias: f64,
}

impl SandRule {
    /// Create a builder with the default tuning.
    pub fn builder() -> SandRuleBuilder {
        SandRuleBuilder {
            gravity: 0.3,
            terminal_velocity: 2.0,
            sideways_velocity: 0.5,
            damping: 0.8,
            diagonal_bias: 0.5,
        }
    }

    fn fall_velocity(&self, mut moved: Cell) -> Cell {
        moved.velocity[1] = (moved.velocity[1] + self.gravity).min(self.terminal_velocity);
        moved
    }
}

impl SandRuleBuilder {
    /// Downward velocity gained per falling tick (default 0.3).
    /// Must be finite and non-negative.
    pub fn gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Cap on accumulated downward velocity (default 2.0).
    /// Must be finite and non-negative.
    pub fn terminal_velocity(mut self, terminal_velocity: f32) -> Self {
        self.terminal_velocity = terminal_velocity;
        self
    }

    /// Magnitude of sideways momentum on a diagonal slide
    /// (default 0.5). Must be finite and non-negative.
    pub fn sideways_velocity(mut self, sideways_velocity: f32) -> Self {
        self.sideways_velocity = sideways_velocity;
        self
    }

    /// Per-tick velocity decay factor while blocked (default 0.8).
    /// Must be in `[0, 1]`.
    pub fn damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Probability of choosing the LEFT diagonal when both are free
    /// (default 0.5, uniform). Must be in `[0, 1]`.
    ///
    /// Falling-sand automata vary widely here — anything from uniform
    /// to a heavy single-side bias reads as plausible sand — so the
    /// bias is a parameter, not a constant.
    pub fn diagonal_bias(mut self, diagonal_bias: f64) -> Self {
        self.diagonal_bias = diagonal_bias;
        self
    }

    /// Build the rule, validating all tuning parameters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any magnitude is negative or non-finite, if
    /// `damping` is outside `[0, 1]`, or if `diagonal_bias` is outside
    /// `[0, 1]`.
    pub fn build(self) -> Result<SandRule, String> {
        for (name, value) in [
            ("gravity", self.gravity),
            ("terminal_velocity", self.terminal_velocity),
            ("sideways_velocity", self.sideways_velocity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and >= 0, got {value}"));
            }
        }
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(format!("damping must be in [0, 1], got {}", self.damping));
        }
        if !self.diagonal_bias.is_finite() || !(0.0..=1.0).contains(&self.diagonal_bias) {
            return Err(format!(
                "diagonal_bias is a probability and must be in [0, 1], got {}",
                self.diagonal_bias
            ));
        }
        Ok(SandRule {
            gravity: self.gravity,
            terminal_velocity: self.terminal_velocity,
            sideways_velocity: self.sideways_velocity,
            damping: self.damping,
            diagonal_bias: self.diagonal_bias,
        })
    }
}

impl Rule for SandRule {
    fn name(&self) -> &str {
        "sand"
    }

    fn material(&self) -> Material {
        Material::Sand
    }

    fn step(&self, ctx: &mut RuleContext<'_>) {
        let cell = ctx.cell();

        if let Some(below) = ctx.neighbor(Direction::Bottom) {
            if ctx.is_open(below) {
                let moved = self.fall_velocity(cell);
                ctx.swap_into(below, moved);
                return;
            }
            // Sand is denser than water: sink, displacing it upward.
            if ctx.material_at(below) == Material::Water && !ctx.next_claimed(below) {
                let moved = self.fall_velocity(cell);
                ctx.swap_into(below, moved);
                return;
            }
        }

        let left = ctx
            .neighbor(Direction::BottomLeft)
            .filter(|&i| ctx.is_open(i));
        let right = ctx
            .neighbor(Direction::BottomRight)
            .filter(|&i| ctx.is_open(i));
        let target = match (left, right) {
            (Some(l), Some(r)) => {
                if ctx.chance(self.diagonal_bias) {
                    Some((l, -1.0))
                } else {
                    Some((r, 1.0))
                }
            }
            (Some(l), None) => Some((l, -1.0)),
            (None, Some(r)) => Some((r, 1.0)),
            (None, None) => None,
        };
        if let Some((dst, side)) = target {
            let mut moved = self.fall_velocity(cell);
            moved.velocity[0] = side * self.sideways_velocity;
            ctx.swap_into(dst, moved);
            return;
        }

        // Blocked: bleed momentum. A resting cell needs no write.
        if cell.velocity != [0.0, 0.0] {
            let mut stuck = cell;
            stuck.velocity[0] *= self.damping;
            stuck.velocity[1] *= self.damping;
            let idx = ctx.index();
            ctx.write_next(idx, stuck);
        }
    }
}
