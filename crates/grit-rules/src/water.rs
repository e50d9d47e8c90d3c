//! Liquid water: falls, slides, spreads under pressure, evaporates.

use crate::context::RuleContext;
use crate::rule::Rule;
use grit_core::{Cell, Material};
use grit_space::Direction;

/// Transition rule for [`Material::Water`].
///
/// Shares sand's fall priority (straight down, then a free diagonal),
/// and additionally spreads horizontally when vertically blocked. The
/// spread probability scales with local pressure: each contiguous
/// water cell directly above adds `pressure_per_cell`, so deep columns
/// flatten faster. Cells at or above the boil temperature may
/// evaporate, with probability increasing as temperature climbs.
///
/// Constructed via [`WaterRule::builder`].
#[derive(Debug)]
pub struct WaterRule {
    gravity: f32,
    terminal_velocity: f32,
    sideways_velocity: f32,
    damping: f32,
    diagonal_bias: f64,
    spread_probability: f64,
    pressure_per_cell: f64,
    boil_temperature: u16,
    evaporation_rate: f64,
}

/// Builder for [`WaterRule`].
pub struct WaterRuleBuilder {
    gravity: f32,
    terminal_velocity: f32,
    sideways_velocity: f32,
    damping: f32,
    diagonal_bias: f64,
    spread_probability: f64,
    pressure_per_cell: f64,
    boil_temperature: u16,
    evaporation_rate: f64,
}

impl WaterRule {
    /// Create a builder with the default tuning.
    pub fn builder() -> WaterRuleBuilder {
        WaterRuleBuilder {
            gravity: 0.3,
            terminal_velocity: 2.0,
            sideways_velocity: 0.5,
            damping: 0.8,
            diagonal_bias: 0.5,
            spread_probability: 0.5,
            pressure_per_cell: 0.2,
            boil_temperature: 100,
            evaporation_rate: 0.002,
        }
    }

    fn fall_velocity(&self, mut moved: Cell) -> Cell {
        moved.velocity[1] = (moved.velocity[1] + self.gravity).min(self.terminal_velocity);
        moved
    }

    /// Contiguous water cells directly above the processed cell, in
    /// the current buffer. Capped only by the grid boundary.
    fn column_above(&self, ctx: &RuleContext<'_>) -> usize {
        let mut count = 0;
        let mut idx = ctx.index();
        while let Some(up) = ctx.topology().neighbor(idx, Direction::Top) {
            if ctx.material_at(up) != Material::Water {
                break;
            }
            count += 1;
            idx = up;
        }
        count
    }
}

impl WaterRuleBuilder {
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

    /// Magnitude of sideways momentum on a lateral move (default 0.5).
    /// Must be finite and non-negative.
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
    pub fn diagonal_bias(mut self, diagonal_bias: f64) -> Self {
        self.diagonal_bias = diagonal_bias;
        self
    }

    /// Base probability of a horizontal spread move at pressure 1.0
    /// (default 0.5). Must be in `[0, 1]`; the pressure-scaled product
    /// is clamped to 1.
    pub fn spread_probability(mut self, spread_probability: f64) -> Self {
        self.spread_probability = spread_probability;
        self
    }

    /// Pressure contribution of each contiguous water cell directly
    /// above (default 0.2). Must be finite and non-negative.
    pub fn pressure_per_cell(mut self, pressure_per_cell: f64) -> Self {
        self.pressure_per_cell = pressure_per_cell;
        self
    }

    /// Temperature at which evaporation becomes possible
    /// (default 100).
    pub fn boil_temperature(mut self, boil_temperature: u16) -> Self {
        self.boil_temperature = boil_temperature;
        self
    }

    /// Per-degree-above-boil evaporation probability (default 0.002).
    /// Must be finite and non-negative; the per-tick product is
    /// clamped to 1.
    pub fn evaporation_rate(mut self, evaporation_rate: f64) -> Self {
        self.evaporation_rate = evaporation_rate;
        self
    }

    /// Build the rule, validating all tuning parameters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any magnitude is negative or non-finite, or if
    /// any probability parameter is outside `[0, 1]`.
    pub fn build(self) -> Result<WaterRule, String> {
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
        for (name, value) in [
            ("diagonal_bias", self.diagonal_bias),
            ("spread_probability", self.spread_probability),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(format!(
                    "{name} is a probability and must be in [0, 1], got {value}"
                ));
            }
        }
        for (name, value) in [
            ("pressure_per_cell", self.pressure_per_cell),
            ("evaporation_rate", self.evaporation_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and >= 0, got {value}"));
            }
        }
        Ok(WaterRule {
            gravity: self.gravity,
            terminal_velocity: self.terminal_velocity,
            sideways_velocity: self.sideways_velocity,
            damping: self.damping,
            diagonal_bias: self.diagonal_bias,
            spread_probability: self.spread_probability,
            pressure_per_cell: self.pressure_per_cell,
            boil_temperature: self.boil_temperature,
            evaporation_rate: self.evaporation_rate,
        })
    }
}

impl Rule for WaterRule {
    fn name(&self) -> &str {
        "water"
    }

    fn material(&self) -> Material {
        Material::Water
    }

    fn step(&self, ctx: &mut RuleContext<'_>) {
        let cell = ctx.cell();

        // Evaporation: the heat stays in the vacated cell.
        if cell.temperature >= self.boil_temperature {
            let over = (cell.temperature - self.boil_temperature) as f64 + 1.0;
            let p = (over * self.evaporation_rate).min(1.0);
            if ctx.chance(p) {
                let idx = ctx.index();
                ctx.write_next(idx, Cell::empty(cell.temperature));
                return;
            }
        }

        if let Some(below) = ctx.neighbor(Direction::Bottom) {
            if ctx.is_open(below) {
                let moved = self.fall_velocity(cell);
                ctx.swap_into(below, moved);
                return;
            }
        }

        let down_left = ctx
            .neighbor(Direction::BottomLeft)
            .filter(|&i| ctx.is_open(i));
        let down_right = ctx
            .neighbor(Direction::BottomRight)
            .filter(|&i| ctx.is_open(i));
        let diagonal = match (down_left, down_right) {
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
        if let Some((dst, side)) = diagonal {
            let mut moved = self.fall_velocity(cell);
            moved.velocity[0] = side * self.sideways_velocity;
            ctx.swap_into(dst, moved);
            return;
        }

        // Vertically blocked: spread sideways, faster under pressure.
        let pressure = 1.0 + self.pressure_per_cell * self.column_above(ctx) as f64;
        let spread = (self.spread_probability * pressure).min(1.0);
        let left = ctx.neighbor(Direction::Left).filter(|&i| ctx.is_open(i));
        let right = ctx.neighbor(Direction::Right).filter(|&i| ctx.is_open(i));
        let lateral = match (left, right) {
            (Some(l), Some(r)) => {
                if ctx.chance(0.5) {
                    Some((l, -1.0))
                } else {
                    Some((r, 1.0))
                }
            }
            (Some(l), None) => Some((l, -1.0)),
            (None, Some(r)) => Some((r, 1.0)),
            (None, None) => None,
        };
        if let Some((dst, side)) = lateral {
            if ctx.chance(spread) {
                let mut moved = cell;
                moved.velocity[0] = side * self.sideways_velocity;
                ctx.swap_into(dst, moved);
                return;
            }
        }

        if cell.velocity != [0.0, 0.0] {
            let mut stuck = cell;
            stuck.velocity[0] *= self.damping;
            stuck.velocity[1] *= self.damping;
            let idx = ctx.index();
            ctx.write_next(idx, stuck);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grit_test_utils::{grid_from_rows, render_rows};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run_rule(rows: &[&str], rule: &WaterRule, index: (usize, usize), seed: u64) -> Vec<String> {
        let (mut grid, topology) = grid_from_rows(rows);
        let idx = topology.index(index.0, index.1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        grid.step_begin();
        {
            let (current, next) = grid.split();
            let mut ctx = RuleContext::new(current, next, &topology, &mut rng, idx);
            rule.step(&mut ctx);
        }
        grid.commit();
        render_rows(&grid)
    }

    fn default_rule() -> WaterRule {
        WaterRule::builder().build().unwrap()
    }

    // ── Builder validation ──────────────────────────────────────

    #[test]
    fn builder_rejects_spread_probability_above_one() {
        let result = WaterRule::builder().spread_probability(1.1).build();
        assert!(result.unwrap_err().contains("spread_probability"));
    }

    #[test]
    fn builder_rejects_negative_evaporation_rate() {
        let result = WaterRule::builder().evaporation_rate(-0.5).build();
        assert!(result.unwrap_err().contains("evaporation_rate"));
    }

    // ── Movement ────────────────────────────────────────────────

    #[test]
    fn falls_into_empty_cell_below() {
        let after = run_rule(&["W", "."], &default_rule(), (0, 0), 0);
        assert_eq!(after, vec![".", "W"]);
    }

    #[test]
    fn slides_down_a_free_diagonal() {
        let after = run_rule(&[".W.", ".R."], &default_rule(), (0, 1), 3);
        // Both diagonals free; one of them is taken.
        assert_eq!(after[0], "...");
        assert!(after[1] == "WR." || after[1] == ".RW");
    }

    #[test]
    fn spreads_into_the_only_open_side() {
        // Down, both diagonals, and left are blocked; spread
        // probability 1 forces the move right.
        let rule = WaterRule::builder().spread_probability(1.0).build().unwrap();
        for seed in 0..16 {
            let after = run_rule(&["RW.", "RRR"], &rule, (0, 1), seed);
            assert_eq!(after, vec!["R.W", "RRR"]);
        }
    }

    #[test]
    fn zero_spread_probability_never_spreads() {
        let rule = WaterRule::builder().spread_probability(0.0).build().unwrap();
        for seed in 0..16 {
            let after = run_rule(&["RW.", "RRR"], &rule, (0, 1), seed);
            assert_eq!(after, vec!["RW.", "RRR"]);
        }
    }

    #[test]
    fn pressure_column_is_counted() {
        let rule = default_rule();
        let (mut grid, topology) = grid_from_rows(&["W", "W", "W", "R"]);
        grid.step_begin();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let (current, next) = grid.split();
        let bottom_water = topology.index(2, 0);
        let ctx = RuleContext::new(current, next, &topology, &mut rng, bottom_water);
        assert_eq!(rule.column_above(&ctx), 2);
    }

    #[test]
    fn pressure_saturates_spread_probability() {
        // A deep column drives base 0.2 spread to certainty:
        // 0.2 * (1 + 0.2 * 20) = 1.0.
        let rule = WaterRule::builder()
            .spread_probability(0.2)
            .pressure_per_cell(0.2)
            .build()
            .unwrap();
        let mut rows: Vec<&str> = vec!["W."; 20];
        rows.push("W.");
        rows.push("RR");
        let water_row = rows.len() - 2;
        for seed in 0..8 {
            let after = run_rule(&rows, &rule, (water_row, 0), seed);
            assert_eq!(&after[water_row], ".W", "seed {seed} failed to spread");
        }
    }

    // ── Evaporation ─────────────────────────────────────────────

    #[test]
    fn cold_water_never_evaporates() {
        let rule = WaterRule::builder().evaporation_rate(1.0).build().unwrap();
        // Temperature 20 is below boil; rule must fall, not vanish.
        let after = run_rule(&["W", "."], &rule, (0, 0), 0);
        assert_eq!(after, vec![".", "W"]);
    }

    #[test]
    fn boiling_water_with_certain_rate_evaporates() {
        let rule = WaterRule::builder().evaporation_rate(1.0).build().unwrap();
        let (mut grid, topology) = grid_from_rows(&["W", "."]);
        let mut hot = grid.cell(0, 0).unwrap();
        hot.temperature = 150;
        grid.set_cell(0, 0, hot);

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        grid.step_begin();
        {
            let (current, next) = grid.split();
            let mut ctx = RuleContext::new(current, next, &topology, &mut rng, 0);
            rule.step(&mut ctx);
        }
        grid.commit();
        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(cell.material, Material::Empty);
        assert_eq!(cell.temperature, 150, "the vacated cell keeps its heat");
    }

    #[test]
    fn evaporation_probability_grows_with_temperature() {
        let rule = WaterRule::builder()
            .boil_temperature(100)
            .evaporation_rate(0.01)
            .build()
            .unwrap();
        let trials = 4000;
        let mut evaporated = [0u32; 2];
        for (slot, temp) in [(0usize, 110u16), (1usize, 180u16)] {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            for _ in 0..trials {
                let (mut grid, topology) = grid_from_rows(&["W"]);
                let mut hot = grid.cell(0, 0).unwrap();
                hot.temperature = temp;
                grid.set_cell(0, 0, hot);
                grid.step_begin();
                {
                    let (current, next) = grid.split();
                    let mut ctx = RuleContext::new(current, next, &topology, &mut rng, 0);
                    rule.step(&mut ctx);
                }
                grid.commit();
                if grid.cell(0, 0).unwrap().material == Material::Empty {
                    evaporated[slot] += 1;
                }
            }
        }
        // Expected rates: 0.11 vs 0.81.
        assert!(evaporated[0] > 0, "some evaporation at 110 degrees");
        assert!(
            evaporated[1] > evaporated[0] * 3,
            "hotter water evaporates much faster: {evaporated:?}"
        );
    }
}
