//! The tick engine: sweep scheduling and the host-facing surface.

use std::time::Instant;

use grit_core::{Cell, Material, TickId};
use grit_grid::{Grid, MaterialCensus};
use grit_rules::{Rule, RuleContext};
use grit_space::NeighborTopology;
use indexmap::IndexMap;
use rand::RngCore;

use crate::config::{ConfigError, SimConfig};
use crate::metrics::StepMetrics;

/// The falling-sand simulation engine.
///
/// Owns the double-buffered grid, the precomputed topology, and the
/// material → rule dispatch table. The engine is deliberately small:
/// one `step()` per tick, `paint()` for out-of-tick brushing, and
/// read-only cell access for render hosts. It keeps no pause flag, no
/// selected material, and no timer — that state belongs to the host.
pub struct Engine {
    grid: Grid,
    topology: NeighborTopology,
    rules: IndexMap<Material, Box<dyn Rule>>,
    initial_temperature: u16,
    brush_radius_min: f64,
    brush_radius_max: f64,
    tick_rate_hz: f64,
    current_tick: TickId,
    last_metrics: StepMetrics,
}

impl Engine {
    /// Construct an engine from a validated configuration.
    ///
    /// Allocates both grid buffers and the neighbor table; this is the
    /// engine's only failure path — everything after construction is
    /// total.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let topology = NeighborTopology::new(config.rows, config.cols)?;
        let grid = Grid::new(config.rows, config.cols, config.initial_temperature)?;

        // Registration order is preserved; validate() rejected
        // duplicates and Empty.
        let mut rules = IndexMap::with_capacity(config.rules.len());
        for rule in config.rules {
            rules.insert(rule.material(), rule);
        }

        Ok(Self {
            grid,
            topology,
            rules,
            initial_temperature: config.initial_temperature,
            brush_radius_min: config.brush_radius_min,
            brush_radius_max: config.brush_radius_max,
            tick_rate_hz: config.tick_rate_hz,
            current_tick: TickId(0),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance the simulation by one tick.
    ///
    /// Claims are reset and the current cells seeded as the default
    /// outcome, then the sweep visits rows from the LAST to the first,
    /// left to right within a row. Bottom-to-top order is load-bearing:
    /// a cell that just vacated its slot is not re-processed in its old
    /// position, and downward motion resolves before the row above is
    /// evaluated, so nothing moves more than one cell per tick.
    ///
    /// Deterministic given the RNG state and grid contents; each call
    /// sees the fully committed result of the previous call.
    pub fn step(&mut self, rng: &mut dyn RngCore) -> StepMetrics {
        let start = Instant::now();
        let mut rules_invoked = 0u64;
        let mut cells_claimed = 0u64;

        self.grid.step_begin();
        let rows = self.topology.rows();
        let cols = self.topology.cols();
        {
            let (current, next) = self.grid.split();
            for row in (0..rows).rev() {
                for col in 0..cols {
                    let index = row * cols + col;
                    let material = current[index].material;
                    if material.is_empty() || next[index].claimed {
                        continue;
                    }
                    if let Some(rule) = self.rules.get(&material) {
                        let mut ctx =
                            RuleContext::new(current, next, &self.topology, rng, index);
                        rule.step(&mut ctx);
                        rules_invoked += 1;
                        cells_claimed += ctx.claims();
                    }
                }
            }
        }
        self.grid.commit();
        self.current_tick = self.current_tick.next();

        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            cells_visited: (rows * cols) as u64,
            rules_invoked,
            cells_claimed,
        };
        self.last_metrics = metrics.clone();
        metrics
    }

    /// Stamp `material` within a circular brush centered on
    /// `(center_row, center_col)`, radius clamped into the configured
    /// brush bounds.
    ///
    /// Acts on the CURRENT buffer, outside the tick cycle — the stamp
    /// is visible immediately and resets temperature and velocity.
    pub fn paint(&mut self, center_row: f64, center_col: f64, radius: f64, material: Material) {
        let radius = radius.clamp(self.brush_radius_min, self.brush_radius_max);
        self.grid.paint(
            center_row,
            center_col,
            radius,
            material,
            self.initial_temperature,
        );
    }

    /// Read one cell. Out-of-range coordinates clamp to the nearest
    /// valid row/column — never out-of-bounds access.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        let row = row.min(self.topology.rows() - 1);
        let col = col.min(self.topology.cols() - 1);
        self.grid.current()[row * self.topology.cols() + col]
    }

    /// Row-major iterator over the current buffer, for render hosts.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.current().iter().copied()
    }

    /// Grid rows.
    pub fn rows(&self) -> usize {
        self.topology.rows()
    }

    /// Grid columns.
    pub fn cols(&self) -> usize {
        self.topology.cols()
    }

    /// Configured tick rate in Hz, for the host's frame pacing.
    pub fn tick_rate_hz(&self) -> f64 {
        self.tick_rate_hz
    }

    /// Per-material population of the current buffer.
    pub fn census(&self) -> MaterialCensus {
        self.grid.census()
    }

    /// Ticks executed since construction or the last reset.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Restore the freshly constructed state: every cell empty at the
    /// initial temperature, tick counter zeroed.
    pub fn reset(&mut self) {
        self.grid.fill(Cell::empty(self.initial_temperature));
        self.current_tick = TickId(0);
        self.last_metrics = StepMetrics::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grit_core::AMBIENT_TEMPERATURE;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn engine(rows: usize, cols: usize) -> Engine {
        Engine::new(SimConfig::standard(rows, cols)).unwrap()
    }

    #[test]
    fn new_engine_is_empty_at_tick_zero() {
        let e = engine(4, 6);
        assert_eq!(e.rows(), 4);
        assert_eq!(e.cols(), 6);
        assert_eq!(e.current_tick(), TickId(0));
        assert_eq!(e.census().count(Material::Empty), 24);
    }

    #[test]
    fn construction_rejects_invalid_config() {
        assert!(Engine::new(SimConfig::standard(0, 5)).is_err());
    }

    #[test]
    fn step_advances_the_tick_counter() {
        let mut e = engine(4, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        e.step(&mut rng);
        e.step(&mut rng);
        assert_eq!(e.current_tick(), TickId(2));
    }

    #[test]
    fn sand_falls_one_row_per_tick() {
        let mut e = engine(5, 3);
        e.paint(0.0, 1.0, 0.5, Material::Sand);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for expected_row in 1..5 {
            e.step(&mut rng);
            let sand_rows: Vec<usize> = (0..e.rows())
                .filter(|&r| (0..e.cols()).any(|c| e.cell_at(r, c).material == Material::Sand))
                .collect();
            assert_eq!(sand_rows, vec![expected_row]);
        }
        // On the floor: further ticks change nothing.
        e.step(&mut rng);
        assert_eq!(e.cell_at(4, 1).material, Material::Sand);
    }

    #[test]
    fn metrics_count_the_sweep() {
        let mut e = engine(4, 4);
        e.paint(0.0, 0.0, 0.5, Material::Sand);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let m = e.step(&mut rng);
        assert_eq!(m.cells_visited, 16);
        assert_eq!(m.rules_invoked, 1);
        // One falling move claims source and destination.
        assert_eq!(m.cells_claimed, 2);
        assert_eq!(e.last_metrics(), &m);
    }

    #[test]
    fn paint_radius_is_clamped_to_bounds() {
        let mut cfg = SimConfig::standard(9, 9);
        cfg.brush_radius_min = 0.5;
        cfg.brush_radius_max = 1.0;
        let mut e = Engine::new(cfg).unwrap();
        // Requested radius 50 clamps to 1: five cells, not the grid.
        e.paint(4.0, 4.0, 50.0, Material::Sand);
        assert_eq!(e.census().count(Material::Sand), 5);
        // Requested radius 0 clamps to 0.5: the center cell.
        e.reset();
        e.paint(4.0, 4.0, 0.0, Material::Sand);
        assert_eq!(e.census().count(Material::Sand), 1);
    }

    #[test]
    fn cell_at_clamps_out_of_range_coordinates() {
        let mut e = engine(3, 3);
        e.paint(2.0, 2.0, 0.5, Material::Rock);
        assert_eq!(e.cell_at(100, 100).material, Material::Rock);
        assert_eq!(e.cell_at(2, 900).material, Material::Rock);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut e = engine(4, 4);
        e.paint(1.0, 1.0, 2.0, Material::Water);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        e.step(&mut rng);
        e.reset();
        assert_eq!(e.current_tick(), TickId(0));
        assert_eq!(e.census().count(Material::Empty), 16);
        assert!(e
            .cells()
            .all(|c| c.temperature == AMBIENT_TEMPERATURE && !c.claimed));
        assert_eq!(e.last_metrics(), &StepMetrics::default());
    }

    #[test]
    fn unruled_materials_stay_put() {
        // Only a sand rule registered: rock cells have no rule and
        // keep their default outcome.
        let mut cfg = SimConfig::standard(3, 1);
        cfg.rules = vec![Box::new(
            grit_rules::SandRule::builder().build().unwrap(),
        )];
        let mut e = Engine::new(cfg).unwrap();
        e.paint(0.0, 0.0, 0.5, Material::Rock);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        e.step(&mut rng);
        assert_eq!(e.cell_at(0, 0).material, Material::Rock);
    }
}
