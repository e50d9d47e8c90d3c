//! Execution context passed to rules during the sweep.

use grit_core::{Cell, Material};
use grit_space::{Direction, NeighborTopology};
use rand::{Rng, RngCore};

/// Per-cell execution context for a [`Rule`](crate::Rule).
///
/// Bundles the split-borrowed grid buffers (current read-only, next
/// writable), the neighbor topology, the injected RNG, and the index
/// of the cell under processing. Constructed by the scheduler once per
/// rule invocation; rules never hold state across invocations.
///
/// # Claim discipline
///
/// Every write goes through [`RuleContext::write_next`] or
/// [`RuleContext::swap_into`], which set the destination's `claimed`
/// marker. Writing a slot that is already claimed this tick violates
/// the at-most-one-write invariant and is debug-asserted.
pub struct RuleContext<'a> {
    current: &'a [Cell],
    next: &'a mut [Cell],
    topology: &'a NeighborTopology,
    rng: &'a mut dyn RngCore,
    index: usize,
    claims: u64,
}

impl<'a> RuleContext<'a> {
    /// Construct a context positioned on `index`.
    ///
    /// Typically called by the scheduler; tests construct one directly
    /// over a split grid.
    pub fn new(
        current: &'a [Cell],
        next: &'a mut [Cell],
        topology: &'a NeighborTopology,
        rng: &'a mut dyn RngCore,
        index: usize,
    ) -> Self {
        debug_assert_eq!(current.len(), next.len());
        debug_assert!(index < current.len());
        Self {
            current,
            next,
            topology,
            rng,
            index,
            claims: 0,
        }
    }

    /// Index of the cell under processing.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The current-buffer cell under processing.
    pub fn cell(&self) -> Cell {
        self.current[self.index]
    }

    /// The neighbor topology.
    pub fn topology(&self) -> &NeighborTopology {
        self.topology
    }

    /// Neighbor of the processed cell in `direction`, or `None` at the
    /// boundary (treated by every rule as blocked).
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        self.topology.neighbor(self.index, direction)
    }

    /// Current-buffer cell at an arbitrary index.
    pub fn current_at(&self, index: usize) -> Cell {
        self.current[index]
    }

    /// Current-buffer material at an arbitrary index.
    pub fn material_at(&self, index: usize) -> Material {
        self.current[index].material
    }

    /// Whether the next-buffer slot at `index` is already claimed this
    /// tick.
    pub fn next_claimed(&self, index: usize) -> bool {
        self.next[index].claimed
    }

    /// Next-buffer temperature at `index` — includes heat deposited by
    /// rules that ran earlier this tick.
    pub fn next_temperature(&self, index: usize) -> u16 {
        self.next[index].temperature
    }

    /// Whether `index` is a movement target: currently empty and not
    /// yet claimed this tick.
    pub fn is_open(&self, index: usize) -> bool {
        self.current[index].material.is_empty() && !self.next[index].claimed
    }

    /// Write a final value into the next-buffer slot at `index`,
    /// claiming it.
    pub fn write_next(&mut self, index: usize, cell: Cell) {
        debug_assert!(
            !self.next[index].claimed,
            "slot {index} written twice in one tick",
        );
        self.next[index] = Cell {
            claimed: true,
            ..cell
        };
        self.claims += 1;
    }

    /// Move `moved` into `dst` and the displaced current occupant of
    /// `dst` into the processed cell's slot, claiming both.
    ///
    /// `moved` is normally [`RuleContext::cell`] with adjusted
    /// velocity; passing it explicitly lets the rule set momentum on
    /// the way out.
    pub fn swap_into(&mut self, dst: usize, moved: Cell) {
        debug_assert_ne!(dst, self.index);
        let displaced = self.current[dst];
        self.write_next(dst, moved);
        self.write_next(self.index, displaced);
    }

    /// Additively heat the next-buffer slot at `index`, saturating at
    /// the temperature ceiling.
    ///
    /// Claimed slots hold final values and are skipped; heat is an
    /// adjustment, not a claiming write.
    pub fn heat_neighbor(&mut self, index: usize, delta: u16) {
        if !self.next[index].claimed {
            self.next[index].heat_by(delta);
        }
    }

    /// Bernoulli draw from the injected RNG: `true` with probability
    /// `p` (clamped to `[0, 1]`).
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random::<f64>() < p
    }

    /// The injected RNG, for draws [`RuleContext::chance`] does not
    /// cover.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Number of claiming writes made through this context.
    pub fn claims(&self) -> u64 {
        self.claims
    }
}
