//! The [`Rule`] trait.

use crate::context::RuleContext;
use grit_core::Material;

/// A material's per-cell transition function.
///
/// The scheduler invokes the rule registered for a cell's
/// current-buffer material once per tick, sweeping the grid bottom row
/// to top, left to right within a row, and skipping cells whose next
/// slot is already claimed.
///
/// # Contract
///
/// - `step()` MUST be deterministic given the context's RNG state:
///   randomness comes only from [`RuleContext::chance`] /
///   [`RuleContext::rng`], never from ambient sources.
/// - `&self` — rules are stateless; tunables are fixed at
///   construction, per-cell state lives in the grid.
/// - Every slot a rule finally writes is claimed by the write; a rule
///   never touches a slot that is already claimed this tick.
/// - A missing neighbor (grid boundary) is blocked, not an error;
///   `step()` is total and infallible.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores rules as
/// `Box<dyn Rule>` keyed by material.
pub trait Rule: Send + 'static {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// The material this rule handles. Exactly one rule per material
    /// may be registered with an engine; `Material::Empty` is never
    /// processed and may not have a rule.
    fn material(&self) -> Material;

    /// Process one cell for one tick.
    ///
    /// Called only when the cell's next-buffer slot is unclaimed. The
    /// context is positioned on the cell; the default outcome (cell
    /// stays put) is already seeded in the next buffer, so a rule that
    /// writes nothing leaves the cell in place.
    fn step(&self, ctx: &mut RuleContext<'_>);
}
