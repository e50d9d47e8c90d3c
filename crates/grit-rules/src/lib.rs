//! Material transition rules for Grit simulations.
//!
//! Each material's physics lives in one [`Rule`] implementation:
//! [`SandRule`], [`WaterRule`], [`FireRule`], [`RockRule`]. Rules are
//! stateless operators invoked once per occupied cell per tick; they
//! read the current buffer, write claimed moves into the next buffer
//! through a [`RuleContext`], and draw randomness only from the RNG
//! the caller injected.
//!
//! All physical tunables (tie-break biases, temperature thresholds,
//! heat magnitudes) are builder parameters with documented defaults —
//! none is hard-coded.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod context;
mod fire;
mod rock;
mod rule;
mod sand;
mod water;

pub use context::RuleContext;
pub use fire::{FireRule, FireRuleBuilder};
pub use rock::{RockRule, RockRuleBuilder};
pub use rule::Rule;
pub use sand::{SandRule, SandRuleBuilder};
pub use water::{WaterRule, WaterRuleBuilder};

/// The four default-configuration rules, one per movable material.
///
/// Convenience for hosts that want stock physics; tuned simulations
/// build each rule through its builder instead.
pub fn standard_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(SandRule::builder().build().expect("default config is valid")),
        Box::new(WaterRule::builder().build().expect("default config is valid")),
        Box::new(FireRule::builder().build().expect("default config is valid")),
        Box::new(RockRule::builder().build().expect("default config is valid")),
    ]
}
