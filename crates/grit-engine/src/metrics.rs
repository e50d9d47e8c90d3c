//! Per-tick metrics for the simulation engine.

/// Counters collected during a single [`Engine::step`](crate::Engine::step).
///
/// Populated after each tick; hosts read them for telemetry and
/// activity displays (a tick with zero claims moved nothing).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Cells visited by the sweep (always the full grid).
    pub cells_visited: u64,
    /// Rule invocations (occupied, unclaimed cells with a registered
    /// rule).
    pub rules_invoked: u64,
    /// Claiming writes made by rules — moves, transmutations, and
    /// momentum updates.
    pub cells_claimed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.cells_visited, 0);
        assert_eq!(m.rules_invoked, 0);
        assert_eq!(m.cells_claimed, 0);
    }
}
