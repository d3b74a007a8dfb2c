use std::time::Duration;

use crate::{config::ConflictBudget, generic::luby::Luby};

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of every conflict analysed during a solve.
    pub total_conflicts: ConflictBudget,

    /// A count of conflicts analysed since the last restart.
    ///
    /// As u32 rather than a u64 for easier interaction with scheduling variables.
    pub fresh_conflicts: u32,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// The number of restarts through a solve.
    pub restarts: usize,

    /// The time taken during a solve.
    pub time: Duration,

    /// The current element in the luby sequence.
    pub luby: Luby,
}

impl Default for Counters {
    fn default() -> Self {
        let mut luby = Luby::default();
        luby.next();

        Counters {
            fresh_conflicts: 0,

            total_decisions: 0,
            total_iterations: 0,
            total_conflicts: 0,

            restarts: 0,
            time: Duration::from_secs(0),

            luby,
        }
    }
}
