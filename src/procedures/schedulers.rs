/*!
Schedulers, used to interrupt a solve for some task.

These return true if an interrupt is due, and false otherwise.
*/

use crate::context::Context;

impl Context {
    /// Returns whether it is time for a restart, based on whether fresh conflicts have reached the current luby element scaled by the luby unit.
    pub fn luby_fresh_conflict_interrupt(&self) -> bool {
        let interval = (self.config.luby_u.value as u64) * (self.counters.luby.current() as u64);
        self.counters.fresh_conflicts as u64 >= interval
    }

    /// Returns whether the conflict budget is spent.
    pub fn conflict_budget_interrupt(&self, budget: crate::config::ConflictBudget) -> bool {
        self.counters.total_conflicts >= budget
    }

    /// Returns whether the time limit of the context, if any, has passed.
    pub fn time_limit_interrupt(&self) -> bool {
        self.config
            .time_limit
            .is_some_and(|limit| self.counters.time > limit)
    }
}
