//! Determines the satisfiability of the clauses in a context, within a budget of conflicts.
//!
//! # Overview
//!
//! The loop is the familiar conflict-driven clause-learning loop:
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |
//!   |       +---------------+
//!   |               ⌃
//!   |               |
//!   |               | if propagation is exhausted, and the valuation is partial
//!   |               |
//!   |               |              +-----> satisfiable, if the valuation is complete
//!   ⌄   +--------------------+     |
//! --+-->|     propagate      |-----+
//!   ⌃   +--------------------+     |
//!   |               |              +-----> unsatisfiable, if a conflict is found at level zero
//!   |               |
//!   |               | if a conflict is found above level zero, and the budget permits
//!   |               |
//!   |               ⌄
//!   |       +-------------------+
//!   +-------| analyse, backjump |
//!           +-------------------+
//! ```
//!
//! # Budget
//!
//! The budget is a count of conflicts which may be analysed.
//! If a conflict is found above level zero once the budget is spent, the solve is interrupted and the report is [Unknown](Report::Unknown).
//! A conflict at level zero requires no analysis, and so is reported as [Unsatisfiable](Report::Unsatisfiable) regardless of the budget.
//!
//! Likewise, the optional time limit of the configuration is checked on each iteration.
//!
//! # Restarts
//!
//! When restarts are permitted, a restart is made whenever the conflicts since the last restart reach the current element of the luby sequence multiplied by the luby unit.
//!
//! # Literature
//!
//! The core solve procedure was developed by reading [Decision Procedures](https://doi.org/10.1007/978-3-662-50497-0)
//! and the [Handbook of satisfiability](https://www.iospress.com/catalog/books/handbook-of-satisfiability-2).

use crate::{
    config::ConflictBudget,
    context::{Context, ContextState},
    misc::log::targets::{self},
    reports::Report,
    types::err::{self},
};

impl Context {
    /// Solves the clauses of the context, analysing at most `budget` conflicts.
    pub fn solve(&mut self, budget: ConflictBudget) -> Result<Report, err::ErrorKind> {
        let total_time = std::time::Instant::now();

        if self.state == ContextState::Unsatisfiable {
            return Ok(self.report());
        }
        self.state = ContextState::Solving;

        'solve_loop: loop {
            self.counters.total_iterations += 1;

            self.counters.time = total_time.elapsed();
            if self.time_limit_interrupt() {
                log::trace!(target: targets::ORACLE, "Time limit reached");
                self.state = ContextState::Interrupted;
                break 'solve_loop;
            }

            match self.propagate() {
                None => match self.make_decision() {
                    Some(decision) => {
                        self.trail.push_level();
                        self.assign(decision, None);
                    }

                    None => {
                        self.state = ContextState::Satisfiable;
                        break 'solve_loop;
                    }
                },

                Some(_) if self.trail.level() == 0 => {
                    self.state = ContextState::Unsatisfiable;
                    break 'solve_loop;
                }

                Some(_) if self.conflict_budget_interrupt(budget) => {
                    log::trace!(target: targets::ORACLE, "Conflict budget of {budget} spent");
                    self.state = ContextState::Interrupted;
                    break 'solve_loop;
                }

                Some(key) => {
                    let analysis = self.conflict_analysis(key)?;
                    self.backjump(analysis.level);

                    match analysis.clause.len() {
                        1 => self.assign(analysis.clause[0], None),
                        _ => {
                            let literal = analysis.clause[0];
                            let key = self.clause_db.store_addition(analysis.clause);
                            self.assign(literal, Some(key));
                        }
                    }

                    self.atom_db.decay_activity();

                    self.counters.total_conflicts += 1;
                    self.counters.fresh_conflicts += 1;

                    if self.config.restart.value && self.luby_fresh_conflict_interrupt() {
                        self.counters.luby.next();
                        self.backjump(0);
                        self.counters.fresh_conflicts = 0;
                        self.counters.restarts += 1;
                    }
                }
            }
        }

        self.counters.time = total_time.elapsed();
        log::trace!(target: targets::ORACLE, "{} after {} conflicts, {} decisions, {} restarts in {:.2?}", self.state, self.counters.total_conflicts, self.counters.total_decisions, self.counters.restarts, self.counters.time);

        Ok(self.report())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::OracleConfig, context::Context, reports::Report, structures::literal::Literal,
    };

    fn literal(int: i32) -> Literal {
        Literal::try_from(int).unwrap()
    }

    fn pigeonhole(pigeons: u32, holes: u32) -> Context {
        let atom = |p: u32, h: u32| p * holes + h + 1;
        let mut context = Context::from_config(OracleConfig::default(), pigeons * holes);

        for p in 0..pigeons {
            let clause = (0..holes)
                .map(|h| Literal::new(atom(p, h), true))
                .collect::<Vec<_>>();
            assert!(context.add_clause(&clause).is_ok());
        }
        for h in 0..holes {
            for p in 0..pigeons {
                for q in (p + 1)..pigeons {
                    let clause = [Literal::new(atom(p, h), false), Literal::new(atom(q, h), false)];
                    assert!(context.add_clause(&clause).is_ok());
                }
            }
        }
        context
    }

    #[test]
    fn satisfiable_model_satisfies() {
        let clauses = [vec![1, 2, 3], vec![-1, -2], vec![-2, -3], vec![-1, -3], vec![-3]];
        let mut context = Context::from_config(OracleConfig::default(), 3);
        for clause in &clauses {
            let clause = clause.iter().map(|&i| literal(i)).collect::<Vec<_>>();
            assert!(context.add_clause(&clause).is_ok());
        }

        assert_eq!(context.solve(100), Ok(Report::Satisfiable));
        let model = context.model().unwrap();
        for clause in &clauses {
            assert!(clause.iter().any(|i| model.contains(i)));
        }
    }

    #[test]
    fn pigeonhole_unsatisfiable() {
        let mut context = pigeonhole(5, 4);
        assert_eq!(context.solve(100_000), Ok(Report::Unsatisfiable));
        assert!(context.clause_db.addition_count() > 0);
    }

    #[test]
    fn pigeonhole_satisfiable() {
        let mut context = pigeonhole(4, 4);
        assert_eq!(context.solve(100_000), Ok(Report::Satisfiable));
    }

    #[test]
    fn budget_exhausted() {
        let mut context = pigeonhole(7, 6);
        assert_eq!(context.solve(0), Ok(Report::Unknown));
        assert_eq!(context.counters.total_conflicts, 0);
    }

    #[test]
    fn budget_bounds_analysis() {
        let mut context = pigeonhole(7, 6);
        assert_eq!(context.solve(3), Ok(Report::Unknown));
        assert_eq!(context.counters.total_conflicts, 3);
        assert!(context.clause_db.addition_count() <= 3);
    }
}
