/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and returns an asserting clause, together with the level to backjump to in order for the clause to assert its literal.

Analysis resolves the conflict clause with the reasons for literals valued on the current level, in reverse order of assignment, until a single literal from the current level remains.
That literal is the *first unique implication point*, and its negation is the literal asserted by the resulting clause.

Atoms valued at level zero are skipped, as the negation of any such literal is a consequence of the formula.

Each atom involved in the resolution has its activity bumped.

For the method, see: [conflict_analysis](Context::conflict_analysis).

# Example

```rust,ignore
let analysis = self.conflict_analysis(key)?;
self.backjump(analysis.level);
```
*/

use crate::{
    context::Context,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::{self},
};

/// The result of conflict analysis.
pub struct Analysis {
    /// The learnt clause, with the asserted literal at position zero, and a literal of the greatest remaining level (if any) at position one.
    pub clause: Vec<Literal>,

    /// The level at which the clause asserts its literal.
    pub level: LevelIndex,
}

impl Context {
    /// For details on conflict analysis see the [analysis](crate::procedures::analysis) procedure.
    pub fn conflict_analysis(&mut self, key: ClauseKey) -> Result<Analysis, err::AnalysisError> {
        let current_level = self.trail.level();
        if current_level == 0 {
            return Err(err::AnalysisError::NoDecision);
        }
        log::trace!(target: targets::ANALYSIS, "Analysis of {key} at level {current_level}");

        // Position zero is reserved for the asserted literal.
        let mut clause = vec![Literal::new(1, true)];
        let mut pending = 0;
        let mut trail_index = self.trail.literals.len();
        let mut reason = key;
        let mut skip = 0;

        let asserted = loop {
            for &literal in self.clause_db.clauses[reason as usize].iter().skip(skip) {
                let atom = literal.atom();
                if self.analysis_marks[atom as usize] || self.atom_db.level_of(atom) == 0 {
                    continue;
                }
                self.analysis_marks[atom as usize] = true;
                self.atom_db.bump_activity(atom);

                if self.atom_db.level_of(atom) == current_level {
                    pending += 1;
                } else {
                    clause.push(literal);
                }
            }

            let literal = loop {
                trail_index = trail_index
                    .checked_sub(1)
                    .ok_or(err::AnalysisError::NoDecision)?;
                let literal = self.trail.literals[trail_index];
                if self.analysis_marks[literal.atom() as usize] {
                    break literal;
                }
            };

            self.analysis_marks[literal.atom() as usize] = false;
            pending -= 1;

            if pending == 0 {
                break literal;
            }

            reason = self
                .atom_db
                .reason_of(literal.atom())
                .ok_or(err::AnalysisError::MissingReason(literal.atom()))?;
            // The literal asserted by a reason is at position zero.
            skip = 1;
        };

        clause[0] = asserted.negate();

        for literal in &clause[1..] {
            self.analysis_marks[literal.atom() as usize] = false;
        }

        let mut level = 0;
        if clause.len() > 1 {
            let mut deepest = 1;
            for position in 2..clause.len() {
                if self.atom_db.level_of(clause[position].atom())
                    > self.atom_db.level_of(clause[deepest].atom())
                {
                    deepest = position;
                }
            }
            clause.swap(1, deepest);
            level = self.atom_db.level_of(clause[1].atom());
        }

        log::trace!(target: targets::ANALYSIS, "Learnt {} literals, asserting {} at level {level}", clause.len(), clause[0]);

        Ok(Analysis { clause, level })
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::OracleConfig, context::Context, structures::literal::Literal};

    fn literal(int: i32) -> Literal {
        Literal::try_from(int).unwrap()
    }

    #[test]
    fn first_uip() {
        // Deciding 1 and then 2 forces 3, and 3 conflicts with 1 and 2 through 4.
        let mut context = Context::from_config(OracleConfig::default(), 4);
        for clause in [vec![-2, 3], vec![-1, -3, 4], vec![-1, -3, -4]] {
            let clause = clause.into_iter().map(literal).collect::<Vec<_>>();
            assert!(context.add_clause(&clause).is_ok());
        }

        context.trail.push_level();
        context.assign(literal(1), None);
        assert_eq!(context.propagate(), None);

        context.trail.push_level();
        context.assign(literal(2), None);
        let key = context.propagate().unwrap();

        let analysis = context.conflict_analysis(key).unwrap();
        assert_eq!(analysis.clause, vec![literal(-3), literal(-1)]);
        assert_eq!(analysis.level, 1);
    }

    #[test]
    fn analysis_requires_a_decision() {
        let mut context = Context::from_config(OracleConfig::default(), 2);
        assert!(context.add_clause(&[literal(1), literal(2)]).is_ok());
        assert!(context.conflict_analysis(0).is_err());
    }
}
