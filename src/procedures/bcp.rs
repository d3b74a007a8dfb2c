/*!
A context method for boolean constraint propagation.

See [Context::bcp] for the relevant context method.

# Overview
Propagates an atom being assigned some value, given as a literal.

This is done by examining clauses watching the literal with the opposite polarity and updating the watches of the clause, if possible, queuing the consequence of the asserting clause, or identifying the clause conflicts with the current valuation.

# Complications

The watch list of the falsified literal is taken from the clause database for the duration of the propagation and restored after.
This avoids a mutable borrow of the watch list conflicting with the mutable borrow of a clause when a watch is moved.
Still, the *taken* watch list is never pushed to during a propagation.
For, the literal bcp is being called on has been given some value, and so the falsified literal is not a candidate for an updated watch.

# Example

```rust,ignore
match self.propagate() {
    Some(key) => {
        // Analysis of the conflict…
    }
    None => {
        // Some decision…
    }
}
```
*/

use crate::{
    context::Context,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::literal::Literal,
};

impl Context {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// Returns the key of a clause falsified by the assignment, if any.
    pub fn bcp(&mut self, literal: Literal) -> Option<ClauseKey> {
        let falsified = literal.negate();
        let mut watchers = std::mem::take(&mut self.clause_db.watches[falsified.index()]);

        let mut conflict = None;
        let mut index = 0;
        let mut kept = 0;

        'watch_loop: while index < watchers.len() {
            let key = watchers[index];
            index += 1;

            let clause = &mut self.clause_db.clauses[key as usize];
            if clause[0] == falsified {
                clause.swap(0, 1);
            }

            let watch = clause[0];
            if self.atom_db.value_of_literal(watch) == Some(true) {
                watchers[kept] = key;
                kept += 1;
                continue 'watch_loop;
            }

            for position in 2..clause.len() {
                if self.atom_db.value_of_literal(clause[position]) != Some(false) {
                    clause.swap(1, position);
                    self.clause_db.watches[clause[1].index()].push(key);
                    continue 'watch_loop;
                }
            }

            watchers[kept] = key;
            kept += 1;

            match self.atom_db.value_of_literal(watch) {
                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {key} and {literal} is contradiction.");
                    while index < watchers.len() {
                        watchers[kept] = watchers[index];
                        kept += 1;
                        index += 1;
                    }
                    conflict = Some(key);
                }

                None => {
                    self.atom_db.set_value(watch, self.trail.level(), Some(key));
                    self.trail.literals.push(watch);
                }

                Some(true) => {}
            }
        }

        watchers.truncate(kept);
        self.clause_db.watches[falsified.index()] = watchers;

        conflict
    }

    /// Propagates literals in the queue until the queue is exhausted or a conflict is found.
    ///
    /// Returns the key of the conflicting clause, if any.
    pub fn propagate(&mut self) -> Option<ClauseKey> {
        while let Some(literal) = self.trail.next_in_queue() {
            if let Some(key) = self.bcp(literal) {
                return Some(key);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::OracleConfig, context::Context, structures::literal::Literal};

    fn literal(int: i32) -> Literal {
        Literal::try_from(int).unwrap()
    }

    #[test]
    fn chain_of_implications() {
        let mut context = Context::from_config(OracleConfig::default(), 4);
        for clause in [[-1, 2], [-2, 3], [-3, 4]] {
            let clause = clause.map(literal);
            assert!(context.add_clause(&clause).is_ok());
        }
        assert!(context.add_clause(&[literal(1)]).is_ok());

        assert_eq!(context.propagate(), None);
        for atom in 1..=4 {
            assert_eq!(context.atom_db.value_of(atom), Some(true));
        }
        assert_eq!(context.atom_db.reason_of(1), None);
        assert!(context.atom_db.reason_of(4).is_some());
    }

    #[test]
    fn conflict_found() {
        let mut context = Context::from_config(OracleConfig::default(), 3);
        for clause in [[-1, 2], [-1, 3], [-2, -3]] {
            let clause = clause.map(literal);
            assert!(context.add_clause(&clause).is_ok());
        }
        assert!(context.add_clause(&[literal(1)]).is_ok());
        assert!(context.propagate().is_some());
    }

    #[test]
    fn watches_move_to_unvalued_literals() {
        let mut context = Context::from_config(OracleConfig::default(), 4);
        assert!(context.add_clause(&[1, 2, 3, 4].map(literal)).is_ok());
        assert!(context.add_clause(&[literal(-1)]).is_ok());
        assert!(context.add_clause(&[literal(-2)]).is_ok());

        assert_eq!(context.propagate(), None);
        assert_eq!(context.atom_db.value_of(3), None);
        assert_eq!(context.atom_db.value_of(4), None);
    }
}
