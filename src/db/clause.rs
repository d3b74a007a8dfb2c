//! The clause database.
//!
//! Clauses of two or more literals, each watching the literals at positions zero and one.
//! Watch lists are indexed by [Literal::index], and the list of a literal contains the key of each clause watching the literal.
//!
//! When a clause asserts a literal the literal is placed at position zero, and so the literal asserted by the reason for some value is always at position zero.

use crate::{db::ClauseKey, structures::literal::Literal};

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    pub(crate) clauses: Vec<Vec<Literal>>,
    pub(crate) watches: Vec<Vec<ClauseKey>>,
    original_count: usize,
}

impl ClauseDB {
    /// A database for clauses over atoms `1..=atom_count`.
    pub fn new(atom_count: usize) -> Self {
        ClauseDB {
            clauses: Vec::default(),
            watches: vec![Vec::default(); 2 * (atom_count + 1)],
            original_count: 0,
        }
    }

    /// Stores an original clause, watching the first two literals.
    pub fn store_original(&mut self, literals: Vec<Literal>) -> ClauseKey {
        self.original_count += 1;
        self.store(literals)
    }

    /// Stores an added clause, watching the first two literals.
    pub fn store_addition(&mut self, literals: Vec<Literal>) -> ClauseKey {
        self.store(literals)
    }

    fn store(&mut self, literals: Vec<Literal>) -> ClauseKey {
        debug_assert!(literals.len() > 1);
        let key = self.clauses.len() as ClauseKey;
        self.watches[literals[0].index()].push(key);
        self.watches[literals[1].index()].push(key);
        self.clauses.push(literals);
        key
    }

    /// A count of all stored clauses.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of stored added clauses.
    pub fn addition_count(&self) -> usize {
        self.clauses.len() - self.original_count
    }
}
