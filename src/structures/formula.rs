//! Formulas --- ordered collections of clauses, read as a conjunction.
//!
//! A formula records the count of atoms it was built over, so a [model](crate::oracle::Model) may be total over the formula even if some atom does not occur in any clause.
//!
//! ```rust
//! # use otter_coloring::structures::formula::Formula;
//! # use otter_coloring::structures::literal::Literal;
//! let mut formula = Formula::with_atoms(2);
//! let p = Literal::new(1, true);
//! let q = Literal::new(2, true);
//!
//! assert!(formula.add_clause(vec![p, q].into()).is_ok());
//! assert!(formula.add_clause(vec![-p].into()).is_ok());
//! assert!(formula.add_clause(vec![].into()).is_err());
//!
//! assert_eq!(formula.as_dimacs(), "p cnf 2 2\n1 2 0\n-1 0\n");
//! ```

use crate::types::err::{self};

use super::{clause::Clause, literal::Atom};

/// A formula, as an ordered collection of (non-empty) clauses over atoms `1..=atom_count`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    atom_count: Atom,
    clauses: Vec<Clause>,
}

impl Formula {
    /// An empty formula over the atoms `1..=atom_count`.
    pub fn with_atoms(atom_count: Atom) -> Self {
        Formula {
            atom_count,
            clauses: Vec::default(),
        }
    }

    /// An empty formula over the atoms `1..=atom_count`, with space reserved for `capacity` clauses.
    pub fn with_capacity(atom_count: Atom, capacity: usize) -> Self {
        Formula {
            atom_count,
            clauses: Vec::with_capacity(capacity),
        }
    }

    /// Appends a clause to the formula.
    ///
    /// Empty clauses are refused, as are clauses mentioning atoms outside of the formula.
    pub fn add_clause(&mut self, clause: Clause) -> Result<(), err::ClauseDBError> {
        if clause.is_empty() {
            return Err(err::ClauseDBError::EmptyClause);
        }
        if let Some(unknown) = clause
            .literals()
            .iter()
            .find(|literal| literal.atom() > self.atom_count)
        {
            return Err(err::ClauseDBError::UnknownAtom(unknown.atom()));
        }
        self.clauses.push(clause);
        Ok(())
    }

    /// The clauses of the formula, in order of addition.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// A count of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of atoms the formula is over.
    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }

    /// The formula in DIMACS form, with a problem line.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = format!("p cnf {} {}\n", self.atom_count, self.clauses.len());
        for clause in &self.clauses {
            the_string.push_str(&clause.as_dimacs(true));
            the_string.push('\n');
        }
        the_string
    }
}
