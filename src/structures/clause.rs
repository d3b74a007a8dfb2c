//! Clauses --- disjunctions of literals.
//!
//! A clause is stored as an ordered sequence of literals.
//! The order of literals is that of construction, as encodings are required to be reproducible.

use super::literal::Literal;

/// A clause, as an ordered sequence of literals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// A clause containing the given literals, in order.
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause { literals }
    }

    /// The literals of the clause.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// True if the clause has no literals, and so is unsatisfiable.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The clause as a string in DIMACS form, optionally terminated by a zero.
    pub fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in &self.literals {
            the_string.push_str(&format!("{literal} "));
        }
        if zero {
            the_string.push('0');
        } else {
            the_string.pop();
        }
        the_string
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause::new(literals)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_dimacs(false))
    }
}
