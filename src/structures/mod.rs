//! Structures of a refinement, and of the formulas given to an oracle.
//!
//! - A [graph] is the instance to be colored.
//! - A [coloring] maps each vertex of a graph to a color.
//! - [Literals](literal) are atoms paired with a polarity, [clauses](clause) are disjunctions of literals, and [formulas](formula) are conjunctions of clauses.

pub mod clause;
pub mod coloring;
pub mod formula;
pub mod graph;
pub mod literal;
