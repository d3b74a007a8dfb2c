//! Databases for holding information relevant to a solve.
//!
//!   - [The atom database](crate::db::atom)
//!     + Properties of atoms.
//!       * Valuation, with the level and reason of each value.
//!       * Previous values, for phase saving.
//!       * Activity, on a heap.
//!   - [The clause database](crate::db::clause)
//!     + A collection of clauses of two or more literals, each indexed by a clause key, and the watch lists of each literal.
//!       From an external perspective there are two kinds of clause:
//!       * Original clauses, added to the context from some formula.
//!       * Added clauses, derived by conflict analysis.
//!         Every added clause is a consequence of the original clauses.
//!
//!       Unit clauses are not stored, and instead are assigned at level zero.
//!   - [The trail](crate::db::trail)
//!     + The assignments made, in order, split into levels, with a queue of assignments to propagate.

pub mod atom;
pub mod clause;
pub mod trail;

/// The index of a decision level.
pub type LevelIndex = u32;

/// The key to a clause in the [clause database](crate::db::clause).
pub type ClauseKey = u32;
