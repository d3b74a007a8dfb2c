/*!
The context --- to which clauses are added and within which a solve takes place.

A context is built for a fixed count of atoms, and is used for a single solve.
The [oracle](crate::oracle) builds a fresh context for each formula it is given, as formulas for distinct counts of colors share no structure worth keeping.

# Example
```rust
# use otter_coloring::config::OracleConfig;
# use otter_coloring::context::Context;
# use otter_coloring::reports::Report;
# use otter_coloring::structures::literal::Literal;
let mut the_context = Context::from_config(OracleConfig::default(), 2);

let p = Literal::new(1, true);
let q = Literal::new(2, true);

assert!(the_context.add_clause(&[p, q]).is_ok());
assert!(the_context.add_clause(&[-p]).is_ok());

assert_eq!(the_context.solve(10), Ok(Report::Satisfiable));
assert_eq!(the_context.model(), Ok(vec![-1, 2]));
```
*/

mod counters;
pub use counters::Counters;

use rand::SeedableRng;

use crate::{
    config::OracleConfig,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, ClauseKey, LevelIndex},
    generic::minimal_pcg::MinimalPCG32,
    reports::Report,
    structures::literal::{Atom, Literal},
    types::err::{self, ErrorKind},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// The consistency of the database is unknown, and a solve is underway.
    Solving,

    /// The database is known to be consistent, with a complete valuation.
    Satisfiable,

    /// The database is known to be inconsistent.
    Unsatisfiable,

    /// A solve was interrupted, by the conflict budget or by the time limit.
    Interrupted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Interrupted => write!(f, "Interrupted"),
        }
    }
}

/// A context, using [MinimalPCG32] as a source of randomness.
pub struct Context {
    /// The configuration of a context.
    pub config: OracleConfig,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail of assignments.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: MinimalPCG32,

    /// Marks on atoms, used during conflict analysis and cleared after.
    pub(crate) analysis_marks: Vec<bool>,
}

impl Context {
    /// Creates a context over atoms `1..=atom_count` from some given configuration.
    pub fn from_config(config: OracleConfig, atom_count: Atom) -> Self {
        let mut rng = MinimalPCG32::seed_from_u64(config.seed);
        Context {
            atom_db: AtomDB::new(atom_count, &config, &mut rng),
            clause_db: ClauseDB::new(atom_count as usize),
            trail: Trail::default(),

            config,

            counters: Counters::default(),
            state: ContextState::Input,
            rng,

            analysis_marks: vec![false; atom_count as usize + 1],
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// Adds a clause to the context.
    ///
    /// Duplicate literals are removed, tautologies are skipped, and literals falsified at level zero are dropped.
    /// Clauses satisfied at level zero are skipped.
    /// If no literal remains the context is unsatisfiable, and if a single literal remains the literal is assigned at level zero.
    ///
    /// Clauses may only be added before any decision has been made.
    pub fn add_clause(&mut self, literals: &[Literal]) -> Result<(), ErrorKind> {
        if self.trail.decision_is_made() {
            return Err(err::ClauseDBError::DecisionMade.into());
        }
        if self.state == ContextState::Unsatisfiable {
            return Ok(());
        }

        let mut clause = Vec::with_capacity(literals.len());
        for &literal in literals {
            if literal.atom() as usize > self.atom_db.count() {
                return Err(err::ClauseDBError::UnknownAtom(literal.atom()).into());
            }
            match self.atom_db.value_of_literal(literal) {
                Some(true) => return Ok(()),
                Some(false) => {}
                None => clause.push(literal),
            }
        }

        clause.sort_unstable_by_key(|literal| (literal.atom(), literal.polarity()));
        clause.dedup();
        if clause.windows(2).any(|pair| pair[0].atom() == pair[1].atom()) {
            return Ok(());
        }

        match clause.len() {
            0 => self.state = ContextState::Unsatisfiable,
            1 => self.assign(clause[0], None),
            _ => {
                self.clause_db.store_original(clause);
            }
        }
        Ok(())
    }

    /// Values the atom of `literal` at the current level, and queues the literal for propagation.
    pub fn assign(&mut self, literal: Literal, reason: Option<ClauseKey>) {
        self.atom_db.set_value(literal, self.trail.level(), reason);
        self.trail.literals.push(literal);
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// The model found by a solve, as a signed integer for each atom in order.
    ///
    /// Errors if the context is not known to be satisfiable.
    pub fn model(&self) -> Result<Vec<i32>, ErrorKind> {
        if self.state != ContextState::Satisfiable {
            return Err(ErrorKind::InvalidState);
        }
        let model = (1..=self.atom_db.count() as Atom)
            .map(|atom| match self.atom_db.value_of(atom) {
                Some(true) => atom as i32,
                _ => -(atom as i32),
            })
            .collect();
        Ok(model)
    }
}
