/*!
Decision oracles --- from a formula and a budget of conflicts to a verdict.

An oracle answers whether a formula is satisfiable, though it may decline to answer once the budget is spent.
So, a [Verdict] is one of:
- [Satisfiable](Verdict::Satisfiable), with a [Model] total over the atoms of the formula.
- [Unsatisfiable](Verdict::Unsatisfiable).
- [Unknown](Verdict::Unknown), if the budget (or some other limit) was exhausted before either of the above was established.

Unknown is never conflated with unsatisfiable.

The oracle used by default is [CdclOracle], which solves each formula in a fresh [context](crate::context).
Other oracles may be used by implementing [DecisionOracle].

```rust
# use otter_coloring::config::OracleConfig;
# use otter_coloring::oracle::{CdclOracle, DecisionOracle, Verdict};
# use otter_coloring::structures::formula::Formula;
# use otter_coloring::structures::literal::Literal;
let mut formula = Formula::with_atoms(2);
let p = Literal::new(1, true);
let q = Literal::new(2, true);
formula.add_clause(vec![p, q].into()).unwrap();
formula.add_clause(vec![-p, q].into()).unwrap();

let mut oracle = CdclOracle::from_config(OracleConfig::default());
match oracle.solve(&formula, 10) {
    Ok(Verdict::Satisfiable(model)) => assert_eq!(model.is_true(2), Some(true)),
    _ => panic!("expected a model"),
}
```
*/

use crate::{
    config::{ConflictBudget, OracleConfig},
    context::Context,
    misc::log::targets,
    reports::Report,
    structures::{formula::Formula, literal::Atom},
    types::err::{self},
};

/// An assignment of values to atoms `1..=count`, as signed integers whose sign gives the value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    values: Vec<i32>,
}

impl Model {
    /// The signed value of (1-based) `atom`, if within the model.
    pub fn value(&self, atom: Atom) -> Option<i32> {
        match atom {
            0 => None,
            _ => self.values.get(atom as usize - 1).copied(),
        }
    }

    /// The truth of (1-based) `atom`, if within the model.
    pub fn is_true(&self, atom: Atom) -> Option<bool> {
        self.value(atom).map(|value| value > 0)
    }

    /// A count of atoms in the model.
    pub fn atom_count(&self) -> usize {
        self.values.len()
    }

    /// The signed values of the model, in order of atom.
    pub fn values(&self) -> &[i32] {
        &self.values
    }
}

impl From<Vec<i32>> for Model {
    fn from(values: Vec<i32>) -> Self {
        Model { values }
    }
}

/// The answer of an oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The formula is satisfiable, on the model given.
    Satisfiable(Model),

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// The oracle gave up.
    Unknown,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable(_) => write!(f, "SAT"),
            Self::Unsatisfiable => write!(f, "UNSAT"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A bounded decision procedure for satisfiability.
pub trait DecisionOracle {
    /// A verdict on `formula`, within a budget of conflicts.
    fn solve(&mut self, formula: &Formula, budget: ConflictBudget)
        -> Result<Verdict, err::ErrorKind>;
}

/// An oracle which solves each formula in a fresh [Context].
#[derive(Clone, Debug)]
pub struct CdclOracle {
    config: OracleConfig,
}

impl CdclOracle {
    /// An oracle whose contexts are built from `config`.
    pub fn from_config(config: OracleConfig) -> Self {
        CdclOracle { config }
    }

    /// The configuration of contexts built by the oracle.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }
}

impl Default for CdclOracle {
    fn default() -> Self {
        Self::from_config(OracleConfig::default())
    }
}

impl DecisionOracle for CdclOracle {
    fn solve(
        &mut self,
        formula: &Formula,
        budget: ConflictBudget,
    ) -> Result<Verdict, err::ErrorKind> {
        let mut context = Context::from_config(self.config.clone(), formula.atom_count());
        for clause in formula.clauses() {
            context.add_clause(clause.literals())?;
        }

        let report = context.solve(budget)?;
        log::debug!(target: targets::ORACLE, "{report} with {} atoms, {} clauses, {} conflicts, {} learnt, {} restarts in {:.2?}", formula.atom_count(), formula.clause_count(), context.counters.total_conflicts, context.clause_db.addition_count(), context.counters.restarts, context.counters.time);

        let verdict = match report {
            Report::Satisfiable => Verdict::Satisfiable(Model::from(context.model()?)),
            Report::Unsatisfiable => Verdict::Unsatisfiable,
            Report::Unknown => Verdict::Unknown,
        };
        Ok(verdict)
    }
}
