/*!
Iterative refinement of a coloring, from a heuristic upper bound down.

A refinement is a small state machine:

```none
Init ---> Probing(k0) ---> Probing(k') ---> … ---+--> Exhausted
                |                                 |
                +---------------------------------+--> Stopped
```

- *Init*: the comparison baseline is colored (and timed on its own), the cumulative clock is started, and the upper bound is colored.
  The first count of colors probed, `k0`, is the count of colors used by the upper bound.
- *Probing(k)*: unless the deadline has passed, the graph is encoded with `k` colors and given to the oracle with the conflict budget.
  + On a model, the coloring read from the model becomes the best coloring, and the next count probed is one fewer than the colors *used* by the coloring (which may be fewer than `k`).
    If no count remains to be probed the refinement is exhausted.
  + On unsatisfiable or unknown, the refinement is exhausted.
- *Exhausted*, *Stopped*: terminal.

So, the counts probed strictly decrease, and the search is never revisited at a larger count.

An unsatisfiable verdict on the first probe contradicts the heuristic coloring with `k0` colors, and is reported as an [EncodingInvariantViolation](err::RefinementError::EncodingInvariantViolation).
By contrast, an unknown verdict on the first probe is a valid outcome, and the best coloring reported is the heuristic's own.

```rust
# use otter_coloring::config::Config;
# use otter_coloring::oracle::CdclOracle;
# use otter_coloring::refinement::{Refinement, RefinementState, Termination};
# use otter_coloring::structures::graph::Graph;
let square = Graph::cycle(4);
let config = Config::default();
let mut oracle = CdclOracle::from_config(config.oracle.clone());

let mut refinement = Refinement::new("square", &square, &config);
assert_eq!(refinement.step(&mut oracle), Ok(RefinementState::Probing(2)));
assert_eq!(refinement.step(&mut oracle), Ok(RefinementState::Probing(1)));
assert_eq!(refinement.step(&mut oracle), Ok(RefinementState::Exhausted));

let report = refinement.report().unwrap();
assert_eq!(report.termination, Termination::Unsatisfiable { k: 1 });
assert_eq!(report.best_coloring().colors_used(), 2);
```
*/

use std::time::{Duration, Instant};

use crate::{
    config::Config,
    encoding::{self},
    heuristic::{self, Strategy},
    misc::log::targets,
    oracle::{DecisionOracle, Verdict},
    structures::{coloring::Coloring, graph::Graph},
    types::err::{self},
};

/// The state of a refinement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefinementState {
    /// No heuristic has been run.
    Init,

    /// The next probe is for a coloring with at most the given count of colors.
    Probing(usize),

    /// No further probe is to be made, as the oracle refuted or gave up on the last probe, or no count remains.
    Exhausted,

    /// The deadline passed before some probe.
    Stopped,
}

/// The reason a refinement terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The oracle refuted a coloring with `k` colors, and so the best coloring is optimal.
    Unsatisfiable { k: usize },

    /// The oracle gave up on a coloring with `k` colors.
    Unknown { k: usize },

    /// A coloring with a single color was found, and so no fewer colors remain to be probed.
    Floor,

    /// The deadline passed before a probe with `k` colors.
    DeadlineExceeded { k: usize },
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsatisfiable { k } => write!(f, "no coloring with {k} colors"),
            Self::Unknown { k } => write!(f, "budget exhausted with {k} colors"),
            Self::Floor => write!(f, "no fewer colors to consider"),
            Self::DeadlineExceeded { k } => write!(f, "deadline passed before {k} colors"),
        }
    }
}

/// A heuristic coloring, and the time taken to find it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeuristicRun {
    pub strategy: Strategy,
    pub coloring: Coloring,
    pub time: Duration,
}

impl HeuristicRun {
    /// Colors `graph` with `strategy`, timing the coloring.
    pub fn time(graph: &Graph, strategy: Strategy, seed: u64) -> Self {
        let start = Instant::now();
        let coloring = heuristic::color_seeded(graph, strategy, seed);
        HeuristicRun {
            strategy,
            coloring,
            time: start.elapsed(),
        }
    }

    /// The count of colors used.
    pub fn colors(&self) -> usize {
        self.coloring.colors_used()
    }
}

/// The outcome of a probe, without any model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A coloring using the given count of colors was found.
    Satisfiable { colors: usize },
    Unsatisfiable,
    Unknown,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable { colors } => write!(f, "SAT ({colors} colors)"),
            Self::Unsatisfiable => write!(f, "UNSAT"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A record of a single probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probe {
    /// The count of colors probed.
    pub k: usize,

    pub outcome: Outcome,

    /// A count of clauses in the encoding.
    pub clauses: usize,

    /// The time taken to encode and solve.
    pub iteration_time: Duration,

    /// The cumulative time of the refinement at the end of the probe.
    pub elapsed: Duration,
}

/// A coloring found by the oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Improvement {
    pub coloring: Coloring,

    /// The count of colors used by the coloring.
    pub colors: usize,

    /// The count of colors probed.
    pub k: usize,

    /// The cumulative time of the refinement when the coloring was found.
    pub found_at: Duration,

    /// The time taken by the probe which found the coloring.
    pub iteration_time: Duration,
}

/// A summary of a terminated refinement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefinementReport {
    pub instance: String,

    /// The heuristic coloring from which the refinement began.
    pub upper_bound: HeuristicRun,

    /// The heuristic coloring compared against.
    pub baseline: HeuristicRun,

    /// The best coloring found by the oracle, if any.
    pub best: Option<Improvement>,

    pub termination: Termination,

    /// Every probe made, in order.
    pub probes: Vec<Probe>,

    /// The cumulative time of the refinement, from the start of the upper bound heuristic.
    pub total_time: Duration,

    /// The cumulative time at which the oracle first found a coloring with as few colors as the baseline.
    pub matched_baseline_at: Option<Duration>,

    /// A count of vertices given more than one color by some model.
    pub malformed_vertices: usize,
}

impl RefinementReport {
    /// The best coloring available: the oracle's best, if any, and otherwise the upper bound.
    pub fn best_coloring(&self) -> &Coloring {
        match &self.best {
            Some(improvement) => &improvement.coloring,
            None => &self.upper_bound.coloring,
        }
    }

    /// The count of colors used by the best coloring available.
    pub fn best_colors(&self) -> usize {
        self.best_coloring().colors_used()
    }
}

/// A refinement of a coloring of a graph.
pub struct Refinement<'g> {
    instance: String,
    graph: &'g Graph,
    config: &'g Config,

    state: RefinementState,
    clock: Instant,

    upper_bound: Option<HeuristicRun>,
    baseline: Option<HeuristicRun>,
    best: Option<Improvement>,
    termination: Option<Termination>,

    probes: Vec<Probe>,
    matched_baseline_at: Option<Duration>,
    malformed_vertices: usize,
    total_time: Duration,
}

impl<'g> Refinement<'g> {
    /// A refinement of `graph`, named `instance`.
    pub fn new(instance: &str, graph: &'g Graph, config: &'g Config) -> Self {
        Refinement {
            instance: instance.to_string(),
            graph,
            config,

            state: RefinementState::Init,
            clock: Instant::now(),

            upper_bound: None,
            baseline: None,
            best: None,
            termination: None,

            probes: Vec::default(),
            matched_baseline_at: None,
            malformed_vertices: 0,
            total_time: Duration::ZERO,
        }
    }

    /// The current state of the refinement.
    pub fn state(&self) -> RefinementState {
        self.state
    }

    /// The probes made so far.
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Advances the refinement by one transition, returning the state reached.
    ///
    /// Errors if the refinement has terminated, if the first probe is refuted, or if the oracle fails.
    pub fn step<O: DecisionOracle + ?Sized>(
        &mut self,
        oracle: &mut O,
    ) -> Result<RefinementState, err::ErrorKind> {
        self.state = match self.state {
            RefinementState::Init => self.initialise(),
            RefinementState::Probing(k) => self.probe(k, oracle)?,
            RefinementState::Exhausted | RefinementState::Stopped => {
                return Err(err::RefinementError::Terminated.into())
            }
        };
        self.total_time = self.clock.elapsed();
        Ok(self.state)
    }

    /// Steps the refinement until termination, and returns the report.
    pub fn run<O: DecisionOracle + ?Sized>(
        mut self,
        oracle: &mut O,
    ) -> Result<RefinementReport, err::ErrorKind> {
        while matches!(
            self.state,
            RefinementState::Init | RefinementState::Probing(_)
        ) {
            self.step(oracle)?;
        }
        self.report()
    }

    /// The report of a terminated refinement.
    ///
    /// Errors if the refinement has yet to terminate.
    pub fn report(&self) -> Result<RefinementReport, err::ErrorKind> {
        let (Some(upper_bound), Some(baseline), Some(termination)) =
            (&self.upper_bound, &self.baseline, self.termination)
        else {
            return Err(err::ErrorKind::InvalidState);
        };

        Ok(RefinementReport {
            instance: self.instance.clone(),
            upper_bound: upper_bound.clone(),
            baseline: baseline.clone(),
            best: self.best.clone(),
            termination,
            probes: self.probes.clone(),
            total_time: self.total_time,
            matched_baseline_at: self.matched_baseline_at,
            malformed_vertices: self.malformed_vertices,
        })
    }

    fn initialise(&mut self) -> RefinementState {
        let baseline = HeuristicRun::time(
            self.graph,
            self.config.comparison_strategy.value,
            self.config.seed,
        );
        log::info!(target: targets::REFINEMENT, "{}: baseline of {} colors by {} in {:.2?}", self.instance, baseline.colors(), baseline.strategy, baseline.time);

        self.clock = Instant::now();
        let upper_bound = HeuristicRun::time(
            self.graph,
            self.config.upper_bound_strategy.value,
            self.config.seed,
        );
        log::info!(target: targets::REFINEMENT, "{}: upper bound of {} colors by {} in {:.2?}", self.instance, upper_bound.colors(), upper_bound.strategy, upper_bound.time);

        let k0 = upper_bound.colors();
        self.baseline = Some(baseline);
        self.upper_bound = Some(upper_bound);

        match k0 {
            0 => self.terminate(RefinementState::Exhausted, Termination::Floor),
            _ => RefinementState::Probing(k0),
        }
    }

    fn probe<O: DecisionOracle + ?Sized>(
        &mut self,
        k: usize,
        oracle: &mut O,
    ) -> Result<RefinementState, err::ErrorKind> {
        if let Some(deadline) = self.config.deadline {
            if self.clock.elapsed() >= deadline {
                log::info!(target: targets::REFINEMENT, "{}: deadline of {deadline:.2?} passed", self.instance);
                return Ok(self.terminate(
                    RefinementState::Stopped,
                    Termination::DeadlineExceeded { k },
                ));
            }
        }

        let iteration_start = Instant::now();
        let formula = encoding::encode(self.graph, k)?;
        let verdict = oracle.solve(&formula, self.config.oracle.conflict_budget.value)?;
        let iteration_time = iteration_start.elapsed();
        let elapsed = self.clock.elapsed();

        let first_probe = self.probes.is_empty();
        let mut record = |outcome| {
            log::info!(target: targets::REFINEMENT, "{}: {outcome} with {k} colors in {iteration_time:.2?}, {elapsed:.2?} elapsed", self.instance);
            self.probes.push(Probe {
                k,
                outcome,
                clauses: formula.clause_count(),
                iteration_time,
                elapsed,
            });
        };

        match verdict {
            Verdict::Satisfiable(model) => {
                let decoded = encoding::decode(&model, self.graph.vertex_count(), k)?;
                if let Some(edge) = decoded.coloring.conflict(self.graph) {
                    return Err(err::OracleError::ImproperModel { edge }.into());
                }

                let colors = decoded.coloring.colors_used();
                record(Outcome::Satisfiable { colors });
                self.malformed_vertices += decoded.malformed.len();

                let baseline_colors = self.baseline.as_ref().map(|run| run.colors());
                if self.matched_baseline_at.is_none() && Some(colors) == baseline_colors {
                    self.matched_baseline_at = Some(elapsed);
                }

                self.best = Some(Improvement {
                    coloring: decoded.coloring,
                    colors,
                    k,
                    found_at: elapsed,
                    iteration_time,
                });

                match colors.saturating_sub(1) {
                    0 => Ok(self.terminate(RefinementState::Exhausted, Termination::Floor)),
                    next => Ok(RefinementState::Probing(next)),
                }
            }

            Verdict::Unsatisfiable if first_probe => {
                record(Outcome::Unsatisfiable);
                let heuristic_colors = self.upper_bound.as_ref().map_or(0, |run| run.colors());
                log::error!(target: targets::REFINEMENT, "{}: {k} colors refuted, though the upper bound used {heuristic_colors}", self.instance);
                Err(err::RefinementError::EncodingInvariantViolation {
                    instance: self.instance.clone(),
                    k,
                    heuristic_colors,
                }
                .into())
            }

            Verdict::Unsatisfiable => {
                record(Outcome::Unsatisfiable);
                Ok(self.terminate(
                    RefinementState::Exhausted,
                    Termination::Unsatisfiable { k },
                ))
            }

            Verdict::Unknown => {
                record(Outcome::Unknown);
                Ok(self.terminate(RefinementState::Exhausted, Termination::Unknown { k }))
            }
        }
    }

    fn terminate(&mut self, state: RefinementState, termination: Termination) -> RefinementState {
        log::info!(target: targets::REFINEMENT, "{}: {termination}", self.instance);
        self.termination = Some(termination);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ConflictBudget, structures::formula::Formula};

    /// An oracle which gives up on every formula.
    struct Indifferent;

    impl DecisionOracle for Indifferent {
        fn solve(&mut self, _: &Formula, _: ConflictBudget) -> Result<Verdict, err::ErrorKind> {
            Ok(Verdict::Unknown)
        }
    }

    /// An oracle which refutes every formula.
    struct Refuter;

    impl DecisionOracle for Refuter {
        fn solve(&mut self, _: &Formula, _: ConflictBudget) -> Result<Verdict, err::ErrorKind> {
            Ok(Verdict::Unsatisfiable)
        }
    }

    #[test]
    fn terminated_refinements_refuse_steps() {
        let graph = Graph::complete(3);
        let config = Config::default();
        let mut refinement = Refinement::new("triangle", &graph, &config);

        assert_eq!(refinement.step(&mut Indifferent), Ok(RefinementState::Probing(3)));
        assert_eq!(refinement.step(&mut Indifferent), Ok(RefinementState::Exhausted));
        assert_eq!(
            refinement.step(&mut Indifferent),
            Err(err::ErrorKind::Refinement(err::RefinementError::Terminated))
        );
    }

    #[test]
    fn reports_require_termination() {
        let graph = Graph::complete(3);
        let config = Config::default();
        let refinement = Refinement::new("triangle", &graph, &config);
        assert_eq!(refinement.report(), Err(err::ErrorKind::InvalidState));
    }

    #[test]
    fn first_refutation_is_an_error() {
        let graph = Graph::cycle(5);
        let config = Config::default();
        let result = Refinement::new("pentagon", &graph, &config).run(&mut Refuter);
        assert_eq!(
            result,
            Err(err::ErrorKind::Refinement(
                err::RefinementError::EncodingInvariantViolation {
                    instance: "pentagon".to_string(),
                    k: 3,
                    heuristic_colors: 3,
                }
            ))
        );
    }

    #[test]
    fn empty_graphs_need_no_probe() {
        let graph = Graph::default();
        let config = Config::default();
        let report = Refinement::new("empty", &graph, &config)
            .run(&mut Refuter)
            .unwrap();
        assert_eq!(report.termination, Termination::Floor);
        assert!(report.probes.is_empty());
    }
}
