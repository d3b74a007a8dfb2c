//! A library for exact graph coloring by way of a conflict-bounded SAT encoding.
//!
//! otter_coloring determines (a good upper bound on) the chromatic number of a graph by repeatedly asking a decision oracle whether the graph admits a proper coloring with fewer colors than the best coloring found so far.
//! Each question is a formula in conjunctive normal form, and each answer is given under a fixed budget of conflicts.
//! So, while a refinement always terminates with a proper coloring, the coloring is only known to be optimal if the oracle was able to prove the next question unsatisfiable.
//!
//! Results are benchmarked against a heuristic baseline (by default, [DSATUR](crate::heuristic::Strategy::DSatur)).
//!
//! # Orientation
//!
//! A refinement is driven by a [controller](crate::refinement) over a handful of parts:
//!
//! - A [graph](crate::structures::graph), built once per instance and read-only thereafter.
//! - A [heuristic colorer](crate::heuristic), for an initial upper bound on the number of colors required and a baseline to compare against.
//! - An [encoder](crate::encoding), from a graph and a count of colors to a [formula](crate::structures::formula).
//! - A [decision oracle](crate::oracle), from a formula and a conflict budget to a [verdict](crate::oracle::Verdict).
//! - A [metrics record](crate::metrics), summarising a refinement.
//!
//! The default oracle is a small conflict-driven clause-learning solver, found in [context] and [procedures].
//! The solver is not intended for use outside of refinement, though nothing prevents this.
//!
//! Roughly, a refinement is:
//!
//! ```none
//!   heuristic ---> k0 ---> encode(G, k) ---> solve(F, budget) --+--> satisfiable: k = colors used - 1
//!                              ⌃                                 |
//!                              +---------------------------------+
//!                                                                +--> unsatisfiable / unknown: stop
//! ```
//!
//! # Examples
//!
//! + Refine a coloring of a five-cycle.
//!
//! ```rust
//! # use otter_coloring::config::Config;
//! # use otter_coloring::oracle::CdclOracle;
//! # use otter_coloring::refinement::{Refinement, Termination};
//! # use otter_coloring::structures::graph::Graph;
//! let graph = Graph::from_edges([(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]);
//!
//! let config = Config::default();
//! let mut oracle = CdclOracle::from_config(config.oracle.clone());
//!
//! let report = Refinement::new("five_cycle", &graph, &config)
//!     .run(&mut oracle)
//!     .expect("refinement failed");
//!
//! assert_eq!(report.best_coloring().colors_used(), 3);
//! assert!(matches!(report.termination, Termination::Unsatisfiable { k: 2 }));
//! ```
//!
//! + Encode and solve directly.
//!
//! ```rust
//! # use otter_coloring::encoding::encode;
//! # use otter_coloring::oracle::{CdclOracle, DecisionOracle, Verdict};
//! # use otter_coloring::config::OracleConfig;
//! # use otter_coloring::structures::graph::Graph;
//! let triangle = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
//! let mut oracle = CdclOracle::from_config(OracleConfig::default());
//!
//! let two = encode(&triangle, 2).unwrap();
//! assert!(matches!(oracle.solve(&two, 1_000), Ok(Verdict::Unsatisfiable)));
//!
//! let three = encode(&triangle, 3).unwrap();
//! assert!(matches!(oracle.solve(&three, 1_000), Ok(Verdict::Satisfiable(_))));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//! No logger is installed by the library.
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) the progress of a refinement is shown with `RUST_LOG=refinement=info …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod batch;
pub mod builder;
pub mod config;
pub mod context;
pub mod encoding;
pub mod generic;
pub mod heuristic;
pub mod metrics;
pub mod misc;
pub mod oracle;
pub mod procedures;
pub mod refinement;
pub mod reports;
pub mod structures;
pub mod types;

#[doc(hidden)]
pub mod db;
