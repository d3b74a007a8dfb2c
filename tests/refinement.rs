use std::time::Duration;

use rand::{Rng, SeedableRng};

use otter_coloring::{
    config::{Config, ConflictBudget},
    generic::minimal_pcg::MinimalPCG32,
    heuristic::Strategy,
    oracle::{CdclOracle, DecisionOracle, Model, Verdict},
    refinement::{Outcome, Refinement, RefinementReport, RefinementState, Termination},
    structures::{formula::Formula, graph::Graph},
    types::err::{self},
};

fn refine(graph: &Graph, config: &Config) -> RefinementReport {
    let mut oracle = CdclOracle::from_config(config.oracle.clone());
    Refinement::new("test", graph, config)
        .run(&mut oracle)
        .expect("refinement failed")
}

/// A graph on `n` vertices with each edge present with probability `p`.
///
/// Vertices on no edge are absent from the graph.
fn random_graph(n: u64, p: f64, seed: u64) -> Graph {
    let mut rng = MinimalPCG32::seed_from_u64(seed);
    let mut edges = vec![];
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(p) {
                edges.push((a, b));
            }
        }
    }
    Graph::from_edges(edges)
}

/// The Mycielskian of `graph`, which has one more color than `graph`, and no larger cliques.
fn mycielskian(graph: &Graph) -> Graph {
    let n = graph.vertex_count() as u64;
    let hub = 2 * n;
    let mut edges = vec![];
    for (a, b) in graph.edges() {
        let (a, b) = (a as u64, b as u64);
        edges.push((a, b));
        edges.push((n + a, b));
        edges.push((a, n + b));
    }
    for u in 0..n {
        edges.push((n + u, hub));
    }
    Graph::from_edges(edges)
}

/// Checks every probe is of strictly fewer colors than the last.
fn strictly_decreasing(report: &RefinementReport) -> bool {
    report.probes.windows(2).all(|pair| pair[1].k < pair[0].k)
}

mod small {
    use super::*;

    #[test]
    fn four_cycle() {
        let config = Config::default();
        let report = refine(&Graph::cycle(4), &config);

        assert_eq!(report.upper_bound.colors(), 2);
        assert_eq!(report.probes.len(), 2);
        assert_eq!(report.probes[0].k, 2);
        assert_eq!(report.probes[0].outcome, Outcome::Satisfiable { colors: 2 });
        assert_eq!(report.probes[1].k, 1);
        assert_eq!(report.probes[1].outcome, Outcome::Unsatisfiable);
        assert_eq!(report.termination, Termination::Unsatisfiable { k: 1 });
        assert_eq!(report.best_colors(), 2);
    }

    #[test]
    fn k5() {
        let config = Config::default();
        let graph = Graph::complete(5);
        let report = refine(&graph, &config);

        assert_eq!(report.upper_bound.colors(), 5);
        assert_eq!(
            report.probes.iter().map(|probe| (probe.k, probe.outcome)).collect::<Vec<_>>(),
            vec![
                (5, Outcome::Satisfiable { colors: 5 }),
                (4, Outcome::Unsatisfiable)
            ]
        );
        assert_eq!(report.best_colors(), 5);
        assert!(report.best_coloring().is_proper(&graph));
    }

    #[test]
    fn grotzsch() {
        let grotzsch = mycielskian(&Graph::cycle(5));
        assert_eq!(grotzsch.vertex_count(), 11);
        assert_eq!(grotzsch.edge_count(), 20);

        for strategy in Strategy::ALL {
            let mut config = Config::default();
            config.upper_bound_strategy.value = strategy;
            let report = refine(&grotzsch, &config);

            assert_eq!(report.upper_bound.strategy, strategy);
            assert_eq!(report.best_colors(), 4, "from {strategy}");
            assert_eq!(report.termination, Termination::Unsatisfiable { k: 3 });
            assert!(strictly_decreasing(&report));
        }
    }

    #[test]
    fn matching_the_baseline() {
        let config = Config::default();
        let report = refine(&Graph::cycle(6), &config);

        assert_eq!(report.baseline.strategy, Strategy::DSatur);
        assert_eq!(report.baseline.colors(), 2);

        let best = report.best.as_ref().expect("a coloring");
        assert_eq!(report.matched_baseline_at, Some(best.found_at));
        assert!(best.found_at <= report.total_time);
    }

    #[test]
    fn best_is_proper_and_total() {
        let graph = random_graph(30, 0.3, 7);
        let report = refine(&graph, &Config::default());

        assert!(report.best_coloring().is_total(&graph));
        assert!(report.best_coloring().is_proper(&graph));
        assert!(report.best_colors() <= report.upper_bound.colors());
        assert!(strictly_decreasing(&report));
    }
}

mod limits {
    use super::*;

    #[test]
    fn budget_of_one() {
        // The first probe of this graph takes over a thousand conflicts without a budget.
        let graph = random_graph(120, 0.5, 5);
        let mut config = Config::default();
        config.oracle.conflict_budget.value = 1;

        let report = refine(&graph, &config);
        let k0 = report.upper_bound.colors();

        assert_eq!(report.probes.len(), 1);
        assert_eq!(report.probes[0].k, k0);
        assert_eq!(report.probes[0].outcome, Outcome::Unknown);
        assert_eq!(report.termination, Termination::Unknown { k: k0 });
        assert!(report.best.is_none());
        assert_eq!(report.matched_baseline_at, None);
        assert_eq!(report.best_coloring(), &report.upper_bound.coloring);
        assert!(report.best_coloring().is_proper(&graph));
    }

    #[test]
    fn unknown_first_probe_keeps_heuristic() {
        struct Indifferent;

        impl DecisionOracle for Indifferent {
            fn solve(&mut self, _: &Formula, _: ConflictBudget) -> Result<Verdict, err::ErrorKind> {
                Ok(Verdict::Unknown)
            }
        }

        let graph = random_graph(40, 0.5, 3);
        let config = Config::default();
        let report = Refinement::new("indifferent", &graph, &config)
            .run(&mut Indifferent)
            .unwrap();

        let k0 = report.upper_bound.colors();
        assert_eq!(report.termination, Termination::Unknown { k: k0 });
        assert!(report.best.is_none());
        assert_eq!(report.matched_baseline_at, None);
        assert_eq!(report.best_colors(), k0);
    }

    #[test]
    fn deadline_passed() {
        let mut config = Config::default();
        config.deadline = Some(Duration::ZERO);
        let graph = Graph::complete(4);
        let mut oracle = CdclOracle::default();

        let mut refinement = Refinement::new("k4", &graph, &config);
        assert_eq!(refinement.step(&mut oracle), Ok(RefinementState::Probing(4)));
        assert_eq!(refinement.step(&mut oracle), Ok(RefinementState::Stopped));

        let report = refinement.report().unwrap();
        assert_eq!(report.termination, Termination::DeadlineExceeded { k: 4 });
        assert!(report.probes.is_empty());
        assert_eq!(report.best_colors(), 4);
    }

    #[test]
    #[ignore = "expensive"]
    fn myciel4() {
        let myciel4 = mycielskian(&mycielskian(&Graph::cycle(5)));
        assert_eq!(myciel4.vertex_count(), 23);

        let report = refine(&myciel4, &Config::default());
        assert_eq!(report.best_colors(), 5);
        assert_eq!(report.termination, Termination::Unsatisfiable { k: 4 });
    }
}

mod models {
    use super::*;

    /// Solves with the bundled oracle, though marks an extra color true of some vertex in any model.
    struct Smudged {
        inner: CdclOracle,
        vertices: usize,
    }

    impl DecisionOracle for Smudged {
        fn solve(
            &mut self,
            formula: &Formula,
            budget: ConflictBudget,
        ) -> Result<Verdict, err::ErrorKind> {
            let model = match self.inner.solve(formula, budget)? {
                Verdict::Satisfiable(model) => model,
                other => return Ok(other),
            };

            let k = formula.atom_count() as usize / self.vertices;
            let mut values = model.values().to_vec();
            if let Some(index) = values
                .iter()
                .position(|&value| value > 0 && (value as usize - 1) % k < k - 1)
            {
                let vertex = index / k;
                let last = vertex * k + k - 1;
                values[last] = values[last].abs();
            }
            Ok(Verdict::Satisfiable(Model::from(values)))
        }
    }

    #[test]
    fn malformed_models_are_counted() {
        let graph = Graph::cycle(4);
        let config = Config::default();
        let mut oracle = Smudged {
            inner: CdclOracle::default(),
            vertices: graph.vertex_count(),
        };

        let report = Refinement::new("smudged", &graph, &config)
            .run(&mut oracle)
            .unwrap();
        assert_eq!(report.malformed_vertices, 1);
        assert_eq!(report.best_colors(), 2);
        assert!(report.best_coloring().is_proper(&graph));
    }

    #[test]
    fn improper_models_are_errors() {
        /// Claims every formula is satisfied by every atom being true.
        struct Credulous;

        impl DecisionOracle for Credulous {
            fn solve(
                &mut self,
                formula: &Formula,
                _: ConflictBudget,
            ) -> Result<Verdict, err::ErrorKind> {
                let values = (1..=formula.atom_count() as i32).collect::<Vec<_>>();
                Ok(Verdict::Satisfiable(Model::from(values)))
            }
        }

        let graph = Graph::complete(3);
        let config = Config::default();
        let result = Refinement::new("credulous", &graph, &config).run(&mut Credulous);
        assert!(matches!(
            result,
            Err(err::ErrorKind::Oracle(err::OracleError::ImproperModel { .. }))
        ));
    }
}
