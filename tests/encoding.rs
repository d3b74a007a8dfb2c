use otter_coloring::{
    config::OracleConfig,
    encoding::{decode, encode, ClauseCounts},
    oracle::{CdclOracle, DecisionOracle, Verdict},
    structures::graph::Graph,
    types::err::{self},
};

fn colorable(graph: &Graph, k: usize) -> bool {
    let formula = encode(graph, k).unwrap();
    let mut oracle = CdclOracle::from_config(OracleConfig::default());
    match oracle.solve(&formula, 100_000) {
        Ok(Verdict::Satisfiable(_)) => true,
        Ok(Verdict::Unsatisfiable) => false,
        other => panic!("no verdict: {other:?}"),
    }
}

mod clauses {
    use super::*;

    #[test]
    fn counts() {
        let petersen = Graph::from_edges([
            (0, 1), (1, 2), (2, 3), (3, 4), (4, 0),
            (0, 5), (1, 6), (2, 7), (3, 8), (4, 9),
            (5, 7), (7, 9), (9, 6), (6, 8), (8, 5),
        ]);

        for k in 1..=4 {
            let formula = encode(&petersen, k).unwrap();
            let expected = ClauseCounts::expected(10, 15, k);
            assert_eq!(expected.coverage, 10);
            assert_eq!(expected.exclusivity, 10 * k * (k - 1) / 2);
            assert_eq!(expected.proper, 15 * k);
            assert_eq!(formula.clause_count(), expected.total());
            assert_eq!(formula.atom_count() as usize, 10 * k);
        }
    }

    #[test]
    fn idempotent() {
        let graph = Graph::from_edges([(4, 2), (2, 9), (9, 4), (9, 1)]);
        let a = encode(&graph, 3).unwrap();
        let b = encode(&graph, 3).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_dimacs(), b.as_dimacs());
    }

    #[test]
    fn no_colors() {
        assert_eq!(
            encode(&Graph::complete(2), 0),
            Err(err::EncodingError::NoColors)
        );
    }

    #[test]
    fn blocks_in_order() {
        let formula = encode(&Graph::from_edges([(0, 1)]), 2).unwrap();
        assert_eq!(
            formula.as_dimacs(),
            "p cnf 4 6\n1 2 0\n3 4 0\n-1 -2 0\n-3 -4 0\n-1 -3 0\n-2 -4 0\n"
        );
    }
}

mod satisfiability {
    use super::*;

    #[test]
    fn triangle_needs_three() {
        let triangle = Graph::complete(3);
        assert!(!colorable(&triangle, 2));
        assert!(colorable(&triangle, 3));
    }

    #[test]
    fn bipartite_needs_two() {
        let mut edges = vec![];
        for a in 0..4 {
            for b in 4..9 {
                edges.push((a, b));
            }
        }
        let k45 = Graph::from_edges(edges);
        assert!(!colorable(&k45, 1));
        assert!(colorable(&k45, 2));
    }

    #[test]
    fn odd_cycles_need_three() {
        assert!(!colorable(&Graph::cycle(7), 2));
        assert!(colorable(&Graph::cycle(7), 3));
        assert!(colorable(&Graph::cycle(8), 2));
    }

    #[test]
    fn complete_graphs() {
        for n in 2..=6 {
            let graph = Graph::complete(n);
            assert!(!colorable(&graph, n - 1));
            assert!(colorable(&graph, n));
        }
    }

    #[test]
    fn models_decode_to_proper_colorings() {
        let wheel = Graph::from_edges([
            (0, 1), (0, 2), (0, 3), (0, 4), (0, 5),
            (1, 2), (2, 3), (3, 4), (4, 5), (5, 1),
        ]);
        let k = 4;
        let formula = encode(&wheel, k).unwrap();
        let mut oracle = CdclOracle::default();

        let Ok(Verdict::Satisfiable(model)) = oracle.solve(&formula, 100_000) else {
            panic!("a wheel on six vertices is four colorable");
        };

        let decoded = decode(&model, wheel.vertex_count(), k).unwrap();
        assert!(decoded.malformed.is_empty());
        assert!(decoded.coloring.is_total(&wheel));
        assert!(decoded.coloring.is_proper(&wheel));
        assert!(decoded.coloring.colors_used() <= k);
    }
}
