use otter_coloring::{
    config::OracleConfig,
    oracle::{CdclOracle, DecisionOracle, Verdict},
    structures::{formula::Formula, literal::Literal},
};

fn formula_of(atoms: u32, clauses: &[&[i32]]) -> Formula {
    let mut formula = Formula::with_atoms(atoms);
    for clause in clauses {
        let literals = clause
            .iter()
            .map(|&int| Literal::try_from(int).unwrap())
            .collect::<Vec<_>>();
        formula.add_clause(literals.into()).unwrap();
    }
    formula
}

fn satisfies(values: &[i32], clauses: &[&[i32]]) -> bool {
    clauses
        .iter()
        .all(|clause| clause.iter().any(|literal| values.contains(literal)))
}

/// Each of `pigeons` pigeons in one of `holes` holes, with no two pigeons sharing a hole.
fn pigeonhole(pigeons: u32, holes: u32) -> Formula {
    let atom = |p: u32, h: u32| Literal::new(p * holes + h + 1, true);
    let mut formula = Formula::with_atoms(pigeons * holes);

    for p in 0..pigeons {
        let clause = (0..holes).map(|h| atom(p, h)).collect::<Vec<_>>();
        formula.add_clause(clause.into()).unwrap();
    }
    for h in 0..holes {
        for p in 0..pigeons {
            for q in (p + 1)..pigeons {
                formula
                    .add_clause(vec![atom(p, h).negate(), atom(q, h).negate()].into())
                    .unwrap();
            }
        }
    }
    formula
}

mod verdicts {
    use super::*;

    #[test]
    fn conflict() {
        let formula = formula_of(2, &[&[1, 2], &[-1, -2], &[1, -2], &[-1, 2]]);
        let mut oracle = CdclOracle::default();
        assert_eq!(oracle.solve(&formula, 1_000), Ok(Verdict::Unsatisfiable));
    }

    #[test]
    fn empty_clause() {
        let formula = formula_of(1, &[&[1], &[-1]]);
        let mut oracle = CdclOracle::default();
        assert_eq!(oracle.solve(&formula, 0), Ok(Verdict::Unsatisfiable));
    }

    #[test]
    fn models_satisfy() {
        let clauses: &[&[i32]] = &[
            &[1, 2, -3],
            &[-1, 4],
            &[-2, -4, 5],
            &[-5, 3],
            &[-3, -1],
            &[2, 3, 4],
        ];
        let formula = formula_of(5, clauses);
        let mut oracle = CdclOracle::default();

        match oracle.solve(&formula, 1_000) {
            Ok(Verdict::Satisfiable(model)) => {
                assert_eq!(model.atom_count(), 5);
                assert!(satisfies(model.values(), clauses));
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn pigeonhole_refuted() {
        let mut oracle = CdclOracle::default();
        assert_eq!(
            oracle.solve(&pigeonhole(6, 5), 1_000_000),
            Ok(Verdict::Unsatisfiable)
        );
    }
}

mod budget {
    use super::*;

    #[test]
    fn unknown_is_not_unsatisfiable() {
        let mut oracle = CdclOracle::default();
        assert_eq!(oracle.solve(&pigeonhole(8, 7), 1), Ok(Verdict::Unknown));
    }

    #[test]
    fn exhaustion_is_repeatable() {
        let formula = pigeonhole(8, 7);
        let mut oracle = CdclOracle::default();
        for _ in 0..3 {
            assert_eq!(oracle.solve(&formula, 10), Ok(Verdict::Unknown));
        }
    }

    #[test]
    fn time_limit() {
        let mut config = OracleConfig::default();
        config.time_limit = Some(std::time::Duration::ZERO);
        let mut oracle = CdclOracle::from_config(config);

        assert_eq!(
            oracle.solve(&pigeonhole(8, 7), 1_000_000),
            Ok(Verdict::Unknown)
        );
    }

    #[test]
    fn seeds_are_reproducible() {
        let formula = pigeonhole(6, 6);
        let mut config = OracleConfig::default();
        config.seed = 91;
        config.random_decision_bias.value = 0.5;
        config.polarity_lean.value = 0.5;

        let first = CdclOracle::from_config(config.clone()).solve(&formula, 100_000);
        let second = CdclOracle::from_config(config).solve(&formula, 100_000);
        assert!(matches!(first, Ok(Verdict::Satisfiable(_))));
        assert_eq!(first, second);
    }
}
