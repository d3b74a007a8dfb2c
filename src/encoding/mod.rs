/*!
Encoding graph coloring as a formula, and decoding colorings from models.

# Atoms

For a count of colors `k`, there is one atom for each pair of a vertex and a color, numbered by [color_atom]:

```none
atom(vertex, color) = vertex * k + color + 1
```

So, the atoms of vertex `v` are `v*k + 1 ..= v*k + k`, and the numbering is reproducible from the graph and `k` alone.

# Clauses

Clauses are emitted in three blocks, in a fixed order:

1. *Coverage*: for each vertex, some color is true of the vertex.
2. *Exclusivity*: for each vertex, and each pair of colors `c1 < c2`, not both `c1` and `c2` are true of the vertex.
3. *Proper coloring*: for each edge, in the order of the edges of the graph, and each color, not both endpoints have the color.

The formula is satisfiable if and only if the graph has a proper coloring with at most `k` colors.

```rust
# use otter_coloring::encoding::{encode, ClauseCounts};
# use otter_coloring::structures::graph::Graph;
let path = Graph::from_edges([(0, 1), (1, 2)]);
let formula = encode(&path, 2).unwrap();

assert_eq!(formula.atom_count(), 6);
assert_eq!(formula.clause_count(), ClauseCounts::expected(3, 2, 2).total());
assert_eq!(formula.clauses()[0].as_dimacs(true), "1 2 0");
assert_eq!(formula.clauses()[3].as_dimacs(true), "-1 -2 0");
assert_eq!(formula.clauses()[6].as_dimacs(true), "-1 -3 0");
```

# Decoding

A model of the formula is read back as a coloring by taking, for each vertex, the least color true of the vertex.
A model of the formula never has more than one color true of a vertex, though some oracle may return a model which is not (quite) a model of the formula.
In this case the vertex is noted as *malformed*, and the least color is used regardless.
*/

use crate::{
    misc::log::targets,
    oracle::Model,
    structures::{
        clause::Clause,
        coloring::{Color, Coloring},
        formula::Formula,
        graph::Graph,
        literal::{Atom, Literal},
    },
    types::err::{self},
};

/// The atom for `vertex` having `color`, given `k` colors.
///
/// No check is made that the atom is representable, see [encode].
pub fn color_atom(vertex: usize, color: Color, k: usize) -> Atom {
    (vertex * k + color + 1) as Atom
}

/// Counts of the clauses of each block of an encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClauseCounts {
    pub coverage: usize,
    pub exclusivity: usize,
    pub proper: usize,
}

impl ClauseCounts {
    /// The counts of clauses in the encoding of a graph with the given counts of vertices and edges with `k` colors.
    pub fn expected(vertices: usize, edges: usize, k: usize) -> Self {
        ClauseCounts {
            coverage: vertices,
            exclusivity: vertices * (k * k.saturating_sub(1) / 2),
            proper: edges * k,
        }
    }

    /// The total count of clauses.
    pub fn total(&self) -> usize {
        self.coverage + self.exclusivity + self.proper
    }
}

/// The formula expressing that `graph` has a proper coloring with at most `k` colors.
///
/// Errors if `k` is zero, or if the atoms required exceed those representable.
/// Errors if the formula refuses some clause.
pub fn encode(graph: &Graph, k: usize) -> Result<Formula, err::EncodingError> {
    if k == 0 {
        return Err(err::EncodingError::NoColors);
    }

    let atom_count = match graph.vertex_count().checked_mul(k) {
        Some(count) if count <= i32::MAX as usize => count as Atom,
        _ => return Err(err::EncodingError::AtomsExhausted),
    };

    let counts = ClauseCounts::expected(graph.vertex_count(), graph.edge_count(), k);
    let mut formula = Formula::with_capacity(atom_count, counts.total());

    for vertex in 0..graph.vertex_count() {
        let coverage = (0..k)
            .map(|color| Literal::new(color_atom(vertex, color, k), true))
            .collect();
        formula.add_clause(Clause::new(coverage))?;
    }

    for vertex in 0..graph.vertex_count() {
        for c1 in 0..k {
            for c2 in (c1 + 1)..k {
                formula.add_clause(Clause::new(vec![
                    Literal::new(color_atom(vertex, c1, k), false),
                    Literal::new(color_atom(vertex, c2, k), false),
                ]))?;
            }
        }
    }

    for (a, b) in graph.edges() {
        for color in 0..k {
            formula.add_clause(Clause::new(vec![
                Literal::new(color_atom(a, color, k), false),
                Literal::new(color_atom(b, color, k), false),
            ]))?;
        }
    }

    log::trace!(target: targets::ENCODING, "Encoded {} vertices with {k} colors: {} atoms, {} clauses", graph.vertex_count(), formula.atom_count(), formula.clause_count());

    Ok(formula)
}

/// A coloring read from a model, and any vertices with more than one color in the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub coloring: Coloring,
    pub malformed: Vec<usize>,
}

/// Reads a coloring of `vertex_count` vertices with `k` colors from `model`.
///
/// Each vertex takes the least color true of the vertex.
/// Errors if some vertex has no color true of it, or if the model omits some atom.
pub fn decode(model: &Model, vertex_count: usize, k: usize) -> Result<Decoded, err::OracleError> {
    let mut colors = Vec::with_capacity(vertex_count);
    let mut malformed = Vec::default();

    for vertex in 0..vertex_count {
        let mut chosen = None;
        let mut true_count = 0;

        for color in 0..k {
            let atom = color_atom(vertex, color, k);
            match model.is_true(atom) {
                Some(true) => {
                    true_count += 1;
                    if chosen.is_none() {
                        chosen = Some(color);
                    }
                }
                Some(false) => {}
                None => return Err(err::OracleError::MissingAtom(atom)),
            }
        }

        match chosen {
            Some(color) => colors.push(color),
            None => return Err(err::OracleError::IncompleteModel { vertex }),
        }

        if true_count > 1 {
            log::warn!(target: targets::MODEL, "Vertex {vertex} has {true_count} colors, taking the least");
            malformed.push(vertex);
        }
    }

    Ok(Decoded {
        coloring: Coloring::new(colors),
        malformed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_are_dense() {
        let k = 3;
        let atoms = (0..2)
            .flat_map(|vertex| (0..k).map(move |color| color_atom(vertex, color, k)))
            .collect::<Vec<_>>();
        assert_eq!(atoms, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn no_colors() {
        assert_eq!(
            encode(&Graph::complete(2), 0),
            Err(err::EncodingError::NoColors)
        );
    }

    #[test]
    fn one_color() {
        let formula = encode(&Graph::complete(2), 1).unwrap();
        assert_eq!(formula.as_dimacs(), "p cnf 2 3\n1 0\n2 0\n-1 -2 0\n");
    }

    #[test]
    fn refused_clauses() {
        let mut formula = Formula::with_atoms(2);
        let beyond = Clause::new(vec![Literal::new(3, true)]);
        assert_eq!(
            formula.add_clause(beyond).map_err(err::EncodingError::from),
            Err(err::EncodingError::Clause(err::ClauseDBError::UnknownAtom(3)))
        );

        let formula = encode(&Graph::cycle(3), 2).unwrap();
        assert_eq!(formula.clause_count(), ClauseCounts::expected(3, 3, 2).total());
    }

    #[test]
    fn empty_graph() {
        let formula = encode(&Graph::default(), 4).unwrap();
        assert_eq!(formula.atom_count(), 0);
        assert_eq!(formula.clause_count(), 0);
    }

    #[test]
    fn decode_least_color() {
        // Vertex 0 has colors 1 and 2, vertex 1 has color 0.
        let model = Model::from(vec![-1, 2, 3, 4, -5, -6]);
        let decoded = decode(&model, 2, 3).unwrap();
        assert_eq!(decoded.coloring.colors(), &[1, 0]);
        assert_eq!(decoded.malformed, vec![0]);
    }

    #[test]
    fn decode_uncolored_vertex() {
        let model = Model::from(vec![1, -2, -3, -4]);
        assert_eq!(
            decode(&model, 2, 2),
            Err(err::OracleError::IncompleteModel { vertex: 1 })
        );
    }

    #[test]
    fn decode_short_model() {
        let model = Model::from(vec![1, -2]);
        assert_eq!(decode(&model, 2, 2), Err(err::OracleError::MissingAtom(3)));
    }
}
