/*!
Greedy heuristic colorings.

Each strategy fixes an order on the vertices of a graph (statically, or dynamically in the case of [DSATUR](Strategy::DSatur)), and colors vertices in that order with the smallest color not used by any already colored neighbour.
So, every strategy returns a total coloring, which is proper whenever the graph has no self-loops.

Heuristic colorings are used twice during a [refinement](crate::refinement):
- As an upper bound on the colors required, from which the oracle is first asked to find a coloring.
- As a baseline against which the colorings found by the oracle are compared.

```rust
# use otter_coloring::heuristic::{color, Strategy};
# use otter_coloring::structures::graph::Graph;
let wheel = Graph::from_edges([(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (2, 3), (3, 4), (4, 1)]);

let coloring = color(&wheel, Strategy::DSatur);
assert!(coloring.is_proper(&wheel));
assert_eq!(coloring.colors_used(), 3);
```

Names of strategies follow those of [NetworkX](https://networkx.org/documentation/stable/reference/algorithms/generated/networkx.algorithms.coloring.greedy_color.html), and may be parsed from those names.
*/

mod dsatur;
mod ordering;

use std::str::FromStr;

use crate::{
    misc::log::targets,
    structures::{
        coloring::{Color, Coloring},
        graph::Graph,
    },
    types::err::{self},
};

/// Strategies for a greedy coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    /// Vertices in order of decreasing degree.
    LargestFirst,

    /// Vertices in reverse order of repeated removal of a vertex of smallest degree.
    SmallestLast,

    /// Vertices in a (seeded) random order.
    RandomSequential,

    /// Vertices in breadth-first order, one component at a time.
    ConnectedSequentialBfs,

    /// Vertices in depth-first order, one component at a time.
    ConnectedSequentialDfs,

    /// Vertices chosen dynamically by most distinct colors among neighbours, with ties broken by degree.
    DSatur,
}

impl Strategy {
    /// The least strategy, for bounding a [ConfigOption](crate::config::ConfigOption).
    pub const MIN: Strategy = Strategy::LargestFirst;

    /// The greatest strategy, for bounding a [ConfigOption](crate::config::ConfigOption).
    pub const MAX: Strategy = Strategy::DSatur;

    /// Every strategy.
    pub const ALL: [Strategy; 6] = [
        Strategy::LargestFirst,
        Strategy::SmallestLast,
        Strategy::RandomSequential,
        Strategy::ConnectedSequentialBfs,
        Strategy::ConnectedSequentialDfs,
        Strategy::DSatur,
    ];
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LargestFirst => write!(f, "largest_first"),
            Self::SmallestLast => write!(f, "smallest_last"),
            Self::RandomSequential => write!(f, "random_sequential"),
            Self::ConnectedSequentialBfs => write!(f, "connected_sequential_bfs"),
            Self::ConnectedSequentialDfs => write!(f, "connected_sequential_dfs"),
            Self::DSatur => write!(f, "DSATUR"),
        }
    }
}

impl FromStr for Strategy {
    type Err = err::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "largest_first" => Ok(Self::LargestFirst),
            "smallest_last" => Ok(Self::SmallestLast),
            "random_sequential" => Ok(Self::RandomSequential),
            "connected_sequential_bfs" | "connected_sequential" => {
                Ok(Self::ConnectedSequentialBfs)
            }
            "connected_sequential_dfs" => Ok(Self::ConnectedSequentialDfs),
            "DSATUR" | "dsatur" | "saturation_largest_first" => Ok(Self::DSatur),
            _ => Err(err::ConfigError::Unrecognised(s.to_string())),
        }
    }
}

/// A coloring of `graph` by `strategy`, with any randomness seeded by zero.
pub fn color(graph: &Graph, strategy: Strategy) -> Coloring {
    color_seeded(graph, strategy, 0)
}

/// A coloring of `graph` by `strategy`, with any randomness seeded by `seed`.
pub fn color_seeded(graph: &Graph, strategy: Strategy, seed: u64) -> Coloring {
    let coloring = match strategy {
        Strategy::LargestFirst => greedy(graph, ordering::largest_first(graph)),
        Strategy::SmallestLast => greedy(graph, ordering::smallest_last(graph)),
        Strategy::RandomSequential => greedy(graph, ordering::random_sequential(graph, seed)),
        Strategy::ConnectedSequentialBfs => greedy(graph, ordering::connected_bfs(graph)),
        Strategy::ConnectedSequentialDfs => greedy(graph, ordering::connected_dfs(graph)),
        Strategy::DSatur => dsatur::color(graph),
    };
    log::trace!(target: targets::HEURISTIC, "{strategy} used {} colors", coloring.colors_used());
    coloring
}

/// Colors vertices in the given order, each with the smallest color unused by a colored neighbour.
///
/// Vertices absent from the order are colored last, in index order.
fn greedy(graph: &Graph, order: Vec<usize>) -> Coloring {
    let mut colors: Vec<Option<Color>> = vec![None; graph.vertex_count()];

    let remaining = (0..graph.vertex_count()).collect::<Vec<_>>();
    for vertex in order.into_iter().chain(remaining) {
        if colors[vertex].is_none() {
            colors[vertex] = Some(smallest_free_color(graph, vertex, &colors));
        }
    }

    Coloring::new(colors.into_iter().flatten().collect())
}

/// The smallest color unused by any colored neighbour of `vertex`.
pub(super) fn smallest_free_color(graph: &Graph, vertex: usize, colors: &[Option<Color>]) -> Color {
    let mut used = vec![false; graph.degree(vertex) + 1];
    for neighbour in graph.neighbours(vertex) {
        if let Some(color) = colors[neighbour] {
            if color < used.len() {
                used[color] = true;
            }
        }
    }
    used.iter().position(|taken| !taken).unwrap_or(used.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crown(n: u64) -> Graph {
        // The crown graph on 2n vertices, on which some orders do poorly.
        let mut edges = vec![];
        for a in 0..n {
            for b in 0..n {
                if a != b {
                    edges.push((2 * a, 2 * b + 1));
                }
            }
        }
        Graph::from_edges(edges)
    }

    #[test]
    fn every_strategy_is_proper() {
        let graphs = [Graph::complete(6), Graph::cycle(7), crown(5), Graph::default()];
        for graph in &graphs {
            for strategy in Strategy::ALL {
                let coloring = color_seeded(graph, strategy, 7);
                assert!(coloring.is_proper(graph), "{strategy}");
            }
        }
    }

    #[test]
    fn complete_graphs_need_every_color() {
        for strategy in Strategy::ALL {
            assert_eq!(color(&Graph::complete(5), strategy).colors_used(), 5);
        }
    }

    #[test]
    fn dsatur_on_even_cycle() {
        assert_eq!(color(&Graph::cycle(10), Strategy::DSatur).colors_used(), 2);
    }

    #[test]
    fn names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("saturation_largest_first".parse(), Ok(Strategy::DSatur));
        assert!("smallest_first".parse::<Strategy>().is_err());
    }

    #[test]
    fn bounds_cover_all() {
        for strategy in Strategy::ALL {
            assert!(Strategy::MIN <= strategy && strategy <= Strategy::MAX);
        }
    }
}
