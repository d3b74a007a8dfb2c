/*!
Simple undirected graphs, over a dense range of vertices.

A graph is built from a list of edges between (arbitrary) labels, and vertices are relabeled to `0..V` in the order labels are first encountered.
The relabeling is stable, and so the [encoding](crate::encoding) of a graph is reproducible from the same list of edges.

Duplicate edges collapse to a single edge, in either orientation.
Self-loops are kept, though as a self-loop rules out any proper coloring a warning is logged.

Internally, the graph is a [petgraph] undirected graph whose node weights are the original labels.

```rust
# use otter_coloring::structures::graph::Graph;
let graph = Graph::from_edges([(7, 3), (3, 9), (9, 7), (3, 7)]);

assert_eq!(graph.vertex_count(), 3);
assert_eq!(graph.edge_count(), 3);

assert_eq!(graph.label_of(0), Some(7));
assert_eq!(graph.label_of(1), Some(3));
assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 0)]);
```
*/

use std::collections::{HashMap, HashSet};

use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};

use crate::{builder::dimacs::GraphSource, misc::log::targets};

/// Labels of vertices, as found in some external representation.
pub type Label = u64;

/// An undirected graph over vertices `0..V`.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    graph: UnGraph<Label, ()>,
}

impl Graph {
    /// A graph from a list of edges between labels, relabeled in order of first occurrence.
    pub fn from_edges(edges: impl IntoIterator<Item = (Label, Label)>) -> Self {
        let mut graph = UnGraph::<Label, ()>::default();
        let mut relabeling: HashMap<Label, NodeIndex> = HashMap::default();
        let mut present: HashSet<(NodeIndex, NodeIndex)> = HashSet::default();

        for (a, b) in edges {
            let a = *relabeling.entry(a).or_insert_with(|| graph.add_node(a));
            let b = *relabeling.entry(b).or_insert_with(|| graph.add_node(b));

            if a == b {
                log::warn!(target: targets::GRAPH, "Self-loop on {}, no proper coloring exists", graph[a]);
            }

            if present.insert((a.min(b), a.max(b))) {
                graph.add_edge(a, b, ());
            }
        }

        log::trace!(target: targets::GRAPH, "Built a graph with {} vertices and {} edges", graph.node_count(), graph.edge_count());

        Graph { graph }
    }

    /// A graph from the edges of some source, ignoring any vertex count declared by the source.
    pub fn from_source(source: &GraphSource) -> Self {
        Self::from_edges(source.edges.iter().copied())
    }

    /// The complete graph on `n` vertices.
    pub fn complete(n: usize) -> Self {
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for a in 0..n as Label {
            for b in (a + 1)..n as Label {
                edges.push((a, b));
            }
        }
        Self::from_edges(edges)
    }

    /// The cycle on `n` vertices, for `n` at least three.
    pub fn cycle(n: usize) -> Self {
        let n = n as Label;
        Self::from_edges((0..n).map(|a| (a, (a + 1) % n)))
    }

    /// A count of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// A count of (distinct) edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The edges of the graph, in order of addition.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index()))
    }

    /// The neighbours of `vertex`, each once, with a self-loop making a vertex its own neighbour.
    ///
    /// Note, as duplicate edges are never added, no neighbour is repeated.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .neighbors(NodeIndex::new(vertex))
            .map(|n| n.index())
    }

    /// The degree of `vertex`, with a self-loop counting twice.
    pub fn degree(&self, vertex: usize) -> usize {
        self.graph
            .edges(NodeIndex::new(vertex))
            .map(|edge| match edge.source() == edge.target() {
                true => 2,
                false => 1,
            })
            .sum()
    }

    /// True if some edge joins `a` and `b`.
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        a < self.vertex_count()
            && b < self.vertex_count()
            && self
                .graph
                .find_edge(NodeIndex::new(a), NodeIndex::new(b))
                .is_some()
    }

    /// The original label of `vertex`, if `vertex` is a vertex of the graph.
    pub fn label_of(&self, vertex: usize) -> Option<Label> {
        self.graph.node_weight(NodeIndex::new(vertex)).copied()
    }

    /// The density of the graph: the proportion of possible edges present.
    ///
    /// Zero for graphs with fewer than two vertices.
    pub fn density(&self) -> f64 {
        let n = self.vertex_count() as f64;
        match self.vertex_count() {
            0 | 1 => 0.0,
            _ => (2.0 * self.edge_count() as f64) / (n * (n - 1.0)),
        }
    }

    /// The underlying [petgraph] graph.
    pub fn inner(&self) -> &UnGraph<Label, ()> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relabel_in_order_of_occurrence() {
        let graph = Graph::from_edges([(10, 20), (30, 10), (20, 40)]);
        let labels = (0..graph.vertex_count())
            .map(|v| graph.label_of(v))
            .collect::<Vec<_>>();
        assert_eq!(labels, vec![Some(10), Some(20), Some(30), Some(40)]);
        assert_eq!(graph.label_of(4), None);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let graph = Graph::from_edges([(1, 2), (2, 1), (1, 2)]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(0), 1);
    }

    #[test]
    fn density() {
        assert_eq!(Graph::complete(5).density(), 1.0);
        assert_eq!(Graph::cycle(4).density(), 4.0 / 6.0);
        assert_eq!(Graph::default().density(), 0.0);
    }

    #[test]
    fn self_loops_are_kept() {
        let graph = Graph::from_edges([(1, 1), (1, 2)]);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.adjacent(0, 0));
        assert_eq!(graph.degree(0), 3);
        assert_eq!(graph.neighbours(0).collect::<Vec<_>>().len(), 2);
    }
}
