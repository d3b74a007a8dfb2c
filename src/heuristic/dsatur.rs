/*!
DSATUR, from [New methods to color the vertices of a graph](https://doi.org/10.1145/359094.359101).

The uncolored vertex with the most distinct colors among its neighbours (its *saturation*) is colored next, with ties broken by degree and then by least index.

The candidates are kept on a heap which is updated lazily.
Whenever the saturation of a vertex grows a fresh entry is pushed, and stale entries are skipped when popped.
*/

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
};

use crate::structures::{
    coloring::{Color, Coloring},
    graph::Graph,
};

use super::smallest_free_color;

pub fn color(graph: &Graph) -> Coloring {
    let mut colors: Vec<Option<Color>> = vec![None; graph.vertex_count()];
    let mut neighbour_colors: Vec<HashSet<Color>> = vec![HashSet::default(); graph.vertex_count()];

    let mut candidates = (0..graph.vertex_count())
        .map(|vertex| (0, graph.degree(vertex), Reverse(vertex)))
        .collect::<BinaryHeap<_>>();

    while let Some((saturation, _, Reverse(vertex))) = candidates.pop() {
        if colors[vertex].is_some() || saturation != neighbour_colors[vertex].len() {
            continue;
        }

        let color = smallest_free_color(graph, vertex, &colors);
        colors[vertex] = Some(color);

        for neighbour in graph.neighbours(vertex) {
            if colors[neighbour].is_none() && neighbour_colors[neighbour].insert(color) {
                candidates.push((
                    neighbour_colors[neighbour].len(),
                    graph.degree(neighbour),
                    Reverse(neighbour),
                ));
            }
        }
    }

    Coloring::new(colors.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_vertex_has_largest_degree() {
        let star = Graph::from_edges([(1, 0), (2, 0), (3, 0)]);
        let coloring = color(&star);
        // Label 0 is vertex 1, the hub.
        assert_eq!(coloring.color_of(1), Some(0));
        assert_eq!(coloring.colors_used(), 2);
    }

    #[test]
    fn bipartite_graphs_use_two_colors() {
        let mut edges = vec![];
        for a in 0..4 {
            for b in 4..9 {
                edges.push((a, b));
            }
        }
        let graph = Graph::from_edges(edges);
        assert_eq!(color(&graph).colors_used(), 2);
    }

    #[test]
    fn self_looped_vertices_are_colored() {
        let graph = Graph::from_edges([(0, 1), (2, 2)]);
        let coloring = color(&graph);
        assert_eq!(coloring.vertex_count(), 3);
    }
}
