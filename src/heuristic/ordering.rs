//! Static orders on the vertices of a graph.

use std::{cmp::Reverse, collections::BinaryHeap};

use petgraph::{
    graph::NodeIndex,
    visit::{Bfs, Dfs},
};
use rand::{seq::SliceRandom, SeedableRng};

use crate::{generic::minimal_pcg::MinimalPCG32, structures::graph::Graph};

/// Vertices by decreasing degree, with ties kept in index order.
pub fn largest_first(graph: &Graph) -> Vec<usize> {
    let mut order = (0..graph.vertex_count()).collect::<Vec<_>>();
    order.sort_by_key(|&vertex| Reverse(graph.degree(vertex)));
    order
}

/// Vertices in the reverse of the order in which a vertex of least degree is removed from the graph.
pub fn smallest_last(graph: &Graph) -> Vec<usize> {
    let mut degree = (0..graph.vertex_count())
        .map(|vertex| graph.degree(vertex))
        .collect::<Vec<_>>();
    let mut removed = vec![false; graph.vertex_count()];

    let mut queue = degree
        .iter()
        .enumerate()
        .map(|(vertex, &degree)| Reverse((degree, vertex)))
        .collect::<BinaryHeap<_>>();

    let mut order = Vec::with_capacity(graph.vertex_count());
    while let Some(Reverse((stale_degree, vertex))) = queue.pop() {
        if removed[vertex] || stale_degree != degree[vertex] {
            continue;
        }
        removed[vertex] = true;
        order.push(vertex);

        for neighbour in graph.neighbours(vertex) {
            if !removed[neighbour] {
                degree[neighbour] -= 1;
                queue.push(Reverse((degree[neighbour], neighbour)));
            }
        }
    }

    order.reverse();
    order
}

/// Vertices shuffled by a generator seeded with `seed`.
pub fn random_sequential(graph: &Graph, seed: u64) -> Vec<usize> {
    let mut rng = MinimalPCG32::seed_from_u64(seed);
    let mut order = (0..graph.vertex_count()).collect::<Vec<_>>();
    order.shuffle(&mut rng);
    order
}

/// Vertices in breadth-first order from the least vertex of each component.
pub fn connected_bfs(graph: &Graph) -> Vec<usize> {
    let mut seen = vec![false; graph.vertex_count()];
    let mut order = Vec::with_capacity(graph.vertex_count());

    for start in 0..graph.vertex_count() {
        if seen[start] {
            continue;
        }
        let mut bfs = Bfs::new(graph.inner(), NodeIndex::new(start));
        while let Some(node) = bfs.next(graph.inner()) {
            seen[node.index()] = true;
            order.push(node.index());
        }
    }

    order
}

/// Vertices in depth-first (pre)order from the least vertex of each component.
pub fn connected_dfs(graph: &Graph) -> Vec<usize> {
    let mut seen = vec![false; graph.vertex_count()];
    let mut order = Vec::with_capacity(graph.vertex_count());

    for start in 0..graph.vertex_count() {
        if seen[start] {
            continue;
        }
        let mut dfs = Dfs::new(graph.inner(), NodeIndex::new(start));
        while let Some(node) = dfs.next(graph.inner()) {
            seen[node.index()] = true;
            order.push(node.index());
        }
    }

    order
}
