//! Colorings --- total maps from vertices to colors.
//!
//! Colors are small non-negative integers, though a coloring need not use a contiguous range of colors.
//! For example, a coloring read from a model may use colors 0 and 3 and nothing else, and is still a coloring with two colors.
//!
//! ```rust
//! # use otter_coloring::structures::coloring::Coloring;
//! # use otter_coloring::structures::graph::Graph;
//! let path = Graph::from_edges([(0, 1), (1, 2)]);
//!
//! let coloring = Coloring::new(vec![3, 0, 3]);
//! assert_eq!(coloring.colors_used(), 2);
//! assert!(coloring.is_proper(&path));
//!
//! let clash = Coloring::new(vec![1, 1, 0]);
//! assert_eq!(clash.conflict(&path), Some((0, 1)));
//! ```

use std::collections::HashSet;

use super::graph::Graph;

/// A color.
pub type Color = usize;

/// A coloring, as a color for each vertex `0..V`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<Color>,
}

impl Coloring {
    /// A coloring with `colors[v]` the color of vertex `v`.
    pub fn new(colors: Vec<Color>) -> Self {
        Coloring { colors }
    }

    /// The color of `vertex`, if `vertex` is colored.
    pub fn color_of(&self, vertex: usize) -> Option<Color> {
        self.colors.get(vertex).copied()
    }

    /// A count of the vertices colored.
    pub fn vertex_count(&self) -> usize {
        self.colors.len()
    }

    /// A count of distinct colors used.
    pub fn colors_used(&self) -> usize {
        self.colors.iter().collect::<HashSet<_>>().len()
    }

    /// The colors of vertices, in order of vertex.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// True if every vertex of `graph` is colored.
    pub fn is_total(&self, graph: &Graph) -> bool {
        self.colors.len() == graph.vertex_count()
    }

    /// Some edge of `graph` whose endpoints share a color, if one exists.
    ///
    /// Edges with an uncolored endpoint are ignored.
    pub fn conflict(&self, graph: &Graph) -> Option<(usize, usize)> {
        graph.edges().find(|&(a, b)| {
            matches!((self.color_of(a), self.color_of(b)), (Some(x), Some(y)) if x == y)
        })
    }

    /// True if the coloring is total on `graph` and no edge joins two vertices of the same color.
    pub fn is_proper(&self, graph: &Graph) -> bool {
        self.is_total(graph) && self.conflict(graph).is_none()
    }
}

impl std::fmt::Display for Coloring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (vertex, color) in self.colors.iter().enumerate() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{vertex}:{color}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_coloring_is_not_proper() {
        let triangle = Graph::complete(3);
        let coloring = Coloring::new(vec![0, 1]);
        assert!(!coloring.is_total(&triangle));
        assert!(!coloring.is_proper(&triangle));
        assert_eq!(coloring.conflict(&triangle), None);
    }

    #[test]
    fn display() {
        assert_eq!(Coloring::new(vec![2, 0]).to_string(), "0:2 1:0");
    }
}
