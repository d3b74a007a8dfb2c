/*!
Reading graphs in the DIMACS edge format.

The format is line based:
- Lines beginning with `c` are comments.
- A problem line `p edge V E` (or `p col V E`) declares a count of vertices and edges.
- Each edge line `e u v` is an edge between vertices `u` and `v`.

Any other line is ignored.

```rust
# use otter_coloring::builder::dimacs::read_graph;
let mut dimacs = vec![];
let _ = std::io::Write::write(&mut dimacs, b"
c a triangle
p edge 3 3
e 1 2
e 2 3
e 3 1
");

let source = read_graph(dimacs.as_slice()).unwrap();
assert_eq!(source.vertex_count, 3);
assert_eq!(source.edges, vec![(1, 2), (2, 3), (3, 1)]);
```
*/

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    misc::log::targets,
    structures::graph::Label,
    types::err::{self},
};

/// A graph as found in some external representation: a declared count of vertices, and a list of edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphSource {
    /// The count of vertices declared, or the largest label seen if no count was declared.
    pub vertex_count: usize,

    /// The edges, in order of occurrence.
    pub edges: Vec<(Label, Label)>,
}

/// Reads a DIMACS graph.
pub fn read_graph(mut reader: impl BufRead) -> Result<GraphSource, err::ParseError> {
    let mut buffer = String::with_capacity(1024);
    let mut line_counter = 0;

    let mut declared: Option<(usize, usize)> = None;
    let mut edges = Vec::default();
    let mut largest_label: Label = 0;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ParseError::Line(line_counter)),
        }

        let mut details = buffer.split_whitespace();
        match details.next() {
            Some("p") => {
                // The problem type (edge, col, …) is not checked.
                let _problem = details.next();
                let vertex_count = parse_count(details.next())?;
                let edge_count = parse_count(details.next())?;
                declared = Some((vertex_count, edge_count));
            }

            Some("e") => {
                let (Some(a), Some(b)) = (details.next(), details.next()) else {
                    return Err(err::ParseError::Edge(line_counter));
                };
                let (Ok(a), Ok(b)) = (a.parse::<Label>(), b.parse::<Label>()) else {
                    return Err(err::ParseError::Edge(line_counter));
                };
                largest_label = largest_label.max(a).max(b);
                edges.push((a, b));
            }

            _ => {}
        }
    }

    let vertex_count = match declared {
        Some((vertex_count, edge_count)) => {
            if edge_count != edges.len() {
                log::warn!(target: targets::GRAPH, "Expected {edge_count} edges, read {}", edges.len());
            }
            vertex_count
        }
        None => largest_label as usize,
    };

    Ok(GraphSource {
        vertex_count,
        edges,
    })
}

/// Reads a DIMACS graph from the file at `path`.
///
/// If the `xz` feature is enabled files with an `xz` extension are decompressed.
pub fn read_graph_file(path: &Path) -> Result<GraphSource, err::ParseError> {
    let file = File::open(path).map_err(|_| err::ParseError::NoFile)?;

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            read_graph(BufReader::new(xz2::read::XzDecoder::new(file)))
        }

        _ => read_graph(BufReader::new(file)),
    }
}

fn parse_count(detail: Option<&str>) -> Result<usize, err::ParseError> {
    match detail.map(|string| string.parse::<usize>()) {
        Some(Ok(count)) => Ok(count),
        _ => Err(err::ParseError::ProblemSpecification),
    }
}
