/*!
Records of refinements, for comparison against the baseline heuristic.

Each refinement is summarised by an [InstanceRecord] of ten fields, in order:

| Field | |
|-------|-|
| `filename` | The name of the instance. |
| `num_edges` | The count of edges read. |
| `num_vertices` | The count of vertices declared. |
| `graph_density` | The density of the graph built. |
| `num_colors_used_dsatur` | The count of colors used by the baseline. |
| `dsatur_time` | The time taken by the baseline. |
| `num_colors_used_sat` | The count of colors used by the best coloring of the oracle. |
| `sat_time_matched_with_dsatur` | The cumulative time at which the oracle first matched the baseline. |
| `sat_time` | The cumulative time at which the best coloring of the oracle was found. |
| `sat_best_solution_iteration_time` | The time taken by the probe which found the best coloring. |

Times are in seconds.
If the oracle found no coloring the last four fields are `none`, and if the oracle found some coloring though never matched the baseline the matched time is `never`.

Records are given to a [MetricsSink].
Sinks are provided for CSV (with a header row, through [csv]) and for memory.

```rust
# use otter_coloring::metrics::{CsvSink, Entry, InstanceRecord, MetricsSink};
let record = InstanceRecord {
    filename: "myciel3.col".to_string(),
    num_edges: 20,
    num_vertices: 11,
    graph_density: 0.36,
    num_colors_used_dsatur: 4,
    dsatur_time: 0.5,
    num_colors_used_sat: Entry::Value(4),
    sat_time_matched_with_dsatur: Entry::Value(1.5),
    sat_time: Entry::Value(1.5),
    sat_best_solution_iteration_time: Entry::Value(1.25),
};

let mut sink = CsvSink::from_writer(vec![]);
sink.record(&record).unwrap();

let csv = String::from_utf8(sink.into_inner().unwrap()).unwrap();
assert_eq!(
    csv.lines().nth(1),
    Some("myciel3.col,20,11,0.36,4,0.5,4,1.5,1.5,1.25")
);
```
*/

use std::{fs::File, io::Write, path::Path};

use serde::{Serialize, Serializer};

use crate::{
    refinement::RefinementReport,
    structures::graph::Graph,
    types::err::{self},
};

/// A field of a record which may be absent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entry<T> {
    /// Some value.
    Value(T),

    /// The event measured did not happen, though it could have.
    Never,

    /// Nothing was available to measure.
    Absent,
}

impl<T: Serialize> Serialize for Entry<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Never => serializer.serialize_str("never"),
            Self::Absent => serializer.serialize_str("none"),
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Never => write!(f, "never"),
            Self::Absent => write!(f, "none"),
        }
    }
}

/// A summary of a refinement of a single instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InstanceRecord {
    pub filename: String,
    pub num_edges: usize,
    pub num_vertices: usize,
    pub graph_density: f64,
    pub num_colors_used_dsatur: usize,
    pub dsatur_time: f64,
    pub num_colors_used_sat: Entry<usize>,
    pub sat_time_matched_with_dsatur: Entry<f64>,
    pub sat_time: Entry<f64>,
    pub sat_best_solution_iteration_time: Entry<f64>,
}

impl InstanceRecord {
    /// A record of `report`, with counts of vertices and edges as read from the instance, and density from the graph built.
    pub fn from_report(
        num_vertices: usize,
        num_edges: usize,
        graph: &Graph,
        report: &RefinementReport,
    ) -> Self {
        let (num_colors_used_sat, sat_time_matched_with_dsatur, sat_time, iteration_time) =
            match &report.best {
                Some(best) => (
                    Entry::Value(best.colors),
                    match report.matched_baseline_at {
                        Some(time) => Entry::Value(time.as_secs_f64()),
                        None => Entry::Never,
                    },
                    Entry::Value(best.found_at.as_secs_f64()),
                    Entry::Value(best.iteration_time.as_secs_f64()),
                ),
                None => (Entry::Absent, Entry::Absent, Entry::Absent, Entry::Absent),
            };

        InstanceRecord {
            filename: report.instance.clone(),
            num_edges,
            num_vertices,
            graph_density: graph.density(),
            num_colors_used_dsatur: report.baseline.colors(),
            dsatur_time: report.baseline.time.as_secs_f64(),
            num_colors_used_sat,
            sat_time_matched_with_dsatur,
            sat_time,
            sat_best_solution_iteration_time: iteration_time,
        }
    }
}

impl std::fmt::Display for InstanceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Filename: {}", self.filename)?;
        writeln!(f, "Vertices: {}, Edges: {}", self.num_vertices, self.num_edges)?;
        writeln!(f, "Density: {}", self.graph_density)?;
        writeln!(f, "Number of colors used (DSATUR): {}", self.num_colors_used_dsatur)?;
        write!(f, "DSATUR Coloring Time: {}", self.dsatur_time)?;
        match self.num_colors_used_sat {
            Entry::Value(colors) => {
                writeln!(f)?;
                writeln!(f, "Number of colors used (SAT): {colors}")?;
                writeln!(f, "SAT Coloring Time (Best solution): {}", self.sat_time)?;
                writeln!(f, "SAT Coloring Time (Best iteration): {}", self.sat_best_solution_iteration_time)?;
                write!(f, "SAT Coloring Time (Matched with DSATUR): {}", self.sat_time_matched_with_dsatur)
            }
            _ => {
                writeln!(f)?;
                write!(f, "SAT solver could not find a solution with the given number of colors.")
            }
        }
    }
}

/// Somewhere to send records.
pub trait MetricsSink {
    /// Accepts a record.
    fn record(&mut self, record: &InstanceRecord) -> Result<(), err::MetricsError>;

    /// Ensures every record accepted has been written.
    fn flush(&mut self) -> Result<(), err::MetricsError> {
        Ok(())
    }
}

/// A sink writing records as CSV, with a header row before the first record.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    /// A sink writing to `writer`.
    pub fn from_writer(writer: W) -> Self {
        CsvSink {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Flushes the sink, and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, err::MetricsError> {
        self.writer
            .into_inner()
            .map_err(|e| err::MetricsError::Write(e.to_string()))
    }
}

impl CsvSink<File> {
    /// A sink writing to a (fresh) file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, err::MetricsError> {
        Ok(CsvSink {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> MetricsSink for CsvSink<W> {
    fn record(&mut self, record: &InstanceRecord) -> Result<(), err::MetricsError> {
        self.writer.serialize(record)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), err::MetricsError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl MetricsSink for Vec<InstanceRecord> {
    fn record(&mut self, record: &InstanceRecord) -> Result<(), err::MetricsError> {
        self.push(record.clone());
        Ok(())
    }
}
