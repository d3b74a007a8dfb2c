/*!
Refinement of a batch of instances.

A batch is a list of paths to DIMACS graph files, where any directory given stands for the files it contains (through [glob]).
Instances are independent, and so may be refined concurrently.
[process_all] distributes instances over a fixed count of worker threads, through a [crossbeam] channel, and returns an outcome for each instance in the order given.

A failed instance has no effect on other instances.

```rust,no_run
# use std::path::PathBuf;
# use otter_coloring::batch::{instance_paths, process_all};
# use otter_coloring::config::Config;
let paths = instance_paths(&[PathBuf::from("graphs")]).unwrap();
for outcome in process_all(&paths, &Config::default(), 4) {
    match outcome {
        Ok(outcome) => println!("{}", outcome.record),
        Err(e) => println!("{e}"),
    }
}
```
*/

use std::path::{Path, PathBuf};

use crossbeam::channel::unbounded;

use crate::{
    builder::dimacs::{read_graph_file, GraphSource},
    config::Config,
    metrics::InstanceRecord,
    misc::log::targets,
    oracle::{CdclOracle, DecisionOracle},
    refinement::{Refinement, RefinementReport},
    structures::graph::Graph,
    types::err::{self},
};

/// The result of refining a single instance.
#[derive(Clone, Debug)]
pub struct InstanceOutcome {
    /// The name of the instance.
    pub instance: String,

    /// The graph refined.
    pub graph: Graph,

    pub record: InstanceRecord,

    pub report: RefinementReport,
}

/// The result of processing an instance of a batch.
pub type BatchResult = Result<InstanceOutcome, err::ErrorKind>;

/// Expands `paths` to a list of files, where each directory is replaced by the files it contains, in lexicographic order.
///
/// Files are kept in the order given.
/// Errors if some path is neither a file nor a directory.
pub fn instance_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>, err::BatchError> {
    let mut files = Vec::default();

    for path in paths {
        if path.is_dir() {
            let pattern = format!(
                "{}/*",
                glob::Pattern::escape(&path.to_string_lossy())
            );

            let entries = glob::glob(&pattern).map_err(|e| err::BatchError::Pattern(e.to_string()))?;

            let mut directory_files = Vec::default();
            for entry in entries {
                match entry {
                    Ok(file) if file.is_file() => directory_files.push(file),
                    Ok(_) => {}
                    Err(e) => {
                        log::warn!(target: targets::BATCH, "Skipping unreadable entry: {e}")
                    }
                }
            }
            directory_files.sort();

            log::trace!(target: targets::BATCH, "{} files in {path:?}", directory_files.len());
            files.append(&mut directory_files);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(err::BatchError::NoFile(path.clone()));
        }
    }

    Ok(files)
}

/// The name of the instance at `path`, as the final component of the path.
pub fn instance_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Refines the graph of `source` with `oracle`.
///
/// The record uses the counts of vertices and edges of the source, rather than the graph built.
pub fn process_source<O: DecisionOracle + ?Sized>(
    instance: &str,
    source: &GraphSource,
    config: &Config,
    oracle: &mut O,
) -> BatchResult {
    let graph = Graph::from_source(source);
    let report = Refinement::new(instance, &graph, config).run(oracle)?;
    let record =
        InstanceRecord::from_report(source.vertex_count, source.edges.len(), &graph, &report);

    Ok(InstanceOutcome {
        instance: instance.to_string(),
        graph,
        record,
        report,
    })
}

/// Reads the instance at `path` and refines the graph with the bundled oracle, configured from `config`.
pub fn process_path(path: &Path, config: &Config) -> BatchResult {
    let source = read_graph_file(path)?;
    let mut oracle = CdclOracle::from_config(config.oracle.clone());
    process_source(&instance_name(path), &source, config, &mut oracle)
}

/// Processes each path on (at most) `jobs` worker threads, returning results in the order of `paths`.
///
/// A count of zero jobs is taken as one.
/// If a worker panics, each instance the worker took is given a [Worker](err::BatchError::Worker) error.
pub fn process_all(paths: &[PathBuf], config: &Config, jobs: usize) -> Vec<BatchResult> {
    let jobs = jobs.clamp(1, paths.len().max(1));

    let (job_tx, job_rx) = unbounded::<(usize, &Path)>();
    let (result_tx, result_rx) = unbounded::<(usize, BatchResult)>();

    for (index, path) in paths.iter().enumerate() {
        // The receiver is held, so the send succeeds.
        let _ = job_tx.send((index, path.as_path()));
    }
    drop(job_tx);

    let scope = crossbeam::thread::scope(|scope| {
        for worker in 0..jobs {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();

            scope.spawn(move |_| {
                for (index, path) in job_rx.iter() {
                    log::info!(target: targets::BATCH, "Worker {worker} took {path:?}");
                    let result = process_path(path, config);
                    if let Err(e) = &result {
                        log::error!(target: targets::BATCH, "{path:?}: {e}");
                    }
                    if result_tx.send((index, result)).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(result_tx);

    if scope.is_err() {
        log::error!(target: targets::BATCH, "Some worker panicked");
    }

    let mut results: Vec<Option<BatchResult>> = paths.iter().map(|_| None).collect();
    for (index, result) in result_rx.try_iter() {
        results[index] = Some(result);
    }

    results
        .into_iter()
        .map(|result| result.unwrap_or_else(|| Err(err::BatchError::Worker.into())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metrics::Entry, refinement::Termination};

    /// A fresh directory under the temporary directory of the system.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("otter_coloring_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    const TRIANGLE: &str = "c triangle\np edge 3 3\ne 1 2\ne 2 3\ne 3 1\n";
    const PATH: &str = "p edge 4 2\ne 1 2\ne 3 4\n";

    #[test]
    fn sources_are_refined() {
        let source = crate::builder::dimacs::read_graph(TRIANGLE.as_bytes()).unwrap();
        let config = Config::default();
        let mut oracle = CdclOracle::default();

        let outcome = process_source("triangle", &source, &config, &mut oracle).unwrap();
        assert_eq!(outcome.report.termination, Termination::Unsatisfiable { k: 2 });
        assert_eq!(outcome.record.num_vertices, 3);
        assert_eq!(outcome.record.num_colors_used_sat, Entry::Value(3));
    }

    #[test]
    fn records_use_declared_counts() {
        // Vertices 5 and 6 are declared but on no edge.
        let source = crate::builder::dimacs::read_graph("p edge 6 1\ne 1 2\n".as_bytes()).unwrap();
        let config = Config::default();
        let mut oracle = CdclOracle::default();

        let outcome = process_source("sparse", &source, &config, &mut oracle).unwrap();
        assert_eq!(outcome.record.num_vertices, 6);
        assert_eq!(outcome.graph.vertex_count(), 2);
    }

    #[test]
    fn directories_expand_in_order() {
        let dir = scratch("expand");
        std::fs::write(dir.join("b.col"), PATH).unwrap();
        std::fs::write(dir.join("a.col"), TRIANGLE).unwrap();

        let files = instance_paths(&[dir.clone()]).unwrap();
        assert_eq!(files, vec![dir.join("a.col"), dir.join("b.col")]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_paths_are_errors() {
        let missing = PathBuf::from("/no/such/otter_coloring/instance.col");
        assert_eq!(
            instance_paths(&[missing.clone()]),
            Err(err::BatchError::NoFile(missing))
        );
    }

    #[test]
    fn failures_are_isolated() {
        let dir = scratch("isolated");
        let triangle = dir.join("triangle.col");
        let path = dir.join("path.col");
        std::fs::write(&triangle, TRIANGLE).unwrap();
        std::fs::write(&path, PATH).unwrap();
        let missing = dir.join("missing.col");

        let paths = vec![triangle, missing, path];
        let results = process_all(&paths, &Config::default(), 2);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().instance, "triangle.col");
        assert_eq!(
            results[1].as_ref().unwrap_err(),
            &err::ErrorKind::Parse(err::ParseError::NoFile)
        );
        assert_eq!(results[2].as_ref().unwrap().report.best_colors(), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
