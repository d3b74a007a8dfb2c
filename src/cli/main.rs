#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use otter_coloring::{
    batch::{instance_paths, process_all, InstanceOutcome},
    metrics::{CsvSink, MetricsSink},
};

mod config_io;
mod parse;

use config_io::ConfigIO;

fn main() {
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };
    let config_io = ConfigIO::from_args(&matches);

    let paths = match instance_paths(&config_io.files) {
        Ok(paths) if paths.is_empty() => {
            println!("c No instances found");
            std::process::exit(1);
        }
        Ok(paths) => paths,
        Err(e) => {
            println!("c Error finding instances: {e:?}");
            std::process::exit(1);
        }
    };

    let mut sink = match &config_io.csv {
        Some(path) => match CsvSink::from_path(path) {
            Ok(sink) => Some(sink),
            Err(e) => {
                println!("c Unable to write records to {path:?}: {e:?}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut failures = 0;

    for round in 1..=config_io.rounds {
        println!("c Round {round} of {}", config_io.rounds);

        for (path, result) in paths
            .iter()
            .zip(process_all(&paths, &config, config_io.jobs))
        {
            match result {
                Ok(outcome) => {
                    display_outcome(&outcome, config_io.show_coloring);

                    if let Some(sink) = sink.as_mut() {
                        if let Err(e) = sink.record(&outcome.record) {
                            println!("c Failed to write record: {e:?}");
                            failures += 1;
                        }
                    }
                }

                Err(e) => {
                    println!("c {path:?}: {e}");
                    failures += 1;
                }
            }
        }
    }

    if let Some(mut sink) = sink {
        if let Err(e) = sink.flush() {
            println!("c Failed to write records: {e:?}");
            failures += 1;
        }
    }

    if failures > 0 {
        println!("c {failures} failures");
        std::process::exit(1);
    }
}

fn display_outcome(outcome: &InstanceOutcome, show_coloring: bool) {
    for line in outcome.record.to_string().lines() {
        println!("c {line}");
    }
    println!("c Termination: {}", outcome.report.termination);
    if outcome.report.malformed_vertices > 0 {
        println!(
            "c Vertices with many colors: {}",
            outcome.report.malformed_vertices
        );
    }

    if show_coloring {
        let coloring = outcome.report.best_coloring();
        for (vertex, color) in coloring.colors().iter().enumerate() {
            if let Some(label) = outcome.graph.label_of(vertex) {
                println!("v {label} {color}");
            }
        }
    }
}
