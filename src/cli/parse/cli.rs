use std::{path::PathBuf, str::FromStr};

use clap::{value_parser, Arg, ArgAction, Command};

use otter_coloring::{
    config::{Activity, Config, ConflictBudget, PolarityLean, RandomDecisionBias},
    generic::luby::LubyRepresentation,
    heuristic::Strategy,
};

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("otter_coloring")
        .about("Refines heuristic colorings of graphs with a conflict-bounded SAT oracle, and compares the result against DSATUR")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(true)
            .trailing_var_arg(true)
            .num_args(1..)
            .value_parser(value_parser!(PathBuf))
            .help("DIMACS graph files, or directories of DIMACS graph files."))

        .arg(Arg::new("conflict_budget")
            .long("conflict-budget")
            .short('b')
            .value_name("CONFLICTS")
            .value_parser(value_parser!(ConflictBudget))
            .required(false)
            .num_args(1)
            .help(format!("The count of conflicts the oracle may analyse for each count of colors.
Default: {}", defaults.oracle.conflict_budget.value)))

        .arg(Arg::new("deadline")
            .long("deadline")
            .short('d')
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("A limit on the time of a refinement, checked before each count of colors.
Default: No limit"))

        .arg(Arg::new("upper_bound_strategy")
            .long("upper-bound")
            .short('u')
            .value_name("STRATEGY")
            .value_parser(clap::builder::ValueParser::new(strategy_parser))
            .required(false)
            .num_args(1)
            .help(format!("The heuristic used for the initial count of colors.
Default: {}", defaults.upper_bound_strategy.value))
            .long_help(strategy_help("The heuristic used for the initial count of colors.", defaults.upper_bound_strategy.value)))

        .arg(Arg::new("comparison_strategy")
            .long("comparison")
            .short('c')
            .value_name("STRATEGY")
            .value_parser(clap::builder::ValueParser::new(strategy_parser))
            .required(false)
            .num_args(1)
            .help(format!("The heuristic compared against.
Default: {}", defaults.comparison_strategy.value))
            .long_help(strategy_help("The heuristic compared against.", defaults.comparison_strategy.value)))

        .arg(Arg::new("seed")
            .long("seed")
            .value_name("SEED")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("The seed for random orderings and for the oracle.
Default: {}", defaults.seed)))

        // Oracle arguments

        .arg(Arg::new("atom_bump")
            .long("atom-bump")
            .value_parser(value_parser!(Activity))
            .required(false)
            .num_args(1)
            .help(format!("The initial bump to the activity of an atom involved in a conflict.
Default: {}", defaults.oracle.atom_bump.value)))

        .arg(Arg::new("atom_decay")
            .long("atom-decay")
            .value_parser(value_parser!(Activity))
            .required(false)
            .num_args(1)
            .help(format!("The decay to use for atom activity.
Default: {}", defaults.oracle.atom_decay.value))
            .long_help(format!("The decay to use for atom activity.
Default: {}

After each conflict the bump is multiplied by 1 / decay.
Viewed otherwise, the activity of every atom is decayed by a factor of decay each conflict.", defaults.oracle.atom_decay.value)))

        .arg(Arg::new("luby")
            .long("luby")
            .short('l')
            .value_name("U")
            .value_parser(value_parser!(LubyRepresentation))
            .required(false)
            .num_args(1)
            .help(format!("The 'u' value to use for the luby calculation when restarts are permitted.
Default: {}", defaults.oracle.luby_u.value)))

        .arg(Arg::new("no_restarts")
            .long("no-restart")
            .action(ArgAction::SetTrue)
            .help("Prevent decisions from being forgotten."))

        .arg(Arg::new("no_phase_saving")
            .long("no-phase-saving")
            .action(ArgAction::SetTrue)
            .help("Choose the polarity of each decision afresh, rather than by the last value of the atom."))

        .arg(Arg::new("polarity_lean")
            .long("polarity-lean")
            .value_name("LEAN")
            .value_parser(value_parser!(PolarityLean))
            .required(false)
            .num_args(1)
            .help(format!("The chance of choosing positive polarity for a fresh decision.
Default: {}", defaults.oracle.polarity_lean.value)))

        .arg(Arg::new("random_decision_bias")
            .long("random-decision-bias")
            .short('r')
            .value_name("BIAS")
            .value_parser(value_parser!(RandomDecisionBias))
            .required(false)
            .num_args(1)
            .help(format!("The chance of deciding on a random atom, rather than an atom of most activity.
Default: {}", defaults.oracle.random_decision_bias.value)))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Time limit for each call to the oracle in seconds.
Default: No limit"))

        // CLI specific arguments

        .arg(Arg::new("csv")
            .long("csv")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("Write a record of each instance to a CSV file."))

        .arg(Arg::new("jobs")
            .long("jobs")
            .short('j')
            .value_name("N")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The count of instances to refine concurrently.
Default: {}", crate::config_io::JOBS)))

        .arg(Arg::new("rounds")
            .long("rounds")
            .value_name("N")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The count of times to refine each instance.
Default: {}", crate::config_io::ROUNDS)))

        .arg(Arg::new("coloring")
            .long("coloring")
            .short('v')
            .action(ArgAction::SetTrue)
            .help("Display the best coloring of each instance, as 'v label color' lines."))
}

fn strategy_parser(arg: &str) -> Result<Strategy, std::io::Error> {
    Strategy::from_str(arg).map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown strategy")
    })
}

fn strategy_help(about: &str, default: Strategy) -> String {
    let names = Strategy::ALL
        .iter()
        .map(|strategy| format!("  - {strategy}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{about}
Default: {default}

{names}")
}
