use clap::ArgMatches;

use otter_coloring::{
    config::{self, Config, ConfigOption},
    generic::luby::LubyRepresentation,
    heuristic::Strategy,
    types::err::{self},
};

/// Sets `option` to `value`, noting the change.
fn revise<T: Clone + PartialOrd + std::fmt::Display>(
    option: &mut ConfigOption<T>,
    value: T,
) -> Result<(), err::ConfigError> {
    option.set(value)?;
    println!("c {} set to: {}", option.name, option.value);
    Ok(())
}

/// A [Config] from the defaults, revised by any arguments given.
///
/// Errors if some value is outside the bounds of the option.
pub fn config_from_args(args: &ArgMatches) -> Result<Config, err::ConfigError> {
    let mut the_config = Config::default();

    if let Ok(Some(budget)) = args.try_get_one::<config::ConflictBudget>("conflict_budget") {
        revise(&mut the_config.oracle.conflict_budget, *budget)?;
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("deadline") {
        println!("c deadline set to: {secs} seconds");
        the_config.deadline = Some(std::time::Duration::from_secs(*secs));
    };

    if let Ok(Some(strategy)) = args.try_get_one::<Strategy>("upper_bound_strategy") {
        revise(&mut the_config.upper_bound_strategy, *strategy)?;
    };

    if let Ok(Some(strategy)) = args.try_get_one::<Strategy>("comparison_strategy") {
        revise(&mut the_config.comparison_strategy, *strategy)?;
    };

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        println!("c seed set to: {seed}");
        the_config.seed = *seed;
        the_config.oracle.seed = *seed;
    };

    if let Ok(Some(bump)) = args.try_get_one::<config::Activity>("atom_bump") {
        revise(&mut the_config.oracle.atom_bump, *bump)?;
    };

    if let Ok(Some(decay)) = args.try_get_one::<config::Activity>("atom_decay") {
        revise(&mut the_config.oracle.atom_decay, *decay)?;
    };

    if let Ok(Some(u)) = args.try_get_one::<LubyRepresentation>("luby") {
        revise(&mut the_config.oracle.luby_u, *u)?;
    };

    if args.get_flag("no_restarts") {
        revise(&mut the_config.oracle.restart, false)?;
    };

    if args.get_flag("no_phase_saving") {
        revise(&mut the_config.oracle.phase_saving, false)?;
    };

    if let Ok(Some(lean)) = args.try_get_one::<config::PolarityLean>("polarity_lean") {
        revise(&mut the_config.oracle.polarity_lean, *lean)?;
    };

    if let Ok(Some(bias)) = args.try_get_one::<config::RandomDecisionBias>("random_decision_bias")
    {
        revise(&mut the_config.oracle.random_decision_bias, *bias)?;
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        println!("c time_limit set to: {secs} seconds");
        the_config.oracle.time_limit = Some(std::time::Duration::from_secs(*secs));
    };

    Ok(the_config)
}
