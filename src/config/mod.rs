/*!
Configuration of a refinement, and of the oracle used during a refinement.

Primary configuration is [Config].
The configuration of the bundled oracle is contained within, as [OracleConfig], and is cloned to each [context](crate::context) built by the oracle.

Most options are wrapped in a [ConfigOption], which bounds the values an option may take.

```rust
# use otter_coloring::config::Config;
# use otter_coloring::heuristic::Strategy;
let mut config = Config::default();

assert_eq!(config.upper_bound_strategy.value, Strategy::LargestFirst);
assert_eq!(config.comparison_strategy.value, Strategy::DSatur);
assert_eq!(config.oracle.conflict_budget.value, 50_000);

assert!(config.oracle.polarity_lean.set(1.5).is_err());
assert!(config.oracle.conflict_budget.set(1).is_ok());
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod oracle;
pub use oracle::OracleConfig;

use crate::heuristic::Strategy;

/// Representation used for the activity of atoms.
pub type Activity = f64;

/// Representation used for a budget of conflicts.
pub type ConflictBudget = u64;

/// Representation used for the probability of choosing positive polarity.
pub type PolarityLean = f64;

/// Representation used for the probability of making a random decision.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the oracle.
    pub oracle: OracleConfig,

    /// The heuristic used to find an initial upper bound on the colors required.
    pub upper_bound_strategy: ConfigOption<Strategy>,

    /// The heuristic used as a baseline for comparison.
    pub comparison_strategy: ConfigOption<Strategy>,

    /// A limit on the cumulative (wall-clock) time of a refinement, checked between probes.
    pub deadline: Option<std::time::Duration>,

    /// The seed for randomised heuristics.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            oracle: OracleConfig::default(),

            upper_bound_strategy: ConfigOption {
                name: "upper_bound_strategy",
                min: Strategy::MIN,
                max: Strategy::MAX,
                value: Strategy::LargestFirst,
            },

            comparison_strategy: ConfigOption {
                name: "comparison_strategy",
                min: Strategy::MIN,
                max: Strategy::MAX,
                value: Strategy::DSatur,
            },

            deadline: None,

            seed: 0,
        }
    }
}
