//! Configuration of the bundled decision oracle.

use super::{Activity, ConfigOption, ConflictBudget, PolarityLean, RandomDecisionBias};

use crate::generic::luby::LubyRepresentation;

/// Configuration for the [CDCL oracle](crate::oracle::CdclOracle), and the [context](crate::context) used for each solve.
#[derive(Clone, Debug)]
pub struct OracleConfig {
    /// The count of conflicts a solve may analyse before giving up with an unknown verdict.
    pub conflict_budget: ConfigOption<ConflictBudget>,

    /// The activity with which the next atom bumped will be bumped by, dynamically adjusted.
    pub atom_bump: ConfigOption<Activity>,

    /// The decay to the activity of an atom each conflict.
    ///
    /// Realised by growing the bump by a factor of 1 / decay.
    pub atom_decay: ConfigOption<Activity>,

    /// The `u` value to multiply the luby sequence by when determining whether to perform a restart.
    pub luby_u: ConfigOption<LubyRepresentation>,

    /// Default to the last set value of an atom when choosing a value for the atom.
    pub phase_saving: ConfigOption<bool>,

    /// The probability of assigning positive polarity to an atom when freely choosing an atom.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of choosing an atom at random, rather than by activity.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// Permit (scheduled) restarts.
    pub restart: ConfigOption<bool>,

    /// The seed for the source of randomness of a solve.
    pub seed: u64,

    /// The time limit for a single solve, if any.
    pub time_limit: Option<std::time::Duration>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            conflict_budget: ConfigOption {
                name: "conflict_budget",
                min: 0,
                max: ConflictBudget::MAX,
                value: 50_000,
            },

            atom_bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN_POSITIVE,
                max: (2.0 as Activity).powi(512),
                value: 1.0,
            },

            atom_decay: ConfigOption {
                name: "atom_decay",
                min: Activity::MIN_POSITIVE,
                max: 1.0,
                value: 0.95,
            },

            luby_u: ConfigOption {
                name: "luby",
                min: 1,
                max: LubyRepresentation::MAX,
                value: 128,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: true,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                value: true,
            },

            seed: 0,

            time_limit: None,
        }
    }
}
