/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
Coarse progress of a refinement is logged at `info`, data-quality signals (e.g. a malformed model) at `warn`, and the internals of the bundled solver at `trace`.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to building a [graph](crate::structures::graph)
    pub const GRAPH: &str = "graph";

    /// Logs related to [heuristic colorings](crate::heuristic)
    pub const HEURISTIC: &str = "heuristic";

    /// Logs related to [encoding](crate::encoding) a graph as a formula
    pub const ENCODING: &str = "encoding";

    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to the [decision oracle](crate::oracle)
    pub const ORACLE: &str = "oracle";

    /// Logs related to decoding a model to a coloring
    pub const MODEL: &str = "model";

    /// Logs related to [refinement](crate::refinement)
    pub const REFINEMENT: &str = "refinement";

    /// Logs related to [batches](crate::batch) of instances
    pub const BATCH: &str = "batch";
}
