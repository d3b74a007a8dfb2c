//! Error types used in the library.
//!
//! - Some of these are internal to the bundled solver and are very unlikely to occur during use.
//! - Some are external --- e.g. an [EncodingInvariantViolation](RefinementError::EncodingInvariantViolation) highlights that the oracle refuted a count of colors the heuristic had already witnessed, and so that something is wrong with the encoding or the oracle.
//!
//! Note, an oracle exhausting its conflict budget, or a refinement reaching its deadline, are *not* errors.
//! Both are valid terminal states of a [refinement](crate::refinement::Termination).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use std::path::PathBuf;

use crate::structures::literal::Atom;

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    Batch(BatchError),
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    Encoding(EncodingError),
    Metrics(MetricsError),
    Oracle(OracleError),
    Parse(ParseError),
    Refinement(RefinementError),

    InvalidState,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Refinement(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Analysis was requested without a decision having been made.
    NoDecision,

    /// Some literal on the current level was derived without a reason.
    MissingReason(Atom),
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Errors when running a batch of instances.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BatchError {
    /// A glob pattern built from a directory could not be used.
    Pattern(String),

    /// No file was found at the given path.
    NoFile(PathBuf),

    /// A worker thread panicked.
    Worker,
}

impl From<BatchError> for ErrorKind {
    fn from(e: BatchError) -> Self {
        ErrorKind::Batch(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// A clause mentions an atom beyond those the context was built for.
    UnknownAtom(Atom),

    /// A clause was added after some decision has been made.
    DecisionMade,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when revising a configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A requested value is outside the bounds of an option.
    OutOfBounds {
        /// The name of the option.
        name: &'static str,
        /// A display of the smallest permitted value.
        min: String,
        /// A display of the largest permitted value.
        max: String,
    },

    /// A string did not name a known value.
    Unrecognised(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { name, min, max } => {
                write!(f, "{name} requires a value between {min} and {max}")
            }
            Self::Unrecognised(s) => write!(f, "unrecognised value: {s}"),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors when encoding a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodingError {
    /// At least one color is required, as otherwise the coverage clauses are empty.
    NoColors,

    /// The count of (vertex, color) atoms exceeds the atoms available.
    AtomsExhausted,

    /// The formula refused some clause.
    Clause(ClauseDBError),
}

impl From<ClauseDBError> for EncodingError {
    fn from(e: ClauseDBError) -> Self {
        EncodingError::Clause(e)
    }
}

impl From<EncodingError> for ErrorKind {
    fn from(e: EncodingError) -> Self {
        ErrorKind::Encoding(e)
    }
}

/// Errors when writing metrics.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MetricsError {
    /// The record could not be written, with the underlying message.
    Write(String),
}

impl From<MetricsError> for ErrorKind {
    fn from(e: MetricsError) -> Self {
        ErrorKind::Metrics(e)
    }
}

impl From<csv::Error> for MetricsError {
    fn from(e: csv::Error) -> Self {
        MetricsError::Write(e.to_string())
    }
}

impl From<std::io::Error> for MetricsError {
    fn from(e: std::io::Error) -> Self {
        MetricsError::Write(e.to_string())
    }
}

/// Errors arising from an oracle or from the interpretation of its verdict.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// The model assigns no color to a vertex, contrary to the coverage clauses.
    IncompleteModel {
        /// The vertex without a color.
        vertex: usize,
    },

    /// The model omits an atom of the formula.
    MissingAtom(Atom),

    /// The coloring read from a model is not proper, contrary to the edge clauses.
    ImproperModel {
        /// Some edge whose endpoints share a color.
        edge: (usize, usize),
    },
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// An edge line at the given line without two vertices.
    Edge(usize),

    /// No file was found.
    NoFile,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors during refinement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RefinementError {
    /// The oracle refuted the count of colors the upper bound heuristic used.
    ///
    /// As the heuristic witnesses a coloring with this count, the refutation indicates a defect in the encoding or in the oracle.
    EncodingInvariantViolation {
        /// The instance refined.
        instance: String,

        /// The count of colors refuted.
        k: usize,

        /// The count of colors used by the heuristic.
        heuristic_colors: usize,
    },

    /// A step was requested after the refinement terminated.
    Terminated,
}

impl std::fmt::Display for RefinementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EncodingInvariantViolation {
                instance,
                k,
                heuristic_colors,
            } => write!(
                f,
                "{instance}: the oracle refuted {k} colors, though the heuristic used {heuristic_colors}"
            ),
            Self::Terminated => write!(f, "the refinement has terminated"),
        }
    }
}

impl From<RefinementError> for ErrorKind {
    fn from(e: RefinementError) -> Self {
        ErrorKind::Refinement(e)
    }
}
