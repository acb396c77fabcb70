//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the chart engine.
///
/// `Invariant` marks a required table lookup that missed for otherwise-valid
/// input. That is a porting defect in the rule tables, never a runtime
/// condition to recover from; the computation aborts rather than returning a
/// partially populated chart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TuViError {
    /// Birth input field outside its valid cyclic domain.
    InvalidInput(&'static str),
    /// A main-star or layout table has no entry for valid input.
    Invariant(&'static str),
}

impl Display for TuViError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid birth input: {msg}"),
            Self::Invariant(msg) => write!(f, "rule table invariant violated: {msg}"),
        }
    }
}

impl Error for TuViError {}
