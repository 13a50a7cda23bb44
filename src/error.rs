//! Error types for problem parsing.

use thiserror::Error;

/// Fatal conditions raised while reading a problem file. Checking outcomes
/// are [`Verdict`](crate::checker::Verdict) values, never errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A line failed the grammar, including the parenthesis-wrapping retry
    #[error("syntax error on line {0}")]
    Syntax(usize),

    /// A 33rd distinct variable name was encountered
    #[error("over 32 propositional variables")]
    TooManyVariables,

    /// The file holds no propositions at all
    #[error("no theorem to check")]
    EmptyInput,
}
