//! Error types for term parsing and rule serialization.

use std::fmt;

/// Errors that can occur while parsing canonical term or rule text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    /// The input was empty where a term was expected.
    EmptyInput,

    /// A `(` was never matched by a closing `)`.
    UnbalancedParens,

    /// A `)` appeared with no matching open paren.
    UnmatchedCloseParen,

    /// Trailing tokens remained after a complete term was parsed.
    TrailingTokens(String),

    /// Rule text did not end with a newline, as required by the canonical form.
    MissingTrailingNewline,

    /// No line consisting solely of `----` was found.
    MissingSeparator,

    /// No conclusion line followed the `----` separator.
    MissingConclusion,

    /// More than one non-empty line followed the `----` separator.
    MultipleConclusionLines,
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::EmptyInput => write!(f, "empty input where a term was expected"),
            TermError::UnbalancedParens => write!(f, "unbalanced parentheses: missing ')'"),
            TermError::UnmatchedCloseParen => write!(f, "unmatched ')' with no opening '('"),
            TermError::TrailingTokens(rest) => {
                write!(f, "trailing tokens after term: '{}'", rest)
            }
            TermError::MissingTrailingNewline => {
                write!(f, "rule text must end with a newline after the conclusion")
            }
            TermError::MissingSeparator => write!(f, "no '----' separator line found"),
            TermError::MissingConclusion => write!(f, "no conclusion line after '----'"),
            TermError::MultipleConclusionLines => {
                write!(f, "more than one conclusion line after '----'")
            }
        }
    }
}

impl std::error::Error for TermError {}

/// Result type for term/rule parsing operations.
pub type TermResult<T> = Result<T, TermError>;
