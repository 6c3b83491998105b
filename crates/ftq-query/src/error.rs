//! Error types for term extraction.

use thiserror::Error;

/// A single token could not be turned into a query term.
///
/// Callers recover from this by skipping the token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The token is empty once markers and quotes are stripped.
    #[error("token {token:?} contains no searchable text")]
    EmptyToken {
        /// The raw token as produced by the tokenizer.
        token: String,
    },
}

/// The search string as a whole could not be turned into query terms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A text search was requested but no token produced a usable term.
    #[error("no valid search terms in {query:?}")]
    NoValidTerms {
        /// The original search string.
        query: String,
    },
}

impl QueryError {
    /// Returns a hint for fixing the query.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::NoValidTerms { .. } => {
                "Markers (+, -, ?) and quotes need a word after them, e.g. '+rust' or '\"big world\"'"
            }
        }
    }
}
