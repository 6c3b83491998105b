//! Search string tokenization and term classification for ftq.
//!
//! A search string goes through two steps before it is compiled into a backend
//! query:
//!
//! - **Tokenize**: split on whitespace, keeping `"quoted phrases"` together
//! - **Classify**: read `+`, `-` and `?` markers and quoting into a [`QueryContent`]
//!
//! # Example
//!
//! ```
//! use ftq_query::{MatchMode, Polarity, extract_contents};
//!
//! let contents = extract_contents("+rust \"error handling\" -draft").unwrap();
//! assert_eq!(contents.len(), 3);
//! assert_eq!(contents[0].polarity(), &Polarity::Must);
//! assert_eq!(contents[1].match_mode(), MatchMode::Phrase);
//! assert_eq!(contents[2].polarity(), &Polarity::MustNot);
//! ```

#![warn(missing_docs)]

mod content;
mod error;
mod lexer;

pub use content::{MatchMode, Polarity, QueryContent};
pub use error::{ContentError, QueryError};
pub use lexer::tokenize;
use tracing::trace;

/// Tokenizes and classifies a search string.
///
/// Tokens that normalize to nothing are skipped. Fails with
/// [`QueryError::NoValidTerms`] if no token yields a term.
pub fn extract_contents(search: &str) -> Result<Vec<QueryContent>, QueryError> {
    let contents: Vec<QueryContent> = tokenize(search)
        .iter()
        .filter_map(|token| match QueryContent::parse(token) {
            Ok(content) => Some(content),
            Err(e) => {
                trace!(error = %e, "skipping token");
                None
            }
        })
        .collect();

    if contents.is_empty() {
        return Err(QueryError::NoValidTerms {
            query: search.to_string(),
        });
    }

    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_words_and_phrases() {
        let contents = extract_contents("hello \"big world\"").unwrap();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].word(), "hello");
        assert_eq!(contents[0].match_mode(), MatchMode::FuzzyTerm);
        assert_eq!(contents[1].word(), "big world");
        assert_eq!(contents[1].match_mode(), MatchMode::Phrase);
    }

    #[test]
    fn skips_empty_tokens() {
        let contents = extract_contents("+ rust - \"\"").unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].word(), "rust");
    }

    #[test]
    fn whitespace_only_fails() {
        let err = extract_contents("   ").unwrap_err();
        assert_eq!(
            err,
            QueryError::NoValidTerms {
                query: "   ".into()
            }
        );
    }

    #[test]
    fn unclosed_phrase_stays_a_term() {
        let contents = extract_contents(r#""\" x"#).unwrap();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].word(), "\\");
        assert_eq!(contents[0].match_mode(), MatchMode::FuzzyTerm);
    }

    #[test]
    fn markers_only_fails() {
        assert!(extract_contents("+ - ? \"\"").is_err());
    }

    #[test]
    fn question_mark_before_phrase() {
        let contents = extract_contents("?\"big world\"").unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].word(), "big world");
        assert_eq!(contents[0].polarity(), &Polarity::Should);
    }

    #[test]
    fn case_is_folded() {
        let contents = extract_contents("RUST").unwrap();
        assert_eq!(contents[0].word(), "rust");
    }
}
