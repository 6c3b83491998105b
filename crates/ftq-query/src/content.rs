//! Query content classification.
//!
//! Turns one raw token into a normalized [`QueryContent`]: the word to search
//! for, the boolean group it belongs to, and how it is matched.
//!
//! Marker grammar:
//!
//! - `+word` - the term is required (`must`)
//! - `-word` - the term is excluded (`must_not`)
//! - `?word` or `word` - the term is optional (`should`)
//! - `"a phrase"` - matched as a phrase; otherwise matched as a prefix term

use std::fmt;

use crate::error::ContentError;

/// Boolean group a query term is placed in.
///
/// The three known groups are tagged variants; any other key is carried through
/// verbatim so that callers can build custom groupings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// The term must match.
    Must,
    /// The term may match and contributes to relevance.
    Should,
    /// The term must not match.
    MustNot,
    /// Any other group key, passed through unchanged.
    Other(String),
}

impl Polarity {
    /// Returns the group key used in the compiled query.
    pub fn key(&self) -> &str {
        match self {
            Self::Must => "must",
            Self::Should => "should",
            Self::MustNot => "must_not",
            Self::Other(key) => key,
        }
    }

    /// Returns the polarity selected by a leading marker character.
    fn from_marker(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Must),
            '-' => Some(Self::MustNot),
            '?' => Some(Self::Should),
            _ => None,
        }
    }
}

impl From<&str> for Polarity {
    fn from(key: &str) -> Self {
        match key {
            "must" => Self::Must,
            "should" => Self::Should,
            "must_not" => Self::MustNot,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How a term is matched against a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Exact phrase match (quoted input).
    Phrase,
    /// Loose term match, allowing the last word to be a prefix.
    FuzzyTerm,
}

impl MatchMode {
    /// Returns the match query type used in the compiled query.
    pub fn key(self) -> &'static str {
        match self {
            Self::Phrase => "match_phrase",
            Self::FuzzyTerm => "match_phrase_prefix",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single normalized search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContent {
    /// Normalized word or phrase, never empty.
    word: String,
    /// Group the term belongs to.
    polarity: Polarity,
    /// How the term is matched.
    match_mode: MatchMode,
}

impl QueryContent {
    /// Creates a query content item, trimming the word.
    ///
    /// Fails with [`ContentError::EmptyToken`] if nothing is left after trimming.
    pub fn new(
        word: impl Into<String>,
        polarity: Polarity,
        match_mode: MatchMode,
    ) -> Result<Self, ContentError> {
        let word = word.into();
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Err(ContentError::EmptyToken { token: word });
        }

        Ok(Self {
            word: trimmed.to_string(),
            polarity,
            match_mode,
        })
    }

    /// Classifies a raw token produced by the tokenizer.
    pub fn parse(token: &str) -> Result<Self, ContentError> {
        let trimmed = token.trim();

        let (polarity, rest) = match trimmed.chars().next().and_then(Polarity::from_marker) {
            // Markers are ASCII, so slicing one byte off is safe.
            Some(polarity) => (polarity, &trimmed[1..]),
            None => (Polarity::Should, trimmed),
        };

        let (match_mode, word) = if is_quoted(rest) {
            (MatchMode::Phrase, unescape(&rest[1..rest.len() - 1]))
        } else {
            (MatchMode::FuzzyTerm, rest.replace('"', ""))
        };

        Self::new(word, polarity, match_mode).map_err(|_| ContentError::EmptyToken {
            token: token.to_string(),
        })
    }

    /// Returns the normalized word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the group the term belongs to.
    pub fn polarity(&self) -> &Polarity {
        &self.polarity
    }

    /// Returns how the term is matched.
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }
}

/// Checks whether a token is wrapped in double quotes.
fn is_quoted(s: &str) -> bool {
    let Some(inner) = s.strip_prefix('"') else {
        return false;
    };

    let mut chars = inner.char_indices();
    while let Some((i, ch)) = chars.next() {
        match ch {
            '\\' => {
                if chars.next().is_none() {
                    return false;
                }
            }
            // The first unescaped quote closes the phrase and must end the token.
            '"' => return i + 1 == inner.len(),
            _ => {}
        }
    }

    false
}

/// Resolves backslash escapes inside a phrase.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(ch);
        }
    }

    out
}
