//! Search string tokenizer.
//!
//! Splits a search string into raw tokens on whitespace, keeping double-quoted
//! phrases together as single tokens (quotes included).

use std::{iter::Peekable, str::Chars};

/// Splits a lower-cased search string into raw tokens.
struct Lexer<'a> {
    /// Character iterator with one-character lookahead.
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    /// Tokenizes the entire input.
    fn tokenize(mut self) -> Vec<String> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        tokens
    }

    /// Returns the next token, or None if at end of input.
    fn next_token(&mut self) -> Option<String> {
        self.skip_whitespace();

        let &ch = self.chars.peek()?;

        let token = match ch {
            // `?` never opens a phrase: it becomes a token of its own and the
            // phrase is read on the next call.
            '?' if self.phrase_follows(1) => {
                self.advance();
                String::from('?')
            }
            '+' | '-' if self.phrase_follows(1) => {
                self.advance();
                let mut token = String::from(ch);
                token.push_str(&self.read_phrase());
                token
            }
            '"' if self.phrase_follows(0) => self.read_phrase(),
            _ => self.read_word(),
        };

        Some(token)
    }

    /// Checks whether a closed quoted phrase starts `skip` characters ahead.
    fn phrase_follows(&self, skip: usize) -> bool {
        let mut ahead = self.chars.clone().skip(skip);
        if ahead.next() != Some('"') {
            return false;
        }

        while let Some(ch) = ahead.next() {
            match ch {
                '\\' => {
                    if ahead.next().is_none() {
                        return false;
                    }
                }
                '"' => return true,
                _ => {}
            }
        }

        false
    }

    /// Reads a quoted phrase, keeping the quotes and any escapes verbatim.
    ///
    /// Only called after `phrase_follows` confirmed the closing quote exists.
    fn read_phrase(&mut self) -> String {
        let mut phrase = String::new();
        if let Some(open) = self.chars.next() {
            phrase.push(open);
        }

        while let Some(ch) = self.chars.next() {
            phrase.push(ch);
            match ch {
                '\\' => {
                    if let Some(escaped) = self.chars.next() {
                        phrase.push(escaped);
                    }
                }
                '"' => break,
                _ => {}
            }
        }

        phrase
    }

    /// Reads a run of non-whitespace characters.
    fn read_word(&mut self) -> String {
        let mut word = String::new();

        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                break;
            }
            word.push(ch);
            self.advance();
        }

        word
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|ch| ch.is_whitespace()).is_some() {}
    }

    /// Advances to the next character.
    fn advance(&mut self) {
        self.chars.next();
    }
}

/// Tokenizes a search string.
///
/// The input is lower-cased first, so matching downstream is case-insensitive.
/// Empty and whitespace-only input yields no tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    let lowered = input.to_lowercase();
    Lexer::new(&lowered).tokenize()
}
