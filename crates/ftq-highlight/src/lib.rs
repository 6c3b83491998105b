//! Terminal output styling for ftq.
//!
//! Compiled queries are printed as JSON and settings as TOML; both are
//! syntax-highlighted when written to a terminal. The remaining helpers wrap
//! short labels in ANSI styles.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Highlights structured text for a 24-bit color terminal.
pub struct Highlighter {
    /// Language definitions, including the two-face extras.
    syntax_set: SyntaxSet,
    /// Lazily loaded themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Active theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self::with_theme(EmbeddedThemeName::Dracula)
    }

    /// Creates a highlighter using `theme`.
    pub fn with_theme(theme: EmbeddedThemeName) -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme,
        }
    }

    /// Highlights a JSON document.
    pub fn highlight_json(&self, content: &str) -> String {
        self.highlight(content, "json")
    }

    /// Highlights a TOML document.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights `content` using the syntax named by extension or name.
    ///
    /// Unknown syntaxes fall back to plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut lines = HighlightLines::new(syntax, self.theme_set.get(self.theme));

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI escape codes.
pub mod colors {
    /// Bold.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan, for headers.
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow, for warnings.
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all attributes.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header in bold cyan.
pub fn header(text: &str) -> String {
    format!("{}{}{text}{}", colors::BOLD, colors::CYAN, colors::RESET)
}

/// Formats a subheader in bold.
pub fn subheader(text: &str) -> String {
    format!("{}{text}{}", colors::BOLD, colors::RESET)
}

/// Formats secondary text.
pub fn dim(text: &str) -> String {
    format!("{}{text}{}", colors::DIM, colors::RESET)
}

/// Formats a warning in yellow.
pub fn warning(text: &str) -> String {
    format!("{}{text}{}", colors::YELLOW, colors::RESET)
}
