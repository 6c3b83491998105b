//! JSON output.

use std::io::{self, IsTerminal};

use ftq_highlight::Highlighter;
use serde::Serialize;

use crate::cli::args::OutputArgs;

/// Renders `value` as JSON, pretty unless `compact` is set.
pub fn render_json<T: Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

/// Prints `value` as JSON on stdout, highlighted when stdout is a terminal.
pub fn print_json<T: Serialize>(value: &T, output: &OutputArgs) -> io::Result<()> {
    let rendered = render_json(value, output.compact)?;
    if !output.compact && io::stdout().is_terminal() {
        println!("{}", Highlighter::new().highlight_json(&rendered));
    } else {
        println!("{rendered}");
    }
    Ok(())
}
