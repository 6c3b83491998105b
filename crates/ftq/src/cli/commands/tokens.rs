//! Implementation of `ftq tokens`.

use std::process::ExitCode;

use ftq_highlight::{dim, header, warning};
use ftq_query::{QueryContent, tokenize};
use serde::Serialize;

use crate::cli::{args::TokensCommand, output::render_json};

/// How one token was classified.
#[derive(Debug, Serialize)]
struct TokenReport {
    /// Raw token from the tokenizer.
    token: String,
    /// Normalized word, absent if the token was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    word: Option<String>,
    /// Group key, absent if the token was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    polarity: Option<String>,
    /// Match query type, absent if the token was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    match_mode: Option<String>,
    /// Why the token was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<String>,
}

/// Classifies every token of `search`.
fn analyze(search: &str) -> Vec<TokenReport> {
    tokenize(search)
        .into_iter()
        .map(|token| match QueryContent::parse(&token) {
            Ok(content) => TokenReport {
                word: Some(content.word().to_string()),
                polarity: Some(content.polarity().to_string()),
                match_mode: Some(content.match_mode().to_string()),
                skipped: None,
                token,
            },
            Err(e) => TokenReport {
                word: None,
                polarity: None,
                match_mode: None,
                skipped: Some(e.to_string()),
                token,
            },
        })
        .collect()
}

/// Shows how a search string is tokenized and classified.
pub fn run(cmd: &TokensCommand) -> ExitCode {
    let search = cmd.query.join(" ");
    let reports = analyze(&search);

    if cmd.json {
        match render_json(&reports, false) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to write output: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", header(&format!("Tokens ({})", reports.len())));
        for report in &reports {
            match (&report.word, &report.skipped) {
                (Some(word), _) => println!(
                    "  {:<28} {:<9} {:<20} {word}",
                    report.token,
                    report.polarity.as_deref().unwrap_or_default(),
                    dim(report.match_mode.as_deref().unwrap_or_default()),
                ),
                (None, Some(reason)) => {
                    println!("  {:<28} {}", report.token, warning(reason));
                }
                (None, None) => {}
            }
        }
    }

    if reports.iter().all(|report| report.word.is_none()) {
        eprintln!("error: no valid search terms in {search:?}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
