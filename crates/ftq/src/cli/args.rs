//! Clap argument definitions for the `ftq` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use ftq_mapping::FilterEntry;

/// Parses a `field=pattern` filter entry.
fn parse_filter_entry(s: &str) -> Result<FilterEntry, String> {
    match s.split_once('=') {
        Some((field, pattern)) if !field.trim().is_empty() => {
            Ok(FilterEntry::new(field.trim(), pattern))
        }
        _ => Err(format!("expected FIELD=PATTERN, got {s:?}")),
    }
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "ftq")]
#[command(about = "Full-text query compiler - turns search requests into backend queries")]
pub struct Cli {
    /// Log verbosity (-v for debug, -vv for trace); RUST_LOG takes precedence
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output flags for commands that print JSON.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print JSON on one line without highlighting
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `ftq compile`.
#[derive(Args, Debug, Clone)]
pub struct CompileCommand {
    /// Search words; omit for a filter-only query
    pub query: Vec<String>,

    /// Provider whose documents are searched
    #[arg(short = 'p', long)]
    pub provider: String,

    /// Identity of the user searching
    #[arg(short = 'u', long)]
    pub viewer: String,

    /// Group the viewer belongs to (repeatable)
    #[arg(short = 'g', long = "group")]
    pub groups: Vec<String>,

    /// Circle the viewer belongs to (repeatable)
    #[arg(short = 'c', long = "circle")]
    pub circles: Vec<String>,

    /// Load the search request from a JSON file; flags extend or override it
    #[arg(short = 'r', long)]
    pub request: Option<PathBuf>,

    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<u64>,

    /// Results per page [default: search.page_size from config]
    #[arg(short = 'n', long)]
    pub size: Option<u64>,

    /// Extra field to search (repeatable)
    #[arg(long = "field")]
    pub fields: Vec<String>,

    /// Only search these fields (repeatable)
    #[arg(long = "limit-field")]
    pub limit_fields: Vec<String>,

    /// Field searched with a *word* wildcard (repeatable)
    #[arg(long = "wildcard-field")]
    pub wildcard_fields: Vec<String>,

    /// Multi-part field, searched as parts.<name> (repeatable)
    #[arg(long = "part")]
    pub parts: Vec<String>,

    /// Meta-tag; documents with any of them match (repeatable)
    #[arg(long = "metatag")]
    pub meta_tags: Vec<String>,

    /// Sub-tag; documents must have all of them (repeatable)
    #[arg(long = "subtag")]
    pub sub_tags: Vec<String>,

    /// Wildcard filter FIELD=PATTERN, one group per flag (repeatable)
    #[arg(long = "wildcard-filter", value_parser = parse_filter_entry)]
    pub wildcard_filters: Vec<FilterEntry>,

    /// Regex filter FIELD=PATTERN, one group per flag (repeatable)
    #[arg(long = "regex-filter", value_parser = parse_filter_entry)]
    pub regex_filters: Vec<FilterEntry>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `ftq get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Provider that owns the document
    pub provider: String,

    /// Document id within the provider
    pub document: String,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `ftq tokens`.
#[derive(Args, Debug, Clone)]
pub struct TokensCommand {
    /// Search string to analyze
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `ftq init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.ftq.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `ftq` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compile a search request into a backend query
    #[command(after_help = "\
QUERY SYNTAX:
  word              Optional term, matched as a prefix
  +word             Required term
  -word             Excluded term
  ?word             Optional term (explicit)
  \"a phrase\"        Exact phrase; combine with +, - or ?

EXAMPLES:
  ftq compile -p files -u alice rust async
  ftq compile -p files -u alice '+report -draft \"q3 sales\"'
  ftq compile -p mail -u bob -g staff --metatag inbox
  ftq compile -p files -u alice --wildcard-filter 'name=*.pdf'
  ftq compile -p files -u alice -r request.json --page 2")]
    Compile(CompileCommand),
    /// Build a direct fetch of one document
    Get(GetCommand),
    /// Show how a search string is tokenized and classified
    Tokens(TokensCommand),
    /// Initialize ftq configuration in current directory
    Init(InitCommand),
    /// Show effective configuration settings
    Config,
}
