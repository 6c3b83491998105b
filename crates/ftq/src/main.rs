//! Command-line interface for the `ftq` full-text query compiler.

#![warn(missing_docs)]

mod cli;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match &cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    logging::init(cli.verbose, &ctx.config.log.level);

    commands::run(&cli.command, &ctx)
}
