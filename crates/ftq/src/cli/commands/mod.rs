//! Command implementations and dispatch.

pub mod compile;
pub mod config;
pub mod get;
pub mod init;
pub mod tokens;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: &Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Compile(cmd) => compile::run(ctx, cmd),
        Commands::Get(cmd) => get::run(ctx, cmd),
        Commands::Tokens(cmd) => tokens::run(cmd),
        Commands::Init(cmd) => init::run(ctx, cmd),
        Commands::Config => config::run(ctx),
    }
}
