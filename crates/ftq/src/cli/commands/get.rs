//! Implementation of `ftq get`.

use std::process::ExitCode;

use crate::cli::{
    args::GetCommand,
    context::{CommandContext, report_compile_error},
    output::print_json,
};

/// Prints the direct fetch query for one document.
pub fn run(ctx: &CommandContext, cmd: &GetCommand) -> ExitCode {
    let lookup = match ctx
        .compiler()
        .compile_get_by_id_query(&cmd.provider, &cmd.document)
    {
        Ok(lookup) => lookup,
        Err(e) => return report_compile_error(&e),
    };

    if let Err(e) = print_json(&lookup, &cmd.output) {
        eprintln!("error: failed to write output: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
