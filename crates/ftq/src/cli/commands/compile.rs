//! Implementation of `ftq compile`.

use std::{fs, path::Path, process::ExitCode};

use ftq_mapping::{AccessContext, SearchRequest};
use tracing::debug;

use crate::cli::{
    args::CompileCommand,
    context::{CommandContext, report_compile_error},
    output::print_json,
};

/// Compiles a search request and prints the backend query.
pub fn run(ctx: &CommandContext, cmd: &CompileCommand) -> ExitCode {
    let base = match &cmd.request {
        Some(path) => match load_request(path) {
            Ok(request) => Some(request),
            Err(message) => {
                eprintln!("error: {message}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let request = build_request(base, cmd, ctx.config.search.page_size);
    debug!(search = %request.search, page = request.page, size = request.size, "request");

    let access = AccessContext {
        viewer: cmd.viewer.clone(),
        groups: cmd.groups.clone(),
        circles: cmd.circles.clone(),
    };

    let compiled = match ctx
        .compiler()
        .compile_search_query(&request, &access, &cmd.provider)
    {
        Ok(compiled) => compiled,
        Err(e) => return report_compile_error(&e),
    };

    if let Err(e) = print_json(&compiled, &cmd.output) {
        eprintln!("error: failed to write output: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Reads a search request from a JSON file.
fn load_request(path: &Path) -> Result<SearchRequest, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("invalid search request in {}: {e}", path.display()))
}

/// Applies command-line flags on top of an optional file-loaded request.
///
/// Query words replace the search string, even when blank, so an empty search
/// is rejected by the compiler instead of widening to a filter-only query. A
/// file-supplied search is kept as written. Only a run with neither words nor
/// a request file uses the no-search sentinel. Scalar flags override and list
/// flags append. Without a request file, the page size defaults to the
/// configured one.
fn build_request(
    base: Option<SearchRequest>,
    cmd: &CompileCommand,
    default_size: u64,
) -> SearchRequest {
    let mut request = base.unwrap_or_else(|| SearchRequest {
        size: default_size,
        ..SearchRequest::default()
    });

    if !cmd.query.is_empty() {
        request.search = cmd.query.join(" ");
    }

    if let Some(page) = cmd.page {
        request.page = page;
    }
    if let Some(size) = cmd.size {
        request.size = size;
    }

    request.fields.extend(cmd.fields.iter().cloned());
    request.limit_fields.extend(cmd.limit_fields.iter().cloned());
    request
        .wildcard_fields
        .extend(cmd.wildcard_fields.iter().cloned());
    request.parts.extend(cmd.parts.iter().cloned());
    request.meta_tags.extend(cmd.meta_tags.iter().cloned());
    request.sub_tags.extend(cmd.sub_tags.iter().cloned());
    request
        .wildcard_filters
        .extend(cmd.wildcard_filters.iter().map(|entry| vec![entry.clone()]));
    request
        .regex_filters
        .extend(cmd.regex_filters.iter().map(|entry| vec![entry.clone()]));

    request
}
