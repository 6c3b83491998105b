//! Implementation of `ftq config`.

use std::process::ExitCode;

use ftq_config::CONFIG_FILENAME;
use ftq_highlight::{Highlighter, dim, subheader};

use crate::cli::context::CommandContext;

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    match &config.config_root {
        Some(root) => println!(
            "{} {}",
            subheader("Config root:"),
            root.join(CONFIG_FILENAME).display()
        ),
        None => println!("{}", dim("No configuration files found; showing defaults.")),
    }
    println!();

    let highlighter = Highlighter::new();
    print!("{}", highlighter.highlight_toml(&config.settings_to_toml()));
    ExitCode::SUCCESS
}
