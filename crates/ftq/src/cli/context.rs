//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use ftq_config::Config;
use ftq_mapping::{CompileError, QueryCompiler};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is
    /// invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Returns a compiler resolving the index from the loaded configuration.
    pub fn compiler(&self) -> QueryCompiler<&Config> {
        QueryCompiler::new(&self.config)
    }
}

/// Reports a compilation error on stderr and returns the failure exit code.
pub fn report_compile_error(err: &CompileError) -> ExitCode {
    eprintln!("error: {err}");
    match err {
        CompileError::Configuration(_) => {
            eprintln!("Run 'ftq init' to create a configuration file, then set [index] name.");
        }
        CompileError::NoValidQueryTerms(e) => eprintln!("{}", e.suggestion()),
    }
    ExitCode::FAILURE
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
