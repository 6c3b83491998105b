//! Error types for query compilation.

use ftq_config::ConfigError;
use ftq_query::QueryError;
use thiserror::Error;

/// Errors from compiling a query.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The backend index could not be resolved.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// A text search was requested but yielded no terms.
    #[error(transparent)]
    NoValidQueryTerms(#[from] QueryError),
}
