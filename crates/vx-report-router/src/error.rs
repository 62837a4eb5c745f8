//! Routing and dispatch error types.

use thiserror::Error;
use vx_interpreter::InterpretError;
use vx_protocol::report::ReportType;

use crate::dispatch::GeneratorError;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Interpret(#[from] InterpretError),

    /// The catalog in use has no definition for the resolved type. Cannot
    /// happen with the builtin catalog, which covers every variant.
    #[error("no catalog definition for report type: {0}")]
    UnknownReport(ReportType),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Convenience alias for routing results.
pub type RouteResult<T> = Result<T, RouteError>;
