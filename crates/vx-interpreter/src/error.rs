//! Interpreter error types.
//!
//! Malformed input is never an error here — the worst outcome is a
//! low-confidence result with suggestions. Only failures of the injected
//! lookups propagate.

use thiserror::Error;
use vx_catalog::CatalogError;

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Convenience alias for interpreter results.
pub type InterpretResult<T> = Result<T, InterpretError>;
