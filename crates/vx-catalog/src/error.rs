//! Catalog lookup error types.
//!
//! These are the only hard errors the engine propagates: a parse cannot
//! proceed without its reference data. Missing entries are not errors —
//! lookups return empty results for those.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    #[error("catalog backend error: {0}")]
    Backend(String),
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
