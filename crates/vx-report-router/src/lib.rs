//! Report routing for VoxStore commands.
//!
//! Two-phase decision: trust the granular interpreter when its confidence
//! clears the threshold, otherwise fall back to keyword classification
//! over the report catalog plus independent parameter derivation. The
//! dispatcher then maps the resolved report type to its injected
//! generator strategy.

pub mod catalog;
pub mod classifier;
pub mod dispatch;
pub mod error;
pub mod params;
pub mod router;

pub use catalog::{ReportCatalog, ReportDefinition, ReportSummary};
pub use classifier::{Classification, classify};
pub use dispatch::{GeneratorError, ReportDispatcher, ReportGeneratorStrategy, StrategyRegistry};
pub use error::{RouteError, RouteResult};
pub use router::ReportRouter;
