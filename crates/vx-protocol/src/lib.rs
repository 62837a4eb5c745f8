//! Shared types for the VoxStore natural-language command engine.
//!
//! Everything that crosses a crate boundary lives here: the normalized
//! [`Command`], detected entity records, report/endpoint/format enums,
//! the filter set, and the parse result types returned to callers.

pub mod command;
pub mod entities;
pub mod filters;
pub mod parse;
pub mod payload;
pub mod report;

pub use command::*;
pub use entities::*;
pub use filters::*;
pub use parse::*;
pub use payload::*;
pub use report::*;
