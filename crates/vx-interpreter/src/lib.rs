//! Natural-language interpretation for VoxStore commands.
//!
//! Two entry points:
//! - [`ReportCommandInterpreter`]: granular report commands ("compras del
//!   cliente Paul10 en noviembre") → [`vx_protocol::InterpretedCommand`].
//! - [`ProductSearchInterpreter`]: storefront searches ("buscar
//!   refrigeradores baratos") → [`vx_protocol::ProductSearchResult`].
//!
//! Both are pure pipelines over the normalized command text: independent
//! entity resolvers feed an additive confidence scorer, and filters are
//! assembled through a confidence-guarded draft. The only I/O is the
//! injected read-only client/product lookup.

pub mod draft;
pub mod error;
pub mod lexicon;
pub mod product_search;
pub mod report_command;
pub mod resolvers;
pub mod scorer;
pub mod suggestions;

pub use draft::FilterDraft;
pub use error::{InterpretError, InterpretResult};
pub use lexicon::Lexicon;
pub use product_search::ProductSearchInterpreter;
pub use report_command::ReportCommandInterpreter;
