//! Read-only collaborator lookups for the command engine.
//!
//! The interpreter cross-references commands against three externally
//! owned data sets: the client directory, the product catalog, and the
//! category synonym dictionary. The first two are trait seams (real
//! deployments back them with the store database); the in-memory
//! implementations here double as test fixtures.

pub mod categories;
pub mod clients;
pub mod error;
pub mod mock;
pub mod products;

pub use categories::CategoryDictionary;
pub use clients::{ClientDirectory, ClientRecord, InMemoryClientDirectory};
pub use error::{CatalogError, CatalogResult};
pub use products::{InMemoryProductCatalog, ProductCatalog, ProductRecord};
