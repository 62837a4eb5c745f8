//! Entity resolvers — independent detectors, one per entity kind.
//!
//! Each resolver is a pure function from normalized text (plus the
//! injected tables/lookups) to zero or more detected entities. They never
//! see each other's output; disambiguation happens downstream in the
//! interpreters.

pub mod brand;
pub mod category;
pub mod client;
pub mod dates;
pub mod feature;
pub mod payment;
pub mod price;
pub mod product;
pub mod quantity;
pub mod size;

pub use brand::{resolve_brand, resolve_color};
pub use category::resolve_category;
pub use client::resolve_clients;
pub use dates::resolve_date_range;
pub use feature::resolve_features;
pub use payment::resolve_payment;
pub use price::resolve_price;
pub use product::resolve_products;
pub use quantity::resolve_quantity;
pub use size::resolve_size;
