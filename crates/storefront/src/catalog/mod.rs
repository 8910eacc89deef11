//! Product catalog: session snapshot, fetcher, and the filter engine.
//!
//! The catalog is fetched once per page load and held as an immutable
//! in-memory snapshot for the session. All browsing behavior (category,
//! price ceiling, metal, feature, search, sort) is a pure function from
//! the snapshot and a [`FilterState`] to an ordered subset; the DOM never
//! holds filter state.

mod categories;
mod conversions;
mod fetcher;
mod filter;
mod types;

pub use categories::Category;
pub use conversions::convert_product;
pub use fetcher::{CatalogClient, FetchError};
pub use filter::{CategoryFilter, Feature, FilterState, SortKey, apply};
pub use types::{Product, ProductRecord};
