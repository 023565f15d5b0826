//! AutoMart core: an in-memory car catalog, a pure client-side query engine
//! (search, filter, sort), and a cart ledger persisted through a pluggable
//! key-value snapshot store.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::JsonFileStore;
pub use config::StorefrontConfig;
pub use core::query::search;
pub use core::session::{Storefront, UiState};
pub use domain::catalog::Catalog;
pub use domain::model::{
    Cart, CartEntry, CartTotals, FilterSpec, FuelType, Listing, ListingId, SortKey, Transmission,
};
pub use domain::ports::{ConfigProvider, SnapshotStore};
pub use utils::error::{AutomartError, Result};
