pub mod cart;
pub mod query;
pub mod session;
pub mod snapshot;

pub use crate::domain::catalog::Catalog;
pub use crate::domain::model::{Cart, CartEntry, CartTotals, FilterSpec, Listing, SortKey};
pub use crate::domain::ports::{ConfigProvider, SnapshotStore};
pub use crate::utils::error::Result;
