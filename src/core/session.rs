//! The storefront session: owns the catalog, the cart value, and the
//! UI-state, and dispatches user intents into the query engine and the
//! cart ledger. Every intent completes synchronously before the next one
//! is processed.

use crate::core::{query, snapshot};
use crate::domain::catalog::Catalog;
use crate::domain::model::{
    Cart, CartTotals, FilterSpec, FuelType, Listing, ListingId, SortKey, Transmission,
};
use crate::domain::ports::SnapshotStore;
use std::str::FromStr;

/// Presentation-facing flags: the detail overlay selection, the cart panel,
/// and the filter bar. At most one listing is selected at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub selected: Option<ListingId>,
    pub cart_open: bool,
    pub filters_visible: bool,
}

pub struct Storefront<S: SnapshotStore> {
    catalog: Catalog,
    store: S,
    snapshot_key: String,
    cart: Cart,
    filter: FilterSpec,
    ui: UiState,
}

impl<S: SnapshotStore> Storefront<S> {
    /// Open a session, seeding the cart from the persisted snapshot under
    /// the default key.
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self::with_snapshot_key(catalog, store, snapshot::CART_SNAPSHOT_KEY)
    }

    pub fn with_snapshot_key(catalog: Catalog, store: S, snapshot_key: &str) -> Self {
        let cart = snapshot::restore(&store, snapshot_key);
        tracing::info!(
            "storefront session opened: {} listings, {} cart entries",
            catalog.len(),
            cart.len()
        );
        Storefront {
            catalog,
            store,
            snapshot_key: snapshot_key.to_string(),
            cart,
            filter: FilterSpec::default(),
            ui: UiState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// The visible result set for the current filter spec.
    pub fn results(&self) -> Vec<&Listing> {
        query::search(&self.catalog, &self.filter)
    }

    // -- Filter intents -----------------------------------------------------

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        if !self.filter.brands.remove(brand) {
            self.filter.brands.insert(brand.to_string());
        }
    }

    /// Empty or unrecognized input clears the fuel constraint.
    pub fn set_fuel(&mut self, raw: &str) {
        self.filter.fuel = parse_selection::<FuelType>(raw);
    }

    /// Empty or unrecognized input clears the transmission constraint.
    pub fn set_transmission(&mut self, raw: &str) {
        self.filter.transmission = parse_selection::<Transmission>(raw);
    }

    /// Non-numeric or empty input unsets the bound.
    pub fn set_price_min(&mut self, raw: &str) {
        self.filter.price_min = parse_selection::<u64>(raw);
    }

    pub fn set_price_max(&mut self, raw: &str) {
        self.filter.price_max = parse_selection::<u64>(raw);
    }

    pub fn set_year_min(&mut self, raw: &str) {
        self.filter.year_min = parse_selection::<i32>(raw);
    }

    pub fn set_year_max(&mut self, raw: &str) {
        self.filter.year_max = parse_selection::<i32>(raw);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.filter.sort = sort;
    }

    // -- Detail overlay and panel intents -----------------------------------

    /// Select a listing for the detail overlay, replacing any previous
    /// selection. Unknown ids are ignored.
    pub fn select(&mut self, listing_id: &ListingId) {
        if self.catalog.contains(listing_id) {
            self.ui.selected = Some(listing_id.clone());
        } else {
            tracing::warn!("ignoring selection of unknown listing {}", listing_id);
        }
    }

    pub fn close_detail(&mut self) {
        self.ui.selected = None;
    }

    pub fn selected_listing(&self) -> Option<&Listing> {
        self.ui.selected.as_ref().and_then(|id| self.catalog.get(id))
    }

    pub fn open_cart(&mut self) {
        self.ui.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.ui.cart_open = false;
    }

    pub fn toggle_filters(&mut self) {
        self.ui.filters_visible = !self.ui.filters_visible;
    }

    // -- Cart intents -------------------------------------------------------

    /// Add one unit of a listing to the cart and open the cart panel.
    /// Unknown ids are ignored.
    pub fn add_to_cart(&mut self, listing_id: &ListingId) {
        if !self.catalog.contains(listing_id) {
            tracing::warn!("ignoring add-to-cart for unknown listing {}", listing_id);
            return;
        }
        self.cart = self.cart.add_one(listing_id);
        self.persist_cart();
        self.ui.cart_open = true;
    }

    pub fn remove_from_cart(&mut self, listing_id: &ListingId) {
        self.cart = self.cart.remove(listing_id);
        self.persist_cart();
    }

    pub fn set_quantity(&mut self, listing_id: &ListingId, quantity: i64) {
        self.cart = self.cart.set_quantity(listing_id, quantity);
        self.persist_cart();
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals(&self.catalog)
    }

    /// Checkout is an explicit no-op; nothing is charged and no state
    /// changes.
    pub fn checkout(&self) {
        tracing::info!(
            "checkout requested for {} items; checkout flow is not implemented",
            self.totals().item_count
        );
    }

    fn persist_cart(&self) {
        snapshot::persist(&self.store, &self.snapshot_key, &self.cart);
    }
}

/// Parse one selection input. Empty/whitespace input and values that fail
/// to parse both mean "unset".
fn parse_selection<T: FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
