//! The cart ledger: immutable-returning operations over a cart value.
//!
//! Every operation produces a new `Cart` rather than mutating in place;
//! persistence happens at the session boundary, never here.

use crate::domain::catalog::Catalog;
use crate::domain::model::{Cart, CartEntry, CartTotals, ListingId};

impl Cart {
    /// Increment the quantity for `listing_id`, or append a new entry with
    /// quantity 1 at the end, preserving the order of prior entries.
    pub fn add_one(&self, listing_id: &ListingId) -> Cart {
        let mut entries: Vec<CartEntry> = self.entries().to_vec();
        match entries.iter_mut().find(|e| &e.listing_id == listing_id) {
            Some(entry) => entry.quantity += 1,
            None => entries.push(CartEntry {
                listing_id: listing_id.clone(),
                quantity: 1,
            }),
        }
        Cart::from_entries_unchecked(entries)
    }

    /// Delete the entry for `listing_id`. Absent ids are a no-op.
    pub fn remove(&self, listing_id: &ListingId) -> Cart {
        let entries = self
            .entries()
            .iter()
            .filter(|e| &e.listing_id != listing_id)
            .cloned()
            .collect();
        Cart::from_entries_unchecked(entries)
    }

    /// Set the quantity for `listing_id`, clamping inputs below 1 to 1.
    /// Absent ids are a no-op.
    pub fn set_quantity(&self, listing_id: &ListingId, quantity: i64) -> Cart {
        let clamped = quantity.clamp(1, i64::from(u32::MAX)) as u32;
        let entries = self
            .entries()
            .iter()
            .map(|e| {
                if &e.listing_id == listing_id {
                    CartEntry {
                        listing_id: e.listing_id.clone(),
                        quantity: clamped,
                    }
                } else {
                    e.clone()
                }
            })
            .collect();
        Cart::from_entries_unchecked(entries)
    }

    /// Derive item count and subtotal, resolving unit prices against the
    /// catalog. Entries whose listing no longer exists are skipped.
    pub fn totals(&self, catalog: &Catalog) -> CartTotals {
        let mut totals = CartTotals::default();
        for entry in self.entries() {
            match catalog.get(&entry.listing_id) {
                Some(listing) => {
                    totals.item_count += u64::from(entry.quantity);
                    totals.subtotal += u64::from(entry.quantity) * listing.price;
                }
                None => {
                    tracing::warn!(
                        "skipping orphaned cart entry for listing {}",
                        entry.listing_id
                    );
                }
            }
        }
        totals
    }
}
