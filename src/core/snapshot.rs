//! Cart snapshot persistence around the `SnapshotStore` boundary.
//!
//! Restore tolerates a missing key, unreadable store, or malformed payload
//! by falling back to the empty cart; persist is fire-and-forget. Neither
//! path is ever fatal.

use crate::domain::model::{Cart, CartEntry};
use crate::domain::ports::SnapshotStore;

/// Key of the persisted cart snapshot in the key-value store.
pub const CART_SNAPSHOT_KEY: &str = "automart_cart";

/// Seed a cart from the persisted snapshot, defaulting to empty.
pub fn restore<S: SnapshotStore>(store: &S, key: &str) -> Cart {
    let bytes = match store.read(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            tracing::debug!("no cart snapshot under key {:?}, starting empty", key);
            return Cart::empty();
        }
        Err(e) => {
            tracing::warn!("failed to read cart snapshot {:?}: {}", key, e);
            return Cart::empty();
        }
    };

    match serde_json::from_slice::<Vec<CartEntry>>(&bytes) {
        Ok(entries) => {
            let cart = Cart::from_entries(entries);
            tracing::debug!("restored cart snapshot with {} entries", cart.len());
            cart
        }
        Err(e) => {
            tracing::warn!("malformed cart snapshot {:?}: {}", key, e);
            Cart::empty()
        }
    }
}

/// Write the cart snapshot, best-effort. Failures are logged and swallowed.
pub fn persist<S: SnapshotStore>(store: &S, key: &str, cart: &Cart) {
    let payload = match serde_json::to_vec(cart.entries()) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("failed to serialize cart snapshot: {}", e);
            return;
        }
    };

    if let Err(e) = store.write(key, &payload) {
        tracing::warn!("failed to write cart snapshot {:?}: {}", key, e);
    }
}
