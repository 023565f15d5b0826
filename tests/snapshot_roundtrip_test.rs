use automart::core::snapshot::{self, CART_SNAPSHOT_KEY};
use automart::{Cart, JsonFileStore, ListingId, SnapshotStore};
use tempfile::TempDir;

#[test]
fn test_file_store_round_trip_preserves_ids_quantities_and_order() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    let cart = Cart::empty()
        .add_one(&ListingId::from("5"))
        .add_one(&ListingId::from("1"))
        .add_one(&ListingId::from("5"))
        .set_quantity(&ListingId::from("1"), 3);

    snapshot::persist(&store, CART_SNAPSHOT_KEY, &cart);
    let restored = snapshot::restore(&store, CART_SNAPSHOT_KEY);

    assert_eq!(restored, cart);
    let ids: Vec<_> = restored
        .entries()
        .iter()
        .map(|e| e.listing_id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["5", "1"]);
}

#[test]
fn test_snapshot_payload_is_a_json_entry_array() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    let cart = Cart::empty().add_one(&ListingId::from("2"));
    snapshot::persist(&store, CART_SNAPSHOT_KEY, &cart);

    let raw = store.read(CART_SNAPSHOT_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "listing_id": "2", "quantity": 1 }])
    );
}

#[test]
fn test_missing_snapshot_restores_empty_cart() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    assert!(snapshot::restore(&store, CART_SNAPSHOT_KEY).is_empty());
}

#[test]
fn test_corrupt_snapshot_restores_empty_cart() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    store.write(CART_SNAPSHOT_KEY, b"!! definitely not json !!").unwrap();
    assert!(snapshot::restore(&store, CART_SNAPSHOT_KEY).is_empty());
}

#[test]
fn test_wrong_shape_snapshot_restores_empty_cart() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    store
        .write(CART_SNAPSHOT_KEY, br#"{"listing_id": "1", "quantity": 2}"#)
        .unwrap();
    assert!(snapshot::restore(&store, CART_SNAPSHOT_KEY).is_empty());
}

#[test]
fn test_snapshot_with_invalid_quantities_is_repaired_on_restore() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    store
        .write(
            CART_SNAPSHOT_KEY,
            br#"[{"listing_id": "1", "quantity": 0}, {"listing_id": "1", "quantity": 9}]"#,
        )
        .unwrap();

    let restored = snapshot::restore(&store, CART_SNAPSHOT_KEY);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.quantity_of(&ListingId::from("1")), Some(1));
}
