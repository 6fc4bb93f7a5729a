// Postgres round-trips for PgWalletStore. These need a real database:
// run with `cargo test -- --ignored --test-threads=1` against
// TEST_DATABASE_URL.

use wallet_api::store::{PgWalletStore, WalletStore};

mod test_helpers;
use test_helpers::*;

#[tokio::test]
#[ignore] // requires a test database
async fn insert_then_fetch_round_trip() {
    let pool = setup_test_db().await;
    let store = PgWalletStore::new(pool);

    let created = store
        .create_wallet(sample_wallet(1, "Savings"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.user_id, 1);

    let wallets = store.wallets(None).await.unwrap();
    assert_eq!(wallets.len(), 1);

    let by_type = store.wallets(Some("Savings".to_string())).await.unwrap();
    assert_eq!(by_type.len(), 1);
    assert_eq!(by_type[0].id, created.id);

    let unmatched = store
        .wallets(Some("Credit Card".to_string()))
        .await
        .unwrap();
    assert!(unmatched.is_empty());

    let by_user = store.wallets_by_user(1).await.unwrap();
    assert_eq!(by_user.len(), 1);

    let missing = store.wallets_by_user(999).await.unwrap();
    assert!(missing.is_empty());
}

#[tokio::test]
#[ignore] // requires a test database
async fn update_overwrites_mutable_fields() {
    let pool = setup_test_db().await;
    let store = PgWalletStore::new(pool);

    let created = store
        .create_wallet(sample_wallet(1, "Savings"))
        .await
        .unwrap();

    let mut replacement = sample_wallet(2, "Credit Card");
    replacement.wallet_name = "Rainy Day".to_string();
    store.update_wallet(created.id, replacement).await.unwrap();

    let updated = store.wallet_by_id(created.id).await.unwrap().unwrap();
    // user_id passes through unchanged; created_at stays put.
    assert_eq!(updated.user_id, 2);
    assert_eq!(updated.wallet_name, "Rainy Day");
    assert_eq!(updated.created_at, created.created_at);

    // A missing id is a no-op, not an error, and creates nothing.
    store
        .update_wallet(created.id + 1000, sample_wallet(3, "Savings"))
        .await
        .unwrap();
    assert!(store
        .wallet_by_id(created.id + 1000)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore] // requires a test database
async fn delete_by_user_removes_all_matching_rows() {
    let pool = setup_test_db().await;
    let store = PgWalletStore::new(pool);

    store
        .create_wallet(sample_wallet(1, "Savings"))
        .await
        .unwrap();
    store
        .create_wallet(sample_wallet(1, "Credit Card"))
        .await
        .unwrap();
    store
        .create_wallet(sample_wallet(2, "Savings"))
        .await
        .unwrap();

    let removed = store.delete_wallets_by_user(1).await.unwrap();
    assert_eq!(removed, 2);
    assert!(store.wallets_by_user(1).await.unwrap().is_empty());
    assert_eq!(store.wallets_by_user(2).await.unwrap().len(), 1);

    // Deleting again matches nothing and still succeeds.
    let removed = store.delete_wallets_by_user(1).await.unwrap();
    assert_eq!(removed, 0);
}
