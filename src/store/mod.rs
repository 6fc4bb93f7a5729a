//! Persistence boundary. Handlers depend on the `WalletStore` trait;
//! `PgWalletStore` talks to Postgres, `MemoryWalletStore` backs tests.

pub mod memory;
pub mod postgres;

pub use memory::MemoryWalletStore;
pub use postgres::PgWalletStore;

use async_trait::async_trait;

use crate::models::{NewWallet, Wallet};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait WalletStore: Send + Sync {
    /// All wallets in insertion order. A non-empty `wallet_type` restricts
    /// the result to exact matches; `None` or `""` scans the whole table.
    async fn wallets(&self, wallet_type: Option<String>) -> Result<Vec<Wallet>, StoreError>;

    /// Wallets owned by `user_id`, empty when the user owns none.
    async fn wallets_by_user(&self, user_id: i32) -> Result<Vec<Wallet>, StoreError>;

    /// Single wallet lookup. A missing row is `Ok(None)`, not an error.
    async fn wallet_by_id(&self, id: i32) -> Result<Option<Wallet>, StoreError>;

    /// Inserts a wallet and returns the persisted row carrying the
    /// server-assigned `id` and `created_at`.
    async fn create_wallet(&self, new: NewWallet) -> Result<Wallet, StoreError>;

    /// Overwrites every mutable field of the row matching `id`. An id
    /// that matches nothing is a no-op, not an error.
    async fn update_wallet(&self, id: i32, new: NewWallet) -> Result<(), StoreError>;

    /// Removes every wallet owned by `user_id`, returning how many rows
    /// went away (possibly zero).
    async fn delete_wallets_by_user(&self, user_id: i32) -> Result<u64, StoreError>;
}
