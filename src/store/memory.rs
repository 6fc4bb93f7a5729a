use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{StoreError, WalletStore};
use crate::models::{NewWallet, Wallet};

/// In-memory stand-in for the Postgres store. Mirrors its observable
/// semantics: insertion-ordered listings, exact-match type filter,
/// silent no-op updates, zero-or-more deletes.
#[derive(Default)]
pub struct MemoryWalletStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    wallets: Vec<Wallet>,
    next_id: i32,
}

impl MemoryWalletStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletStore for MemoryWalletStore {
    async fn wallets(&self, wallet_type: Option<String>) -> Result<Vec<Wallet>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let wallets = match wallet_type.as_deref() {
            Some(wallet_type) if !wallet_type.is_empty() => inner
                .wallets
                .iter()
                .filter(|w| w.wallet_type == wallet_type)
                .cloned()
                .collect(),
            _ => inner.wallets.clone(),
        };

        Ok(wallets)
    }

    async fn wallets_by_user(&self, user_id: i32) -> Result<Vec<Wallet>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .wallets
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn wallet_by_id(&self, id: i32) -> Result<Option<Wallet>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.wallets.iter().find(|w| w.id == id).cloned())
    }

    async fn create_wallet(&self, new: NewWallet) -> Result<Wallet, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let wallet = Wallet {
            id: inner.next_id,
            user_id: new.user_id,
            user_name: new.user_name,
            wallet_name: new.wallet_name,
            wallet_type: new.wallet_type,
            balance: new.balance,
            created_at: Utc::now(),
        };
        inner.wallets.push(wallet.clone());

        Ok(wallet)
    }

    async fn update_wallet(&self, id: i32, new: NewWallet) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(wallet) = inner.wallets.iter_mut().find(|w| w.id == id) {
            wallet.user_id = new.user_id;
            wallet.user_name = new.user_name;
            wallet.wallet_name = new.wallet_name;
            wallet.wallet_type = new.wallet_type;
            wallet.balance = new.balance;
        }

        Ok(())
    }

    async fn delete_wallets_by_user(&self, user_id: i32) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.wallets.len();
        inner.wallets.retain(|w| w.user_id != user_id);

        Ok((before - inner.wallets.len()) as u64)
    }
}
