use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreError, WalletStore};
use crate::models::{NewWallet, Wallet};

/// Postgres-backed store over the `user_wallet` table. Every variable
/// predicate binds through a positional parameter, never interpolation.
#[derive(Clone)]
pub struct PgWalletStore {
    pool: PgPool,
}

impl PgWalletStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalletStore for PgWalletStore {
    async fn wallets(&self, wallet_type: Option<String>) -> Result<Vec<Wallet>, StoreError> {
        let wallets = match wallet_type {
            Some(wallet_type) if !wallet_type.is_empty() => {
                sqlx::query_as::<_, Wallet>(
                    r#"
                    SELECT id, user_id, user_name, wallet_name, wallet_type, balance, created_at
                    FROM user_wallet
                    WHERE wallet_type = $1
                    ORDER BY id
                    "#,
                )
                .bind(wallet_type)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, Wallet>(
                    r#"
                    SELECT id, user_id, user_name, wallet_name, wallet_type, balance, created_at
                    FROM user_wallet
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(wallets)
    }

    async fn wallets_by_user(&self, user_id: i32) -> Result<Vec<Wallet>, StoreError> {
        let wallets = sqlx::query_as::<_, Wallet>(
            r#"
            SELECT id, user_id, user_name, wallet_name, wallet_type, balance, created_at
            FROM user_wallet
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(wallets)
    }

    async fn wallet_by_id(&self, id: i32) -> Result<Option<Wallet>, StoreError> {
        let wallet = sqlx::query_as::<_, Wallet>(
            r#"
            SELECT id, user_id, user_name, wallet_name, wallet_type, balance, created_at
            FROM user_wallet
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(wallet)
    }

    async fn create_wallet(&self, new: NewWallet) -> Result<Wallet, StoreError> {
        let wallet = sqlx::query_as::<_, Wallet>(
            r#"
            INSERT INTO user_wallet (user_id, user_name, wallet_name, wallet_type, balance)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, user_name, wallet_name, wallet_type, balance, created_at
            "#,
        )
        .bind(new.user_id)
        .bind(new.user_name)
        .bind(new.wallet_name)
        .bind(new.wallet_type)
        .bind(new.balance)
        .fetch_one(&self.pool)
        .await?;

        Ok(wallet)
    }

    async fn update_wallet(&self, id: i32, new: NewWallet) -> Result<(), StoreError> {
        // Zero matched rows is indistinguishable from success here.
        sqlx::query(
            r#"
            UPDATE user_wallet
            SET user_id = $1, user_name = $2, wallet_name = $3, wallet_type = $4, balance = $5
            WHERE id = $6
            "#,
        )
        .bind(new.user_id)
        .bind(new.user_name)
        .bind(new.wallet_name)
        .bind(new.wallet_type)
        .bind(new.balance)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_wallets_by_user(&self, user_id: i32) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM user_wallet WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
