use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted wallet row. `id` and `created_at` are assigned by the
/// database and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Wallet {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: String,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

/// The client-supplied wallet shape, everything except the
/// server-assigned fields. Body of both create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWallet {
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: String,
    pub balance: f64,
}
