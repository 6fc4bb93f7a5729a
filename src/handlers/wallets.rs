use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::models::{NewWallet, Wallet};
use crate::store::StoreError;
use crate::AppState;

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

fn bad_request(message: String) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"message": message})),
    )
}

fn store_error(err: StoreError) -> ErrorResponse {
    tracing::error!("Wallet store error: {:?}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"message": err.to_string()})),
    )
}

/// Parse a path segment into a wallet/user id. Handled by hand so the 400
/// body keeps the `{"message": ...}` shape.
fn parse_id(raw: &str) -> Result<i32, ErrorResponse> {
    raw.parse::<i32>().map_err(|e| bad_request(e.to_string()))
}

#[derive(Deserialize)]
pub struct ListWalletsQuery {
    pub wallet_type: Option<String>,
}

pub async fn list_wallets(
    State(state): State<AppState>,
    Query(query): Query<ListWalletsQuery>,
) -> Result<Json<Vec<Wallet>>, ErrorResponse> {
    let wallets = state
        .store
        .wallets(query.wallet_type)
        .await
        .map_err(store_error)?;

    Ok(Json(wallets))
}

pub async fn get_user_wallets(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Wallet>>, ErrorResponse> {
    let user_id = parse_id(&id)?;
    let wallets = state
        .store
        .wallets_by_user(user_id)
        .await
        .map_err(store_error)?;

    Ok(Json(wallets))
}

pub async fn get_wallet(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Wallet>, ErrorResponse> {
    let id = parse_id(&id)?;
    match state.store.wallet_by_id(id).await.map_err(store_error)? {
        Some(wallet) => Ok(Json(wallet)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"message": "wallet not found"})),
        )),
    }
}

pub async fn create_wallet(
    State(state): State<AppState>,
    payload: Result<Json<NewWallet>, JsonRejection>,
) -> Result<(StatusCode, Json<Wallet>), ErrorResponse> {
    let Json(payload) = payload.map_err(|e| bad_request(e.body_text()))?;
    let wallet = state
        .store
        .create_wallet(payload)
        .await
        .map_err(store_error)?;

    Ok((StatusCode::CREATED, Json(wallet)))
}

#[derive(Serialize)]
pub struct UpdateWalletResponse {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: String,
    pub balance: f64,
}

pub async fn update_wallet(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<NewWallet>, JsonRejection>,
) -> Result<Json<UpdateWalletResponse>, ErrorResponse> {
    let id = parse_id(&id)?;
    let Json(payload) = payload.map_err(|e| bad_request(e.body_text()))?;

    // The body's user_id is written through as-is; it is not checked
    // against the row the path id targets.
    state
        .store
        .update_wallet(id, payload.clone())
        .await
        .map_err(store_error)?;

    Ok(Json(UpdateWalletResponse {
        id,
        user_id: payload.user_id,
        user_name: payload.user_name,
        wallet_name: payload.wallet_name,
        wallet_type: payload.wallet_type,
        balance: payload.balance,
    }))
}

pub async fn delete_user_wallets(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ErrorResponse> {
    let user_id = parse_id(&id)?;

    // Zero matching rows is still a successful delete.
    state
        .store
        .delete_wallets_by_user(user_id)
        .await
        .map_err(store_error)?;

    Ok(StatusCode::NO_CONTENT)
}
