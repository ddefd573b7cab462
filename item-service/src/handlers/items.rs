use crate::dtos::{CreateItemRequest, ItemResponse};
use crate::services::record_item_operation;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use service_core::utils::ValidatedJson;

fn item_not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Item not found"))
}

/// Malformed ids cannot name a stored item, so they are reported as missing.
fn parse_item_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| item_not_found())
}

fn outcome<T>(result: &Result<T, AppError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(AppError::NotFound(_)) => "not_found",
        Err(_) => "error",
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let result = state.store.list().await;
    record_item_operation("list", outcome(&result));

    let items = result?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

#[tracing::instrument(skip(state, request))]
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), AppError> {
    let new_item = request.into_new_item()?;

    let result = state.store.create(new_item).await;
    record_item_operation("create", outcome(&result));
    let item = result?;

    tracing::info!(item_id = %item.id, name = %item.name, "Item created");

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

#[tracing::instrument(skip(state))]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    let result = match parse_item_id(&id) {
        Ok(id) => state
            .store
            .get(id)
            .await
            .and_then(|item| item.ok_or_else(item_not_found)),
        Err(e) => Err(e),
    };
    record_item_operation("get", outcome(&result));

    Ok(Json(ItemResponse::from(result?)))
}

#[tracing::instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    let result = match parse_item_id(&id) {
        Ok(id) => state
            .store
            .delete(id)
            .await
            .and_then(|item| item.ok_or_else(item_not_found)),
        Err(e) => Err(e),
    };
    record_item_operation("delete", outcome(&result));
    let item = result?;

    tracing::info!(item_id = %item.id, "Item deleted");

    Ok(Json(ItemResponse::from(item)))
}
