use super::dto::{self, ListParams};
use super::error::ApiError;
use super::AppState;
use crate::model::Product;
use crate::service::{DeleteMessage, Envelope, ListResponse};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

type Reply<T> = Result<Json<T>, ApiError>;

pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Reply<ListResponse> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let query = params.into_query()?;
    Ok(Json(state.service.list(query).await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Reply<Envelope<Product>> {
    let id = dto::parse_id(&id)?;
    Ok(Json(state.service.get(id).await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Product>>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let params = dto::validate_create(body)?;
    let created = state.service.create(params).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Reply<Envelope<Product>> {
    let id = dto::parse_id(&id)?;
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let update = dto::validate_update(body)?;
    Ok(Json(state.service.update(id, update).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Reply<Envelope<DeleteMessage>> {
    let id = dto::parse_id(&id)?;
    Ok(Json(state.service.delete(id).await?))
}
