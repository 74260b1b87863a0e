//! CRUD handlers for the product resource.
//!
//! All handlers are stateless; the shared repository comes in through
//! [`AppState`]. Invalid input (missing fields, empty fields, malformed ids)
//! is a 400, an unknown id is a 404, and store failures surface as 500 with
//! the driver error in the `details` field.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;

use crate::dtos::{ConfirmationResponse, ProductBody, ProductResponse};
use crate::error::AppError;
use crate::startup::AppState;

pub async fn welcome() -> &'static str {
    "Welcome to the API"
}

/// Parse a path segment as a store identifier.
///
/// A malformed id is caller error, not a store failure, so it maps to 400
/// rather than an opaque 500.
fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid product id: {}", id)))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductBody>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let draft = payload.into_draft()?;

    tracing::info!(name = %draft.name, price = draft.price, "Creating product");

    let product = state.repository.create(draft).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.repository.list().await?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = parse_id(&id)?;

    let product = state
        .repository
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Product not found")))?;

    Ok(Json(ProductResponse::from(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductBody>,
) -> Result<Json<ConfirmationResponse>, AppError> {
    let id = parse_id(&id)?;
    let draft = payload.into_draft()?;

    tracing::info!(product_id = %id, "Replacing product");

    let matched = state.repository.replace(id, draft).await?;
    if !matched {
        return Err(AppError::NotFound(anyhow::anyhow!("Product not found")));
    }

    Ok(Json(ConfirmationResponse {
        message: "Product updated successfully".to_string(),
    }))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConfirmationResponse>, AppError> {
    let id = parse_id(&id)?;

    tracing::info!(product_id = %id, "Deleting product");

    let deleted = state.repository.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!("Product not found")));
    }

    Ok(Json(ConfirmationResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
