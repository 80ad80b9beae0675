use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateProductRequest, MessageResponse, Product, UpdateProductRequest},
    queries::product_queries,
};

fn not_found() -> AppError {
    AppError::NotFound("Product not found".to_string())
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::list_products(&state.db).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(req) = payload?;
    let new = req.validate()?;

    let product = product_queries::create_product(&state.db, new).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<Product>> {
    let Json(req) = payload?;

    let product = product_queries::update_product(&state.db, id, req)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    let deleted = product_queries::delete_product(&state.db, id).await?;

    if deleted == 0 {
        return Err(not_found());
    }

    Ok(Json(MessageResponse {
        message: "Product deleted",
    }))
}
