// src/handlers/product.rs
use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    Json,
};
use crate::dtos::product::{CreatedResponse, MessageResponse, ProductFields, ProductRequest, ProductResponse};
use crate::models::product::Product;
use crate::state::AppState;
use crate::error::AppError;
use tracing::{error, info, instrument, warn};

fn log_failure(err: &AppError, action: &str) {
    match err {
        AppError::DecodeError(e) => error!(error = %e, "Failed to decode photo while trying to {action}"),
        AppError::DatabaseError(e) => error!(?e, "Failed to {action}"),
        AppError::ValidationError(msg) => warn!(%msg, "Rejected request to {action}"),
        AppError::PayloadTooLarge(msg) => warn!(%msg, "Rejected oversized request to {action}"),
        AppError::NotFound(_) => {}
    }
}

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>, AppError> {
    match sqlx::query_as::<_, Product>(
        "SELECT id, name, price, description, availability, photo
         FROM products ORDER BY id"
    )
        .fetch_all(&state.db_pool)
        .await {
        Ok(products) => {
            let response = products.into_iter().map(ProductResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// POST /add-products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>, AppError> {
    let id = insert_product(&state, payload).await.map_err(|e| {
        log_failure(&e, "insert product");
        e
    })?;

    info!(id, "Product created");
    Ok(Json(CreatedResponse {
        message: "Product added successfully".to_string(),
        id,
    }))
}

async fn insert_product(
    state: &AppState,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<i64, AppError> {
    let Json(request) = payload?;
    // Validation and photo decoding both happen before storage is touched.
    let fields = request.into_new_product()?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO products (name, price, description, availability, photo)
         VALUES ($1, $2, $3, $4, $5) RETURNING id"
    )
    .bind(&fields.name)
    .bind(fields.price)
    .bind(&fields.description)
    .bind(fields.availability)
    .bind(fields.photo.as_deref())
    .fetch_one(&state.db_pool)
    .await?;

    Ok(id)
}

// PUT /products/:id - Replace every field of a product
#[instrument(skip(path, state, payload), fields(id))]
pub async fn update_product(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    replace_product(&state, path, payload).await.map_err(|e| {
        log_failure(&e, "update product");
        e
    })?;

    Ok(Json(MessageResponse {
        message: "Product updated successfully".to_string(),
    }))
}

async fn replace_product(
    state: &AppState,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(), AppError> {
    let Path(id) = path?;
    tracing::Span::current().record("id", id);
    let Json(request) = payload?;
    let fields: ProductFields = request.into_replacement()?;

    let result = sqlx::query(
        "UPDATE products
         SET name = $1, price = $2, description = $3, availability = $4, photo = $5
         WHERE id = $6"
    )
    .bind(&fields.name)
    .bind(fields.price)
    .bind(&fields.description)
    .bind(fields.availability)
    .bind(fields.photo.as_deref())
    .bind(id)
    .execute(&state.db_pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(())
}

// DELETE /products/:id - Delete product
#[instrument(skip(path, state), fields(id))]
pub async fn delete_product(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path.map_err(|e| {
        let e = AppError::from(e);
        log_failure(&e, "delete product");
        e
    })?;
    tracing::Span::current().record("id", id);

    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await
        .map_err(|e| {
            error!(?e, "Failed to delete product");
            AppError::from(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
