//! Product handlers
//!
//! Endpoints under `/api/products`. Bodies are validated here, before the
//! service is called.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Product, ProductDraft, ProductId};
use crate::error::AppError;
use crate::AppState;

/// Confirmation body for a successful delete
pub const DELETED_MESSAGE: &str = "Product deleted successfully!";

/// Request body for create and update
///
/// Missing fields default to blank/zero so they surface as validation
/// violations rather than parse errors. A client-supplied `id` is ignored.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}

impl From<ProductRequest> for ProductDraft {
    fn from(request: ProductRequest) -> Self {
        ProductDraft {
            name: request.name,
            description: request.description,
            price: request.price,
        }
    }
}

/// Product as returned to clients
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.0,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

/// Turn an extracted body into a draft the service can trust
fn validated_draft(
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<ProductDraft, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let draft = ProductDraft::from(request);

    let violations = draft.validate();
    if !violations.is_empty() {
        tracing::debug!(count = violations.len(), "Rejected product payload");
        return Err(AppError::Validation(violations));
    }

    Ok(draft)
}

/// Read the `:id` segment, answering a non-numeric id with a JSON 400
fn product_id(path: Result<Path<i64>, PathRejection>) -> Result<ProductId, AppError> {
    let Path(id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(ProductId(id))
}

/// POST /api/products
///
/// Create a product. Responds 201 with the stored record.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let draft = validated_draft(payload)?;
    let product = state.product_service.create_product(&draft).await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.product_service.get_all_products().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .product_service
        .get_product_by_id(&product_id(path)?)
        .await?;

    Ok(Json(product.into()))
}

/// PUT /api/products/:id
///
/// Replace name, description and price of an existing product.
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = product_id(path)?;
    let draft = validated_draft(payload)?;
    let product = state
        .product_service
        .update_product(&id, &draft)
        .await?;

    Ok(Json(product.into()))
}

/// DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<&'static str, AppError> {
    state.product_service.delete_product(&product_id(path)?).await?;

    Ok(DELETED_MESSAGE)
}
