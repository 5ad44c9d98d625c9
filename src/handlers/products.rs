// src/handlers/products.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{common::error::AppError, config::AppState, models::product::Product};

// O preço pode ser zero (brinde), mas nunca negativo.
fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        let mut error = ValidationError::new("negative_price");
        error.message = Some("O preço não pode ser negativo".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "Design de Website")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Criação completa de site responsivo com até 5 páginas")]
    pub description: String,

    #[validate(custom(function = validate_price))]
    #[schema(example = "3500.00")]
    pub price: Decimal,

    #[validate(length(min = 1, message = "A categoria é obrigatória"))]
    #[schema(example = "Design")]
    pub category: String,

    #[schema(example = "DSN-WEB-001")]
    pub sku: Option<String>,
    #[schema(example = 999)]
    pub stock: Option<u32>,
    #[schema(example = "2000.00")]
    pub cost_price: Option<Decimal>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListProductsQuery {
    /// Busca por substring no nome, na categoria ou no SKU
    pub q: Option<String>,
}

// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Produtos",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = Product),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state
        .product_service
        .create_product(
            &payload.name,
            &payload.description,
            payload.price,
            &payload.category,
            payload.sku.as_deref(),
            payload.stock,
            payload.cost_price,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Produtos",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Lista de produtos", body = Vec<Product>)
    )
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state
        .product_service
        .list_products(query.q.as_deref())
        .await;

    Ok((StatusCode::OK, Json(products)))
}

// GET /api/products/{id}
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Produtos",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state.product_service.get_product(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

// PUT /api/products/{id}
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Produtos",
    params(("id" = Uuid, Path, description = "ID do produto")),
    request_body = CreateProductPayload,
    responses(
        (status = 200, description = "Produto atualizado", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state
        .product_service
        .update_product(
            id,
            &payload.name,
            &payload.description,
            payload.price,
            &payload.category,
            payload.sku.as_deref(),
            payload.stock,
            payload.cost_price,
        )
        .await?;

    Ok((StatusCode::OK, Json(product)))
}

// DELETE /api/products/{id}
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Produtos",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 204, description = "Produto removido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
