// src/handlers/orders.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::order::{Order, OrderDetail, OrderStatus, PaymentMethod},
    services::order_service::{NewOrderItem, OrderFilter},
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemPayload {
    /// Produto do catálogo; quando presente, nome e preço são copiados dele
    pub product_id: Option<Uuid>,
    #[schema(example = "Manutenção Mensal")]
    pub name: Option<String>,
    #[schema(example = "750.00")]
    pub unit_price: Option<Decimal>,
    /// Ausente ou ilegível assume 1
    #[schema(example = 12)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub client_id: Option<Uuid>,

    #[serde(default)]
    pub items: Vec<OrderItemPayload>,

    #[schema(value_type = Option<String>, format = Date, example = "2024-04-15")]
    pub delivery_date: Option<NaiveDate>,

    /// Padrão: rascunho
    pub status: Option<OrderStatus>,
    /// Padrão: PIX
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusPayload {
    pub status: OrderStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListOrdersQuery {
    /// Busca por substring no nome do cliente ou dos itens
    pub q: Option<String>,
    /// Filtra por um status específico
    pub status: Option<OrderStatus>,
    /// Início do intervalo de criação (inclusivo)
    pub from: Option<NaiveDate>,
    /// Fim do intervalo de criação (inclusivo)
    pub to: Option<NaiveDate>,
}

// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Pedidos",
    request_body = CreateOrderPayload,
    responses(
        (status = 201, description = "Pedido criado", body = Order),
        (status = 400, description = "Alguma regra do pedido foi violada"),
        (status = 404, description = "Cliente ou produto referenciado não existe")
    )
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let items = payload
        .items
        .into_iter()
        .map(|item| NewOrderItem {
            product_id: item.product_id,
            name: item.name,
            unit_price: item.unit_price,
            quantity: item.quantity,
        })
        .collect();

    let order = app_state
        .order_service
        .create_order(
            payload.client_id,
            items,
            payload.delivery_date,
            payload.status,
            payload.payment_method,
            payload.notes,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Pedidos",
    params(ListOrdersQuery),
    responses(
        (status = 200, description = "Lista de pedidos", body = Vec<OrderDetail>)
    )
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = OrderFilter {
        query: query.q,
        status: query.status,
        from: query.from,
        to: query.to,
    };
    let orders = app_state.order_service.list_orders(&filter).await;

    Ok((StatusCode::OK, Json(orders)))
}

// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Pedidos",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido encontrado", body = OrderDetail),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn get_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state.order_service.get_order(id).await?;
    Ok((StatusCode::OK, Json(order)))
}

// PUT /api/orders/{id}
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Pedidos",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    request_body = CreateOrderPayload,
    responses(
        (status = 200, description = "Pedido atualizado", body = Order),
        (status = 400, description = "Alguma regra do pedido foi violada"),
        (status = 404, description = "Pedido, cliente ou produto não encontrado")
    )
)]
pub async fn update_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let items = payload
        .items
        .into_iter()
        .map(|item| NewOrderItem {
            product_id: item.product_id,
            name: item.name,
            unit_price: item.unit_price,
            quantity: item.quantity,
        })
        .collect();

    let order = app_state
        .order_service
        .update_order(
            id,
            payload.client_id,
            items,
            payload.delivery_date,
            payload.status,
            payload.payment_method,
            payload.notes,
        )
        .await?;

    Ok((StatusCode::OK, Json(order)))
}

// PATCH /api/orders/{id}/status
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    tag = "Pedidos",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    request_body = UpdateStatusPayload,
    responses(
        (status = 200, description = "Status atualizado", body = Order),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn update_order_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state.order_service.set_status(id, payload.status).await?;
    Ok((StatusCode::OK, Json(order)))
}

// DELETE /api/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Pedidos",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 204, description = "Pedido removido"),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn delete_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.order_service.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
