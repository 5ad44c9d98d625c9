// src/handlers/clients.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::client::{AddressValue, Client},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "Empresa Tech Ltda")]
    pub name: String,

    #[validate(length(min = 1, message = "O nome fantasia é obrigatório"))]
    #[schema(example = "TechSoft")]
    pub trading_name: String,

    #[validate(length(min = 1, message = "A razão social é obrigatória"))]
    #[schema(example = "Empresa de Tecnologia Tech Ltda")]
    pub legal_name: String,

    #[validate(length(min = 1, message = "O CNPJ é obrigatório"))]
    #[schema(example = "12.345.678/0001-99")]
    pub tax_id: String,

    #[validate(email(message = "E-mail inválido"))]
    #[schema(example = "contato@techsoft.com.br")]
    pub email: Option<String>,
    pub phone: Option<String>,

    // Aceita texto livre ou o objeto estruturado
    pub address: Option<AddressValue>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListClientsQuery {
    /// Busca por substring no nome, no nome fantasia, na razão social ou no CNPJ
    pub q: Option<String>,
}

// POST /api/clients
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clientes",
    request_body = CreateClientPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Client),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state
        .client_service
        .create_client(
            &payload.name,
            &payload.trading_name,
            &payload.legal_name,
            &payload.tax_id,
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.address,
            payload.notes.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(client)))
}

// GET /api/clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Clientes",
    params(ListClientsQuery),
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<Client>)
    )
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
    Query(query): Query<ListClientsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state
        .client_service
        .list_clients(query.q.as_deref())
        .await;

    Ok((StatusCode::OK, Json(clients)))
}

// GET /api/clients/{id}
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "Clientes",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente encontrado", body = Client),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn get_client(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let client = app_state.client_service.get_client(id).await?;
    Ok((StatusCode::OK, Json(client)))
}

// PUT /api/clients/{id}
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "Clientes",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    request_body = CreateClientPayload,
    responses(
        (status = 200, description = "Cliente atualizado", body = Client),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn update_client(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state
        .client_service
        .update_client(
            id,
            &payload.name,
            &payload.trading_name,
            &payload.legal_name,
            &payload.tax_id,
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.address,
            payload.notes.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(client)))
}

// DELETE /api/clients/{id}
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "Clientes",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 204, description = "Cliente removido"),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn delete_client(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.client_service.delete_client(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
