// src/handlers/reports.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    models::report::{
        ClientRevenueEntry, PaymentMethodSummaryEntry, RevenueSummary, StatusSummaryEntry,
    },
    services::report_service::TOP_CLIENTS_LIMIT,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct TopClientsQuery {
    /// Quantos clientes exibir no ranking (padrão: 5)
    pub limit: Option<usize>,
}

// GET /api/reports/summary
#[utoipa::path(
    get,
    path = "/api/reports/summary",
    tag = "Relatórios",
    responses(
        (status = 200, description = "Cards de faturamento", body = RevenueSummary)
    )
)]
pub async fn get_revenue_summary(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.report_service.revenue_summary().await;
    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/reports/status
#[utoipa::path(
    get,
    path = "/api/reports/status",
    tag = "Relatórios",
    responses(
        (status = 200, description = "Distribuição de pedidos por status", body = Vec<StatusSummaryEntry>)
    )
)]
pub async fn get_status_summary(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.report_service.status_summary().await;
    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/reports/payment-methods
#[utoipa::path(
    get,
    path = "/api/reports/payment-methods",
    tag = "Relatórios",
    responses(
        (status = 200, description = "Contagem por forma de pagamento", body = Vec<PaymentMethodSummaryEntry>)
    )
)]
pub async fn get_payment_method_summary(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.report_service.payment_method_summary().await;
    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/reports/top-clients
#[utoipa::path(
    get,
    path = "/api/reports/top-clients",
    tag = "Relatórios",
    params(TopClientsQuery),
    responses(
        (status = 200, description = "Faturamento por cliente, decrescente", body = Vec<ClientRevenueEntry>)
    )
)]
pub async fn get_top_clients(
    State(app_state): State<AppState>,
    Query(query): Query<TopClientsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let limit = query.limit.unwrap_or(TOP_CLIENTS_LIMIT);
    let ranking = app_state.report_service.top_clients(limit).await;
    Ok((StatusCode::OK, Json(ranking)))
}
