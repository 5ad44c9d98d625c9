// src/models/report.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::order::{OrderStatus, PaymentMethod};

// 1. Os cards do topo do relatório
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    #[schema(example = "75000.00")]
    pub total_sales: Decimal, // Faturamento total (todos os pedidos)
    #[schema(example = "37500.00")]
    pub approved_sales: Decimal, // Pedidos aprovados
    #[schema(example = "37500.00")]
    pub pending_sales: Decimal, // Pedidos pendentes
    #[schema(example = 6)]
    pub order_count: usize,
}

// 2. Distribuição por status (um bucket por variante, zerado se ausente)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummaryEntry {
    pub status: OrderStatus,
    #[schema(example = "Aguardando Aprovação")]
    pub label: &'static str,
    #[schema(example = 3)]
    pub count: usize,
    #[schema(example = "37500.00")]
    pub total_amount: Decimal,
}

// 3. Contagem por forma de pagamento
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodSummaryEntry {
    pub method: PaymentMethod,
    #[schema(example = "PIX")]
    pub label: &'static str,
    #[schema(example = 2)]
    pub count: usize,
}

// 4. Faturamento por cliente (ranking decrescente)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientRevenueEntry {
    pub client_id: Uuid,
    #[schema(example = "Empresa Tech Ltda")]
    pub client_name: Option<String>,
    #[schema(example = "25000.00")]
    pub total_amount: Decimal,
    #[schema(example = "R$ 25.000,00")]
    pub formatted_total: String,
}
