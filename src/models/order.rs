// src/models/order.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENUMS ---

// Conjunto canônico de status do fluxo de pedidos. O formulário de
// criação usa só os quatro primeiros; os demais aparecem conforme o
// pedido avança na operação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    // Ordem canônica de declaração, usada pelos relatórios para
    // preencher buckets zerados de forma estável.
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Draft,
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Rejected,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Rótulo de exibição em pt-BR.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Rascunho",
            OrderStatus::Pending => "Aguardando Aprovação",
            OrderStatus::Approved => "Aprovado",
            OrderStatus::Rejected => "Rejeitado",
            OrderStatus::InProgress => "Em Andamento",
            OrderStatus::Completed => "Concluído",
            OrderStatus::Cancelled => "Cancelado",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    BankTransfer,
    Pix,
    Boleto,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::BankTransfer,
        PaymentMethod::Pix,
        PaymentMethod::Boleto,
    ];

    /// Rótulo de exibição em pt-BR.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::CreditCard => "Cartão de Crédito",
            PaymentMethod::BankTransfer => "Transferência Bancária",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Boleto => "Boleto",
        }
    }
}

// --- ITEM DO PEDIDO ---

// O nome e o preço unitário são copiados do produto no momento da
// seleção (snapshot); não acompanham edições futuras do catálogo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub id: Uuid,
    pub product_id: Option<Uuid>,

    #[schema(example = "Manutenção Mensal")]
    pub name: String,
    #[schema(example = "750.00")]
    pub unit_price: Decimal,
    #[schema(example = 12)]
    pub quantity: u32,

    // Derivado: unit_price × quantity. Guardado como snapshot, mas todo
    // caminho de mutação chama `recompute_total`.
    #[schema(example = "9000.00")]
    pub total_price: Decimal,
}

impl OrderLineItem {
    /// O valor que o item deveria ter segundo a fórmula.
    pub fn computed_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Reaplica a fórmula após qualquer edição de preço, quantidade
    /// ou seleção de produto.
    pub fn recompute_total(&mut self) {
        self.total_price = self.computed_total();
    }
}

// --- PEDIDO ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub client_id: Uuid,

    pub items: Vec<OrderLineItem>,

    // Derivado: soma dos totais dos itens, recalculado em toda mutação.
    #[schema(example = "12500.00")]
    pub total_amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2024-04-15")]
    pub delivery_date: NaiveDate,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Recalcula o total de cada item e o total do pedido, nessa ordem.
    pub fn recompute_totals(&mut self) {
        for item in &mut self.items {
            item.recompute_total();
        }
        self.total_amount = self.items.iter().map(|item| item.total_price).sum();
    }
}

// Pedido acompanhado do nome do cliente e dos campos já formatados
// para exibição, como a listagem consome.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    #[schema(example = "Empresa Tech Ltda")]
    pub client_name: Option<String>,
    #[schema(example = "R$ 12.500,00")]
    pub formatted_total: String,
    #[schema(example = "15/04/2024")]
    pub formatted_delivery_date: String,
}
