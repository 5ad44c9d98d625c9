// src/services/order_service.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, format},
    models::{
        client::Client,
        order::{Order, OrderDetail, OrderStatus, PaymentMethod},
    },
    services::{
        order_builder::OrderDraft,
        search::{contains_ci, normalize_query},
    },
    store::{ClientRepository, OrderRepository, ProductRepository},
};

// Uma linha do pedido como chega do formulário, antes de virar item.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: Option<Uuid>,
    pub name: Option<String>,
    pub unit_price: Option<Decimal>,
    pub quantity: Option<u32>,
}

// Filtros da listagem de pedidos: busca textual, status e intervalo
// de datas de criação.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub query: Option<String>,
    pub status: Option<OrderStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    clients: ClientRepository,
    products: ProductRepository,
}

impl OrderService {
    pub fn new(
        orders: OrderRepository,
        clients: ClientRepository,
        products: ProductRepository,
    ) -> Self {
        Self {
            orders,
            clients,
            products,
        }
    }

    /// Conduz as duas primeiras etapas do assistente: informações do
    /// cliente e itens (com snapshot do catálogo), validando as
    /// referências contra a loja.
    async fn assemble_draft(
        &self,
        client_id: Option<Uuid>,
        items: Vec<NewOrderItem>,
        delivery_date: Option<NaiveDate>,
        status: Option<OrderStatus>,
        payment_method: Option<PaymentMethod>,
        notes: Option<String>,
    ) -> Result<OrderDraft, AppError> {
        let mut draft = OrderDraft::new();

        // Etapa 1: informações
        if let Some(client_id) = client_id {
            // Referência tem que existir na loja
            self.clients.find_by_id(client_id).await?;
            draft.select_client(client_id);
        }
        if let Some(date) = delivery_date {
            draft.set_delivery_date(date);
        }
        if let Some(status) = status {
            draft.set_status(status);
        }
        if let Some(method) = payment_method {
            draft.set_payment_method(method);
        }
        draft.set_notes(notes);
        draft.advance();

        // Etapa 2: itens
        for item in items {
            let index = draft.add_line();
            if let Some(product_id) = item.product_id {
                let product = self.products.find_by_id(product_id).await?;
                draft.select_product(index, &product);
            }
            if let Some(name) = &item.name {
                draft.set_name(index, name);
            }
            if let Some(unit_price) = item.unit_price {
                draft.set_unit_price(index, unit_price);
            }
            draft.set_quantity(index, item.quantity);
        }
        draft.advance();

        Ok(draft)
    }

    /// Conduz o assistente de ponta a ponta e grava o pedido novo.
    pub async fn create_order(
        &self,
        client_id: Option<Uuid>,
        items: Vec<NewOrderItem>,
        delivery_date: Option<NaiveDate>,
        status: Option<OrderStatus>,
        payment_method: Option<PaymentMethod>,
        notes: Option<String>,
    ) -> Result<Order, AppError> {
        let draft = self
            .assemble_draft(client_id, items, delivery_date, status, payment_method, notes)
            .await?;

        // Etapa 3: resumo e submit
        let order = draft.submit(Utc::now())?;
        let order = self.orders.insert(order).await;
        tracing::info!(
            "Pedido criado: {} (cliente {}, total {})",
            order.id,
            order.client_id,
            order.total_amount
        );
        Ok(order)
    }

    /// Reaplica o fluxo completo sobre um pedido existente: as mesmas
    /// regras do submit valem, e o repositório refaz os totais.
    pub async fn update_order(
        &self,
        id: Uuid,
        client_id: Option<Uuid>,
        items: Vec<NewOrderItem>,
        delivery_date: Option<NaiveDate>,
        status: Option<OrderStatus>,
        payment_method: Option<PaymentMethod>,
        notes: Option<String>,
    ) -> Result<Order, AppError> {
        // O pedido precisa existir antes de validar o resto
        self.orders.find_by_id(id).await?;

        let draft = self
            .assemble_draft(client_id, items, delivery_date, status, payment_method, notes)
            .await?;
        let rebuilt = draft.submit(Utc::now())?;

        let order = self
            .orders
            .update(id, move |order| {
                order.client_id = rebuilt.client_id;
                order.items = rebuilt.items;
                order.delivery_date = rebuilt.delivery_date;
                order.status = rebuilt.status;
                order.payment_method = rebuilt.payment_method;
                order.notes = rebuilt.notes;
            })
            .await?;
        tracing::info!("Pedido atualizado: {} (total {})", order.id, order.total_amount);
        Ok(order)
    }

    pub async fn list_orders(&self, filter: &OrderFilter) -> Vec<OrderDetail> {
        let orders = self.orders.list().await;
        let clients = self.clients.list().await;

        filter_orders(orders, &clients, filter)
            .into_iter()
            .map(|order| with_client_name(order, &clients))
            .collect()
    }

    pub async fn get_order(&self, id: Uuid) -> Result<OrderDetail, AppError> {
        let order = self.orders.find_by_id(id).await?;
        let clients = self.clients.list().await;
        Ok(with_client_name(order, &clients))
    }

    pub async fn set_status(&self, id: Uuid, status: OrderStatus) -> Result<Order, AppError> {
        let order = self.orders.set_status(id, status).await?;
        tracing::info!("Pedido {} mudou para status {:?}", order.id, order.status);
        Ok(order)
    }

    pub async fn delete_order(&self, id: Uuid) -> Result<(), AppError> {
        self.orders.delete(id).await?;
        tracing::info!("Pedido removido: {}", id);
        Ok(())
    }
}

fn with_client_name(order: Order, clients: &[Client]) -> OrderDetail {
    let client_name = clients
        .iter()
        .find(|c| c.id == order.client_id)
        .map(|c| c.name.clone());
    let formatted_total = format::format_currency(order.total_amount);
    let formatted_delivery_date = format::format_date(order.delivery_date);
    OrderDetail {
        order,
        client_name,
        formatted_total,
        formatted_delivery_date,
    }
}

/// Intervalo fechado [from, to] sobre a data de criação. Limites caem
/// em início e fim de dia; pontas ausentes não restringem.
pub fn in_date_range(
    created_at: DateTime<Utc>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    let date = created_at.date_naive();
    if let Some(from) = from {
        if date < from {
            return false;
        }
    }
    if let Some(to) = to {
        if date > to {
            return false;
        }
    }
    true
}

/// Aplica os três filtros da listagem. A busca textual casa com o nome
/// do cliente ou com o nome de qualquer item do pedido.
pub fn filter_orders(orders: Vec<Order>, clients: &[Client], filter: &OrderFilter) -> Vec<Order> {
    let query = normalize_query(filter.query.as_deref());

    orders
        .into_iter()
        .filter(|order| {
            if let Some(status) = filter.status {
                if order.status != status {
                    return false;
                }
            }

            if !in_date_range(order.created_at, filter.from, filter.to) {
                return false;
            }

            if let Some(q) = &query {
                let client_match = clients
                    .iter()
                    .find(|c| c.id == order.client_id)
                    .map(|c| contains_ci(&c.name, q))
                    .unwrap_or(false);
                let item_match = order.items.iter().any(|item| contains_ci(&item.name, q));
                if !client_match && !item_match {
                    return false;
                }
            }

            true
        })
        .collect()
}
