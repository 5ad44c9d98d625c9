// src/services/report_service.rs
//
// O motor de agregação dos relatórios: somas e contagens por status,
// forma de pagamento e cliente, sempre sobre um snapshot da loja.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::format,
    models::{
        order::{Order, OrderStatus, PaymentMethod},
        report::{
            ClientRevenueEntry, PaymentMethodSummaryEntry, RevenueSummary, StatusSummaryEntry,
        },
    },
    store::{ClientRepository, OrderRepository},
};

// Quantos clientes o ranking do relatório exibe.
pub const TOP_CLIENTS_LIMIT: usize = 5;

#[derive(Clone)]
pub struct ReportService {
    orders: OrderRepository,
    clients: ClientRepository,
}

impl ReportService {
    pub fn new(orders: OrderRepository, clients: ClientRepository) -> Self {
        Self { orders, clients }
    }

    pub async fn revenue_summary(&self) -> RevenueSummary {
        revenue_summary(&self.orders.list().await)
    }

    pub async fn status_summary(&self) -> Vec<StatusSummaryEntry> {
        status_summary(&self.orders.list().await)
    }

    pub async fn payment_method_summary(&self) -> Vec<PaymentMethodSummaryEntry> {
        payment_method_summary(&self.orders.list().await)
    }

    pub async fn top_clients(&self, limit: usize) -> Vec<ClientRevenueEntry> {
        let orders = self.orders.list().await;
        let clients = self.clients.list().await;

        client_revenue_ranking(&orders, limit)
            .into_iter()
            .map(|(client_id, total_amount)| ClientRevenueEntry {
                client_id,
                client_name: clients
                    .iter()
                    .find(|c| c.id == client_id)
                    .map(|c| c.name.clone()),
                total_amount,
                formatted_total: format::format_currency(total_amount),
            })
            .collect()
    }
}

/// Os três cards do topo: faturamento total, aprovado e pendente.
pub fn revenue_summary(orders: &[Order]) -> RevenueSummary {
    let total = |pred: &dyn Fn(&Order) -> bool| -> Decimal {
        orders
            .iter()
            .filter(|o| pred(o))
            .map(|o| o.total_amount)
            .sum()
    };

    RevenueSummary {
        total_sales: total(&|_| true),
        approved_sales: total(&|o| o.status == OrderStatus::Approved),
        pending_sales: total(&|o| o.status == OrderStatus::Pending),
        order_count: orders.len(),
    }
}

/// Um bucket por variante de status, na ordem canônica de declaração,
/// zerado quando ausente. Lei da partição: a soma das contagens é o
/// total de pedidos.
pub fn status_summary(orders: &[Order]) -> Vec<StatusSummaryEntry> {
    OrderStatus::ALL
        .iter()
        .map(|&status| {
            let bucket: Vec<_> = orders.iter().filter(|o| o.status == status).collect();
            StatusSummaryEntry {
                status,
                label: status.label(),
                count: bucket.len(),
                total_amount: bucket.iter().map(|o| o.total_amount).sum(),
            }
        })
        .collect()
}

/// Contagem por forma de pagamento, também zerada por variante.
pub fn payment_method_summary(orders: &[Order]) -> Vec<PaymentMethodSummaryEntry> {
    PaymentMethod::ALL
        .iter()
        .map(|&method| PaymentMethodSummaryEntry {
            method,
            label: method.label(),
            count: orders.iter().filter(|o| o.payment_method == method).count(),
        })
        .collect()
}

/// Faturamento somado por cliente, decrescente por valor. Empates são
/// desfeitos pelo id do cliente em ordem crescente, para o ranking ser
/// reproduzível.
pub fn client_revenue_ranking(orders: &[Order], limit: usize) -> Vec<(Uuid, Decimal)> {
    let mut totals: HashMap<Uuid, Decimal> = HashMap::new();
    for order in orders {
        *totals.entry(order.client_id).or_insert(Decimal::ZERO) += order.total_amount;
    }

    let mut ranking: Vec<(Uuid, Decimal)> = totals.into_iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranking.truncate(limit);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{OrderLineItem, PaymentMethod};
    use chrono::{NaiveDate, Utc};

    fn order(client_id: Uuid, total: i64, status: OrderStatus, method: PaymentMethod) -> Order {
        let mut item = OrderLineItem {
            id: Uuid::new_v4(),
            product_id: None,
            name: "Serviço".to_string(),
            unit_price: Decimal::from(total),
            quantity: 1,
            total_price: Decimal::ZERO,
        };
        item.recompute_total();

        let now = Utc::now();
        let mut order = Order {
            id: Uuid::new_v4(),
            client_id,
            items: vec![item],
            total_amount: Decimal::ZERO,
            delivery_date: NaiveDate::from_ymd_opt(2024, 5, 1).expect("data válida"),
            status,
            payment_method: method,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        order.recompute_totals();
        order
    }

    #[test]
    fn cards_somam_por_status() {
        let c = Uuid::new_v4();
        let orders = vec![
            order(c, 1000, OrderStatus::Pending, PaymentMethod::Pix),
            order(c, 2000, OrderStatus::Approved, PaymentMethod::Cash),
            order(c, 500, OrderStatus::Rejected, PaymentMethod::Boleto),
        ];

        let summary = revenue_summary(&orders);
        assert_eq!(summary.total_sales, Decimal::from(3500));
        assert_eq!(summary.approved_sales, Decimal::from(2000));
        assert_eq!(summary.pending_sales, Decimal::from(1000));
        assert_eq!(summary.order_count, 3);
    }

    #[test]
    fn distribuicao_por_status_zera_buckets_ausentes() {
        // Cenário do relatório: [pending, pending, approved]
        let c = Uuid::new_v4();
        let orders = vec![
            order(c, 100, OrderStatus::Pending, PaymentMethod::Pix),
            order(c, 100, OrderStatus::Pending, PaymentMethod::Pix),
            order(c, 100, OrderStatus::Approved, PaymentMethod::Pix),
        ];

        let summary = status_summary(&orders);
        assert_eq!(summary.len(), OrderStatus::ALL.len());

        let count_of = |status: OrderStatus| {
            summary
                .iter()
                .find(|e| e.status == status)
                .map(|e| e.count)
                .unwrap_or_default()
        };
        assert_eq!(count_of(OrderStatus::Pending), 2);
        assert_eq!(count_of(OrderStatus::Approved), 1);
        assert_eq!(count_of(OrderStatus::Draft), 0);
        assert_eq!(count_of(OrderStatus::Rejected), 0);
    }

    #[test]
    fn lei_da_particao_por_status() {
        let c = Uuid::new_v4();
        let orders = vec![
            order(c, 100, OrderStatus::Pending, PaymentMethod::Pix),
            order(c, 100, OrderStatus::Completed, PaymentMethod::Cash),
            order(c, 100, OrderStatus::Cancelled, PaymentMethod::Boleto),
            order(c, 100, OrderStatus::InProgress, PaymentMethod::CreditCard),
        ];

        let total: usize = status_summary(&orders).iter().map(|e| e.count).sum();
        assert_eq!(total, orders.len());

        // Vale também para a coleção vazia
        let total: usize = status_summary(&[]).iter().map(|e| e.count).sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn contagem_por_forma_de_pagamento() {
        let c = Uuid::new_v4();
        let orders = vec![
            order(c, 100, OrderStatus::Pending, PaymentMethod::Pix),
            order(c, 100, OrderStatus::Pending, PaymentMethod::Pix),
            order(c, 100, OrderStatus::Pending, PaymentMethod::Boleto),
        ];

        let summary = payment_method_summary(&orders);
        assert_eq!(summary.len(), PaymentMethod::ALL.len());

        let count_of = |method: PaymentMethod| {
            summary
                .iter()
                .find(|e| e.method == method)
                .map(|e| e.count)
                .unwrap_or_default()
        };
        assert_eq!(count_of(PaymentMethod::Pix), 2);
        assert_eq!(count_of(PaymentMethod::Boleto), 1);
        assert_eq!(count_of(PaymentMethod::Cash), 0);
    }

    #[test]
    fn ranking_de_clientes_decrescente_com_desempate_por_id() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let orders = vec![
            order(a, 1000, OrderStatus::Approved, PaymentMethod::Pix),
            order(b, 3000, OrderStatus::Approved, PaymentMethod::Pix),
            order(a, 500, OrderStatus::Pending, PaymentMethod::Pix),
            order(c, 1500, OrderStatus::Pending, PaymentMethod::Pix),
        ];

        let ranking = client_revenue_ranking(&orders, 5);
        assert_eq!(ranking[0], (b, Decimal::from(3000)));
        assert_eq!(ranking[1].1, Decimal::from(1500));
        assert_eq!(ranking[2].1, Decimal::from(1500));
        // Empate (a=1500, c=1500): id menor primeiro
        let (first, second) = (ranking[1].0, ranking[2].0);
        assert!(first < second);

        // Truncamento ao top-N
        let top1 = client_revenue_ranking(&orders, 1);
        assert_eq!(top1.len(), 1);
        assert_eq!(top1[0].0, b);
    }

    #[tokio::test]
    async fn servico_resolve_nomes_dos_clientes() {
        let store = crate::store::MockStore::seeded();
        let service = ReportService::new(
            OrderRepository::new(store.clone()),
            ClientRepository::new(store),
        );

        let top = service.top_clients(TOP_CLIENTS_LIMIT).await;
        assert_eq!(top.len(), 3);
        assert!(top.iter().all(|entry| entry.client_name.is_some()));
        // Todos os clientes do seed têm o mesmo faturamento: 2 × 12500
        assert!(top
            .iter()
            .all(|entry| entry.total_amount == Decimal::from(25000)));
        assert!(top
            .iter()
            .all(|entry| entry.formatted_total == "R$ 25.000,00"));
    }
}
