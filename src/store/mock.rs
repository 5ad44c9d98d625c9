// src/store/mock.rs
//
// A loja de dados em memória. Substitui o antigo estado global por um
// objeto explícito, passado por clone para cada repositório. Nada é
// persistido: o estado vive só no processo e é reconstruído a partir
// do seed a cada inicialização.

use std::sync::Arc;

use chrono::{DateTime, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::models::{
    client::Client,
    order::{Order, OrderLineItem, OrderStatus, PaymentMethod},
    product::Product,
};

#[derive(Debug, Default)]
pub struct StoreData {
    pub clients: Vec<Client>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

#[derive(Clone)]
pub struct MockStore {
    inner: Arc<RwLock<StoreData>>,
}

impl MockStore {
    /// Loja vazia, útil nos testes.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreData::default())),
        }
    }

    /// Loja populada com os dados de exemplo: 3 clientes, 5 produtos
    /// e 2 pedidos por cliente.
    pub fn seeded() -> Self {
        let clients = seed_clients();
        let products = seed_products();
        let orders = seed_orders(&clients, &products);

        Self {
            inner: Arc::new(RwLock::new(StoreData {
                clients,
                products,
                orders,
            })),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.inner.write().await
    }
}

// =========================================================================
//  DADOS DE EXEMPLO
// =========================================================================

// O seed roda uma única vez na subida; datas fixas inválidas aqui
// seriam bug de programação, então o expect é aceitável.
fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("data fixa do seed deve ser válida")
        .and_utc()
}

fn seed_clients() -> Vec<Client> {
    let entries = [
        (
            "Empresa Tech Ltda",
            "TechSoft",
            "Empresa de Tecnologia Tech Ltda",
            "12.345.678/0001-99",
            seed_date(2023, 1, 15),
        ),
        (
            "Comércio Local S.A.",
            "Mercado Central",
            "Comércio Local de Alimentos S.A.",
            "98.765.432/0001-01",
            seed_date(2023, 2, 20),
        ),
        (
            "Construções ABC",
            "ABC Construtora",
            "Construções e Reformas ABC Ltda",
            "45.678.901/0001-23",
            seed_date(2023, 3, 10),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, trading_name, legal_name, tax_id, created_at)| Client {
            id: Uuid::new_v4(),
            name: name.to_string(),
            trading_name: trading_name.to_string(),
            legal_name: legal_name.to_string(),
            tax_id: tax_id.to_string(),
            email: None,
            phone: None,
            address: None,
            notes: None,
            created_at,
            updated_at: created_at,
        })
        .collect()
}

fn seed_products() -> Vec<Product> {
    let entries = [
        (
            "Design de Website",
            "Criação completa de site responsivo com até 5 páginas",
            3500, 2000, "Design", "DSN-WEB-001",
            seed_date(2023, 1, 10),
        ),
        (
            "Desenvolvimento de App",
            "Aplicativo móvel para Android e iOS",
            12000, 6000, "Desenvolvimento", "DEV-APP-001",
            seed_date(2023, 1, 15),
        ),
        (
            "Manutenção Mensal",
            "Suporte técnico e atualizações mensais",
            750, 350, "Serviços", "SRV-MNT-001",
            seed_date(2023, 1, 20),
        ),
        (
            "Hospedagem Premium",
            "Hospedagem de site com alto desempenho",
            120, 50, "Infraestrutura", "INF-HSP-001",
            seed_date(2023, 1, 25),
        ),
        (
            "Campanha de Marketing",
            "Gestão de anúncios e redes sociais por 30 dias",
            2200, 1200, "Marketing", "MKT-CMP-001",
            seed_date(2023, 2, 1),
        ),
    ];

    entries
        .into_iter()
        .map(
            |(name, description, price, cost, category, sku, created_at)| Product {
                id: Uuid::new_v4(),
                name: name.to_string(),
                description: description.to_string(),
                price: Decimal::from(price as i64),
                category: category.to_string(),
                sku: Some(sku.to_string()),
                stock: Some(999),
                cost_price: Some(Decimal::from(cost as i64)),
                created_at,
                updated_at: created_at,
            },
        )
        .collect()
}

fn seed_order_items(products: &[Product]) -> Vec<OrderLineItem> {
    // O par clássico dos pedidos de exemplo: 3500×1 + 750×12.
    let entries = [("Design de Website", 1u32), ("Manutenção Mensal", 12u32)];

    entries
        .into_iter()
        .map(|(name, quantity)| {
            let product = products.iter().find(|p| p.name == name);
            let mut item = OrderLineItem {
                id: Uuid::new_v4(),
                product_id: product.map(|p| p.id),
                name: name.to_string(),
                unit_price: product.map(|p| p.price).unwrap_or(Decimal::ZERO),
                quantity,
                total_price: Decimal::ZERO,
            };
            item.recompute_total();
            item
        })
        .collect()
}

fn seed_orders(clients: &[Client], products: &[Product]) -> Vec<Order> {
    let now = Utc::now();
    let mut payment_cycle = PaymentMethod::ALL.iter().cycle();
    let mut orders = Vec::with_capacity(clients.len() * 2);

    for client in clients {
        for i in 0..2u64 {
            let status = if i % 2 == 0 {
                OrderStatus::Pending
            } else {
                OrderStatus::Approved
            };
            let delivery_date = now
                .date_naive()
                .checked_add_days(Days::new(7 + i * 3))
                .unwrap_or(now.date_naive());
            let payment_method = payment_cycle.next().copied().unwrap_or(PaymentMethod::Pix);

            let mut order = Order {
                id: Uuid::new_v4(),
                client_id: client.id,
                items: seed_order_items(products),
                total_amount: Decimal::ZERO,
                delivery_date,
                status,
                payment_method,
                notes: None,
                created_at: now,
                updated_at: now,
            };
            order.recompute_totals();
            orders.push(order);
        }
    }

    orders
}
