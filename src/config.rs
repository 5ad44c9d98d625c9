// src/config.rs

use std::env;

use anyhow::Context;

use crate::{
    services::{ClientService, OrderService, ProductService, ReportService},
    store::{ClientRepository, MockStore, OrderRepository, ProductRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub bind_addr: String,
    pub client_service: ClientService,
    pub product_service: ProductService,
    pub order_service: OrderService,
    pub report_service: ReportService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("APP_PORT deve ser um número de porta válido")?;

        // A loja em memória nasce populada com os dados de exemplo;
        // nada sobrevive a um restart, por política.
        let store = MockStore::seeded();
        tracing::info!("✅ Loja em memória populada com os dados de exemplo!");

        // --- Monta o gráfico de dependências ---
        let client_repo = ClientRepository::new(store.clone());
        let product_repo = ProductRepository::new(store.clone());
        let order_repo = OrderRepository::new(store);

        let client_service = ClientService::new(client_repo.clone());
        let product_service = ProductService::new(product_repo.clone());
        let order_service = OrderService::new(order_repo.clone(), client_repo.clone(), product_repo);
        let report_service = ReportService::new(order_repo, client_repo);

        Ok(Self {
            bind_addr: format!("{}:{}", host, port),
            client_service,
            product_service,
            order_service,
            report_service,
        })
    }
}
