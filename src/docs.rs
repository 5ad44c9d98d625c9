// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Clientes ---
        handlers::clients::create_client,
        handlers::clients::list_clients,
        handlers::clients::get_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Produtos ---
        handlers::products::create_product,
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::update_product,
        handlers::products::delete_product,

        // --- Pedidos ---
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::update_order,
        handlers::orders::update_order_status,
        handlers::orders::delete_order,

        // --- Relatórios ---
        handlers::reports::get_revenue_summary,
        handlers::reports::get_status_summary,
        handlers::reports::get_payment_method_summary,
        handlers::reports::get_top_clients,
    ),
    components(
        schemas(
            // --- Clientes ---
            models::client::Client,
            models::client::Address,
            models::client::AddressValue,
            handlers::clients::CreateClientPayload,

            // --- Produtos ---
            models::product::Product,
            handlers::products::CreateProductPayload,

            // --- Pedidos ---
            models::order::OrderStatus,
            models::order::PaymentMethod,
            models::order::OrderLineItem,
            models::order::Order,
            models::order::OrderDetail,
            handlers::orders::OrderItemPayload,
            handlers::orders::CreateOrderPayload,
            handlers::orders::UpdateStatusPayload,

            // --- Relatórios ---
            models::report::RevenueSummary,
            models::report::StatusSummaryEntry,
            models::report::PaymentMethodSummaryEntry,
            models::report::ClientRevenueEntry,
        )
    ),
    tags(
        (name = "Clientes", description = "Cadastro e busca de clientes"),
        (name = "Produtos", description = "Catálogo de produtos e serviços"),
        (name = "Pedidos", description = "Criação e acompanhamento de pedidos"),
        (name = "Relatórios", description = "Indicadores e gráficos gerenciais")
    )
)]
pub struct ApiDoc;
