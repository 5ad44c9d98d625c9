// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Cliente não encontrado")]
    ClientNotFound,

    #[error("Produto não encontrado")]
    ProductNotFound,

    #[error("Pedido não encontrado")]
    OrderNotFound,

    // --- Regras do construtor de pedidos (wizard) ---
    // Cada regra violada vira uma mensagem específica para o usuário,
    // na ordem em que a validação roda.
    #[error("Por favor, selecione um cliente para o pedido.")]
    ClientRequired,

    #[error("Por favor, adicione pelo menos um produto ao pedido.")]
    LineItemsRequired,

    #[error("Por favor, selecione uma data de entrega.")]
    DeliveryDateRequired,

    #[error("Verifique se todos os produtos estão preenchidos corretamente.")]
    InvalidLineItem,

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::ClientNotFound => (StatusCode::NOT_FOUND, "Cliente não encontrado."),
            AppError::ProductNotFound => (StatusCode::NOT_FOUND, "Produto não encontrado."),
            AppError::OrderNotFound => (StatusCode::NOT_FOUND, "Pedido não encontrado."),

            AppError::ClientRequired => (
                StatusCode::BAD_REQUEST,
                "Por favor, selecione um cliente para o pedido.",
            ),
            AppError::LineItemsRequired => (
                StatusCode::BAD_REQUEST,
                "Por favor, adicione pelo menos um produto ao pedido.",
            ),
            AppError::DeliveryDateRequired => (
                StatusCode::BAD_REQUEST,
                "Por favor, selecione uma data de entrega.",
            ),
            AppError::InvalidLineItem => (
                StatusCode::BAD_REQUEST,
                "Verifique se todos os produtos estão preenchidos corretamente.",
            ),

            // Qualquer outro erro vira 500. O `tracing` loga a mensagem
            // detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
