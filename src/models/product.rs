// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,

    #[schema(example = "Design de Website")]
    pub name: String,
    #[schema(example = "Criação completa de site responsivo com até 5 páginas")]
    pub description: String,

    #[schema(example = "3500.00")]
    pub price: Decimal,

    #[schema(example = "Design")]
    pub category: String,
    #[schema(example = "DSN-WEB-001")]
    pub sku: Option<String>,
    #[schema(example = 999)]
    pub stock: Option<u32>,
    #[schema(example = "2000.00")]
    pub cost_price: Option<Decimal>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
