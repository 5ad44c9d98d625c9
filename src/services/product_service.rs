// src/services/product_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::product::Product,
    services::search::{contains_ci, normalize_query},
    store::ProductRepository,
};

#[derive(Clone)]
pub struct ProductService {
    repo: ProductRepository,
}

impl ProductService {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    pub async fn create_product(
        &self,
        name: &str,
        description: &str,
        price: Decimal,
        category: &str,
        sku: Option<&str>,
        stock: Option<u32>,
        cost_price: Option<Decimal>,
    ) -> Result<Product, AppError> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category: category.to_string(),
            sku: sku.map(str::to_string),
            stock,
            cost_price,
            created_at: now,
            updated_at: now,
        };

        let product = self.repo.insert(product).await;
        tracing::info!("Produto criado: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub async fn list_products(&self, query: Option<&str>) -> Vec<Product> {
        filter_products(self.repo.list().await, query)
    }

    pub async fn get_product(&self, id: Uuid) -> Result<Product, AppError> {
        self.repo.find_by_id(id).await
    }

    pub async fn update_product(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
        price: Decimal,
        category: &str,
        sku: Option<&str>,
        stock: Option<u32>,
        cost_price: Option<Decimal>,
    ) -> Result<Product, AppError> {
        self.repo
            .update(id, |product| {
                product.name = name.to_string();
                product.description = description.to_string();
                product.price = price;
                product.category = category.to_string();
                product.sku = sku.map(str::to_string);
                product.stock = stock;
                product.cost_price = cost_price;
                product.updated_at = Utc::now();
            })
            .await
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        tracing::info!("Produto removido: {}", id);
        Ok(())
    }
}

/// Busca da lista de produtos: substring no nome, na categoria ou no SKU.
pub fn filter_products(products: Vec<Product>, query: Option<&str>) -> Vec<Product> {
    let Some(q) = normalize_query(query) else {
        return products;
    };
    products
        .into_iter()
        .filter(|p| {
            contains_ci(&p.name, &q)
                || contains_ci(&p.category, &q)
                || p.sku.as_deref().map(|sku| contains_ci(sku, &q)).unwrap_or(false)
        })
        .collect()
}
