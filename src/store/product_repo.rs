// src/store/product_repo.rs

use uuid::Uuid;

use crate::{common::error::AppError, models::product::Product, store::MockStore};

#[derive(Clone)]
pub struct ProductRepository {
    store: MockStore,
}

impl ProductRepository {
    pub fn new(store: MockStore) -> Self {
        Self { store }
    }

    pub async fn insert(&self, product: Product) -> Product {
        let mut data = self.store.write().await;
        // Invariante da loja: ids não se repetem dentro da coleção.
        debug_assert!(
            data.products.iter().all(|p| p.id != product.id),
            "id de produto duplicado na loja"
        );
        data.products.push(product.clone());
        product
    }

    pub async fn list(&self) -> Vec<Product> {
        self.store.read().await.products.clone()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Product, AppError> {
        self.store
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::ProductNotFound)
    }

    pub async fn update<F>(&self, id: Uuid, apply: F) -> Result<Product, AppError>
    where
        F: FnOnce(&mut Product),
    {
        let mut data = self.store.write().await;
        let product = data
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::ProductNotFound)?;
        apply(product);
        Ok(product.clone())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut data = self.store.write().await;
        let before = data.products.len();
        data.products.retain(|p| p.id != id);
        if data.products.len() == before {
            return Err(AppError::ProductNotFound);
        }
        Ok(())
    }
}
