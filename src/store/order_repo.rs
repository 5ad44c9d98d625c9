// src/store/order_repo.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::order::{Order, OrderStatus},
    store::MockStore,
};

#[derive(Clone)]
pub struct OrderRepository {
    store: MockStore,
}

impl OrderRepository {
    pub fn new(store: MockStore) -> Self {
        Self { store }
    }

    pub async fn insert(&self, order: Order) -> Order {
        let mut data = self.store.write().await;
        // Invariante da loja: ids não se repetem dentro da coleção.
        debug_assert!(
            data.orders.iter().all(|o| o.id != order.id),
            "id de pedido duplicado na loja"
        );
        data.orders.push(order.clone());
        order
    }

    pub async fn list(&self) -> Vec<Order> {
        self.store.read().await.orders.clone()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Order, AppError> {
        self.store
            .read()
            .await
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(AppError::OrderNotFound)
    }

    /// A mutação do badge de status: troca o estado do pedido direto
    /// na coleção e marca o updated_at.
    pub async fn set_status(&self, id: Uuid, status: OrderStatus) -> Result<Order, AppError> {
        let mut data = self.store.write().await;
        let order = data
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(AppError::OrderNotFound)?;
        order.status = status;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    pub async fn update<F>(&self, id: Uuid, apply: F) -> Result<Order, AppError>
    where
        F: FnOnce(&mut Order),
    {
        let mut data = self.store.write().await;
        let order = data
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(AppError::OrderNotFound)?;
        apply(order);
        // Todo caminho de mutação revalida os totais derivados.
        order.recompute_totals();
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut data = self.store.write().await;
        let before = data.orders.len();
        data.orders.retain(|o| o.id != id);
        if data.orders.len() == before {
            return Err(AppError::OrderNotFound);
        }
        Ok(())
    }
}
