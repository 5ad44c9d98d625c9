// src/store/client_repo.rs

use uuid::Uuid;

use crate::{common::error::AppError, models::client::Client, store::MockStore};

#[derive(Clone)]
pub struct ClientRepository {
    store: MockStore,
}

impl ClientRepository {
    pub fn new(store: MockStore) -> Self {
        Self { store }
    }

    pub async fn insert(&self, client: Client) -> Client {
        let mut data = self.store.write().await;
        // Invariante da loja: ids não se repetem dentro da coleção.
        debug_assert!(
            data.clients.iter().all(|c| c.id != client.id),
            "id de cliente duplicado na loja"
        );
        data.clients.push(client.clone());
        client
    }

    /// Lista na ordem de inserção, como a tela exibe.
    pub async fn list(&self) -> Vec<Client> {
        self.store.read().await.clients.clone()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Client, AppError> {
        self.store
            .read()
            .await
            .clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(AppError::ClientNotFound)
    }

    pub async fn update<F>(&self, id: Uuid, apply: F) -> Result<Client, AppError>
    where
        F: FnOnce(&mut Client),
    {
        let mut data = self.store.write().await;
        let client = data
            .clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::ClientNotFound)?;
        apply(client);
        Ok(client.clone())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut data = self.store.write().await;
        let before = data.clients.len();
        data.clients.retain(|c| c.id != id);
        if data.clients.len() == before {
            return Err(AppError::ClientNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn client(name: &str) -> Client {
        let now = Utc::now();
        Client {
            id: Uuid::new_v4(),
            name: name.to_string(),
            trading_name: name.to_string(),
            legal_name: name.to_string(),
            tax_id: "00.000.000/0001-00".to_string(),
            email: None,
            phone: None,
            address: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insere_e_busca_por_id() {
        let repo = ClientRepository::new(MockStore::empty());
        let created = repo.insert(client("Empresa Tech Ltda")).await;

        let found = repo.find_by_id(created.id).await.expect("cliente existe");
        assert_eq!(found.name, "Empresa Tech Ltda");
    }

    #[tokio::test]
    #[should_panic(expected = "id de cliente duplicado na loja")]
    async fn insercao_de_id_duplicado_dispara_assercao() {
        let repo = ClientRepository::new(MockStore::empty());
        let created = repo.insert(client("Empresa Tech Ltda")).await;
        repo.insert(created).await;
    }

    #[tokio::test]
    async fn busca_de_id_inexistente_retorna_nao_encontrado() {
        let repo = ClientRepository::new(MockStore::empty());
        let result = repo.find_by_id(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::ClientNotFound)));
    }

    #[tokio::test]
    async fn atualiza_e_remove() {
        let repo = ClientRepository::new(MockStore::empty());
        let created = repo.insert(client("Construções ABC")).await;

        let updated = repo
            .update(created.id, |c| c.trading_name = "ABC Construtora".to_string())
            .await
            .expect("cliente existe");
        assert_eq!(updated.trading_name, "ABC Construtora");

        repo.delete(created.id).await.expect("cliente existe");
        assert!(repo.list().await.is_empty());
        assert!(matches!(
            repo.delete(created.id).await,
            Err(AppError::ClientNotFound)
        ));
    }
}
