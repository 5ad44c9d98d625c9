// src/services/client_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::client::{AddressValue, Client},
    services::search::{contains_ci, normalize_query},
    store::ClientRepository,
};

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
}

impl ClientService {
    pub fn new(repo: ClientRepository) -> Self {
        Self { repo }
    }

    pub async fn create_client(
        &self,
        name: &str,
        trading_name: &str,
        legal_name: &str,
        tax_id: &str,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<AddressValue>,
        notes: Option<&str>,
    ) -> Result<Client, AppError> {
        let now = Utc::now();
        let client = Client {
            id: Uuid::new_v4(),
            name: name.to_string(),
            trading_name: trading_name.to_string(),
            legal_name: legal_name.to_string(),
            tax_id: tax_id.to_string(),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
            address,
            notes: notes.map(str::to_string),
            created_at: now,
            updated_at: now,
        };

        let client = self.repo.insert(client).await;
        tracing::info!("Cliente criado: {} ({})", client.name, client.id);
        Ok(client)
    }

    /// Lista os clientes, opcionalmente filtrados pela busca textual.
    pub async fn list_clients(&self, query: Option<&str>) -> Vec<Client> {
        filter_clients(self.repo.list().await, query)
    }

    pub async fn get_client(&self, id: Uuid) -> Result<Client, AppError> {
        self.repo.find_by_id(id).await
    }

    pub async fn update_client(
        &self,
        id: Uuid,
        name: &str,
        trading_name: &str,
        legal_name: &str,
        tax_id: &str,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<AddressValue>,
        notes: Option<&str>,
    ) -> Result<Client, AppError> {
        self.repo
            .update(id, |client| {
                client.name = name.to_string();
                client.trading_name = trading_name.to_string();
                client.legal_name = legal_name.to_string();
                client.tax_id = tax_id.to_string();
                client.email = email.map(str::to_string);
                client.phone = phone.map(str::to_string);
                client.address = address;
                client.notes = notes.map(str::to_string);
                client.updated_at = Utc::now();
            })
            .await
    }

    pub async fn delete_client(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        tracing::info!("Cliente removido: {}", id);
        Ok(())
    }
}

/// Busca da lista de clientes: substring no nome, no nome fantasia,
/// na razão social ou no CNPJ.
pub fn filter_clients(clients: Vec<Client>, query: Option<&str>) -> Vec<Client> {
    let Some(q) = normalize_query(query) else {
        return clients;
    };
    clients
        .into_iter()
        .filter(|c| {
            contains_ci(&c.name, &q)
                || contains_ci(&c.trading_name, &q)
                || contains_ci(&c.legal_name, &q)
                || contains_ci(&c.tax_id, &q)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    fn service() -> ClientService {
        ClientService::new(ClientRepository::new(MockStore::empty()))
    }

    async fn seed(service: &ClientService) {
        service
            .create_client(
                "Empresa Tech Ltda",
                "TechSoft",
                "Empresa de Tecnologia Tech Ltda",
                "12.345.678/0001-99",
                None,
                None,
                None,
                None,
            )
            .await
            .expect("cria cliente");
        service
            .create_client(
                "Comércio Local S.A.",
                "Mercado Central",
                "Comércio Local de Alimentos S.A.",
                "98.765.432/0001-01",
                None,
                None,
                None,
                None,
            )
            .await
            .expect("cria cliente");
    }

    #[tokio::test]
    async fn busca_vazia_retorna_todos() {
        let service = service();
        seed(&service).await;

        assert_eq!(service.list_clients(None).await.len(), 2);
        assert_eq!(service.list_clients(Some("")).await.len(), 2);
        assert_eq!(service.list_clients(Some("   ")).await.len(), 2);
    }

    #[tokio::test]
    async fn busca_por_nome_ignora_caixa() {
        let service = service();
        seed(&service).await;

        let found = service.list_clients(Some("tech")).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Empresa Tech Ltda");
    }

    #[tokio::test]
    async fn busca_por_nome_fantasia_e_razao_social() {
        let service = service();
        seed(&service).await;

        // Nome fantasia: só o cadastro da TechSoft tem esse termo
        let found = service.list_clients(Some("TechSoft")).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Empresa Tech Ltda");

        // Razão social: "de Alimentos" não aparece em nenhum outro campo
        let found = service.list_clients(Some("de alimentos")).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Comércio Local S.A.");
    }

    #[tokio::test]
    async fn busca_por_cnpj() {
        let service = service();
        seed(&service).await;

        let found = service.list_clients(Some("98.765")).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Comércio Local S.A.");
    }

    #[tokio::test]
    async fn busca_sem_resultado_retorna_vazio() {
        let service = service();
        seed(&service).await;

        assert!(service.list_clients(Some("inexistente")).await.is_empty());
    }
}
