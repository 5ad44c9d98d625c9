// src/models/client.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENDEREÇO ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[schema(example = "Av. Paulista")]
    pub street: String,
    #[schema(example = "1578")]
    pub number: String,
    pub complement: Option<String>,
    #[schema(example = "Bela Vista")]
    pub neighborhood: String,
    #[schema(example = "São Paulo")]
    pub city: String,
    #[schema(example = "SP")]
    pub state: String,
    #[schema(example = "01310-200")]
    pub zip_code: String,
}

// O endereço do cliente chega ora como texto livre, ora como objeto
// estruturado. Em vez de um campo "dinâmico", uma variante explícita
// com um único formatador cobrindo os dois casos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AddressValue {
    Structured(Address),
    PlainText(String),
}

impl AddressValue {
    /// Monta a linha única de exibição do endereço.
    pub fn display(&self) -> String {
        match self {
            AddressValue::PlainText(text) => text.clone(),
            AddressValue::Structured(addr) => {
                let mut line = format!("{}, {}", addr.street, addr.number);
                if let Some(complement) = &addr.complement {
                    if !complement.is_empty() {
                        line.push_str(&format!(" - {}", complement));
                    }
                }
                line.push_str(&format!(
                    ", {} - {}/{} - CEP {}",
                    addr.neighborhood, addr.city, addr.state, addr.zip_code
                ));
                line
            }
        }
    }
}

// --- CLIENTE ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,

    #[schema(example = "Empresa Tech Ltda")]
    pub name: String,
    #[schema(example = "TechSoft")]
    pub trading_name: String,
    #[schema(example = "Empresa de Tecnologia Tech Ltda")]
    pub legal_name: String,

    // CNPJ formatado, como o cadastro envia
    #[schema(example = "12.345.678/0001-99")]
    pub tax_id: String,

    #[schema(example = "contato@techsoft.com.br")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<AddressValue>,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endereco_texto_livre_exibe_como_esta() {
        let addr = AddressValue::PlainText("Rua das Flores, 100 - Centro".to_string());
        assert_eq!(addr.display(), "Rua das Flores, 100 - Centro");
    }

    #[test]
    fn endereco_estruturado_vira_linha_unica() {
        let addr = AddressValue::Structured(Address {
            street: "Av. Paulista".to_string(),
            number: "1578".to_string(),
            complement: Some("Sala 42".to_string()),
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            zip_code: "01310-200".to_string(),
        });
        assert_eq!(
            addr.display(),
            "Av. Paulista, 1578 - Sala 42, Bela Vista - São Paulo/SP - CEP 01310-200"
        );
    }

    #[test]
    fn endereco_desserializa_os_dois_formatos() {
        let plain: AddressValue =
            serde_json::from_str("\"Rua A, 1\"").expect("texto livre");
        assert_eq!(plain, AddressValue::PlainText("Rua A, 1".to_string()));

        let structured: AddressValue = serde_json::from_value(serde_json::json!({
            "street": "Rua B",
            "number": "2",
            "complement": null,
            "neighborhood": "Centro",
            "city": "Campinas",
            "state": "SP",
            "zipCode": "13000-000"
        }))
        .expect("objeto estruturado");
        assert!(matches!(structured, AddressValue::Structured(_)));
    }
}
