// src/services/order_builder.rs
//
// O estado do fluxo de criação de pedido. O rascunho acumula os itens
// enquanto o usuário navega entre as etapas e recalcula os totais a
// cada edição; nada é gravado até o submit passar por todas as regras.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        order::{Order, OrderLineItem, OrderStatus, PaymentMethod},
        product::Product,
    },
};

// Quantidade assumida quando o campo chega vazio ou ilegível,
// acompanhando o min=1 do formulário.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Etapas do assistente, navegáveis para frente e para trás sem
/// perda de dados.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Info,
    Products,
    Summary,
}

impl WizardStep {
    pub fn next(self) -> Self {
        match self {
            WizardStep::Info => WizardStep::Products,
            WizardStep::Products => WizardStep::Summary,
            WizardStep::Summary => WizardStep::Summary,
        }
    }

    pub fn back(self) -> Self {
        match self {
            WizardStep::Info => WizardStep::Info,
            WizardStep::Products => WizardStep::Info,
            WizardStep::Summary => WizardStep::Products,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderDraft {
    step: WizardStep,
    pub client_id: Option<Uuid>,
    pub items: Vec<OrderLineItem>,
    pub delivery_date: Option<NaiveDate>,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDraft {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Info,
            client_id: None,
            items: Vec::new(),
            delivery_date: None,
            // Padrões do formulário
            status: OrderStatus::Draft,
            payment_method: PaymentMethod::Pix,
            notes: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn advance(&mut self) {
        self.step = self.step.next();
    }

    pub fn go_back(&mut self) {
        self.step = self.step.back();
    }

    pub fn select_client(&mut self, client_id: Uuid) {
        self.client_id = Some(client_id);
    }

    pub fn set_delivery_date(&mut self, date: NaiveDate) {
        self.delivery_date = Some(date);
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }

    /// Acrescenta uma linha vazia (quantidade 1) e devolve o índice.
    pub fn add_line(&mut self) -> usize {
        self.items.push(OrderLineItem {
            id: Uuid::new_v4(),
            product_id: None,
            name: String::new(),
            unit_price: Decimal::ZERO,
            quantity: DEFAULT_QUANTITY,
            total_price: Decimal::ZERO,
        });
        self.items.len() - 1
    }

    /// Seleção no catálogo: copia id, nome e preço do produto para a
    /// linha (snapshot) e recalcula o total.
    pub fn select_product(&mut self, index: usize, product: &Product) {
        if let Some(item) = self.items.get_mut(index) {
            item.product_id = Some(product.id);
            item.name = product.name.clone();
            item.unit_price = product.price;
            item.recompute_total();
        }
    }

    pub fn set_name(&mut self, index: usize, name: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.name = name.to_string();
        }
    }

    /// Quantidade ausente ou ilegível assume o padrão 1. Zero é aceito
    /// transitoriamente; o submit rejeita.
    pub fn set_quantity(&mut self, index: usize, quantity: Option<u32>) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity.unwrap_or(DEFAULT_QUANTITY);
            item.recompute_total();
        }
    }

    pub fn set_unit_price(&mut self, index: usize, unit_price: Decimal) {
        if let Some(item) = self.items.get_mut(index) {
            item.unit_price = unit_price;
            item.recompute_total();
        }
    }

    pub fn remove_line(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Total do rascunho, recalculado a cada consulta.
    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(|item| item.total_price).sum()
    }

    /// Valida as regras na ordem do formulário e devolve a primeira
    /// violada; em caso de sucesso consome o rascunho e monta o pedido
    /// com os totais recalculados.
    pub fn submit(self, now: DateTime<Utc>) -> Result<Order, AppError> {
        let client_id = self.client_id.ok_or(AppError::ClientRequired)?;

        if self.items.is_empty() {
            return Err(AppError::LineItemsRequired);
        }

        let delivery_date = self.delivery_date.ok_or(AppError::DeliveryDateRequired)?;

        if self
            .items
            .iter()
            .any(|item| item.name.trim().is_empty() || item.quantity == 0)
        {
            return Err(AppError::InvalidLineItem);
        }

        let mut order = Order {
            id: Uuid::new_v4(),
            client_id,
            items: self.items,
            total_amount: Decimal::ZERO,
            delivery_date,
            status: self.status,
            payment_method: self.payment_method,
            notes: self.notes,
            created_at: now,
            updated_at: now,
        };
        order.recompute_totals();
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: i64) -> Product {
        let now = Utc::now();
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            price: Decimal::from(price),
            category: "Serviços".to_string(),
            sku: None,
            stock: None,
            cost_price: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn delivery() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("data válida")
    }

    #[test]
    fn navegacao_entre_etapas_nao_perde_dados() {
        let mut draft = OrderDraft::new();
        assert_eq!(draft.step(), WizardStep::Info);

        let client_id = Uuid::new_v4();
        draft.select_client(client_id);
        draft.advance();
        assert_eq!(draft.step(), WizardStep::Products);

        draft.add_line();
        draft.advance();
        assert_eq!(draft.step(), WizardStep::Summary);
        draft.advance();
        assert_eq!(draft.step(), WizardStep::Summary);

        draft.go_back();
        draft.go_back();
        assert_eq!(draft.step(), WizardStep::Info);
        draft.go_back();
        assert_eq!(draft.step(), WizardStep::Info);

        // Nada se perdeu no caminho
        assert_eq!(draft.client_id, Some(client_id));
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn selecao_de_produto_copia_nome_e_preco() {
        let mut draft = OrderDraft::new();
        let index = draft.add_line();
        let p = product("Design de Website", 3500);

        draft.select_product(index, &p);
        assert_eq!(draft.items[index].name, "Design de Website");
        assert_eq!(draft.items[index].unit_price, Decimal::from(3500));
        assert_eq!(draft.items[index].total_price, Decimal::from(3500));
    }

    #[test]
    fn edicoes_recalculam_os_totais() {
        let mut draft = OrderDraft::new();
        let a = draft.add_line();
        draft.select_product(a, &product("Design de Website", 3500));

        let b = draft.add_line();
        draft.select_product(b, &product("Manutenção Mensal", 750));
        draft.set_quantity(b, Some(12));

        // 3500×1 + 750×12 = 12500
        assert_eq!(draft.total_amount(), Decimal::from(12500));

        draft.set_unit_price(a, Decimal::from(4000));
        assert_eq!(draft.items[a].total_price, Decimal::from(4000));
        assert_eq!(draft.total_amount(), Decimal::from(13000));

        draft.remove_line(a);
        assert_eq!(draft.total_amount(), Decimal::from(9000));
    }

    #[test]
    fn quantidade_ilegivel_assume_um() {
        let mut draft = OrderDraft::new();
        let index = draft.add_line();
        draft.select_product(index, &product("Hospedagem Premium", 120));

        draft.set_quantity(index, None);
        assert_eq!(draft.items[index].quantity, 1);
        assert_eq!(draft.items[index].total_price, Decimal::from(120));
    }

    #[test]
    fn submit_sem_cliente_reporta_cliente_obrigatorio() {
        let mut draft = OrderDraft::new();
        let index = draft.add_line();
        draft.select_product(index, &product("Design de Website", 3500));
        draft.set_delivery_date(delivery());

        let result = draft.submit(Utc::now());
        assert!(matches!(result, Err(AppError::ClientRequired)));
    }

    #[test]
    fn submit_sem_itens_reporta_produtos_obrigatorios() {
        let mut draft = OrderDraft::new();
        draft.select_client(Uuid::new_v4());
        draft.set_delivery_date(delivery());

        let result = draft.submit(Utc::now());
        assert!(matches!(result, Err(AppError::LineItemsRequired)));
    }

    #[test]
    fn submit_sem_data_de_entrega_reporta_data_obrigatoria() {
        let mut draft = OrderDraft::new();
        draft.select_client(Uuid::new_v4());
        let index = draft.add_line();
        draft.select_product(index, &product("Design de Website", 3500));

        let result = draft.submit(Utc::now());
        assert!(matches!(result, Err(AppError::DeliveryDateRequired)));
    }

    #[test]
    fn submit_com_linha_invalida_reporta_produto_invalido() {
        let mut draft = OrderDraft::new();
        draft.select_client(Uuid::new_v4());
        draft.add_line(); // linha sem nome
        draft.set_delivery_date(delivery());

        let result = draft.submit(Utc::now());
        assert!(matches!(result, Err(AppError::InvalidLineItem)));

        // Quantidade zero também é inválida no submit
        let mut draft = OrderDraft::new();
        draft.select_client(Uuid::new_v4());
        let index = draft.add_line();
        draft.select_product(index, &product("Design de Website", 3500));
        draft.set_quantity(index, Some(0));
        draft.set_delivery_date(delivery());

        let result = draft.submit(Utc::now());
        assert!(matches!(result, Err(AppError::InvalidLineItem)));
    }

    #[test]
    fn a_primeira_regra_violada_prevalece() {
        // Sem cliente E sem itens: a regra do cliente vem primeiro
        let draft = OrderDraft::new();
        let result = draft.submit(Utc::now());
        assert!(matches!(result, Err(AppError::ClientRequired)));
    }

    #[test]
    fn submit_valido_monta_o_pedido_com_totais() {
        let mut draft = OrderDraft::new();
        let client_id = Uuid::new_v4();
        draft.select_client(client_id);

        let a = draft.add_line();
        draft.select_product(a, &product("Design de Website", 3500));
        let b = draft.add_line();
        draft.select_product(b, &product("Manutenção Mensal", 750));
        draft.set_quantity(b, Some(12));

        draft.set_delivery_date(delivery());
        draft.set_status(OrderStatus::Pending);
        draft.set_notes(Some("Entrega prioritária".to_string()));

        let order = draft.submit(Utc::now()).expect("rascunho válido");
        assert_eq!(order.client_id, client_id);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total_amount, Decimal::from(12500));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_method, PaymentMethod::Pix);
    }
}
