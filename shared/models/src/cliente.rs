//! Customer (cliente) domain models.
//!
//! Defines the persisted customer row plus the two input shapes the API
//! accepts: a create payload with required identity fields and an update
//! payload where every field is optional and only supplied fields are
//! applied.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A customer as stored in the `clientes` table and returned by the API.
///
/// `cpf` and `email` carry unique constraints in storage; `id` is generated
/// on insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Cliente {
    pub id: i64,
    pub cpf: String,
    pub nome: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agencia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_conta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cartao_debito: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cartao_credito: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandeira_cartao_credito: Option<String>,
}

impl Cliente {
    /// Merge an update payload into this row. Only fields present in the
    /// payload change; `cpf` and `nome` are stored trimmed.
    pub fn apply_update(&mut self, update: &ClienteUpdate) {
        if let Some(cpf) = &update.cpf {
            self.cpf = cpf.trim().to_string();
        }
        if let Some(nome) = &update.nome {
            self.nome = nome.trim().to_string();
        }
        if let Some(email) = &update.email {
            self.email = email.trim().to_string();
        }
        if let Some(telefone) = &update.telefone {
            self.telefone = Some(telefone.clone());
        }
        if let Some(agencia) = &update.agencia {
            self.agencia = Some(agencia.clone());
        }
        if let Some(conta) = &update.conta {
            self.conta = Some(conta.clone());
        }
        if let Some(tipo_conta) = &update.tipo_conta {
            self.tipo_conta = Some(tipo_conta.clone());
        }
        if let Some(cartao_debito) = &update.cartao_debito {
            self.cartao_debito = Some(cartao_debito.clone());
        }
        if let Some(cartao_credito) = &update.cartao_credito {
            self.cartao_credito = Some(cartao_credito.clone());
        }
        if let Some(bandeira) = &update.bandeira_cartao_credito {
            self.bandeira_cartao_credito = Some(bandeira.clone());
        }
    }
}

/// Payload for creating a customer. `cpf` and `nome` must be non-empty
/// after trimming and `email` must be a syntactically valid address.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ClienteCreate {
    #[validate(custom = "validate_preenchido")]
    pub cpf: String,
    #[validate(custom = "validate_preenchido")]
    pub nome: String,
    #[validate(email(message = "Email em formato inválido"))]
    pub email: String,
    pub telefone: Option<String>,
    pub agencia: Option<String>,
    pub conta: Option<String>,
    pub tipo_conta: Option<String>,
    pub cartao_debito: Option<String>,
    pub cartao_credito: Option<String>,
    pub bandeira_cartao_credito: Option<String>,
}

impl ClienteCreate {
    /// Returns the payload with `cpf`, `nome` and `email` trimmed, the form
    /// in which they are persisted and compared for uniqueness.
    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        normalized.cpf = self.cpf.trim().to_string();
        normalized.nome = self.nome.trim().to_string();
        normalized.email = self.email.trim().to_string();
        normalized
    }
}

/// Payload for updating a customer. Every field is optional; fields absent
/// from the body keep their stored value. Supplied fields follow the same
/// rules as on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct ClienteUpdate {
    #[validate(custom = "validate_preenchido")]
    pub cpf: Option<String>,
    #[validate(custom = "validate_preenchido")]
    pub nome: Option<String>,
    #[validate(email(message = "Email em formato inválido"))]
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub agencia: Option<String>,
    pub conta: Option<String>,
    pub tipo_conta: Option<String>,
    pub cartao_debito: Option<String>,
    pub cartao_credito: Option<String>,
    pub bandeira_cartao_credito: Option<String>,
}

/// Rejects values that are empty or whitespace-only after trimming.
fn validate_preenchido(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("O campo não pode ser vazio".into());
        return Err(error);
    }
    Ok(())
}
