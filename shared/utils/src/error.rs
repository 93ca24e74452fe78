use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single validation failure, tied to the field that caused it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error taxonomy for the customer registry. Each variant carries the
/// caller-facing message plus the detail string surfaced in the response
/// envelope's `error` field.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum CadastroError {
    #[error("{message}: {detail}")]
    Database { message: String, detail: String },

    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("{message}: {detail}")]
    BadRequest { message: String, detail: String },

    #[error("{message}: {detail}")]
    NotFound { message: String, detail: String },

    #[error("{message}: {detail}")]
    Conflict { message: String, detail: String },

    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl CadastroError {
    pub fn database(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation {
            message: "Dados inválidos".to_string(),
            errors,
        }
    }

    pub fn bad_request(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn not_found(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn conflict(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Database { .. } => "DATABASE_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Database { .. } => 500,
            Self::Validation { .. } => 400,
            Self::BadRequest { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::Internal { .. } => 500,
        }
    }
}

pub type CadastroResult<T> = Result<T, CadastroError>;

// Conversion from common error types
impl From<sqlx::Error> for CadastroError {
    fn from(error: sqlx::Error) -> Self {
        Self::database("Erro de banco de dados", error.to_string())
    }
}

impl From<serde_json::Error> for CadastroError {
    fn from(error: serde_json::Error) -> Self {
        Self::bad_request("Requisição inválida", error.to_string())
    }
}
