//! Response envelope shared by every endpoint:
//! `{success, message, data?, error?, errors?}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cadastro_utils::{CadastroError, FieldError};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            errors: None,
        }
    }
}

/// Serialize a payload into the envelope's `data` field.
pub fn to_data<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| CadastroError::internal("Erro interno", e.to_string()).into())
}

/// Handler-level error, mapped onto the failure envelope with the taxonomy's
/// HTTP status.
#[derive(Debug)]
pub struct ApiError(pub CadastroError);

impl From<CadastroError> for ApiError {
    fn from(error: CadastroError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = match self.0 {
            CadastroError::Validation { message, errors } => ApiResponse {
                success: false,
                message,
                data: None,
                error: None,
                errors: Some(errors),
            },
            CadastroError::Database { message, detail }
            | CadastroError::BadRequest { message, detail }
            | CadastroError::NotFound { message, detail }
            | CadastroError::Conflict { message, detail }
            | CadastroError::Internal { message, detail } => ApiResponse {
                success: false,
                message,
                data: None,
                error: Some(detail),
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success("Clientes encontrados com sucesso", Value::Array(vec![]));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Clientes encontrados com sucesso");
        assert!(json["data"].is_array());
        assert!(json.get("error").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_failure_envelope_carries_error_detail() {
        let error = ApiError(CadastroError::not_found(
            "Cliente não encontrado",
            "Nenhum cliente encontrado com ID 99",
        ));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_envelope_carries_field_errors() {
        let error = ApiError(CadastroError::validation(vec![FieldError::new(
            "cpf",
            "O campo não pode ser vazio",
        )]));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
