use crate::error::{CadastroError, CadastroResult, FieldError};
use validator::{Validate, ValidationErrors};

/// Runs the model's validation rules and maps any failures into the
/// structured per-field error list carried by the 400 response.
pub fn validate_model<T: Validate>(model: &T) -> CadastroResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(CadastroError::validation(collect_field_errors(&errors))),
    }
}

pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors = Vec::new();

    for (field, errors) in errors.field_errors() {
        for error in errors {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => match error.code.as_ref() {
                    "email" => "Email em formato inválido".to_string(),
                    "required" => "O campo não pode ser vazio".to_string(),
                    "length" => format!("Tamanho inválido para o campo '{}'", field),
                    code => format!("Validação falhou para o campo '{}': {}", field, code),
                },
            };
            field_errors.push(FieldError::new(field, message));
        }
    }

    // field_errors() iterates a HashMap; sort so callers see a stable order.
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(email(message = "Email em formato inválido"))]
        email: String,
        #[validate(length(min = 1))]
        nome: String,
    }

    #[test]
    fn test_validate_model_ok() {
        let payload = Payload {
            email: "joao@test.com".to_string(),
            nome: "Joao".to_string(),
        };
        assert!(validate_model(&payload).is_ok());
    }

    #[test]
    fn test_validate_model_collects_all_fields() {
        let payload = Payload {
            email: "not-an-email".to_string(),
            nome: "".to_string(),
        };
        let err = validate_model(&payload).unwrap_err();
        match err {
            CadastroError::Validation { errors, .. } => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field, "email");
                assert_eq!(errors[0].message, "Email em formato inválido");
                assert_eq!(errors[1].field, "nome");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
