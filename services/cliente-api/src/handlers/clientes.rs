//! Route handlers for the `/clientes` resource: list/search, get-by-id,
//! create, update and delete. Each handler validates its input, runs the
//! uniqueness checks the customer invariants require and maps the result
//! into the response envelope.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use cadastro_database::ClienteRepository;
use cadastro_models::{Cliente, ClienteCreate, ClienteUpdate};
use cadastro_utils::{validate_model, CadastroError, FieldError};

use crate::response::{to_data, ApiError, ApiResponse};
use crate::AppState;

type HandlerResult = Result<(StatusCode, Json<ApiResponse>), ApiError>;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    nome: Option<String>,
}

/// Unwrap an extracted JSON body. A missing or syntactically broken body is
/// a bad request; a body that fails to deserialize into the payload shape is
/// a validation failure.
fn parse_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::JsonDataError(err)) => Err(CadastroError::validation(vec![
            FieldError::new("body", err.body_text()),
        ])
        .into()),
        Err(_) => Err(CadastroError::bad_request(
            "Requisição inválida",
            "Requisição precisa conter dados JSON",
        )
        .into()),
    }
}

/// GET /clientes/ — list every customer, or search by name when the `nome`
/// query parameter is present.
pub async fn listar_clientes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HandlerResult {
    let repo = ClienteRepository::new(state.pool.clone());

    let clientes = match query.nome.as_deref() {
        Some(nome) if !nome.is_empty() => {
            let encontrados = repo
                .find_by_nome(nome)
                .await
                .map_err(|e| CadastroError::database("Erro ao buscar clientes", e.to_string()))?;

            if encontrados.is_empty() {
                return Err(CadastroError::not_found(
                    "Nenhum cliente encontrado",
                    format!("Nenhum cliente encontrado contendo '{}'", nome),
                )
                .into());
            }
            encontrados
        }
        _ => {
            let todos = repo
                .find_all()
                .await
                .map_err(|e| CadastroError::database("Erro ao buscar clientes", e.to_string()))?;

            if todos.is_empty() {
                return Ok((
                    StatusCode::OK,
                    Json(ApiResponse::success(
                        "Nenhum cliente cadastrado",
                        serde_json::Value::Array(vec![]),
                    )),
                ));
            }
            todos
        }
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Clientes encontrados com sucesso",
            to_data(&clientes)?,
        )),
    ))
}

/// GET /clientes/{id}
pub async fn buscar_cliente_por_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult {
    let repo = ClienteRepository::new(state.pool.clone());

    let cliente = repo
        .find_by_id(id)
        .await
        .map_err(|e| CadastroError::database("Erro ao buscar cliente", e.to_string()))?
        .ok_or_else(|| {
            CadastroError::not_found(
                "Cliente não encontrado",
                format!("Nenhum cliente encontrado com ID {}", id),
            )
        })?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Cliente encontrado com sucesso",
            to_data(&cliente)?,
        )),
    ))
}

/// POST /clientes/ — validate, check CPF/email uniqueness (email first when
/// both collide) and insert.
pub async fn criar_cliente(
    State(state): State<AppState>,
    payload: Result<Json<ClienteCreate>, JsonRejection>,
) -> HandlerResult {
    let payload = parse_json(payload)?;
    validate_model(&payload)?;
    let cliente_create = payload.normalized();

    let repo = ClienteRepository::new(state.pool.clone());

    let existente = repo
        .find_by_cpf_or_email(&cliente_create.cpf, &cliente_create.email)
        .await
        .map_err(|e| CadastroError::database("Erro ao salvar cliente", e.to_string()))?;

    if let Some(existente) = existente {
        if existente.email == cliente_create.email {
            return Err(CadastroError::conflict(
                "Email já cadastrado",
                "O email já está cadastrado",
            )
            .into());
        }
        return Err(
            CadastroError::conflict("CPF já cadastrado", "O CPF já está cadastrado").into(),
        );
    }

    let criado = repo
        .create(&cliente_create)
        .await
        .map_err(|e| CadastroError::database("Erro ao salvar cliente", e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Cliente criado com sucesso",
            to_data(&criado)?,
        )),
    ))
}

/// PUT /clientes/{id} — only fields present in the body change. A supplied
/// CPF or email that differs from the stored value must not belong to
/// another row.
pub async fn atualizar_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ClienteUpdate>, JsonRejection>,
) -> HandlerResult {
    let repo = ClienteRepository::new(state.pool.clone());

    let mut cliente = repo
        .find_by_id(id)
        .await
        .map_err(|e| CadastroError::database("Erro ao atualizar cliente", e.to_string()))?
        .ok_or_else(|| {
            CadastroError::not_found(
                "Cliente não encontrado",
                format!("Nenhum cliente encontrado com o ID {}", id),
            )
        })?;

    let update = parse_json(payload)?;
    validate_model(&update)?;

    if let Some(email) = update.email.as_deref().map(str::trim) {
        if email != cliente.email {
            let em_uso = repo
                .find_other_with_email(email, cliente.id)
                .await
                .map_err(|e| CadastroError::database("Erro ao atualizar cliente", e.to_string()))?;

            if em_uso.is_some() {
                return Err(CadastroError::conflict(
                    "Email já cadastrado",
                    format!("O email '{}' já está cadastrado", email),
                )
                .into());
            }
        }
    }

    if let Some(cpf) = update.cpf.as_deref().map(str::trim) {
        if cpf != cliente.cpf {
            let em_uso = repo
                .find_other_with_cpf(cpf, cliente.id)
                .await
                .map_err(|e| CadastroError::database("Erro ao atualizar cliente", e.to_string()))?;

            if em_uso.is_some() {
                return Err(CadastroError::conflict(
                    "CPF já cadastrado",
                    format!("O CPF '{}' já está cadastrado", cpf),
                )
                .into());
            }
        }
    }

    cliente.apply_update(&update);

    let atualizado = repo
        .update(&cliente)
        .await
        .map_err(|e| CadastroError::database("Erro ao atualizar cliente", e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Cliente atualizado com sucesso",
            to_data(&atualizado)?,
        )),
    ))
}

/// DELETE /clientes/{id} — returns the deleted row's snapshot.
pub async fn deletar_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult {
    let repo = ClienteRepository::new(state.pool.clone());

    let cliente: Cliente = repo
        .find_by_id(id)
        .await
        .map_err(|e| CadastroError::database("Erro ao deletar cliente", e.to_string()))?
        .ok_or_else(|| {
            CadastroError::not_found(
                "Cliente não encontrado",
                "Nenhum cliente encontrado com o ID informado".to_string(),
            )
        })?;

    // Snapshot captured before the row is removed.
    let snapshot = to_data(&cliente)?;

    repo.delete(id)
        .await
        .map_err(|e| CadastroError::database("Erro ao deletar cliente", e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Cliente deletado com sucesso", snapshot)),
    ))
}
