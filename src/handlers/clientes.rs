// src/handlers/clientes.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{error::AppError, extract::JsonPayload},
    config::AppState,
    models::cliente::{
        AtualizarClienteRequest, Cliente, ClienteCriadoResponse, CriarClienteRequest, StatusResponse,
    },
};

// =============================================================================
//  GESTÃO (painel administrativo)
// =============================================================================

// POST /api/clientes
#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "Clientes",
    request_body = CriarClienteRequest,
    responses(
        (status = 201, description = "Cliente criado", body = ClienteCriadoResponse),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_cliente(
    State(app_state): State<AppState>,
    JsonPayload(payload): JsonPayload<CriarClienteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let cliente = app_state.cliente_service.criar(payload).await?;

    let body = ClienteCriadoResponse {
        id: cliente.id,
        mensagem: "Sucesso".to_string(),
    };
    Ok((StatusCode::CREATED, Json(body)))
}

// GET /api/clientes
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "Todos os clientes", body = Vec<Cliente>)
    )
)]
pub async fn list_clientes(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let clientes = app_state.cliente_service.listar().await?;
    Ok((StatusCode::OK, Json(clientes)))
}

// PUT /api/clientes/{id}
#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    request_body = AtualizarClienteRequest,
    params(("id" = String, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente atualizado", body = StatusResponse),
        (status = 400, description = "Campo desconhecido ou valor inválido"),
        (status = 404, description = "Empresa não encontrada")
    )
)]
pub async fn update_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload<AtualizarClienteRequest>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cliente_service.atualizar(&id, payload).await?;
    Ok((StatusCode::OK, Json(StatusResponse::new("atualizado"))))
}

// DELETE /api/clientes/{id}
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = String, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Removido (existindo ou não)", body = StatusResponse)
    )
)]
pub async fn delete_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cliente_service.remover(&id).await?;
    Ok((StatusCode::OK, Json(StatusResponse::new("removido"))))
}

// =============================================================================
//  TABLET
// =============================================================================

// GET /api/check-status/{id}
// O tablet usa para confirmar a empresa configurada antes de bater ponto.
#[utoipa::path(
    get,
    path = "/api/check-status/{id}",
    tag = "Tablet",
    params(("id" = String, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Registro completo do cliente", body = Cliente),
        (status = 404, description = "Empresa não encontrada")
    )
)]
pub async fn check_status(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cliente = app_state.cliente_service.buscar(&id).await?;
    Ok((StatusCode::OK, Json(cliente)))
}
