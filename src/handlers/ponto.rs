// src/handlers/ponto.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{error::AppError, extract::JsonPayload},
    config::AppState,
    models::{cliente::StatusResponse, ponto::RegistrarPontoRequest},
};

// POST /api/ponto/registrar
#[utoipa::path(
    post,
    path = "/api/ponto/registrar",
    tag = "Tablet",
    request_body = RegistrarPontoRequest,
    responses(
        (status = 201, description = "Ponto registrado", body = StatusResponse),
        (status = 400, description = "Payload malformado ou id_funcionario inválido"),
        (status = 404, description = "Empresa não encontrada"),
        (status = 503, description = "Banco de dados indisponível")
    )
)]
pub async fn registrar_ponto(
    State(app_state): State<AppState>,
    JsonPayload(payload): JsonPayload<RegistrarPontoRequest>,
) -> Result<impl IntoResponse, AppError> {
    app_state.ponto_service.registrar(payload).await?;
    Ok((StatusCode::CREATED, Json(StatusResponse::new("Ponto registrado"))))
}
