// src/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Clientes ---
        handlers::clientes::create_cliente,
        handlers::clientes::list_clientes,
        handlers::clientes::update_cliente,
        handlers::clientes::delete_cliente,

        // --- Tablet ---
        handlers::clientes::check_status,
        handlers::ponto::registrar_ponto,

        // --- Relatórios ---
        handlers::afd::gerar_afd,
        handlers::afd::baixar_afd,
    ),
    components(
        schemas(
            // --- Clientes ---
            models::cliente::Plano,
            models::cliente::StatusCliente,
            models::cliente::Cliente,
            models::cliente::CriarClienteRequest,
            models::cliente::AtualizarClienteRequest,
            models::cliente::ClienteCriadoResponse,
            models::cliente::StatusResponse,

            // --- Ponto ---
            models::ponto::RegistroPonto,
            models::ponto::RegistrarPontoRequest,
            models::ponto::ArquivoAfdResponse,
        )
    ),
    tags(
        (name = "Clientes", description = "Gestão das empresas assinantes"),
        (name = "Tablet", description = "Rotas usadas pelo tablet de marcação"),
        (name = "Relatórios", description = "AFD (Portaria 671)")
    )
)]
pub struct ApiDoc;

// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
