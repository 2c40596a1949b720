// src/handlers/afd.rs

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{common::error::AppError, config::AppState, models::ponto::ArquivoAfdResponse};

// GET /api/clientes/{id}/afd
#[utoipa::path(
    get,
    path = "/api/clientes/{id}/afd",
    tag = "Relatórios",
    params(("id" = String, Path, description = "ID da farmácia")),
    responses(
        (status = 200, description = "Linhas do AFD unidas por \\n", body = ArquivoAfdResponse),
        (status = 422, description = "Registro com id de funcionário acima de 12 caracteres")
    )
)]
pub async fn gerar_afd(
    State(app_state): State<AppState>,
    Path(id_farmacia): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let arquivo_afd = app_state.afd_service.gerar(&id_farmacia).await?;
    Ok((StatusCode::OK, Json(ArquivoAfdResponse { arquivo_afd })))
}

// GET /api/clientes/{id}/afd/arquivo
#[utoipa::path(
    get,
    path = "/api/clientes/{id}/afd/arquivo",
    tag = "Relatórios",
    params(("id" = String, Path, description = "ID da farmácia")),
    responses(
        (status = 200, description = "AFD como arquivo texto para download", body = String, content_type = "text/plain")
    )
)]
pub async fn baixar_afd(
    State(app_state): State<AppState>,
    Path(id_farmacia): Path<String>,
) -> Result<Response, AppError> {
    let arquivo_afd = app_state.afd_service.gerar(&id_farmacia).await?;

    // Configura os Headers para o navegador baixar o arquivo
    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"AFD_{}.txt\"", nome_seguro(&id_farmacia)),
        ),
    ];

    Ok((headers, arquivo_afd).into_response())
}

// Só alfanuméricos, '-' e '_' no nome do arquivo
fn nome_seguro(id: &str) -> String {
    id.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::nome_seguro;

    #[test]
    fn nome_do_arquivo_descarta_caracteres_perigosos() {
        assert_eq!(nome_seguro("abc\"; rm -rf"), "abcrm-rf");
        assert_eq!(nome_seguro("3f1c9a0e"), "3f1c9a0e");
    }
}
