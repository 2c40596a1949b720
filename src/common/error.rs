// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Todos os erros da API saem no formato { "erro": "..." }.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Empresa não encontrada")]
    ClienteNaoEncontrado,

    // JSON malformado, campo desconhecido, tipo errado...
    #[error("Payload inválido: {0}")]
    PayloadInvalido(String),

    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Registro gravado com funcionario_id que não cabe nas 12 posições do AFD
    #[error("Identificador de funcionário inválido para o AFD: {0}")]
    FuncionarioIdInvalido(String),

    #[error("Banco de dados indisponível: {0}")]
    StoreIndisponivel(String),

    // Sem #[from]: a conversão passa por `from_store`, que separa indisponibilidade de falha.
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(sqlx::Error),
}

impl AppError {
    /// Classifica um erro do sqlx: falhas de conexão/pool viram `StoreIndisponivel`,
    /// o resto é `DatabaseError`.
    pub fn from_store(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => AppError::StoreIndisponivel(e.to_string()),
            other => AppError::DatabaseError(other),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ClienteNaoEncontrado => StatusCode::NOT_FOUND,
            AppError::PayloadInvalido(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::FuncionarioIdInvalido(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::StoreIndisponivel(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::from_store(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::ValidationError(errors) => {
                let mut detalhes = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    detalhes.insert(field.to_string(), messages);
                }
                json!({
                    "erro": "Um ou mais campos são inválidos.",
                    "detalhes": detalhes,
                })
            }
            AppError::StoreIndisponivel(ref msg) => {
                tracing::error!("Banco de dados indisponível: {}", msg);
                json!({ "erro": self.to_string() })
            }
            // Os 500 são logados com detalhe, mas o cliente recebe mensagem genérica.
            AppError::DatabaseError(_) => {
                tracing::error!("Erro Interno do Servidor: {:?}", self);
                json!({ "erro": "Ocorreu um erro inesperado." })
            }
            ref e => json!({ "erro": e.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
