// src/models/ponto.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// Marcador fixo gravado em todo registro aceito
pub const STATUS_REGISTRO_OK: &str = "OK";

// Tamanho do campo de funcionário na linha do AFD
pub const TAMANHO_FUNCIONARIO_ID: usize = 12;

// ---
// RegistroPonto (uma marcação, filha de um Cliente)
// ---
// Imutável depois de gravado.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct RegistroPonto {
    pub id: String,
    pub cliente_id: String,
    pub funcionario_id: String,

    // Horário oficial para fins de Portaria 671: o do servidor, não o do tablet.
    pub data_hora_servidor: DateTime<Utc>,

    // O que o tablet mandou. Sem validação.
    pub timestamp_local: Option<String>,

    #[schema(value_type = Option<Object>)]
    pub geo: Option<Value>,

    pub status: String,
}

#[derive(Debug, Clone)]
pub struct NovoRegistroPonto {
    pub cliente_id: String,
    pub funcionario_id: String,
    pub data_hora_servidor: DateTime<Utc>,
    pub timestamp_local: Option<String>,
    pub geo: Option<Value>,
}

// POST /api/ponto/registrar (enviado pelo tablet)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegistrarPontoRequest {
    #[validate(length(min = 1, message = "O id_cliente é obrigatório."))]
    #[schema(example = "3f1c9a0e5b7d4e2a9c8b1d0e6f4a2b7c")]
    pub id_cliente: String,

    #[validate(
        length(min = 1, max = 12, message = "O id_funcionario deve ter entre 1 e 12 caracteres."),
        custom(function = "validar_funcionario_ascii")
    )]
    #[schema(example = "42")]
    pub id_funcionario: String,

    #[schema(example = "2024-01-01T10:00")]
    pub timestamp_local: Option<String>,

    #[schema(value_type = Option<Object>, example = json!({"lat": -23.55, "lng": -46.63}))]
    pub geo: Option<Value>,
}

// Cada caractere do AFD ocupa um byte; fora do ASCII a largura fixa quebra.
fn validar_funcionario_ascii(funcionario_id: &str) -> Result<(), ValidationError> {
    if funcionario_id.is_ascii() {
        return Ok(());
    }
    let mut erro = ValidationError::new("ascii");
    erro.message = Some("O id_funcionario deve conter apenas caracteres ASCII.".into());
    Err(erro)
}

// GET /api/clientes/{id}/afd
#[derive(Debug, Serialize, ToSchema)]
pub struct ArquivoAfdResponse {
    #[schema(example = "0000000013010120241000000000000042")]
    pub arquivo_afd: String,
}
