// src/models/cliente.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- ENUMS ---

// Mapeia o CREATE TYPE plano_assinatura do banco
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "plano_assinatura", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Plano {
    #[default]
    Basico,
    Profissional,
    Empresarial,
}

// Mapeia o CREATE TYPE status_cliente do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_cliente", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StatusCliente {
    Ativo,
    Inativo,
}

// --- CLIENTE (A Empresa / Farmácia) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cliente {
    #[schema(example = "3f1c9a0e5b7d4e2a9c8b1d0e6f4a2b7c")]
    pub id: String,

    #[schema(example = "Farmacia X")]
    pub nome_fantasia: Option<String>,

    #[schema(example = "12.345.678/0001-99")]
    pub cnpj: Option<String>,

    pub plano: Plano,
    pub status: StatusCliente,
    pub data_cadastro: DateTime<Utc>,
}

// O que o serviço entrega ao repositório para gravar. O `id` é do repositório.
#[derive(Debug, Clone)]
pub struct NovoCliente {
    pub nome_fantasia: Option<String>,
    pub cnpj: Option<String>,
    pub plano: Plano,
    pub status: StatusCliente,
    pub data_cadastro: DateTime<Utc>,
}

// ---
// Payloads
// ---

// POST /api/clientes. Nenhum campo é obrigatório: o que faltar fica NULL.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CriarClienteRequest {
    #[schema(example = "Farmacia X")]
    pub nome: Option<String>,

    #[schema(example = "123")]
    pub cnpj: Option<String>,

    // Ausente ou null => basico
    pub plano: Option<Plano>,
}

// PUT /api/clientes/{id}. Só os campos enumerados aqui podem ser alterados;
// qualquer outro campo no JSON derruba a requisição com 400.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AtualizarClienteRequest {
    #[serde(alias = "nome")]
    #[schema(example = "Farmacia X - Centro")]
    pub nome_fantasia: Option<String>,

    pub cnpj: Option<String>,
    pub plano: Option<Plano>,
    pub status: Option<StatusCliente>,
}

impl AtualizarClienteRequest {
    pub fn is_empty(&self) -> bool {
        self.nome_fantasia.is_none()
            && self.cnpj.is_none()
            && self.plano.is_none()
            && self.status.is_none()
    }
}

// ---
// Respostas
// ---

#[derive(Debug, Serialize, ToSchema)]
pub struct ClienteCriadoResponse {
    pub id: String,
    #[schema(example = "Sucesso")]
    pub mensagem: String,
}

// {"status": "atualizado"}, {"status": "removido"}, {"status": "Ponto registrado"}
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: &str) -> Self {
        Self { status: status.to_string() }
    }
}
