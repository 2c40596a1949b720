// src/db.rs

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    models::{
        cliente::{AtualizarClienteRequest, Cliente, NovoCliente},
        ponto::{NovoRegistroPonto, RegistroPonto},
    },
};

pub mod cliente_repo;
pub use cliente_repo::PgClienteRepository;
pub mod ponto_repo;
pub use ponto_repo::PgPontoRepository;

#[cfg(test)]
pub mod memory_repo;

/// Acesso à coleção de clientes (empresas).
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    /// Grava um novo cliente; o repositório atribui o `id`.
    async fn criar(&self, novo: NovoCliente) -> Result<Cliente, AppError>;

    /// Todos os clientes, em ordem de cadastro. Sem paginação.
    async fn listar(&self) -> Result<Vec<Cliente>, AppError>;

    async fn buscar(&self, id: &str) -> Result<Option<Cliente>, AppError>;

    /// Aplica só os campos presentes. Retorna `false` se o cliente não existe.
    async fn atualizar(&self, id: &str, alteracoes: &AtualizarClienteRequest) -> Result<bool, AppError>;

    /// Remove o cliente (e suas marcações). Idempotente.
    async fn remover(&self, id: &str) -> Result<(), AppError>;
}

/// Acesso às marcações de ponto de cada cliente.
#[async_trait]
pub trait PontoRepository: Send + Sync {
    /// Grava a marcação. Cliente inexistente => `AppError::ClienteNaoEncontrado`.
    async fn registrar(&self, novo: NovoRegistroPonto) -> Result<RegistroPonto, AppError>;

    /// Marcações do cliente em ordem crescente de `data_hora_servidor`;
    /// empates ficam na ordem de gravação.
    async fn listar_por_cliente(&self, cliente_id: &str) -> Result<Vec<RegistroPonto>, AppError>;
}
