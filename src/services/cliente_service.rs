// src/services/cliente_service.rs

use std::sync::Arc;

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::ClienteRepository,
    models::cliente::{AtualizarClienteRequest, Cliente, CriarClienteRequest, NovoCliente, StatusCliente},
};

#[derive(Clone)]
pub struct ClienteService {
    repo: Arc<dyn ClienteRepository>,
}

impl ClienteService {
    pub fn new(repo: Arc<dyn ClienteRepository>) -> Self {
        Self { repo }
    }

    // Todo cliente nasce ativo, com data de cadastro do servidor.
    pub async fn criar(&self, payload: CriarClienteRequest) -> Result<Cliente, AppError> {
        let novo = NovoCliente {
            nome_fantasia: payload.nome,
            cnpj: payload.cnpj,
            plano: payload.plano.unwrap_or_default(),
            status: StatusCliente::Ativo,
            data_cadastro: Utc::now(),
        };

        let cliente = self.repo.criar(novo).await?;
        tracing::info!(cliente_id = %cliente.id, plano = ?cliente.plano, "Cliente cadastrado");
        Ok(cliente)
    }

    pub async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        self.repo.listar().await
    }

    pub async fn buscar(&self, id: &str) -> Result<Cliente, AppError> {
        self.repo
            .buscar(id)
            .await?
            .ok_or(AppError::ClienteNaoEncontrado)
    }

    pub async fn atualizar(&self, id: &str, alteracoes: AtualizarClienteRequest) -> Result<(), AppError> {
        // Payload vazio não grava nada, mas ainda responde 404 para id inexistente
        if alteracoes.is_empty() {
            return self.buscar(id).await.map(|_| ());
        }

        if !self.repo.atualizar(id, &alteracoes).await? {
            return Err(AppError::ClienteNaoEncontrado);
        }
        tracing::info!(cliente_id = %id, "Cliente atualizado");
        Ok(())
    }

    pub async fn remover(&self, id: &str) -> Result<(), AppError> {
        self.repo.remover(id).await?;
        tracing::info!(cliente_id = %id, "Cliente removido");
        Ok(())
    }
}
