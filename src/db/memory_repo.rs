// src/db/memory_repo.rs
//
// Repositório em memória para os testes de rota, sem Postgres.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ClienteRepository, PontoRepository},
    models::{
        cliente::{AtualizarClienteRequest, Cliente, NovoCliente},
        ponto::{NovoRegistroPonto, RegistroPonto, STATUS_REGISTRO_OK},
    },
};

#[derive(Default)]
struct Dados {
    clientes: Vec<Cliente>,
    // Vec em ordem de gravação; a ordenação estável preserva isso nos empates
    registros: Vec<RegistroPonto>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    dados: Arc<Mutex<Dados>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_registros(&self) -> usize {
        self.dados.lock().unwrap().registros.len()
    }
}

#[async_trait]
impl ClienteRepository for MemoryStore {
    async fn criar(&self, novo: NovoCliente) -> Result<Cliente, AppError> {
        let cliente = Cliente {
            id: Uuid::new_v4().simple().to_string(),
            nome_fantasia: novo.nome_fantasia,
            cnpj: novo.cnpj,
            plano: novo.plano,
            status: novo.status,
            data_cadastro: novo.data_cadastro,
        };
        self.dados.lock().unwrap().clientes.push(cliente.clone());
        Ok(cliente)
    }

    async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        let mut clientes = self.dados.lock().unwrap().clientes.clone();
        clientes.sort_by_key(|c| c.data_cadastro);
        Ok(clientes)
    }

    async fn buscar(&self, id: &str) -> Result<Option<Cliente>, AppError> {
        let dados = self.dados.lock().unwrap();
        Ok(dados.clientes.iter().find(|c| c.id == id).cloned())
    }

    async fn atualizar(&self, id: &str, alteracoes: &AtualizarClienteRequest) -> Result<bool, AppError> {
        let mut dados = self.dados.lock().unwrap();
        let Some(cliente) = dados.clientes.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };

        if let Some(nome) = &alteracoes.nome_fantasia {
            cliente.nome_fantasia = Some(nome.clone());
        }
        if let Some(cnpj) = &alteracoes.cnpj {
            cliente.cnpj = Some(cnpj.clone());
        }
        if let Some(plano) = alteracoes.plano {
            cliente.plano = plano;
        }
        if let Some(status) = alteracoes.status {
            cliente.status = status;
        }
        Ok(true)
    }

    async fn remover(&self, id: &str) -> Result<(), AppError> {
        let mut dados = self.dados.lock().unwrap();
        dados.clientes.retain(|c| c.id != id);
        dados.registros.retain(|r| r.cliente_id != id);
        Ok(())
    }
}

#[async_trait]
impl PontoRepository for MemoryStore {
    async fn registrar(&self, novo: NovoRegistroPonto) -> Result<RegistroPonto, AppError> {
        let mut dados = self.dados.lock().unwrap();
        if !dados.clientes.iter().any(|c| c.id == novo.cliente_id) {
            return Err(AppError::ClienteNaoEncontrado);
        }

        let registro = RegistroPonto {
            id: Uuid::new_v4().simple().to_string(),
            cliente_id: novo.cliente_id,
            funcionario_id: novo.funcionario_id,
            data_hora_servidor: novo.data_hora_servidor,
            timestamp_local: novo.timestamp_local,
            geo: novo.geo,
            status: STATUS_REGISTRO_OK.to_string(),
        };
        dados.registros.push(registro.clone());
        Ok(registro)
    }

    async fn listar_por_cliente(&self, cliente_id: &str) -> Result<Vec<RegistroPonto>, AppError> {
        let dados = self.dados.lock().unwrap();
        let mut registros: Vec<RegistroPonto> = dados
            .registros
            .iter()
            .filter(|r| r.cliente_id == cliente_id)
            .cloned()
            .collect();
        registros.sort_by_key(|r| r.data_hora_servidor);
        Ok(registros)
    }
}

/// Repositório que sempre falha como um banco fora do ar.
#[derive(Clone, Default)]
pub struct StoreForaDoAr;

#[async_trait]
impl ClienteRepository for StoreForaDoAr {
    async fn criar(&self, _novo: NovoCliente) -> Result<Cliente, AppError> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }

    async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }

    async fn buscar(&self, _id: &str) -> Result<Option<Cliente>, AppError> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }

    async fn atualizar(&self, _id: &str, _alteracoes: &AtualizarClienteRequest) -> Result<bool, AppError> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }

    async fn remover(&self, _id: &str) -> Result<(), AppError> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }
}

#[async_trait]
impl PontoRepository for StoreForaDoAr {
    async fn registrar(&self, _novo: NovoRegistroPonto) -> Result<RegistroPonto, AppError> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }

    async fn listar_por_cliente(&self, _cliente_id: &str) -> Result<Vec<RegistroPonto>, AppError> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }
}
