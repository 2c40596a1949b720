// src/services/ponto_service.rs

use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::{ClienteRepository, PontoRepository},
    models::ponto::{NovoRegistroPonto, RegistrarPontoRequest, RegistroPonto},
};

#[derive(Clone)]
pub struct PontoService {
    clientes: Arc<dyn ClienteRepository>,
    pontos: Arc<dyn PontoRepository>,
}

impl PontoService {
    pub fn new(clientes: Arc<dyn ClienteRepository>, pontos: Arc<dyn PontoRepository>) -> Self {
        Self { clientes, pontos }
    }

    pub async fn registrar(&self, payload: RegistrarPontoRequest) -> Result<RegistroPonto, AppError> {
        payload.validate()?;

        // Não cria "namespace" implícito: a empresa precisa existir
        if self.clientes.buscar(&payload.id_cliente).await?.is_none() {
            tracing::warn!(cliente_id = %payload.id_cliente, "Marcação recusada: empresa inexistente");
            return Err(AppError::ClienteNaoEncontrado);
        }

        let novo = NovoRegistroPonto {
            cliente_id: payload.id_cliente,
            funcionario_id: payload.id_funcionario,
            // Carimbo do momento do processamento
            data_hora_servidor: Utc::now(),
            timestamp_local: payload.timestamp_local,
            geo: payload.geo,
        };

        let registro = self.pontos.registrar(novo).await?;
        tracing::info!(
            cliente_id = %registro.cliente_id,
            funcionario_id = %registro.funcionario_id,
            "Ponto registrado"
        );
        Ok(registro)
    }
}
