// src/services/afd_service.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{
    common::error::AppError,
    db::PontoRepository,
    models::ponto::{RegistroPonto, TAMANHO_FUNCIONARIO_ID},
};

/// Prefixo fixo de 10 posições (NSR + tipo de registro) de cada linha.
pub const PREFIXO_LINHA_AFD: &str = "0000000013";

/// Data e hora da marcação: DDMMAAAAHHMM, 24h, sem separadores.
pub const FORMATO_DATA_HORA_AFD: &str = "%d%m%Y%H%M";

/// Gera o Arquivo Fonte de Dados (Portaria 671) de um cliente.
#[derive(Clone)]
pub struct AfdService {
    pontos: Arc<dyn PontoRepository>,
    fuso: Tz,
}

impl AfdService {
    pub fn new(pontos: Arc<dyn PontoRepository>, fuso: Tz) -> Self {
        Self { pontos, fuso }
    }

    /// Uma linha por marcação, em ordem de horário do servidor, unidas por `\n`
    /// (sem quebra no final). Cliente sem marcações gera texto vazio.
    pub async fn gerar(&self, cliente_id: &str) -> Result<String, AppError> {
        let registros = self.pontos.listar_por_cliente(cliente_id).await?;

        let linhas = registros
            .iter()
            .map(|r| formatar_registro(r, self.fuso))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(cliente_id = %cliente_id, linhas = linhas.len(), "AFD gerado");
        Ok(linhas.join("\n"))
    }
}

pub fn formatar_registro(registro: &RegistroPonto, fuso: Tz) -> Result<String, AppError> {
    formatar_linha(&registro.data_hora_servidor, &registro.funcionario_id, fuso)
}

/// Monta a linha de largura fixa:
/// prefixo (10) + data/hora no fuso do relatório (12) + funcionário com zeros à esquerda (12).
///
/// Identificador com mais de 12 bytes ou fora do ASCII é recusado: truncar
/// perderia o funcionário e deixá-lo passar quebraria o alinhamento do arquivo.
pub fn formatar_linha(data_hora: &DateTime<Utc>, funcionario_id: &str, fuso: Tz) -> Result<String, AppError> {
    if !funcionario_id.is_ascii() || funcionario_id.len() > TAMANHO_FUNCIONARIO_ID {
        return Err(AppError::FuncionarioIdInvalido(funcionario_id.to_string()));
    }

    let data_hora = data_hora.with_timezone(&fuso).format(FORMATO_DATA_HORA_AFD);

    Ok(format!(
        "{PREFIXO_LINHA_AFD}{data_hora}{funcionario_id:0>width$}",
        width = TAMANHO_FUNCIONARIO_ID
    ))
}
