// src/db/ponto_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::PontoRepository,
    models::ponto::{NovoRegistroPonto, RegistroPonto, STATUS_REGISTRO_OK},
};

#[derive(Clone)]
pub struct PgPontoRepository {
    pool: PgPool,
}

impl PgPontoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PontoRepository for PgPontoRepository {
    async fn registrar(&self, novo: NovoRegistroPonto) -> Result<RegistroPonto, AppError> {
        let id = Uuid::new_v4().simple().to_string();

        sqlx::query_as::<_, RegistroPonto>(
            r#"
            INSERT INTO registros_ponto (
                id, cliente_id, funcionario_id, data_hora_servidor, timestamp_local, geo, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, cliente_id, funcionario_id, data_hora_servidor, timestamp_local, geo, status
            "#,
        )
        .bind(&id)
        .bind(&novo.cliente_id)
        .bind(&novo.funcionario_id)
        .bind(novo.data_hora_servidor)
        .bind(&novo.timestamp_local)
        .bind(&novo.geo)
        .bind(STATUS_REGISTRO_OK)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Cliente removido entre a checagem e o INSERT
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return AppError::ClienteNaoEncontrado;
                }
            }
            AppError::from_store(e)
        })
    }

    async fn listar_por_cliente(&self, cliente_id: &str) -> Result<Vec<RegistroPonto>, AppError> {
        let registros = sqlx::query_as::<_, RegistroPonto>(
            r#"
            SELECT id, cliente_id, funcionario_id, data_hora_servidor, timestamp_local, geo, status
            FROM registros_ponto
            WHERE cliente_id = $1
            ORDER BY data_hora_servidor ASC, seq ASC
            "#,
        )
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registros)
    }
}
