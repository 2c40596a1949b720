// src/db/cliente_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ClienteRepository,
    models::cliente::{AtualizarClienteRequest, Cliente, NovoCliente},
};

// O repositório de clientes, responsável por todas as interações com a tabela 'clientes'
#[derive(Clone)]
pub struct PgClienteRepository {
    pool: PgPool,
}

impl PgClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClienteRepository for PgClienteRepository {
    async fn criar(&self, novo: NovoCliente) -> Result<Cliente, AppError> {
        // ID opaco gerado aqui, como o document id de um banco de documentos
        let id = Uuid::new_v4().simple().to_string();

        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (id, nome_fantasia, cnpj, plano, status, data_cadastro)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, nome_fantasia, cnpj, plano, status, data_cadastro
            "#,
        )
        .bind(&id)
        .bind(&novo.nome_fantasia)
        .bind(&novo.cnpj)
        .bind(novo.plano)
        .bind(novo.status)
        .bind(novo.data_cadastro)
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            r#"
            SELECT id, nome_fantasia, cnpj, plano, status, data_cadastro
            FROM clientes
            ORDER BY data_cadastro ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    async fn buscar(&self, id: &str) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            "SELECT id, nome_fantasia, cnpj, plano, status, data_cadastro FROM clientes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    async fn atualizar(&self, id: &str, alteracoes: &AtualizarClienteRequest) -> Result<bool, AppError> {
        // COALESCE: campo ausente no payload mantém o valor gravado
        let result = sqlx::query(
            r#"
            UPDATE clientes
            SET nome_fantasia = COALESCE($2, nome_fantasia),
                cnpj          = COALESCE($3, cnpj),
                plano         = COALESCE($4, plano),
                status        = COALESCE($5, status)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&alteracoes.nome_fantasia)
        .bind(&alteracoes.cnpj)
        .bind(alteracoes.plano)
        .bind(alteracoes.status)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn remover(&self, id: &str) -> Result<(), AppError> {
        // ON DELETE CASCADE leva junto os registros_ponto
        sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
