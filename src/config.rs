// src/config.rs

use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use sqlx::postgres::PgPoolOptions;

use crate::{
    db::{ClienteRepository, PgClienteRepository, PgPontoRepository, PontoRepository},
    services::{AfdService, ClienteService, PontoService},
};

const PADRAO_BIND_ADDR: &str = "0.0.0.0:3000";
const PADRAO_MAX_CONNECTIONS: u32 = 5;
const PADRAO_ACQUIRE_TIMEOUT_SECS: u64 = 3;
const PADRAO_AFD_TIMEZONE: &str = "America/Sao_Paulo";

// Configuração lida do ambiente (.env incluso)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub afd_timezone: Tz,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|chave| env::var(chave).ok())
    }

    // Separado de `from_env` para os testes não dependerem do ambiente do processo
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(valor) => valor
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS inválido: {valor}"))?,
            None => PADRAO_MAX_CONNECTIONS,
        };

        let acquire_timeout = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(valor) => Duration::from_secs(
                valor
                    .parse()
                    .with_context(|| format!("DATABASE_ACQUIRE_TIMEOUT_SECS inválido: {valor}"))?,
            ),
            None => Duration::from_secs(PADRAO_ACQUIRE_TIMEOUT_SECS),
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| PADRAO_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR inválido: {bind_addr}"))?;

        let afd_timezone = lookup("AFD_TIMEZONE")
            .unwrap_or_else(|| PADRAO_AFD_TIMEZONE.to_string());
        let afd_timezone = afd_timezone
            .parse::<Tz>()
            .map_err(|e| anyhow!("AFD_TIMEZONE inválido ({afd_timezone}): {e}"))?;

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout,
            bind_addr,
            afd_timezone,
        })
    }
}

// O estado compartilhado que será acessível em toda a aplicação.
// Montado uma vez no main e clonado para cada handler.
#[derive(Clone)]
pub struct AppState {
    pub cliente_service: ClienteService,
    pub ponto_service: PontoService,
    pub afd_service: AfdService,
}

impl AppState {
    /// Conecta ao Postgres, roda as migrações e monta o gráfico de dependências.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        sqlx::migrate!()
            .run(&db_pool)
            .await
            .context("Falha ao rodar as migrações do banco de dados")?;

        tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

        let clientes: Arc<dyn ClienteRepository> = Arc::new(PgClienteRepository::new(db_pool.clone()));
        let pontos: Arc<dyn PontoRepository> = Arc::new(PgPontoRepository::new(db_pool));

        Ok(Self::from_repositories(clientes, pontos, config.afd_timezone))
    }

    pub fn from_repositories(
        clientes: Arc<dyn ClienteRepository>,
        pontos: Arc<dyn PontoRepository>,
        afd_timezone: Tz,
    ) -> Self {
        Self {
            cliente_service: ClienteService::new(clientes.clone()),
            ponto_service: PontoService::new(clientes, pontos.clone()),
            afd_service: AfdService::new(pontos, afd_timezone),
        }
    }
}
