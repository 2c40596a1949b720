//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ponto_backend::{
    config::{AppState, Config},
    routes,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração ou o banco falharem, a aplicação não deve iniciar.
    let config = Config::from_env().expect("Configuração inválida.");

    let app_state = AppState::connect(&config)
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    let app = routes::app_router(app_state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", config.bind_addr);
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
