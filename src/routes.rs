// src/routes.rs

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::AppState, docs, handlers};

pub fn app_router(app_state: AppState) -> Router {
    // Gestão (painel)
    let cliente_routes = Router::new()
        .route("/api/clientes"
               ,post(handlers::clientes::create_cliente)
               .get(handlers::clientes::list_clientes)
        )
        .route("/api/clientes/{id}"
               ,put(handlers::clientes::update_cliente)
               .delete(handlers::clientes::delete_cliente)
        )
        .route("/api/clientes/{id}/afd", get(handlers::afd::gerar_afd))
        .route("/api/clientes/{id}/afd/arquivo", get(handlers::afd::baixar_afd));

    // Tablet
    let tablet_routes = Router::new()
        .route("/api/check-status/{id}", get(handlers::clientes::check_status))
        .route("/api/ponto/registrar", post(handlers::ponto::registrar_ponto));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(cliente_routes)
        .merge(tablet_routes)
        .with_state(app_state)
        // Painel e tablet são servidos de outra origem
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
