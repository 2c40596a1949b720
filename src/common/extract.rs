// src/common/extract.rs

use axum::{
    extract::{FromRequest, Request, rejection::JsonRejection},
    Json,
};

use crate::common::error::AppError;

// Igual ao `Json` do axum, mas a rejeição sai como AppError::PayloadInvalido
// (400 com { "erro": ... }) em vez do texto puro padrão.
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::PayloadInvalido(rejection.body_text()))?;

        Ok(JsonPayload(value))
    }
}
