use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::dao::registry::RegistryError;

/// Errors produced while answering a request under the UI prefix.
#[derive(Debug, Error)]
pub enum SwaggerError {
    /// Only `GET` is served.
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    /// No route or bundled file matches the path.
    #[error("not found: {0}")]
    NotFound(String),
    /// The registry could not produce a document for the configured instance.
    #[error(transparent)]
    Document(#[from] RegistryError),
    /// A template failed to render.
    #[error("failed to render {template}: {source}")]
    Render {
        /// Name of the template.
        template: &'static str,
        /// Underlying template error.
        #[source]
        source: minijinja::Error,
    },
    /// The registry document could not be re-encoded.
    #[error("failed to encode document: {0}")]
    Encode(String),
    /// The bundled distribution could not be read.
    #[error("failed to load asset {name}: {message}")]
    Asset {
        /// Requested file.
        name: String,
        /// Error reported by the distribution.
        message: String,
    },
}

impl SwaggerError {
    /// Wrap a template failure for `template`.
    pub fn render(template: &'static str, source: minijinja::Error) -> Self {
        SwaggerError::Render { template, source }
    }

    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            SwaggerError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            SwaggerError::NotFound(_) => StatusCode::NOT_FOUND,
            SwaggerError::Document(_)
            | SwaggerError::Render { .. }
            | SwaggerError::Encode(_)
            | SwaggerError::Asset { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for SwaggerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "swagger ui request failed");
        }

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        if matches!(self, SwaggerError::MethodNotAllowed(_)) {
            return (status, [(header::ALLOW, "GET")], payload).into_response();
        }
        (status, payload).into_response()
    }
}
