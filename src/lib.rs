//! Axum middleware serving Swagger UI, its bootstrap script and registry-backed API documents.

pub mod config;
pub mod dao;
mod error;
pub mod routes;
pub mod services;
pub mod state;

pub use config::{Config, DEFAULT_INSTANCE_NAME, Layout, ModelsExpandDepth, ServerConfig};
pub use dao::registry::{
    DocumentFile, DocumentRegistry, MemoryRegistry, RegistryError, RegistryResult, Swagger,
};
pub use error::SwaggerError;
pub use routes::SwaggerUi;
