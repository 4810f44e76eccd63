//! Mounting the UI into a host axum application.

use std::sync::Arc;

use axum::{Router, middleware, routing::any};

use crate::{
    config::Config,
    dao::registry::DocumentRegistry,
    error::SwaggerError,
    state::{SharedState, UiState},
};

pub mod swagger;

/// A Swagger UI mounted under a URL prefix.
///
/// ```no_run
/// use axum::{Router, routing::get};
/// use swagger_ui_middleware::{Config, MemoryRegistry, SwaggerUi};
///
/// # fn main() -> Result<(), swagger_ui_middleware::SwaggerError> {
/// let registry = MemoryRegistry::new();
/// registry.register("swagger", r#"{"openapi":"3.1.0"}"#);
///
/// let app: Router = SwaggerUi::new("/swagger", registry)
///     .config(Config::default().deep_linking(false))
///     .wrap(Router::new().route("/healthcheck", get(|| async { "ok" })))?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SwaggerUi {
    prefix: String,
    config: Config,
    registry: Arc<dyn DocumentRegistry>,
}

impl SwaggerUi {
    /// Serve documents from `registry` under `prefix`, with default options.
    pub fn new(prefix: impl Into<String>, registry: impl DocumentRegistry + 'static) -> Self {
        Self::with_registry(prefix, Arc::new(registry))
    }

    /// Like [`SwaggerUi::new`] for an already shared registry.
    pub fn with_registry(prefix: impl Into<String>, registry: Arc<dyn DocumentRegistry>) -> Self {
        Self {
            prefix: prefix.into(),
            config: Config::default(),
            registry,
        }
    }

    /// Replace the rendering options.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build the shared state the handlers run on.
    pub fn into_state(self) -> Result<SharedState, SwaggerError> {
        UiState::new(&self.prefix, self.config, self.registry)
    }

    /// Wrap `router` so requests under the prefix are answered by the UI.
    ///
    /// Only routes and fallback already present on `router` are wrapped.
    pub fn wrap<S>(self, router: Router<S>) -> Result<Router<S>, SwaggerError>
    where
        S: Clone + Send + Sync + 'static,
    {
        Ok(router.layer(middleware::from_fn_with_state(
            self.into_state()?,
            swagger::intercept,
        )))
    }

    /// Stand-alone router serving only the UI, ready to be merged into a host router.
    pub fn router<S>(self) -> Result<Router<S>, SwaggerError>
    where
        S: Clone + Send + Sync + 'static,
    {
        let state = self.into_state()?;
        let prefix = state.prefix().to_owned();
        let bare = prefix.trim_end_matches('/');

        let mut router = Router::new()
            .route(&prefix, any(swagger::serve))
            .route(&format!("{prefix}{{*file}}"), any(swagger::serve));
        if !bare.is_empty() {
            router = router.route(bare, any(swagger::serve));
        }
        Ok(router.with_state(state))
    }
}

impl std::fmt::Debug for SwaggerUi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwaggerUi")
            .field("prefix", &self.prefix)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
