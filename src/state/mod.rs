use std::sync::Arc;

use crate::{
    config::Config,
    dao::registry::DocumentRegistry,
    error::SwaggerError,
    services::{assets::Assets, dispatch::normalize_prefix, render::Templates},
};

/// Shared handle on a mounted UI.
pub type SharedState = Arc<UiState>;

/// Everything a mounted UI needs to answer requests.
pub struct UiState {
    prefix: String,
    config: Config,
    registry: Arc<dyn DocumentRegistry>,
    templates: Templates,
    assets: Assets,
}

impl UiState {
    /// Construct the state for a UI mounted under `prefix`, wrapped in an [`Arc`].
    ///
    /// Fails when the built-in templates do not compile.
    pub fn new(
        prefix: &str,
        config: Config,
        registry: Arc<dyn DocumentRegistry>,
    ) -> Result<SharedState, SwaggerError> {
        Ok(Arc::new(Self {
            prefix: normalize_prefix(prefix),
            config,
            registry,
            templates: Templates::new()?,
            assets: Assets::new(),
        }))
    }

    /// Normalised mount prefix, always ending in `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Rendering options.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registry documents are read from.
    pub fn registry(&self) -> &dyn DocumentRegistry {
        self.registry.as_ref()
    }

    /// Compiled templates.
    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Embedded distribution.
    pub fn assets(&self) -> &Assets {
        &self.assets
    }
}
