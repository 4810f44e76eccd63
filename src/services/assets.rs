//! Access to the Swagger UI distribution bundled by `utoipa-swagger-ui`.

use std::{borrow::Cow, sync::Arc};

use crate::{error::SwaggerError, services::dispatch::content_type};

/// A static file ready to be written to the response.
#[derive(Debug, Clone)]
pub struct Asset {
    /// File contents.
    pub bytes: Cow<'static, [u8]>,
    /// Announced content type.
    pub content_type: String,
}

/// Handle on the embedded distribution.
#[derive(Clone)]
pub struct Assets {
    // Only consulted by the distribution for its own initializer script, which is never served.
    dist_config: Arc<utoipa_swagger_ui::Config<'static>>,
}

impl Default for Assets {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Assets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assets").finish_non_exhaustive()
    }
}

impl Assets {
    /// Open the embedded distribution.
    pub fn new() -> Self {
        Self {
            dist_config: Arc::new(utoipa_swagger_ui::Config::new(["doc.json"])),
        }
    }

    /// Look up `name` in the distribution.
    ///
    /// Returns `Ok(None)` when the distribution has no such file.
    pub fn load(&self, name: &str) -> Result<Option<Asset>, SwaggerError> {
        let file = utoipa_swagger_ui::serve(name, Arc::clone(&self.dist_config)).map_err(|err| {
            SwaggerError::Asset {
                name: name.to_owned(),
                message: err.to_string(),
            }
        })?;

        Ok(file.map(|file| Asset {
            bytes: file.bytes,
            content_type: content_type(name)
                .map(str::to_owned)
                .unwrap_or(file.content_type),
        }))
    }
}
