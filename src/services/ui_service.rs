//! Produces the payload for a resolved [`Route`].

use std::borrow::Cow;

use tracing::debug;

use crate::{
    error::SwaggerError,
    services::dispatch::{DocumentFormat, Route, content_type},
    state::UiState,
};

/// Outcome of a request the UI answers itself.
#[derive(Debug)]
pub enum Reply {
    /// `301 Moved Permanently` to the location.
    Redirect(String),
    /// `200 OK` with a body.
    Content {
        /// Value of the `Content-Type` header.
        content_type: Cow<'static, str>,
        /// Response body.
        body: Cow<'static, [u8]>,
    },
}

impl Reply {
    fn text(name: &str, body: String) -> Self {
        Reply::Content {
            content_type: Cow::Borrowed(content_type(name).unwrap_or("text/plain; charset=utf-8")),
            body: Cow::Owned(body.into_bytes()),
        }
    }
}

/// Answer `route` from the state's templates, registry and assets.
pub fn respond(state: &UiState, path: &str, route: Route) -> Result<Reply, SwaggerError> {
    match route {
        Route::Redirect(location) => {
            debug!(%path, %location, "redirecting to index");
            Ok(Reply::Redirect(location))
        }
        Route::Index => state
            .templates()
            .index_html(state.config())
            .map(|body| Reply::text("index.html", body))
            .map_err(|err| SwaggerError::render("index.html", err)),
        Route::IndexScript => state
            .templates()
            .index_js(state.config())
            .map(|body| Reply::text("index.js", body))
            .map_err(|err| SwaggerError::render("index.js", err)),
        Route::Document(format) => read_document(state, format),
        Route::Asset(name) => {
            let asset = state
                .assets()
                .load(name)?
                .ok_or_else(|| SwaggerError::NotFound(path.to_owned()))?;
            Ok(Reply::Content {
                content_type: Cow::Owned(asset.content_type),
                body: asset.bytes,
            })
        }
        Route::NotFound => Err(SwaggerError::NotFound(path.to_owned())),
    }
}

fn read_document(state: &UiState, format: DocumentFormat) -> Result<Reply, SwaggerError> {
    let instance = state.config().effective_instance_name();
    let doc = state.registry().read_doc(instance)?;
    debug!(%instance, ?format, bytes = doc.len(), "serving registry document");

    match format {
        DocumentFormat::Json => Ok(Reply::text("doc.json", doc)),
        DocumentFormat::Yaml => to_yaml(&doc).map(|yaml| Reply::text("doc.yaml", yaml)),
    }
}

/// Re-encode a JSON document as YAML.
pub fn to_yaml(doc: &str) -> Result<String, SwaggerError> {
    let value: serde_json::Value =
        serde_json::from_str(doc).map_err(|err| SwaggerError::Encode(err.to_string()))?;
    serde_yaml::to_string(&value).map_err(|err| SwaggerError::Encode(err.to_string()))
}
