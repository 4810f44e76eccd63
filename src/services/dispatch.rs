//! Maps request paths under the UI prefix onto the handful of things the UI serves.

/// Static files of the Swagger UI distribution served as-is.
pub const ASSETS: &[&str] = &[
    "swagger-ui.css",
    "swagger-ui-bundle.js",
    "swagger-ui-standalone-preset.js",
    "favicon-16x16.png",
    "favicon-32x32.png",
    "oauth2-redirect.html",
    "oauth2-redirect.js",
];

/// Encoding the registry document is served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// The document as registered.
    Json,
    /// The document re-encoded as YAML.
    Yaml,
}

/// What a request under the prefix resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Permanent redirect to the given location.
    Redirect(String),
    /// Rendered HTML shell.
    Index,
    /// Rendered bootstrap script.
    IndexScript,
    /// Registry document.
    Document(DocumentFormat),
    /// Bundled static file.
    Asset(&'static str),
    /// Nothing by that name.
    NotFound,
}

/// Normalise a mount prefix to the `/segment/` form used for matching.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    }
}

/// Resolve `path` against a normalised `prefix`.
///
/// Returns `None` when the path lies outside the prefix. Only the trailing path
/// segment decides the route, so `/swagger/v1/index.html` is still the index page.
pub fn resolve(prefix: &str, path: &str) -> Option<Route> {
    if path == prefix.trim_end_matches('/') {
        return Some(Route::Redirect(format!("{prefix}index.html")));
    }

    let rest = path.strip_prefix(prefix)?;
    let segment = rest.rsplit_once('/').map_or(rest, |(_, last)| last);

    let route = match segment {
        "" => Route::Redirect(format!("{path}index.html")),
        "index.html" => Route::Index,
        "index.js" => Route::IndexScript,
        "doc.json" => Route::Document(DocumentFormat::Json),
        "doc.yaml" => Route::Document(DocumentFormat::Yaml),
        name => ASSETS
            .iter()
            .copied()
            .find(|asset| *asset == name)
            .map_or(Route::NotFound, Route::Asset),
    };
    Some(route)
}

/// Content type announced for a served file, keyed by extension.
pub fn content_type(name: &str) -> Option<&'static str> {
    let (_, extension) = name.rsplit_once('.')?;
    match extension {
        "html" => Some("text/html; charset=utf-8"),
        "css" => Some("text/css; charset=utf-8"),
        "js" => Some("application/javascript"),
        "png" => Some("image/png"),
        "json" => Some("application/json; charset=utf-8"),
        "yaml" => Some("application/yaml; charset=utf-8"),
        _ => None,
    }
}
