//! Request handlers shared by the middleware and the stand-alone router.

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{
    error::SwaggerError,
    services::{
        dispatch::{Route, resolve},
        ui_service::{self, Reply},
    },
    state::{SharedState, UiState},
};

/// Middleware answering requests under the UI prefix and passing everything else on.
pub async fn intercept(State(state): State<SharedState>, req: Request, next: Next) -> Response {
    match resolve(state.prefix(), req.uri().path()) {
        Some(route) => answer(&state, req.method(), req.uri().path(), route),
        None => next.run(req).await,
    }
}

/// Handler for the stand-alone UI router.
pub async fn serve(State(state): State<SharedState>, method: Method, uri: Uri) -> Response {
    let path = uri.path();
    let route = resolve(state.prefix(), path).unwrap_or(Route::NotFound);
    answer(&state, &method, path, route)
}

/// Only `GET` is served: `HEAD` and every other method answer `405` with `Allow: GET`.
fn answer(state: &UiState, method: &Method, path: &str, route: Route) -> Response {
    if method != Method::GET {
        debug!(%method, %path, "rejecting non-GET swagger ui request");
        return SwaggerError::MethodNotAllowed(method.to_string()).into_response();
    }

    match ui_service::respond(state, path, route) {
        Ok(Reply::Redirect(location)) => {
            (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
        }
        Ok(Reply::Content { content_type, body }) => {
            ([(header::CONTENT_TYPE, content_type.into_owned())], body).into_response()
        }
        Err(err) => err.into_response(),
    }
}
