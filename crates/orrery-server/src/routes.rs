//! Request routing, independent of the HTTP transport.

use percent_encoding::percent_decode_str;
use tiny_http::Method;

/// A resolved request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET` or `HEAD /planets/{name}` with the name percent-decoded.
    Planet(String),
    /// `GET /health`.
    Health,
    /// `OPTIONS` on any path.
    Preflight,
    /// A planet path whose name is not valid UTF-8 once decoded.
    BadRequest,
    NotFound,
}

/// Map a method and raw request URL (path plus optional query) to a [`Route`].
///
/// The query string is ignored and one trailing slash is tolerated.
pub fn route(method: &Method, url: &str) -> Route {
    if *method == Method::Options {
        return Route::Preflight;
    }
    // tiny_http drops the body when answering HEAD.
    if !matches!(method, Method::Get | Method::Head) {
        return Route::NotFound;
    }

    let path = url.split(['?', '#']).next().unwrap_or_default();
    let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);

    if path == "/health" {
        return Route::Health;
    }

    match path.strip_prefix("/planets/") {
        Some(segment) if !segment.is_empty() && !segment.contains('/') => {
            match percent_decode_str(segment).decode_utf8() {
                Ok(name) => Route::Planet(name.into_owned()),
                Err(_) => Route::BadRequest,
            }
        }
        _ => Route::NotFound,
    }
}
