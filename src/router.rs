//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler. `HEAD` falls back to the `GET` route with the body dropped.
//! The only extras are a request body limit, optional CORS, and one log line
//! per request.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::Full;
use matchit::Router as MatchitRouter;
use tracing::info;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::Cors;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// Largest request body accepted by default: 100 KiB.
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    cors: Option<Cors>,
    body_limit: usize,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), cors: None, body_limit: DEFAULT_BODY_LIMIT }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them:
    ///
    /// ```rust,no_run
    /// # use postboard::{Method, Request, Response, Router};
    /// # async fn list(_: Request) -> Response { Response::text("") }
    /// # async fn remove(_: Request) -> Response { Response::text("") }
    /// Router::new()
    ///     .on(Method::Get,    "/api/posts",      list)
    ///     .on(Method::Delete, "/api/posts/{id}", remove);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`. Routes are fixed at startup.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Enables the given CORS policy for every request.
    pub fn cors(mut self, cors: Cors) -> Self {
        self.cors = Some(cors);
        self
    }

    /// Sets the largest request body, in bytes. Longer bodies get `413`.
    pub fn body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    pub(crate) fn max_body(&self) -> usize {
        self.body_limit
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    fn resolve(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        match self.lookup(method, path) {
            None if method == Method::Head => self.lookup(Method::Get, path),
            found => found,
        }
    }

    /// Routes one buffered request and produces one response.
    ///
    /// This is the whole request pipeline: method check, body limit, CORS
    /// preflight, route lookup, handler, CORS headers, access log. The server
    /// calls it once per request; tests can call it directly.
    pub async fn call(&self, req: http::Request<Bytes>) -> http::Response<Full<Bytes>> {
        let started = Instant::now();
        let (parts, body) = req.into_parts();
        let path = parts.uri.path().to_owned();
        let method = parts.method.as_str().parse::<Method>();

        let mut response = match method {
            Err(()) => Response::status(Status::MethodNotAllowed),
            Ok(_) if body.len() > self.body_limit => Response::status(Status::ContentTooLarge),
            Ok(method) => match &self.cors {
                Some(cors) if cors.is_preflight(method, &parts.headers) => {
                    cors.preflight(&parts.headers)
                }
                _ => match self.resolve(method, &path) {
                    Some((handler, params)) => {
                        handler
                            .call(Request::new(method, path.clone(), parts.headers, body, params))
                            .await
                    }
                    None => Response::status(Status::NotFound),
                },
            },
        };

        if method == Ok(Method::Head) {
            response.body.clear();
        }

        if let Some(cors) = &self.cors {
            cors.apply(&mut response);
        }

        info!(
            method = %parts.method,
            path = %path,
            status = response.status,
            latency_us = started.elapsed().as_micros() as u64,
            "request"
        );

        response.into_inner()
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
