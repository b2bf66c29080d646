//! Route table for the posts service.

use std::sync::Arc;

use crate::health;
use crate::method::Method;
use crate::middleware::Cors;
use crate::posts::PostStore;
use crate::posts::handlers::{create_post, delete_post, list_posts};
use crate::request::Request;
use crate::router::Router;

/// Builds the full application router around a shared `store`.
///
/// ```rust
/// use std::sync::Arc;
/// use postboard::{app, IdStrategy, PostStore};
///
/// let router = app(Arc::new(PostStore::seeded(IdStrategy::CountPlusOne)));
/// ```
pub fn app(store: Arc<PostStore>) -> Router {
    let list = Arc::clone(&store);
    let create = Arc::clone(&store);
    let delete = store;

    Router::new()
        .on(Method::Get,    "/api/posts",      move |req: Request| list_posts(Arc::clone(&list), req))
        .on(Method::Post,   "/api/posts",      move |req: Request| create_post(Arc::clone(&create), req))
        .on(Method::Delete, "/api/posts/{id}", move |req: Request| delete_post(Arc::clone(&delete), req))
        .on(Method::Get,    "/healthz",        health::liveness)
        .on(Method::Get,    "/readyz",         health::readiness)
        .cors(Cors::permissive())
}
