//! Middleware layer.
//!
//! Cross-cutting concerns applied by the [`Router`](crate::Router) around
//! every handler. Request tracing lives in the router itself; this module
//! holds the pieces that can be switched on per router.

pub mod cors;

pub use cors::Cors;
