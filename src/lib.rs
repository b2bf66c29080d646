//! # postboard
//!
//! An in-memory posts API: list, create, and delete short posts over JSON.
//!
//! The crate has two halves:
//!
//! - a minimal HTTP layer: radix-tree routing via [`matchit`], hyper for the
//!   wire, graceful shutdown on SIGTERM / Ctrl-C, permissive CORS;
//! - the [`posts`] resource: a mutex-guarded [`PostStore`] and the three
//!   handlers that translate HTTP to store calls.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use postboard::{app, IdStrategy, PostStore, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(PostStore::seeded(IdStrategy::CountPlusOne));
//!     Server::bind(([127, 0, 0, 1], 6969).into())
//!         .serve(app(store))
//!         .await
//!         .unwrap();
//! }
//! ```

mod app;
mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod config;
pub mod health;
pub mod middleware;
pub mod posts;

pub use app::app;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use posts::{CreatePost, IdStrategy, Post, PostError, PostStore};
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
