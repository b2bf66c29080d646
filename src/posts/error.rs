//! Errors raised by the post store.

use serde::Serialize;
use thiserror::Error;

use crate::response::{IntoResponse, Json, Response};
use crate::status::Status;

/// A failed post operation. The store is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    /// Author or content missing, empty, or whitespace-only.
    #[error("Navn og innhold er påkrevd på server.")]
    Validation,

    /// No stored post carries this id. Holds the id as the client sent it,
    /// which may not be a number at all.
    #[error("Posten finnes ikke.")]
    NotFound(String),

    /// The request body could not be decoded as a post.
    #[error("Ugyldig JSON i forespørselen.")]
    MalformedBody,
}

impl PostError {
    pub fn status(&self) -> Status {
        match self {
            Self::Validation | Self::MalformedBody => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
        }
    }
}

/// Wire shape of every error body: `{"error": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        let builder = Response::builder().status(self.status());
        Json(ErrorBody { error: self.to_string() }).into_response_with(builder)
    }
}
