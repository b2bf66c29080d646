//! The posts resource: data model, in-memory store, and HTTP handlers.

mod error;
pub mod handlers;
mod store;

use serde::{Deserialize, Serialize};

pub use error::PostError;
pub use store::{IdStrategy, PostStore};

/// A stored post. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: u64,
    pub author: String,
    pub content: String,
}

/// Body of `POST /api/posts`. Fields are optional so that absent and `null`
/// values reach validation instead of failing deserialisation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePost {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreatePost {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self { author: Some(author.into()), content: Some(content.into()) }
    }

    /// Checks both fields are present and not blank. Values are kept as
    /// given, surrounding whitespace included.
    pub fn validate(self) -> Result<NewPost, PostError> {
        match (self.author, self.content) {
            (Some(author), Some(content)) if !is_blank(&author) && !is_blank(&content) => {
                Ok(NewPost { author, content })
            }
            _ => Err(PostError::Validation),
        }
    }
}

/// A create request that passed validation; only the id is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    author: String,
    content: String,
}

impl NewPost {
    pub(crate) fn into_post(self, id: u64) -> Post {
        Post { id, author: self.author, content: self.content }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
