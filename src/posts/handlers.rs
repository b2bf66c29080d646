//! HTTP adapters for the post store.
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | `/api/posts` | 200, JSON array | |
//! | POST | `/api/posts` | 201, JSON post, `location` | 400 |
//! | DELETE | `/api/posts/{id}` | 204, empty | 404 |

use std::sync::Arc;

use tracing::{debug, info};

use super::{CreatePost, PostError, PostStore};
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::status::Status;

/// `GET /api/posts`
pub async fn list_posts(store: Arc<PostStore>, _req: Request) -> Response {
    Json(store.list()).into_response()
}

/// `POST /api/posts`
pub async fn create_post(store: Arc<PostStore>, req: Request) -> Result<Response, PostError> {
    let input = parse_create(&req)?;

    let post = store.create(input).inspect_err(|e| debug!("rejected post: {e}"))?;
    info!(id = post.id, author = %post.author, "post created");

    let location = format!("/api/posts/{}", post.id);
    let builder = Response::builder()
        .status(Status::Created)
        .header("location", &location);
    Ok(Json(post).into_response_with(builder))
}

/// `DELETE /api/posts/{id}`
///
/// An id that is not an unsigned integer cannot match any post, so it is a
/// 404 like any other unknown id.
pub async fn delete_post(store: Arc<PostStore>, req: Request) -> Result<Status, PostError> {
    let raw = req.param("id").unwrap_or_default();
    let Ok(id) = raw.parse::<u64>() else {
        debug!(id = raw, "delete with non-numeric id");
        return Err(PostError::NotFound(raw.to_owned()));
    };

    store.delete(id)?;
    info!(id, "post deleted");
    Ok(Status::NoContent)
}

/// A body that is empty or not labelled as JSON reads as `{}`, so it fails
/// validation rather than parsing.
fn parse_create(req: &Request) -> Result<CreatePost, PostError> {
    if !req.is_json() || req.body().iter().all(u8::is_ascii_whitespace) {
        return Ok(CreatePost::default());
    }
    req.json::<CreatePost>().map_err(|e| {
        debug!("malformed create body: {e}");
        PostError::MalformedBody
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bytes::Bytes;
    use http::HeaderMap;

    use super::*;
    use crate::method::Method;
    use crate::posts::IdStrategy;

    fn store() -> Arc<PostStore> {
        Arc::new(PostStore::seeded(IdStrategy::CountPlusOne))
    }

    fn create_request(content_type: Option<&'static str>, body: &'static str) -> Request {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert("content-type", ct.parse().unwrap());
        }
        Request::new(Method::Post, "/api/posts".into(), headers, Bytes::from_static(body.as_bytes()), HashMap::new())
    }

    fn delete_request(id: &str) -> Request {
        let params = HashMap::from([("id".to_owned(), id.to_owned())]);
        Request::new(Method::Delete, format!("/api/posts/{id}"), HeaderMap::new(), Bytes::new(), params)
    }

    #[tokio::test]
    async fn non_numeric_delete_keeps_the_raw_id() {
        let err = delete_post(store(), delete_request("abc")).await.unwrap_err();
        assert_eq!(err, PostError::NotFound("abc".into()));
    }

    #[test]
    fn json_content_types_are_decoded() {
        for ct in ["application/json", "application/json; charset=utf-8", "application/merge-patch+json"] {
            let input = parse_create(&create_request(Some(ct), r#"{"author":"Nils","content":"Hei"}"#)).unwrap();
            assert_eq!(input.author.as_deref(), Some("Nils"), "{ct}");
        }
    }

    #[tokio::test]
    async fn body_without_json_content_type_fails_validation() {
        for ct in [None, Some("text/plain"), Some("application/x-www-form-urlencoded")] {
            let store = store();
            let req = create_request(ct, r#"{"author":"Nils","content":"Hei"}"#);
            let err = create_post(Arc::clone(&store), req).await.unwrap_err();
            assert_eq!(err, PostError::Validation, "{ct:?}");
            assert_eq!(store.len(), 2);
        }
    }
}
