//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::method::Method;

/// An incoming HTTP request with its body fully buffered.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        headers: HeaderMap,
        body: Bytes,
        params: HashMap<String, String>,
    ) -> Self {
        Self { method, path, headers, body, params }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup. Values that are not visible ASCII are
    /// treated as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/api/posts/{id}`, `req.param("id")` on `/api/posts/42`
    /// returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// True when `content-type` names JSON: `application/json` or any
    /// `+json` suffix type, parameters ignored.
    pub fn is_json(&self) -> bool {
        let Some(value) = self.header("content-type") else {
            return false;
        };
        let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        essence == "application/json"
            || (essence.starts_with("application/") && essence.ends_with("+json"))
    }

    /// Deserialises the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &'static [u8]) -> Request {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        let params = HashMap::from([("id".to_owned(), "7".to_owned())]);
        Request::new(Method::Post, "/api/posts".into(), headers, Bytes::from_static(body), params)
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = request(b"");
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn is_json_reads_the_media_type() {
        assert!(request(b"").is_json());

        let mut req = request(b"");
        req.headers.insert("content-type", "Application/JSON; charset=utf-8".parse().unwrap());
        assert!(req.is_json());
        req.headers.insert("content-type", "text/plain".parse().unwrap());
        assert!(!req.is_json());
        req.headers.remove("content-type");
        assert!(!req.is_json());
    }

    #[test]
    fn param_and_json_accessors() {
        #[derive(serde::Deserialize)]
        struct Body { author: String }

        let req = request(br#"{"author":"Nils"}"#);
        assert_eq!(req.param("id"), Some("7"));
        assert_eq!(req.param("slug"), None);
        assert_eq!(req.json::<Body>().unwrap().author, "Nils");
    }
}
