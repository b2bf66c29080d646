//! Permissive cross-origin resource sharing.
//!
//! Any origin, any method, any request header, no credentials. Enable it with
//! [`Router::cors`](crate::Router::cors):
//!
//! | Request | Effect |
//! |---|---|
//! | any | `access-control-allow-origin: *` added to the response |
//! | `OPTIONS` + `access-control-request-method` | answered with `204` before routing |

use http::HeaderMap;

use crate::method::Method;
use crate::response::Response;
use crate::status::Status;

const DEFAULT_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// CORS policy that allows every origin.
#[derive(Clone, Debug)]
pub struct Cors {
    allow_methods: &'static str,
}

impl Cors {
    pub fn permissive() -> Self {
        Self { allow_methods: DEFAULT_METHODS }
    }

    /// True for a CORS preflight: an `OPTIONS` request announcing the method
    /// it intends to use.
    pub(crate) fn is_preflight(&self, method: Method, headers: &HeaderMap) -> bool {
        method == Method::Options && headers.contains_key("access-control-request-method")
    }

    /// Answers a preflight without touching the route table.
    pub(crate) fn preflight(&self, headers: &HeaderMap) -> Response {
        let mut builder = Response::builder()
            .status(Status::NoContent)
            .header("access-control-allow-origin", "*")
            .header("access-control-allow-methods", self.allow_methods);

        if let Some(requested) = headers
            .get("access-control-request-headers")
            .and_then(|v| v.to_str().ok())
        {
            builder = builder.header("access-control-allow-headers", requested);
        }

        builder
            .header("vary", "Access-Control-Request-Headers")
            .no_body()
    }

    /// Stamps the allow-origin header onto an ordinary response.
    pub(crate) fn apply(&self, res: &mut Response) {
        res.set_header("access-control-allow-origin", "*");
    }
}

impl Default for Cors {
    fn default() -> Self { Self::permissive() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, v.parse().unwrap());
        }
        map
    }

    #[test]
    fn preflight_needs_options_and_request_method() {
        let cors = Cors::permissive();
        let announced = headers(&[("access-control-request-method", "DELETE")]);

        assert!(cors.is_preflight(Method::Options, &announced));
        assert!(!cors.is_preflight(Method::Options, &HeaderMap::new()));
        assert!(!cors.is_preflight(Method::Get, &announced));
    }

    #[test]
    fn preflight_echoes_requested_headers() {
        let res = Cors::permissive().preflight(&headers(&[
            ("access-control-request-method", "POST"),
            ("access-control-request-headers", "content-type,x-trace"),
        ]));

        assert_eq!(res.status_code(), 204);
        assert_eq!(res.header("access-control-allow-origin"), Some("*"));
        assert_eq!(res.header("access-control-allow-methods"), Some(DEFAULT_METHODS));
        assert_eq!(res.header("access-control-allow-headers"), Some("content-type,x-trace"));
        assert!(res.body().is_empty());
    }

    #[test]
    fn preflight_without_requested_headers_omits_allow_headers() {
        let res = Cors::permissive()
            .preflight(&headers(&[("access-control-request-method", "GET")]));
        assert_eq!(res.header("access-control-allow-headers"), None);
    }

    #[test]
    fn apply_sets_wildcard_origin() {
        let mut res = Response::text("ok");
        Cors::permissive().apply(&mut res);
        assert_eq!(res.header("Access-Control-Allow-Origin"), Some("*"));
    }
}
