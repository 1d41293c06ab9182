//! Outbound request construction and the single upstream call.
//!
//! # Responsibilities
//! - Rewrite `/api/<suffix>` onto the fixed upstream origin
//! - Copy method, headers (minus `Host`), raw query, cookies and body
//! - Send once with a deadline and no redirect following
//! - Hand the reply to `relay_response`

use axum::{
    body::Bytes,
    http::{header, HeaderMap, HeaderName, Method, Uri},
    response::Response,
};
use reqwest::{redirect, Client};
use std::sync::Arc;
use url::Url;

use crate::config::UpstreamConfig;
use crate::proxy::error::ProxyError;
use crate::proxy::relay::relay_response;

/// Path prefix shared by the gateway and the upstream.
pub const API_PREFIX: &str = "/api";

/// Inbound headers that are not copied onto the outbound request.
///
/// `Host` names the gateway, not the upstream. The body is buffered before
/// forwarding, so the client recomputes transfer framing itself.
const SKIPPED_REQUEST_HEADERS: [HeaderName; 2] = [header::HOST, header::TRANSFER_ENCODING];

/// Forwards `/api` traffic to one upstream origin.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: Client,
    origin: Arc<str>,
}

impl Forwarder {
    /// Build the upstream client. Failure means the TLS backend or resolver
    /// could not be initialised and the gateway cannot start.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            origin: Arc::from(config.origin.trim_end_matches('/')),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// `<origin>/api/<suffix>[?query]`, with the suffix and query taken
    /// verbatim from the inbound request.
    pub fn upstream_url(&self, suffix: &str, query: Option<&str>) -> Result<Url, ProxyError> {
        let mut url = Url::parse(&format!("{}{}/{}", self.origin, API_PREFIX, suffix))?;
        url.set_query(query);
        Ok(url)
    }

    /// Forward one request and relay the reply.
    pub async fn forward(
        &self,
        method: Method,
        uri: &Uri,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<Response, ProxyError> {
        let url = self.upstream_url(api_suffix(uri.path()), uri.query())?;

        let mut request = self
            .client
            .request(method, url)
            .headers(outbound_headers(headers));
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let upstream_headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(relay_response(status, &upstream_headers, body))
    }
}

/// The part of the request path after `/api/`; empty for `/api` and `/api/`.
pub fn api_suffix(path: &str) -> &str {
    let rest = path.strip_prefix(API_PREFIX).unwrap_or(path);
    rest.strip_prefix('/').unwrap_or(rest)
}

/// Copy inbound headers for the upstream request. Repeated headers stay
/// repeated, in order.
pub fn outbound_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut outbound = HeaderMap::with_capacity(inbound.len());
    for (name, value) in inbound {
        if !SKIPPED_REQUEST_HEADERS.contains(name) {
            outbound.append(name.clone(), value.clone());
        }
    }
    outbound
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn forwarder(origin: &str) -> Forwarder {
        let config = UpstreamConfig {
            origin: origin.to_string(),
            ..UpstreamConfig::default()
        };
        Forwarder::new(&config).unwrap()
    }

    #[test]
    fn suffix_extraction() {
        assert_eq!(api_suffix("/api"), "");
        assert_eq!(api_suffix("/api/"), "");
        assert_eq!(api_suffix("/api/anime"), "anime");
        assert_eq!(api_suffix("/api/anime/42/episodes"), "anime/42/episodes");
        assert_eq!(api_suffix("/api/a%20b"), "a%20b");
    }

    #[test]
    fn builds_upstream_url() {
        let fwd = forwarder("https://worker.example.dev/");
        assert_eq!(fwd.origin(), "https://worker.example.dev");

        let url = fwd.upstream_url("", None).unwrap();
        assert_eq!(url.as_str(), "https://worker.example.dev/api/");

        let url = fwd
            .upstream_url("anime/7", Some("page=2&tag=a&tag=b"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://worker.example.dev/api/anime/7?page=2&tag=a&tag=b"
        );
    }

    #[test]
    fn encoded_suffix_is_not_decoded() {
        let fwd = forwarder("http://127.0.0.1:9000");
        let url = fwd.upstream_url("search/a%2Fb%20c", None).unwrap();
        assert_eq!(url.path(), "/api/search/a%2Fb%20c");
    }

    #[test]
    fn dot_segments_are_resolved_like_any_url() {
        let fwd = forwarder("http://127.0.0.1:9000");
        let url = fwd.upstream_url("../health", None).unwrap();
        assert_eq!(url.path(), "/health");

        let url = fwd.upstream_url("anime/./7/../8", None).unwrap();
        assert_eq!(url.path(), "/api/anime/8");
    }

    #[test]
    fn host_is_dropped_and_duplicates_kept() {
        let mut inbound = HeaderMap::new();
        inbound.insert(header::HOST, HeaderValue::from_static("gateway.local:8080"));
        inbound.insert("x-api-key", HeaderValue::from_static("secret"));
        inbound.insert(header::COOKIE, HeaderValue::from_static("session=abc"));
        inbound.append("x-tag", HeaderValue::from_static("one"));
        inbound.append("x-tag", HeaderValue::from_static("two"));

        let outbound = outbound_headers(&inbound);
        assert!(outbound.get(header::HOST).is_none());
        assert_eq!(outbound["x-api-key"], "secret");
        assert_eq!(outbound[header::COOKIE], "session=abc");
        let tags: Vec<_> = outbound.get_all("x-tag").iter().collect();
        assert_eq!(tags, ["one", "two"]);
        assert_eq!(outbound.len(), inbound.len() - 1);
    }
}
