//! Proxy fix middleware.
//!
//! When the server runs behind a reverse proxy, the client-facing scheme,
//! host, and address arrive in `X-Forwarded-*` headers rather than on the
//! connection itself. This middleware collects them into a [`ForwardedInfo`]
//! request extension so downstream code sees the client's view.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Client-facing request attributes recovered from forwarded headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForwardedInfo {
    /// Original scheme (`X-Forwarded-Proto`)
    pub proto: Option<String>,
    /// Original host (`X-Forwarded-Host`)
    pub host: Option<String>,
    /// Original client address
    pub client_ip: Option<String>,
}

impl ForwardedInfo {
    /// Extract forwarded attributes from request headers.
    ///
    /// The client IP is the first hop of `X-Forwarded-For` (the original
    /// client; later hops are intermediate proxies), falling back to
    /// `X-Real-IP`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| -> Option<String> {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let client_ip = header("x-forwarded-for")
            .and_then(|chain| {
                chain
                    .split(',')
                    .next()
                    .map(|ip| ip.trim().to_string())
                    .filter(|ip| !ip.is_empty())
            })
            .or_else(|| header("x-real-ip"));

        Self {
            proto: header("x-forwarded-proto"),
            host: header("x-forwarded-host"),
            client_ip,
        }
    }
}

/// Record forwarded-header information on the request.
///
/// Falls back to the peer address for the client IP when no proxy headers
/// are present (direct connections).
pub async fn proxy_fix_middleware(mut request: Request, next: Next) -> Response {
    let mut info = ForwardedInfo::from_headers(request.headers());

    if info.client_ip.is_none() {
        if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
            info.client_ip = Some(addr.ip().to_string());
        }
    }

    tracing::trace!(?info, "resolved forwarded request info");
    request.extensions_mut().insert(info);

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn extracts_proto_and_host() {
        let info = ForwardedInfo::from_headers(&headers(&[
            ("x-forwarded-proto", "https"),
            ("x-forwarded-host", "app.example.com"),
        ]));
        assert_eq!(info.proto.as_deref(), Some("https"));
        assert_eq!(info.host.as_deref(), Some("app.example.com"));
        assert_eq!(info.client_ip, None);
    }

    #[test]
    fn first_forwarded_hop_wins() {
        let info = ForwardedInfo::from_headers(&headers(&[(
            "x-forwarded-for",
            "203.0.113.7, 10.0.0.2, 10.0.0.1",
        )]));
        assert_eq!(info.client_ip.as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn real_ip_is_fallback_only() {
        let info = ForwardedInfo::from_headers(&headers(&[
            ("x-forwarded-for", "203.0.113.7"),
            ("x-real-ip", "198.51.100.4"),
        ]));
        assert_eq!(info.client_ip.as_deref(), Some("203.0.113.7"));

        let info = ForwardedInfo::from_headers(&headers(&[("x-real-ip", "198.51.100.4")]));
        assert_eq!(info.client_ip.as_deref(), Some("198.51.100.4"));
    }

    #[test]
    fn blank_headers_are_ignored() {
        let info = ForwardedInfo::from_headers(&headers(&[
            ("x-forwarded-proto", " "),
            ("x-forwarded-for", ""),
        ]));
        assert_eq!(info, ForwardedInfo::default());
    }
}
