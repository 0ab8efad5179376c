use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use std::convert::Infallible;
use std::fmt;
use std::net::SocketAddr;

pub const CLIENT_HEADER: &str = "x-chicken-client";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
pub const ANONYMOUS_CLIENT: &str = "anonymous-chicken-lover";

// Who asked for the chickens. Not authenticated, only a leaderboard key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId(pub String);

impl ClientId {
    /// First present wins: explicit client header, first forwarded-for hop,
    /// peer address, then the anonymous fallback.
    pub fn resolve(headers: &HeaderMap, peer: Option<SocketAddr>) -> Self {
        if let Some(id) = header_str(headers, CLIENT_HEADER) {
            return Self(id.to_string());
        }

        if let Some(hop) = header_str(headers, FORWARDED_FOR_HEADER)
            .and_then(|v| v.split(',').map(str::trim).find(|h| !h.is_empty()))
        {
            return Self(hop.to_string());
        }

        match peer {
            Some(addr) => Self(addr.ip().to_string()),
            None => Self(ANONYMOUS_CLIENT.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// non-empty, valid visible-ascii header value
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for ClientId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // only present when served with connect info
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self::resolve(&parts.headers, peer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some("10.1.2.3:4567".parse().unwrap())
    }

    #[test]
    fn explicit_header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(CLIENT_HEADER, HeaderValue::from_static("rooster"));
        headers.insert(FORWARDED_FOR_HEADER, HeaderValue::from_static("1.1.1.1"));

        assert_eq!(ClientId::resolve(&headers, peer()).as_str(), "rooster");
    }

    #[test]
    fn forwarded_for_uses_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            FORWARDED_FOR_HEADER,
            HeaderValue::from_static(" 203.0.113.9 , 10.0.0.1"),
        );

        assert_eq!(ClientId::resolve(&headers, peer()).as_str(), "203.0.113.9");
    }

    #[test]
    fn blank_headers_are_skipped() {
        let mut headers = HeaderMap::new();
        headers.insert(CLIENT_HEADER, HeaderValue::from_static("   "));
        headers.insert(FORWARDED_FOR_HEADER, HeaderValue::from_static(" , "));

        assert_eq!(ClientId::resolve(&headers, peer()).as_str(), "10.1.2.3");
    }

    #[test]
    fn falls_back_to_anonymous() {
        let headers = HeaderMap::new();
        assert_eq!(ClientId::resolve(&headers, None).as_str(), ANONYMOUS_CLIENT);
    }
}
