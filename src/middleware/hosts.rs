//! Middleware rejecting requests for hosts the application does not serve.
use axum::{
    extract::{Request, State},
    http::{header::HOST, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::{state::AppState, utils::httperror::HttpError};

/// A single allowed-host entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostPattern {
    /// `*`: any host.
    Any,
    /// `.example.com`: the domain itself and all of its subdomains.
    DomainAndSubdomains(String),
    /// `*.example.com`: subdomains only.
    Subdomains(String),
    /// An exact host name.
    Exact(String),
}

impl HostPattern {
    /// Parse a configured host entry.
    pub fn parse(pattern: &str) -> Self {
        let pattern = pattern.trim().to_lowercase();
        if pattern == "*" {
            Self::Any
        } else if let Some(domain) = pattern.strip_prefix("*.") {
            Self::Subdomains(domain.to_owned())
        } else if let Some(domain) = pattern.strip_prefix('.') {
            Self::DomainAndSubdomains(domain.to_owned())
        } else {
            Self::Exact(pattern)
        }
    }

    /// Whether a normalized host (lowercase, no port) matches this pattern.
    pub fn matches(&self, host: &str) -> bool {
        match *self {
            Self::Any => true,
            Self::Exact(ref exact) => host == exact,
            Self::Subdomains(ref domain) => is_subdomain(host, domain),
            Self::DomainAndSubdomains(ref domain) => host == domain || is_subdomain(host, domain),
        }
    }
}

fn is_subdomain(host: &str, domain: &str) -> bool {
    host.strip_suffix(domain)
        .is_some_and(|prefix| prefix.len() > 1 && prefix.ends_with('.'))
}

/// Lowercase a `Host` header value and strip its port, keeping IPv6 brackets.
pub fn normalize_host(raw: &str) -> Option<String> {
    let raw = raw.trim().to_lowercase();
    let host = if raw.starts_with('[') {
        let (address, _port) = raw.split_once(']')?;
        format!("{address}]")
    } else {
        raw.split(':').next().unwrap_or_default().to_owned()
    };
    let host = host.trim_end_matches('.').to_owned();
    (!host.is_empty()).then_some(host)
}

/// Reject requests whose `Host` is not in the allowed host list.
pub async fn allowed_hosts_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, HttpError> {
    let raw_host = req
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or_else(|| req.uri().authority().map(|authority| authority.as_str().to_owned()));
    let Some(host) = raw_host.as_deref().and_then(normalize_host) else {
        tracing::warn!("Request without a usable Host header");
        return Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            Some("Invalid Host header".to_owned()),
        ));
    };
    if !state
        .policy
        .allowed_hosts
        .iter()
        .any(|pattern| pattern.matches(&host))
    {
        tracing::warn!("Rejected request for disallowed host {host}");
        return Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            Some("Invalid Host header".to_owned()),
        ));
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patterns() {
        assert_eq!(HostPattern::parse("*"), HostPattern::Any);
        assert_eq!(
            HostPattern::parse("*.railway.app"),
            HostPattern::Subdomains("railway.app".to_owned())
        );
        assert_eq!(
            HostPattern::parse(".ojasritu.co.in"),
            HostPattern::DomainAndSubdomains("ojasritu.co.in".to_owned())
        );
        assert_eq!(
            HostPattern::parse("WWW.Ojasritu.co.in"),
            HostPattern::Exact("www.ojasritu.co.in".to_owned())
        );
    }

    #[test]
    fn test_subdomain_wildcard() {
        let pattern = HostPattern::parse("*.railway.app");
        assert!(pattern.matches("ojasritu-production.up.railway.app"));
        assert!(pattern.matches("web.railway.app"));
        assert!(!pattern.matches("railway.app"));
        assert!(!pattern.matches("evilrailway.app"));
    }

    #[test]
    fn test_leading_dot_includes_domain() {
        let pattern = HostPattern::parse(".ojasritu.co.in");
        assert!(pattern.matches("ojasritu.co.in"));
        assert!(pattern.matches("www.ojasritu.co.in"));
        assert!(!pattern.matches("notojasritu.co.in"));
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("LocalHost:8000").as_deref(), Some("localhost"));
        assert_eq!(normalize_host("ojasritu.co.in.").as_deref(), Some("ojasritu.co.in"));
        assert_eq!(normalize_host("[::1]:8000").as_deref(), Some("[::1]"));
        assert_eq!(normalize_host(""), None);
        assert_eq!(normalize_host("[::1"), None);
    }
}
