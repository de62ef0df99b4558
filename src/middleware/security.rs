//! HTTPS enforcement and browser security headers.
use axum::{
    extract::{Request, State},
    http::{
        header::{
            CONTENT_SECURITY_POLICY, HOST, LOCATION, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY,
            X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
        HeaderMap, HeaderName, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    constants::security::{CONTENT_SECURITY_POLICY as CSP, HSTS_SECONDS},
    state::{AppState, SecurityPolicy},
};

/// Paths answered over plain HTTP even outside debug mode: health probes that
/// bypass the TLS proxy, and the favicon, which only redirects anyway.
const REDIRECT_EXEMPT_PATHS: [&str; 3] = ["/healthz", "/healthz/", "/favicon.ico"];

/// Whether the request reached the proxy (or us) over HTTPS.
pub fn is_secure(policy: &SecurityPolicy, headers: &HeaderMap) -> bool {
    policy.trust_forwarded_proto
        && headers
            .get("x-forwarded-proto")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"))
}

/// Redirect plain HTTP to HTTPS outside debug mode and attach security headers
/// to every response.
pub async fn security_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let policy = &state.policy;
    if !policy.debug
        && !REDIRECT_EXEMPT_PATHS.contains(&req.uri().path())
        && !is_secure(policy, req.headers())
    {
        if let Some(location) = https_location(&req) {
            return (StatusCode::MOVED_PERMANENTLY, [(LOCATION, location)]).into_response();
        }
    }
    let mut response = next.run(req).await;
    apply_security_headers(policy, response.headers_mut());
    response
}

fn https_location(req: &Request) -> Option<HeaderValue> {
    let host = req.headers().get(HOST)?.to_str().ok()?;
    let path_and_query = req
        .uri()
        .path_and_query()
        .map_or("/", |path_and_query| path_and_query.as_str());
    HeaderValue::try_from(format!("https://{host}{path_and_query}")).ok()
}

fn apply_security_headers(policy: &SecurityPolicy, headers: &mut HeaderMap) {
    let mut defaults = vec![
        (X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (REFERRER_POLICY, HeaderValue::from_static("same-origin")),
        (
            HeaderName::from_static("cross-origin-opener-policy"),
            HeaderValue::from_static("same-origin"),
        ),
    ];
    if !policy.debug {
        defaults.push((CONTENT_SECURITY_POLICY, HeaderValue::from_static(CSP)));
        if let Ok(hsts) = HeaderValue::try_from(format!(
            "max-age={HSTS_SECONDS}; includeSubDomains; preload"
        )) {
            defaults.push((STRICT_TRANSPORT_SECURITY, hsts));
        }
    }
    for (name, value) in defaults {
        headers.entry(name).or_insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(debug: bool, trust_forwarded_proto: bool) -> SecurityPolicy {
        SecurityPolicy {
            debug,
            allowed_hosts: Vec::new(),
            cors_allowed_origins: Vec::new(),
            csrf_trusted_origins: Vec::new(),
            trust_forwarded_proto,
        }
    }

    #[test]
    fn test_forwarded_proto_only_trusted_when_enabled() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", HeaderValue::from_static("HTTPS"));
        assert!(is_secure(&policy(false, true), &headers));
        assert!(!is_secure(&policy(false, false), &headers));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("http"));
        assert!(!is_secure(&policy(false, true), &headers));
    }

    #[test]
    fn test_production_headers() {
        let mut headers = HeaderMap::new();
        apply_security_headers(&policy(false, false), &mut headers);
        assert_eq!(headers[X_FRAME_OPTIONS], "DENY");
        assert_eq!(headers[CONTENT_SECURITY_POLICY], "default-src 'self'");
        assert_eq!(
            headers[STRICT_TRANSPORT_SECURITY],
            "max-age=31536000; includeSubDomains; preload"
        );
    }

    #[test]
    fn test_debug_headers_skip_hsts_and_csp() {
        let mut headers = HeaderMap::new();
        apply_security_headers(&policy(true, false), &mut headers);
        assert_eq!(headers[X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert!(!headers.contains_key(STRICT_TRANSPORT_SECURITY));
        assert!(!headers.contains_key(CONTENT_SECURITY_POLICY));
    }

    #[test]
    fn test_handler_headers_are_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
        apply_security_headers(&policy(true, false), &mut headers);
        assert_eq!(headers[X_FRAME_OPTIONS], "SAMEORIGIN");
    }
}
