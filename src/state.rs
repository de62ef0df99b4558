//! Defines the state shared across the Axum application.
use std::{path::PathBuf, sync::Arc};

use crate::{
    constants::{cors, oauth, paths, security},
    middleware::hosts::HostPattern,
    services::frontend::FrontendSource,
};

/// Request policy derived from configuration at startup.
#[derive(Clone, Debug)]
pub struct SecurityPolicy {
    /// Development mode: no HTTPS redirect, HSTS or CSP.
    pub debug: bool,
    /// Host header patterns the application answers for.
    pub allowed_hosts: Vec<HostPattern>,
    /// Origins allowed to make credentialed cross-origin requests.
    pub cors_allowed_origins: Vec<String>,
    /// Origins trusted to send unsafe requests.
    pub csrf_trusted_origins: Vec<String>,
    /// Whether `X-Forwarded-Proto` decides if a request arrived over HTTPS.
    pub trust_forwarded_proto: bool,
}

#[derive(Clone)]
/// The state struct shared across routers.
pub struct AppState {
    /// The directory media files are served from.
    pub media_root: Arc<PathBuf>,
    /// The directory static assets are served from.
    pub static_root: Arc<PathBuf>,
    /// Where the SPA entry document is looked up.
    pub frontend: Arc<FrontendSource>,
    /// Host, origin and transport policy.
    pub policy: Arc<SecurityPolicy>,
}

impl AppState {
    /// Build the state from the process environment.
    pub fn from_env() -> Self {
        Self {
            media_root: Arc::new(paths::MEDIA_ROOT.clone()),
            static_root: Arc::new(paths::STATIC_ROOT.clone()),
            frontend: Arc::new(FrontendSource {
                index_candidates: paths::FRONTEND_INDEX_CANDIDATES.clone(),
                google_client_id: oauth::GOOGLE_CLIENT_ID.clone(),
            }),
            policy: Arc::new(SecurityPolicy {
                debug: *security::DEBUG,
                allowed_hosts: security::ALLOWED_HOSTS
                    .iter()
                    .map(|host| HostPattern::parse(host))
                    .collect(),
                cors_allowed_origins: cors::CORS_ALLOWED_ORIGINS.clone(),
                csrf_trusted_origins: cors::CSRF_TRUSTED_ORIGINS.clone(),
                trust_forwarded_proto: *security::TRUST_FORWARDED_PROTO,
            }),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State rooted at `base`, laid out like a deployment, in debug mode and
    /// answering for `localhost` only.
    pub fn for_tests(base: &std::path::Path) -> Self {
        Self {
            media_root: Arc::new(base.join("media")),
            static_root: Arc::new(base.join("staticfiles")),
            frontend: Arc::new(FrontendSource {
                index_candidates: vec![
                    base.join("frontend").join("dist").join("index.html"),
                    base.join("staticfiles").join("frontend").join("index.html"),
                ],
                google_client_id: None,
            }),
            policy: Arc::new(SecurityPolicy {
                debug: true,
                allowed_hosts: vec![HostPattern::parse("localhost")],
                cors_allowed_origins: vec!["http://localhost:5173".to_owned()],
                csrf_trusted_origins: vec!["http://localhost:5173".to_owned()],
                trust_forwarded_proto: false,
            }),
        }
    }

    /// Replace the security policy.
    pub fn with_policy(mut self, policy: SecurityPolicy) -> Self {
        self.policy = Arc::new(policy);
        self
    }
}
