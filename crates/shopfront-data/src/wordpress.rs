//! WordPress REST API client and connectivity diagnostics.

use std::fmt;

use futures::future::join_all;
use shopfront_observability::StructuredLogger;

use crate::blog::{BlogPost, WpPost};
use crate::client::{FetchClient, ProbeResponse};
use crate::error::FetchError;

/// WordPress caps `per_page` at 100.
pub const MAX_PER_PAGE: u32 = 100;

/// Result of probing one REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectivityStatus {
    /// 2xx with a JSON body.
    Reachable,
    /// 401 or 403.
    AuthRequired(u16),
    /// 404, usually pretty permalinks disabled or REST API blocked.
    NotFound,
    /// Any other HTTP error status.
    HttpError(u16),
    /// 2xx but the body was not JSON (e.g. a login or maintenance page).
    InvalidResponse,
    /// Network failure. In browsers this includes CORS rejections.
    Unreachable(String),
    Timeout,
}

impl ConnectivityStatus {
    /// Classify a probe outcome.
    pub fn classify(result: &Result<ProbeResponse, FetchError>) -> Self {
        match result {
            Ok(ProbeResponse { status, json }) => match status {
                200..=299 if *json => ConnectivityStatus::Reachable,
                200..=299 => ConnectivityStatus::InvalidResponse,
                401 | 403 => ConnectivityStatus::AuthRequired(*status),
                404 => ConnectivityStatus::NotFound,
                other => ConnectivityStatus::HttpError(*other),
            },
            Err(FetchError::Timeout) => ConnectivityStatus::Timeout,
            Err(FetchError::HttpError { status, .. }) => ConnectivityStatus::HttpError(*status),
            Err(FetchError::Unreachable(msg)) => ConnectivityStatus::Unreachable(msg.clone()),
            Err(other) => ConnectivityStatus::Unreachable(other.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ConnectivityStatus::Reachable)
    }

    /// Short label for status badges.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectivityStatus::Reachable => "OK",
            ConnectivityStatus::AuthRequired(_) => "Auth required",
            ConnectivityStatus::NotFound => "Not found",
            ConnectivityStatus::HttpError(_) => "HTTP error",
            ConnectivityStatus::InvalidResponse => "Invalid response",
            ConnectivityStatus::Unreachable(_) => "Unreachable",
            ConnectivityStatus::Timeout => "Timed out",
        }
    }

    /// Troubleshooting hint shown under a failed check.
    pub fn hint(&self) -> Option<String> {
        match self {
            ConnectivityStatus::Reachable => None,
            ConnectivityStatus::AuthRequired(status) => Some(format!(
                "Server answered {}. Check the application password or the site's REST API restrictions.",
                status
            )),
            ConnectivityStatus::NotFound => Some(
                "The REST route was not found. Enable pretty permalinks or check the base URL."
                    .to_string(),
            ),
            ConnectivityStatus::HttpError(status) => {
                Some(format!("Server answered with HTTP {}.", status))
            }
            ConnectivityStatus::InvalidResponse => Some(
                "The response was not JSON. A security plugin or maintenance page may be intercepting requests."
                    .to_string(),
            ),
            ConnectivityStatus::Unreachable(detail) => Some(format!(
                "Request failed ({}). Check the URL, HTTPS, and that the site sends CORS headers for this origin.",
                detail
            )),
            ConnectivityStatus::Timeout => Some("The server did not answer in time.".to_string()),
        }
    }
}

impl fmt::Display for ConnectivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityStatus::AuthRequired(status) | ConnectivityStatus::HttpError(status) => {
                write!(f, "{} ({})", self.label(), status)
            }
            _ => write!(f, "{}", self.label()),
        }
    }
}

/// One probed endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCheck {
    pub name: &'static str,
    pub url: String,
    pub status: ConnectivityStatus,
}

/// Outcome of [`WordPressClient::check_connectivity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityReport {
    pub base_url: String,
    pub checks: Vec<EndpointCheck>,
}

impl ConnectivityReport {
    pub fn all_ok(&self) -> bool {
        !self.checks.is_empty() && self.checks.iter().all(|c| c.status.is_ok())
    }

    /// One-line summary, e.g. "2/3 checks passed".
    pub fn summary(&self) -> String {
        let passed = self.checks.iter().filter(|c| c.status.is_ok()).count();
        format!("{}/{} checks passed", passed, self.checks.len())
    }
}

/// Client for a WordPress site's REST API.
#[derive(Debug, Clone)]
pub struct WordPressClient {
    client: FetchClient,
    logger: StructuredLogger,
}

impl WordPressClient {
    /// Create a client for the site at `base_url` (e.g. `https://blog.example.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: FetchClient::new().with_base_url(base_url),
            logger: StructuredLogger::new("WordPressClient"),
        }
    }

    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Authenticate with a WordPress application password.
    pub fn with_credentials(mut self, username: impl Into<String>, app_password: impl Into<String>) -> Self {
        self.client = self.client.with_basic_auth(username, app_password);
        self
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url().unwrap_or_default()
    }

    /// Endpoints probed by [`Self::check_connectivity`].
    pub fn endpoints(&self) -> Vec<(&'static str, String)> {
        let mut endpoints = vec![
            ("REST API index", self.client.resolve_url("/wp-json/")),
            ("Posts", self.client.resolve_url("/wp-json/wp/v2/posts?per_page=1")),
        ];
        if self.client.has_credentials() {
            endpoints.push(("Authentication", self.client.resolve_url("/wp-json/wp/v2/users/me")));
        }
        endpoints
    }

    /// Fetch the most recent posts with embedded author and featured media.
    pub async fn recent_posts(&self, per_page: u32) -> Result<Vec<BlogPost>, FetchError> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);
        let posts: Vec<WpPost> = self
            .client
            .get_json(&format!("/wp-json/wp/v2/posts?per_page={}&_embed", per_page))
            .await?;
        self.logger
            .debug_builder("Fetched posts")
            .field_i64("count", posts.len() as i64)
            .emit();
        Ok(posts.into_iter().map(BlogPost::from).collect())
    }

    /// Look up one post by slug. `Ok(None)` when no post matches.
    pub async fn post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, FetchError> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }
        let posts: Vec<WpPost> = self
            .client
            .get_json(&format!("/wp-json/wp/v2/posts?slug={}&_embed", slug))
            .await?;
        Ok(posts.into_iter().next().map(BlogPost::from))
    }

    /// Probe every endpoint concurrently.
    pub async fn check_connectivity(&self) -> ConnectivityReport {
        let endpoints = self.endpoints();
        let probes = endpoints.iter().map(|(_, url)| self.client.probe(url));
        let results = join_all(probes).await;

        let checks: Vec<EndpointCheck> = endpoints
            .into_iter()
            .zip(results)
            .map(|((name, url), result)| EndpointCheck {
                name,
                url,
                status: ConnectivityStatus::classify(&result),
            })
            .collect();

        for check in checks.iter().filter(|c| !c.status.is_ok()) {
            self.logger
                .warn_builder("WordPress endpoint check failed")
                .field("endpoint", check.name)
                .field("url", check.url.clone())
                .field("status", check.status.to_string())
                .emit();
        }

        ConnectivityReport {
            base_url: self.base_url().to_string(),
            checks,
        }
    }
}

/// Slugs are passed into the query string unescaped, so only URL-safe words are accepted.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
