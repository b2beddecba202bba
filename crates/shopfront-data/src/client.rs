//! Thin JSON client over `reqwest`, usable from the browser and from tests.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Total request timeout on native targets. Browsers apply their own.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a request whose HTTP status is inspected rather than treated
/// as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    /// Whether the body parsed as JSON.
    pub json: bool,
}

/// HTTP client for outbound JSON requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    basic_auth: Option<(String, String)>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            http: build_http_client(),
            base_url: None,
            basic_auth: None,
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Send HTTP basic credentials with every request.
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn has_credentials(&self) -> bool {
        self.basic_auth.is_some()
    }

    /// Join a path onto the base URL. Absolute URLs pass through.
    pub fn resolve_url(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                let path = url.trim_start_matches('/');
                format!("{}/{}", base.trim_end_matches('/'), path)
            }
            _ => url.to_string(),
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.http.get(self.resolve_url(url));
        if let Some((user, password)) = &self.basic_auth {
            request = request.basic_auth(user, Some(password));
        }
        request
    }

    /// GET a URL and decode its JSON body. HTTP statuses >= 400 are errors.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.get(url).send().await?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FetchError::HttpError {
                status,
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET a URL and report its status and whether the body is JSON.
    ///
    /// Only transport failures are errors.
    pub async fn probe(&self, url: &str) -> Result<ProbeResponse, FetchError> {
        let response = self
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let json = serde_json::from_str::<serde_json::Value>(&body).is_ok();
        Ok(ProbeResponse { status, json })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url_with_base() {
        let client = FetchClient::new().with_base_url("https://blog.example.com/");
        assert_eq!(
            client.resolve_url("/wp-json/"),
            "https://blog.example.com/wp-json/"
        );
        assert_eq!(
            client.resolve_url("wp-json/wp/v2/posts"),
            "https://blog.example.com/wp-json/wp/v2/posts"
        );
        assert_eq!(
            client.resolve_url("https://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn test_resolve_url_without_base() {
        let client = FetchClient::new();
        assert_eq!(client.resolve_url("/api/payment-methods"), "/api/payment-methods");
        assert!(client.base_url().is_none());
        assert!(!client.has_credentials());
    }

    #[tokio::test]
    async fn test_get_json_unreachable() {
        // Nothing listens on the discard port locally.
        let client = FetchClient::new().with_base_url("http://127.0.0.1:9");
        let result = client.get_json::<serde_json::Value>("/anything").await;
        assert!(matches!(result, Err(FetchError::Unreachable(_))));
    }
}
